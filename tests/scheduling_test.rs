use league_roster::core::activity::select_matches;
use league_roster::core::travel::optimize_travel;
use league_roster::core::{Match, Venue, VenueEntry};
use league_roster::RosterError;

fn fixtures() -> Vec<Match> {
    vec![
        Match::new("Lions", "Tigers", 0.0, 2.0).with_venue("North Field", 3.0),
        Match::new("Owls", "Hawks", 1.0, 3.0).with_venue("East Hall", 5.0),
        Match::new("Bears", "Wolves", 3.0, 5.0).with_venue("South Park", 2.0),
        Match::new("Foxes", "Stags", 0.0, 6.0).with_venue("West Arena", 8.0),
    ]
}

#[test]
fn test_activity_selection_picks_maximum_compatible_set() {
    let selected = select_matches(&fixtures()).unwrap();
    let pairs: Vec<(&str, &str)> = selected
        .iter()
        .map(|m| (m.home.as_str(), m.away.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Lions", "Tigers"), ("Bears", "Wolves")]);

    for window in selected.windows(2) {
        assert!(window[1].start >= window[0].end);
    }
}

#[test]
fn test_activity_selection_does_not_reorder_input() {
    let input = fixtures();
    let before = input.clone();
    select_matches(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn test_activity_selection_needs_four_matches() {
    let mut input = fixtures();
    input.truncate(3);
    assert!(matches!(
        select_matches(&input),
        Err(RosterError::InsufficientInput { minimum: 4, actual: 3, .. })
    ));
}

#[test]
fn test_travel_plan_from_operator_entries() {
    // The second number typed for each venue is what the optimizer works with.
    let entries = [("A", 50.0, 2.0), ("B", 1.0, 3.0), ("C", 7.0, 4.0), ("D", 0.5, 5.0)];
    let venues: Vec<Venue> = entries
        .iter()
        .map(|&(name, distance, time_to_reach)| {
            Venue::from(VenueEntry {
                name: name.to_string(),
                distance,
                time_to_reach,
            })
        })
        .collect();

    let plan = optimize_travel(&venues, 5).unwrap();
    assert_eq!(plan.venues, vec!["A", "B"]);
    assert_eq!(plan.total_distance, 5.0);
}

#[test]
fn test_travel_plan_never_exceeds_whole_budget() {
    let venues: Vec<Venue> = [7.0, 3.0, 9.0, 4.0, 6.0, 2.0]
        .iter()
        .enumerate()
        .map(|(i, &d)| Venue::new(format!("V{}", i), d))
        .collect();

    for budget in 0..=31 {
        let plan = optimize_travel(&venues, budget).unwrap();
        assert!(plan.total_distance <= budget as f64, "budget {}", budget);
    }
    assert_eq!(optimize_travel(&venues, 31).unwrap().total_distance, 31.0);
    assert_eq!(optimize_travel(&venues, 8).unwrap().total_distance, 8.0);
}
