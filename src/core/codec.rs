//! Text codec for the record book.
//!
//! Layout, one record per line:
//!
//! ```text
//! IRE            <- department name
//! Lions          <- team name
//! 1,Ada,MF,10    <- player: id,name,position,jersey
//!                <- end of team
//!                <- end of department
//! EdTech
//!                <- end of (empty) department
//! ```
//!
//! Player lines go through `csv`, so a field holding a comma or quote is quoted. Names never
//! contain commas, which is how a player line is told apart from a name line.

use crate::domain::model::{Department, DepartmentId, League, Player, Team, TeamId};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::validate_name;

const PLAYER_FIELDS: usize = 4;

pub fn encode_player(player: &Player) -> Result<String> {
    for (field, value) in [("name", &player.name), ("position", &player.position)] {
        if value.contains(['\n', '\r']) {
            return Err(RosterError::InvalidName {
                value: value.clone(),
                reason: format!("player {} cannot contain a line break", field),
            });
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.serialize(player)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::IoError(e.into_error()))?;

    Ok(String::from_utf8_lossy(&bytes).trim_end_matches('\n').to_string())
}

pub fn decode_player(line: &str, line_no: usize) -> Result<Player> {
    let malformed = |message: String| RosterError::MalformedRecord {
        line: line_no,
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| malformed(e.to_string()))?;

    if !found || record.len() != PLAYER_FIELDS {
        return Err(malformed(format!(
            "expected {} fields (id,name,position,jersey), found {}",
            PLAYER_FIELDS,
            record.len()
        )));
    }

    record
        .deserialize::<Player>(None)
        .map_err(|e| malformed(e.to_string()))
}

pub fn encode_team(team: &Team) -> Result<String> {
    validate_name(&team.name)?;
    let mut out = format!("{}\n", team.name);
    for player in team.players() {
        out.push_str(&encode_player(player)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn encode_department(department: &Department) -> Result<String> {
    validate_name(&department.name)?;
    let mut out = format!("{}\n", department.name);
    for team in department.teams() {
        out.push_str(&encode_team(team)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn encode_league(league: &League) -> Result<String> {
    let mut out = String::new();
    for department in league.departments() {
        out.push_str(&encode_department(department)?);
        out.push('\n');
    }
    Ok(out)
}

#[derive(Clone, Copy)]
enum TeamSlot {
    None,
    Active(TeamId),
    Dropped,
}

struct OpenDepartment {
    id: DepartmentId,
    saw_team: bool,
}

/// Parses a record book. Over-capacity and duplicate entries are dropped with a warning;
/// a malformed player line fails the whole parse.
pub fn decode_league(text: &str) -> Result<League> {
    let mut league = League::new();
    let mut department: Option<OpenDepartment> = None;
    let mut team = TeamSlot::None;
    let mut blank_run = 0usize;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }

        let starts_department = match &department {
            None => true,
            Some(open) => blank_run >= 2 || (blank_run == 1 && !open.saw_team),
        };
        blank_run = 0;

        if line.contains(',') {
            let player = decode_player(line, line_no)?;
            match team {
                TeamSlot::Active(id) => {
                    // the slot only ever holds handles returned by add_team
                    if let Some(target) = league.team_mut(id) {
                        if let Err(e) = target.add_player(player) {
                            tracing::warn!("Line {}: dropping player: {}", line_no, e);
                        }
                    }
                }
                TeamSlot::Dropped => {
                    tracing::warn!("Line {}: dropping player of a dropped team", line_no);
                }
                TeamSlot::None => {
                    return Err(RosterError::MalformedRecord {
                        line: line_no,
                        message: "player record outside of any team".to_string(),
                    });
                }
            }
            continue;
        }

        if starts_department {
            let id = league.add_department(Department::new(line));
            department = Some(OpenDepartment { id, saw_team: false });
            team = TeamSlot::None;
        } else if let Some(open) = department.as_mut() {
            open.saw_team = true;
            team = match league.add_team(open.id, Team::new(line)) {
                Ok(id) => TeamSlot::Active(id),
                Err(e) => {
                    tracing::warn!("Line {}: dropping team: {}", line_no, e);
                    TeamSlot::Dropped
                }
            };
        }
    }

    Ok(league)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_league() -> League {
        let mut league = League::new();
        let ire = league.add_department(Department::new("IRE"));
        let lions = league.add_team(ire, Team::new("Lions")).unwrap();
        league
            .team_mut(lions)
            .unwrap()
            .add_player(Player::new(1, "Ada", "MF", 10))
            .unwrap();
        league
            .team_mut(lions)
            .unwrap()
            .add_player(Player::new(2, "Bo", "GK", 1))
            .unwrap();
        league.add_team(ire, Team::new("Tigers")).unwrap();
        league.add_department(Department::new("EdTech"));
        league
    }

    #[test]
    fn test_encode_matches_record_book_layout() {
        let text = encode_league(&sample_league()).unwrap();
        assert_eq!(
            text,
            "IRE\nLions\n1,Ada,MF,10\n2,Bo,GK,1\n\nTigers\n\n\nEdTech\n\n"
        );
    }

    #[test]
    fn test_decode_record_book_layout() {
        let league =
            decode_league("IRE\nLions\n1,Ada,MF,10\n2,Bo,GK,1\n\nTigers\n\n\nEdTech\n\n").unwrap();
        assert_eq!(league, sample_league());
    }

    #[test]
    fn test_round_trip_shapes() {
        // teams per department; team t of department d gets (t + d) % 6 players
        let shapes: Vec<Vec<usize>> = vec![
            vec![],
            vec![0],
            vec![0, 0, 0],
            vec![1, 0, 5],
            vec![5, 5, 5, 5, 5],
            vec![3, 0, 2, 0, 1],
        ];

        let mut next_id = 1;
        for shape in shapes {
            let mut league = League::new();
            for (d, teams) in shape.iter().enumerate() {
                let dept = league.add_department(Department::new(format!("Dept {}", d)));
                for t in 0..*teams {
                    let team = league
                        .add_team(dept, Team::new(format!("Team {}-{}", d, t)))
                        .unwrap();
                    for p in 0..(t + d) % 6 {
                        league
                            .team_mut(team)
                            .unwrap()
                            .add_player(Player::new(next_id, format!("Player {}", p), "DF", p as u32))
                            .unwrap();
                        next_id += 1;
                    }
                }
            }

            let decoded = decode_league(&encode_league(&league).unwrap()).unwrap();
            assert_eq!(decoded, league, "shape {:?}", shape);
        }
    }

    #[test]
    fn test_player_with_comma_is_quoted_and_round_trips() {
        let player = Player::new(3, "Smith, J", "Full \"back\"", 4);
        let line = encode_player(&player).unwrap();
        assert_eq!(line, "3,\"Smith, J\",\"Full \"\"back\"\"\",4");
        assert_eq!(decode_player(&line, 1).unwrap(), player);
    }

    #[test]
    fn test_empty_input_yields_empty_league() {
        assert!(decode_league("").unwrap().departments().is_empty());
        assert!(decode_league("\n\n\n").unwrap().departments().is_empty());
    }

    #[test]
    fn test_non_numeric_id_is_fatal() {
        let err = decode_league("IRE\nLions\nx,Ada,MF,10\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_non_numeric_jersey_is_fatal() {
        let err = decode_league("IRE\nLions\n1,Ada,MF,ten\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let err = decode_league("IRE\nLions\n1,Ada,10\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_player_before_team_is_fatal() {
        let err = decode_league("IRE\n1,Ada,MF,10\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_crlf_line_endings() {
        let league = decode_league("IRE\r\nLions\r\n1,Ada,MF,10\r\n\r\n\r\n").unwrap();
        let ire = league.find_department("IRE").unwrap();
        let lions = league.find_team(ire, "Lions").unwrap();
        assert_eq!(league.team(lions).unwrap().players()[0].name, "Ada");
    }

    #[test]
    fn test_over_capacity_entries_are_dropped() {
        let mut text = String::from("IRE\nLions\n");
        for id in 1..=6 {
            text.push_str(&format!("{},P{},FW,{}\n", id, id, id));
        }
        text.push('\n');
        for t in 0..6 {
            text.push_str(&format!("Team{}\n\n", t));
        }

        let league = decode_league(&text).unwrap();
        let ire = &league.departments()[0];
        assert_eq!(ire.teams().len(), 5);
        assert_eq!(ire.teams()[0].players().len(), 5);
        assert!(ire.find_team("Team5").is_none());
    }

    #[test]
    fn test_encode_rejects_name_with_comma() {
        let mut league = League::new();
        league.add_department(Department::new("IRE,EdTech"));
        assert!(matches!(
            encode_league(&league),
            Err(RosterError::InvalidName { .. })
        ));
    }
}
