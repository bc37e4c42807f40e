//! Numbered-menu front end over the record book and the two scheduling routines.

pub mod console;

use crate::core::activity::{select_matches, MIN_MATCHES};
use crate::core::record_book::RecordBook;
use crate::core::travel::{optimize_travel, MIN_VENUES};
use crate::domain::model::{
    DepartmentId, Match, TeamId, Venue, VenueEntry, FIXED_DEPARTMENTS,
};
use crate::domain::ports::RecordStore;
use crate::utils::error::{Result, RosterError};
pub use console::Console;
use std::io::{BufRead, Write};

/// Budgets above this would build an unreasonably large DP table.
pub const MAX_TRAVEL_TIME: u32 = 100_000;

const MAIN_MENU: &str = "\nFootball League Management System\n\
1. Select Department\n\
2. List Departments and Teams\n\
3. Activity Selection Sort\n\
4. Optimize Travel Schedule\n\
5. Exit";

const DEPARTMENT_MENU: &str = "\nSelect Department\n1. IRE\n2. EdTech";

const TEAM_MENU: &str = "\nTeam Management\n\
1. Add Team\n\
2. Manage Team\n\
3. List Teams\n\
4. Back to Main Menu";

const PLAYER_MENU: &str = "\nPlayer Management\n\
1. Add Player\n\
2. List Players\n\
3. Back to Team Menu";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Leave the current menu level.
    Back,
    /// End of input; unwind to the top and exit.
    Exit,
}

pub struct Shell<'a, S: RecordStore, R: BufRead, W: Write> {
    book: &'a mut RecordBook<S>,
    console: Console<R, W>,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(book: &'a mut RecordBook<S>, input: R, output: W) -> Self {
        Self {
            book,
            console: Console::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the main menu until "Exit" or end of input, then saves the record book.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(MAIN_MENU)?;
            let Some(choice) = self.console.ask_text(CHOICE_PROMPT)? else {
                break;
            };

            let step = match choice.as_str() {
                "1" => self.select_department(),
                "2" => self.list_all_departments(),
                "3" => self.activity_selection(),
                "4" => self.optimize_travel_schedule(),
                "5" => break,
                _ => self.invalid_choice(),
            };

            if self.recover(step)? == Flow::Exit {
                break;
            }
        }

        tracing::info!("Saving record book on exit");
        self.book.save()
    }

    /// Prints recoverable errors and carries on at the current level.
    fn recover(&mut self, step: Result<Flow>) -> Result<Flow> {
        match step {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Recoverable error ({:?}): {}", e.category(), e);
                self.console.say(e.to_string())?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn invalid_choice(&mut self) -> Result<Flow> {
        self.console.say(INVALID_CHOICE)?;
        Ok(Flow::Continue)
    }

    fn select_department(&mut self) -> Result<Flow> {
        self.console.say(DEPARTMENT_MENU)?;
        let Some(choice) = self.console.ask_text(CHOICE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let name = match choice.as_str() {
            "1" => FIXED_DEPARTMENTS[0],
            "2" => FIXED_DEPARTMENTS[1],
            _ => return self.invalid_choice(),
        };

        let department = self
            .book
            .find_department(name)
            .ok_or_else(|| RosterError::DepartmentNotFound {
                name: name.to_string(),
            })?;
        self.team_menu(department)
    }

    fn team_menu(&mut self, department: DepartmentId) -> Result<Flow> {
        loop {
            self.console.say(TEAM_MENU)?;
            let Some(choice) = self.console.ask_text(CHOICE_PROMPT)? else {
                return Ok(Flow::Exit);
            };

            let step = match choice.as_str() {
                "1" => self.add_team(department),
                "2" => self.manage_team(department),
                "3" => self.list_teams(department),
                "4" => return Ok(Flow::Continue),
                _ => self.invalid_choice(),
            };

            match self.recover(step)? {
                Flow::Continue => {}
                Flow::Back => return Ok(Flow::Continue),
                Flow::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn add_team(&mut self, department: DepartmentId) -> Result<Flow> {
        if let Some(dept) = self.book.league().department(department) {
            if dept.is_full() {
                self.console.say(format!(
                    "Maximum number of teams in {} department reached.",
                    dept.name
                ))?;
                return Ok(Flow::Back);
            }
        }

        let Some(name) = self.console.ask_text("Enter team name: ")? else {
            return Ok(Flow::Exit);
        };
        self.book.add_team(department, &name)?;
        self.console.say(format!("Team '{}' added.", name))?;
        Ok(Flow::Continue)
    }

    fn manage_team(&mut self, department: DepartmentId) -> Result<Flow> {
        let Some(name) = self.console.ask_text("Enter team name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(team) = self.book.find_team(department, &name) else {
            self.console.say("Team not found.")?;
            return Ok(Flow::Continue);
        };
        self.player_menu(team)
    }

    fn list_teams(&mut self, department: DepartmentId) -> Result<Flow> {
        let lines = match self.book.league().department(department) {
            Some(dept) if dept.teams().is_empty() => vec!["No teams in the department.".to_string()],
            Some(dept) => std::iter::once(format!("Teams in {} department:", dept.name))
                .chain(dept.teams().iter().map(|team| format!("Team: {}", team.name)))
                .collect(),
            None => Vec::new(),
        };
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn list_all_departments(&mut self) -> Result<Flow> {
        let ids: Vec<DepartmentId> = self.book.league().department_ids().collect();
        for id in ids {
            self.list_teams(id)?;
        }
        Ok(Flow::Continue)
    }

    fn player_menu(&mut self, team: TeamId) -> Result<Flow> {
        loop {
            self.console.say(PLAYER_MENU)?;
            let Some(choice) = self.console.ask_text(CHOICE_PROMPT)? else {
                return Ok(Flow::Exit);
            };

            let step = match choice.as_str() {
                "1" => self.add_player(team),
                "2" => self.list_players(team),
                "3" => return Ok(Flow::Continue),
                _ => self.invalid_choice(),
            };

            match self.recover(step)? {
                Flow::Continue => {}
                Flow::Back => return Ok(Flow::Continue),
                Flow::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn add_player(&mut self, team: TeamId) -> Result<Flow> {
        if let Some(current) = self.book.league().team(team) {
            if current.is_full() {
                self.console
                    .say("Cannot add more players. Team already has 5 players.")?;
                return Ok(Flow::Back);
            }
        }

        let Some(name) = self.console.ask_text("Enter player name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(position) = self.console.ask_text("Enter player position: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(jersey) = self
            .console
            .ask_number::<u32>("Enter player jersey number: ", "jersey number")?
        else {
            return Ok(Flow::Exit);
        };

        let player = self.book.add_player(team, &name, &position, jersey)?;
        self.console
            .say(format!("Player '{}' added with ID {}.", player.name, player.id))?;
        Ok(Flow::Continue)
    }

    fn list_players(&mut self, team: TeamId) -> Result<Flow> {
        let lines = match self.book.league().team(team) {
            Some(team) if team.players().is_empty() => vec!["No players in the team.".to_string()],
            Some(team) => std::iter::once(format!("Players in {}:", team.name))
                .chain(team.players().iter().map(|p| {
                    format!(
                        "ID: {}, Name: {}, Position: {}, Jersey: {}",
                        p.id, p.name, p.position, p.jersey
                    )
                }))
                .collect(),
            None => Vec::new(),
        };
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn activity_selection(&mut self) -> Result<Flow> {
        self.console
            .say("\nActivity Selection Sort - Enter match details")?;
        let Some(count) = self
            .console
            .ask_number::<usize>("Number of matches (minimum 4): ", "number of matches")?
        else {
            return Ok(Flow::Exit);
        };
        if count < MIN_MATCHES {
            return Err(RosterError::InsufficientInput {
                what: "matches".to_string(),
                minimum: MIN_MATCHES,
                actual: count,
            });
        }

        // count is operator input; it only bounds the loop
        let mut matches = Vec::new();
        for i in 1..=count {
            self.console.say(format!("\nMatch {}", i))?;
            let Some(entry) = self.read_match()? else {
                return Ok(Flow::Exit);
            };
            matches.push(entry);
        }

        let selected = select_matches(&matches)?;
        self.console.say("\nMatches to watch:")?;
        for m in selected {
            self.console.say(format!(
                "{} vs {} from {} to {} at {}, distance: {}",
                m.home, m.away, m.start, m.end, m.venue, m.distance
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn read_match(&mut self) -> Result<Option<Match>> {
        let Some(home) = self.console.ask_text("Enter team 1: ")? else {
            return Ok(None);
        };
        let Some(away) = self.console.ask_text("Enter team 2: ")? else {
            return Ok(None);
        };
        let Some(start) = self.console.ask_real("Enter start time: ", "start time")? else {
            return Ok(None);
        };
        let Some(end) = self.console.ask_real("Enter end time: ", "end time")? else {
            return Ok(None);
        };
        let Some(venue) = self.console.ask_text("Enter venue: ")? else {
            return Ok(None);
        };
        let Some(distance) = self
            .console
            .ask_real("Enter distance from previous venue: ", "distance")?
        else {
            return Ok(None);
        };
        Ok(Some(Match::new(home, away, start, end).with_venue(venue, distance)))
    }

    fn optimize_travel_schedule(&mut self) -> Result<Flow> {
        self.console.say("\nOptimize Travel Schedule")?;
        let Some(count) = self
            .console
            .ask_number::<usize>("Enter number of venues: ", "number of venues")?
        else {
            return Ok(Flow::Exit);
        };
        if count < MIN_VENUES {
            return Err(RosterError::InsufficientInput {
                what: "venues".to_string(),
                minimum: MIN_VENUES,
                actual: count,
            });
        }

        let Some(budget) = self
            .console
            .ask_real("Enter maximum travel time: ", "maximum travel time")?
        else {
            return Ok(Flow::Exit);
        };
        if budget < 0.0 || budget > f64::from(MAX_TRAVEL_TIME) {
            return Err(RosterError::InvalidInput {
                message: format!(
                    "maximum travel time must be between 0 and {}, got {}",
                    MAX_TRAVEL_TIME, budget
                ),
            });
        }
        // whole units only
        let budget = budget.trunc() as u32;

        let mut venues = Vec::new();
        for i in 1..=count {
            self.console.say(format!("\nVenue {}", i))?;
            let Some(entry) = self.read_venue()? else {
                return Ok(Flow::Exit);
            };
            venues.push(Venue::from(entry));
        }

        let plan = optimize_travel(&venues, budget)?;
        self.console.say("\nOptimal Travel Schedule:")?;
        for venue in &plan.venues {
            self.console.say(format!("Venue: {}", venue))?;
        }
        self.console
            .say(format!("Total distance traveled: {}", plan.total_distance))?;
        Ok(Flow::Continue)
    }

    fn read_venue(&mut self) -> Result<Option<VenueEntry>> {
        let Some(name) = self.console.ask_text("Enter venue name: ")? else {
            return Ok(None);
        };
        let Some(distance) = self
            .console
            .ask_real("Enter distance from previous venue: ", "distance")?
        else {
            return Ok(None);
        };
        let Some(time_to_reach) = self
            .console
            .ask_real("Enter time to reach this venue: ", "time to reach")?
        else {
            return Ok(None);
        };
        Ok(Some(VenueEntry {
            name,
            distance,
            time_to_reach,
        }))
    }
}
