use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

pub const MAX_PLAYERS_PER_TEAM: usize = 5;
pub const MAX_TEAMS_PER_DEPARTMENT: usize = 5;

/// Departments every league carries after startup, in menu order.
pub const FIXED_DEPARTMENTS: [&str; 2] = ["IRE", "EdTech"];

/// Field order is the on-disk column order: `id,name,position,jersey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub jersey: u32,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, position: impl Into<String>, jersey: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            jersey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Players in roster (insertion) order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS_PER_TEAM
    }

    /// Appends `player` unless the roster is already full, in which case the player is
    /// discarded and `TeamFull` is returned.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.is_full() {
            return Err(RosterError::TeamFull {
                team: self.name.clone(),
                limit: MAX_PLAYERS_PER_TEAM,
            });
        }
        self.players.push(player);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub name: String,
    teams: Vec<Team>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= MAX_TEAMS_PER_DEPARTMENT
    }

    /// Appends `team` when there is room and no team of the same name exists.
    pub fn add_team(&mut self, team: Team) -> Result<usize> {
        if self.is_full() {
            return Err(RosterError::DepartmentFull {
                department: self.name.clone(),
                limit: MAX_TEAMS_PER_DEPARTMENT,
            });
        }
        if self.find_team(&team.name).is_some() {
            return Err(RosterError::DuplicateTeam {
                department: self.name.clone(),
                team: team.name,
            });
        }
        self.teams.push(team);
        Ok(self.teams.len() - 1)
    }

    /// Exact, case-sensitive, first match.
    pub fn find_team(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|team| team.name == name)
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn team_mut(&mut self, index: usize) -> Option<&mut Team> {
        self.teams.get_mut(index)
    }
}

/// Handle to a department inside a [`League`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartmentId(usize);

impl DepartmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a team inside a [`League`]. Stays valid because nothing is ever removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId {
    department: DepartmentId,
    team: usize,
}

impl TeamId {
    pub fn department(self) -> DepartmentId {
        self.department
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct League {
    departments: Vec<Department>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department_ids(&self) -> impl Iterator<Item = DepartmentId> {
        (0..self.departments.len()).map(DepartmentId)
    }

    /// Appends unconditionally; uniqueness is the caller's concern (see `ensure_department`).
    pub fn add_department(&mut self, department: Department) -> DepartmentId {
        self.departments.push(department);
        DepartmentId(self.departments.len() - 1)
    }

    pub fn ensure_department(&mut self, name: &str) -> DepartmentId {
        match self.find_department(name) {
            Some(id) => id,
            None => self.add_department(Department::new(name)),
        }
    }

    pub fn find_department(&self, name: &str) -> Option<DepartmentId> {
        self.departments
            .iter()
            .position(|department| department.name == name)
            .map(DepartmentId)
    }

    pub fn find_team(&self, department: DepartmentId, name: &str) -> Option<TeamId> {
        self.department(department)?
            .find_team(name)
            .map(|team| TeamId { department, team })
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.get(id.0)
    }

    pub fn department_mut(&mut self, id: DepartmentId) -> Option<&mut Department> {
        self.departments.get_mut(id.0)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.department(id.department)?.team(id.team)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.department_mut(id.department)?.team_mut(id.team)
    }

    /// Adds a team to `department` and returns its handle.
    pub fn add_team(&mut self, department: DepartmentId, team: Team) -> Result<TeamId> {
        let dept = self
            .department_mut(department)
            .ok_or_else(|| RosterError::DepartmentNotFound {
                name: format!("#{}", department.0),
            })?;
        let team = dept.add_team(team)?;
        Ok(TeamId { department, team })
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.departments
            .iter()
            .flat_map(|department| department.teams.iter())
            .flat_map(|team| team.players.iter())
    }

    pub fn max_player_id(&self) -> Option<u32> {
        self.players().map(|player| player.id).max()
    }
}

/// One fixture entered for the interval scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub home: String,
    pub away: String,
    pub start: f64,
    pub end: f64,
    pub venue: String,
    /// Distance from the previous venue; display only.
    pub distance: f64,
}

impl Match {
    pub fn new(home: impl Into<String>, away: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            start,
            end,
            venue: String::new(),
            distance: 0.0,
        }
    }

    pub fn with_venue(mut self, venue: impl Into<String>, distance: f64) -> Self {
        self.venue = venue.into();
        self.distance = distance;
        self
    }
}

/// A venue exactly as the operator typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueEntry {
    pub name: String,
    pub distance: f64,
    pub time_to_reach: f64,
}

/// A venue as the travel optimizer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
    pub distance: f64,
}

impl Venue {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

impl From<VenueEntry> for Venue {
    // The stored distance is the time-to-reach value; the entered distance is discarded.
    // Weight and value in the optimizer both read this field.
    fn from(entry: VenueEntry) -> Self {
        Self {
            name: entry.name,
            distance: entry.time_to_reach,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelPlan {
    /// Chosen venues in input order.
    pub venues: Vec<String>,
    pub total_distance: f64,
}
