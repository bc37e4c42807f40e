use crate::core::codec;
use crate::domain::model::{
    DepartmentId, League, Player, Team, TeamId, FIXED_DEPARTMENTS,
};
use crate::domain::ports::RecordStore;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_name, validate_player_field};

/// The league together with the store it is persisted to.
///
/// Every successful mutation rewrites the store. A failed write is logged and the in-memory
/// change is kept; `save` reports the failure to callers that need it.
pub struct RecordBook<S: RecordStore> {
    store: S,
    league: League,
    next_player_id: u32,
}

impl<S: RecordStore> RecordBook<S> {
    /// Loads the league from `store` and makes sure the fixed departments exist.
    ///
    /// An unreadable or missing store yields an empty league. A malformed record, including
    /// text that does not decode, is fatal.
    pub fn open(store: S) -> Result<Self> {
        let mut league = match store.load() {
            Ok(Some(text)) => codec::decode_league(&text)?,
            Ok(None) => {
                tracing::info!(
                    "No record book at {}, starting with an empty league",
                    store.location()
                );
                League::new()
            }
            Err(e @ RosterError::MalformedRecord { .. }) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    "Could not read record book at {}: {}; starting with an empty league",
                    store.location(),
                    e
                );
                League::new()
            }
        };

        for name in FIXED_DEPARTMENTS {
            league.ensure_department(name);
        }

        let next_player_id = league.max_player_id().map_or(1, |id| id.saturating_add(1));
        tracing::info!(
            "Loaded {} departments and {} players from {}",
            league.departments().len(),
            league.players().count(),
            store.location()
        );

        Ok(Self {
            store,
            league,
            next_player_id,
        })
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn next_player_id(&self) -> u32 {
        self.next_player_id
    }

    pub fn find_department(&self, name: &str) -> Option<DepartmentId> {
        self.league.find_department(name)
    }

    pub fn find_team(&self, department: DepartmentId, name: &str) -> Option<TeamId> {
        self.league.find_team(department, name)
    }

    pub fn add_team(&mut self, department: DepartmentId, name: &str) -> Result<TeamId> {
        validate_name(name)?;
        let team = self.league.add_team(department, Team::new(name))?;
        tracing::info!("Added team '{}'", name);
        self.persist();
        Ok(team)
    }

    /// Adds a player with the next free id. A rejected player does not consume an id.
    pub fn add_player(
        &mut self,
        team: TeamId,
        name: &str,
        position: &str,
        jersey: u32,
    ) -> Result<Player> {
        validate_player_field("name", name)?;
        validate_player_field("position", position)?;

        let id = self.next_player_id;
        if id == u32::MAX {
            return Err(RosterError::InvalidInput {
                message: "player id space exhausted".to_string(),
            });
        }

        let target = self
            .league
            .team_mut(team)
            .ok_or_else(|| RosterError::TeamNotFound {
                name: format!("{:?}", team),
            })?;
        let player = Player::new(id, name, position, jersey);
        target.add_player(player.clone())?;
        self.next_player_id += 1;

        tracing::info!("Added player #{} '{}' to '{}'", id, name, target.name);
        self.persist();
        Ok(player)
    }

    pub fn save(&self) -> Result<()> {
        let text = codec::encode_league(&self.league)?;
        self.store.save(&text)?;
        tracing::debug!("Saved record book to {}", self.store.location());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(
                "Failed to save record book to {}: {}",
                self.store.location(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        contents: RefCell<Option<String>>,
        fail_load: bool,
        fail_save: bool,
    }

    impl MemoryStore {
        fn with(text: &str) -> Self {
            Self {
                contents: RefCell::new(Some(text.to_string())),
                ..Self::default()
            }
        }
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> Result<Option<String>> {
            if self.fail_load {
                return Err(std::io::Error::other("disk on fire").into());
            }
            Ok(self.contents.borrow().clone())
        }

        fn save(&self, contents: &str) -> Result<()> {
            if self.fail_save {
                return Err(std::io::Error::other("read-only").into());
            }
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_open_empty_store_seeds_fixed_departments() {
        let book = RecordBook::open(MemoryStore::default()).unwrap();
        let names: Vec<&str> = book
            .league()
            .departments()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["IRE", "EdTech"]);
        assert_eq!(book.next_player_id(), 1);
        // seeding alone does not write
        assert!(book.store().contents.borrow().is_none());
    }

    #[test]
    fn test_open_keeps_existing_departments_first() {
        let book = RecordBook::open(MemoryStore::with("EdTech\n\nOther\n\n")).unwrap();
        let names: Vec<&str> = book
            .league()
            .departments()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["EdTech", "Other", "IRE"]);
    }

    #[test]
    fn test_unreadable_store_degrades_to_empty_league() {
        let store = MemoryStore {
            fail_load: true,
            ..MemoryStore::default()
        };
        let book = RecordBook::open(store).unwrap();
        assert_eq!(book.league().departments().len(), 2);
    }

    #[test]
    fn test_malformed_store_is_fatal() {
        let result = RecordBook::open(MemoryStore::with("IRE\nLions\n1,Ada,MF,x\n"));
        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let mut book = RecordBook::open(MemoryStore::default()).unwrap();
        let ire = book.find_department("IRE").unwrap();
        let lions = book.add_team(ire, "Lions").unwrap();
        book.add_player(lions, "Ada", "MF", 10).unwrap();

        assert_eq!(
            book.store().contents.borrow().as_deref(),
            Some("IRE\nLions\n1,Ada,MF,10\n\n\nEdTech\n\n")
        );
    }

    #[test]
    fn test_player_ids_continue_after_reload() {
        let book =
            RecordBook::open(MemoryStore::with("IRE\nLions\n4,Ada,MF,10\n9,Bo,GK,1\n\n\n")).unwrap();
        assert_eq!(book.next_player_id(), 10);
    }

    #[test]
    fn test_rejected_player_keeps_id() {
        let mut book = RecordBook::open(MemoryStore::default()).unwrap();
        let ire = book.find_department("IRE").unwrap();
        let lions = book.add_team(ire, "Lions").unwrap();
        for i in 0..5 {
            book.add_player(lions, &format!("P{}", i), "FW", i).unwrap();
        }

        let err = book.add_player(lions, "Extra", "FW", 99).unwrap_err();
        assert!(matches!(err, RosterError::TeamFull { .. }));
        assert_eq!(book.next_player_id(), 6);
        assert_eq!(book.league().team(lions).unwrap().players().len(), 5);
    }

    #[test]
    fn test_invalid_team_name_is_rejected_before_mutation() {
        let mut book = RecordBook::open(MemoryStore::default()).unwrap();
        let ire = book.find_department("IRE").unwrap();
        let err = book.add_team(ire, "Lions,Tigers").unwrap_err();
        assert!(matches!(err, RosterError::InvalidName { .. }));
        assert!(book.league().department(ire).unwrap().teams().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_change_in_memory() {
        let store = MemoryStore {
            fail_save: true,
            ..MemoryStore::default()
        };
        let mut book = RecordBook::open(store).unwrap();
        let ire = book.find_department("IRE").unwrap();
        book.add_team(ire, "Lions").unwrap();

        assert!(book.find_team(ire, "Lions").is_some());
        assert!(matches!(book.save(), Err(RosterError::IoError(_))));
    }
}
