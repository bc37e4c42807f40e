pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::FileRecordStore;
pub use config::TomlConfig;
pub use core::record_book::RecordBook;
pub use shell::Shell;
pub use utils::error::{Result, RosterError};
