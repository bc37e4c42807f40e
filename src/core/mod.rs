pub mod activity;
pub mod codec;
pub mod record_book;
pub mod travel;

pub use crate::domain::model::{
    Department, DepartmentId, League, Match, Player, Team, TeamId, TravelPlan, Venue, VenueEntry,
};
pub use crate::domain::ports::{ConfigProvider, RecordStore};
pub use crate::utils::error::Result;
