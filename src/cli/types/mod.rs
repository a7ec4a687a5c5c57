//! Type-safe wrappers for college basketball data.

pub mod ids;
pub mod time;

pub use ids::{GameId, TeamId};
pub use time::{DisplayZone, Season};
