//! Adapter for the collegebasketballdata.com API.

pub mod http;
pub mod source;
pub mod types;

pub use http::{CbbdClient, GamesQuery, CBBD_BASE_URL};
pub use source::{CacheStatus, DataSource, FetchMode, FetchWarning, LoadRequest, RawData};
