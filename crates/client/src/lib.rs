//! Client side of the workout tracker: an HTTP client for the API, the local
//! mirror of server state, and the session that keeps the two in step.

pub mod api;
pub mod board;
pub mod error;
pub mod tracker;

pub use api::WorkoutsClient;
pub use board::{Adjustment, Board, Draft, Field, PendingChange};
pub use error::{ClientError, Result};
pub use tracker::Tracker;
