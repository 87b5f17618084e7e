pub mod coerce;
pub mod common;
pub mod workout;
