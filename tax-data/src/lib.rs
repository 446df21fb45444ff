//! Loading bracket schedules from data files.
//!
//! A new tax year is a new CSV file, not a code change.

pub mod loader;

pub use loader::{BracketRecord, BracketScheduleLoader, BracketScheduleLoaderError};
