#![doc = include_str!("../../README.md")]

pub mod context;
pub mod error;
pub mod extract;
pub mod filter;
pub mod listing;
pub mod report;
pub mod schedule;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::{Context, DayMatching};
pub use crate::error::{Error, Result};
pub use crate::extract::{
    extract_daily_times, is_valid_day, remove_days_from_showtime, times_for_one_day,
};
pub use crate::listing::{Film, Language, RawShowtime};
pub use crate::report::{FilmBlock, Report};
pub use crate::schedule::{DaySchedule, ScheduleEntry, TheaterShowtime};
pub use showtimes_syntax::{ShowTime, Vocabulary, WEEK};
