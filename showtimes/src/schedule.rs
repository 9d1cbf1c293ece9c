use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Weekday;

use showtimes_syntax::rules::ShowtimeCell;
use showtimes_syntax::show_time::join_times;
use showtimes_syntax::ShowTime;

use crate::error::{Error, Result};
use crate::filter::time_filter::TimeFilter;
use crate::Context;

// TheaterShowtime

/// The showtimes of a film in one theater.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TheaterShowtime {
    pub theater: Arc<str>,
    pub cell: ShowtimeCell,
}

impl TheaterShowtime {
    pub fn new(theater: impl Into<Arc<str>>, cell: ShowtimeCell) -> Self {
        Self { theater: theater.into(), cell }
    }

    /// Parse a `"<theater>: <cell>"` entry, where the cell is already
    /// translated.
    ///
    /// ```
    /// use showtimes::{Context, TheaterShowtime};
    ///
    /// let ctx = Context::default();
    /// let entry = TheaterShowtime::parse("Cinema: Th 22:05; Sat 12:35", &ctx).unwrap();
    /// assert_eq!(&*entry.theater, "Cinema");
    /// assert_eq!(entry.cell.segments.len(), 2);
    ///
    /// assert!(TheaterShowtime::parse("Werkstattkino M 20:00", &ctx).is_err());
    /// ```
    pub fn parse(entry: &str, ctx: &Context) -> Result<Self> {
        let (theater, raw_cell) =
            split_theater(entry).ok_or_else(|| Error::MissingSeparator(entry.to_string()))?;

        let cell = showtimes_syntax::parse_cell(raw_cell, &ctx.vocabulary)?;
        Ok(Self::new(theater, cell))
    }
}

impl FromStr for TheaterShowtime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &Context::default())
    }
}

impl Display for TheaterShowtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.theater, self.cell)
    }
}

/// Split an entry on the first colon which is not part of a time.
fn split_theater(entry: &str) -> Option<(&str, &str)> {
    let bytes = entry.as_bytes();
    let is_digit_at = |idx: Option<usize>| idx.and_then(|i| bytes.get(i)).is_some_and(u8::is_ascii_digit);

    let idx = entry
        .match_indices(':')
        .map(|(idx, _)| idx)
        .find(|&idx| !(is_digit_at(idx.checked_sub(1)) && is_digit_at(Some(idx + 1))))?;

    let theater = entry[..idx].trim();
    (!theater.is_empty()).then(|| (theater, entry[idx + 1..].trim()))
}

// ScheduleEntry

/// The times of a theater for a single day, as given by one segment of its
/// showtimes.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub theater: Arc<str>,
    pub times: Vec<ShowTime>,
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.theater, join_times(&self.times))
    }
}

// DaySchedule

/// Showings of a film on a weekday, in the order theaters are listed.
///
/// A theater gets one entry for each of its segments matching the day, these
/// entries are not merged.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub entries: Vec<ScheduleEntry>,
}

impl DaySchedule {
    /// Collect showings of a given day.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use showtimes::{Context, DaySchedule, TheaterShowtime};
    ///
    /// let ctx = Context::default();
    ///
    /// let showtimes = [
    ///     TheaterShowtime::parse("Mathäser: Sun 11:00 (mit Pause)", &ctx).unwrap(),
    ///     TheaterShowtime::parse("Cinemaxx: Th 19:30; Sun 16:00", &ctx).unwrap(),
    /// ];
    ///
    /// let schedule = DaySchedule::build(&showtimes, Weekday::Sun, &ctx);
    /// assert_eq!(schedule.lines(), ["Mathäser: 11:00", "Cinemaxx: 16:00"]);
    /// ```
    pub fn build<'a>(
        showtimes: impl IntoIterator<Item = &'a TheaterShowtime>,
        day: Weekday,
        ctx: &Context,
    ) -> Self {
        let entries = showtimes
            .into_iter()
            .flat_map(|showtime| {
                showtime.cell.segments.iter().filter_map(move |segment| {
                    let times = segment.times_on(day, ctx)?;
                    Some(ScheduleEntry { theater: showtime.theater.clone(), times })
                })
            })
            .collect();

        Self { day, entries }
    }

    /// Check if there is no showing on this day.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format entries as `"<theater>: <times>"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ScheduleEntry::to_string).collect()
    }
}
