//! Operations working directly on the text of translated cells.
//!
//! ```
//! use chrono::Weekday;
//! use showtimes::extract::extract_daily_times;
//! use showtimes::Context;
//!
//! let ctx = Context::default();
//! let cell = "except W 19:10; Sat/Sun also 15:30; Tu also 13:00";
//!
//! assert_eq!(
//!     extract_daily_times(cell, Weekday::Sat, &ctx).unwrap().as_deref(),
//!     Some("15:30, 19:10"),
//! );
//!
//! assert_eq!(extract_daily_times(cell, Weekday::Wed, &ctx).unwrap(), None);
//! ```

use chrono::Weekday;

use showtimes_syntax::rules::Segment;
use showtimes_syntax::show_time::join_times;

use crate::error::{Error, Result};
use crate::filter::day_filter::DayFilter;
use crate::filter::time_filter::TimeFilter;
use crate::schedule::{DaySchedule, TheaterShowtime};
use crate::Context;

/// Check that a time is not excluded from a day by an `(except <days>)`
/// clause. Any text which doesn't hold such a clause is valid every day.
///
/// ```
/// use chrono::Weekday;
/// use showtimes::extract::is_valid_day;
/// use showtimes::Context;
///
/// let ctx = Context::default();
/// assert!(!is_valid_day("21:30 (except Sat/Tu)", Weekday::Sat, &ctx));
/// assert!(is_valid_day("21:30 (except Sat/Tu)", Weekday::Sun, &ctx));
/// assert!(is_valid_day("21:30", Weekday::Sat, &ctx));
/// ```
pub fn is_valid_day(showtime: &str, day: Weekday, ctx: &Context) -> bool {
    match showtimes_syntax::parse_exception(showtime, &ctx.vocabulary) {
        Some(except) => !except.filter(day, ctx),
        None => true,
    }
}

/// Times of a daily cell for a given day, the "daily" marker may be omitted.
///
/// Segments following the daily pattern (`Sat/Sun also 15:30`, `M 18:00`)
/// are merged with it, times are then given in increasing order. `None` is
/// returned if there is no showing on this day.
///
/// ```
/// use chrono::Weekday;
/// use showtimes::extract::extract_daily_times;
/// use showtimes::Context;
///
/// let ctx = Context::default();
///
/// assert_eq!(
///     extract_daily_times("19:00 (Sun 19:30)", Weekday::Sun, &ctx).unwrap().as_deref(),
///     Some("19:30"),
/// );
///
/// assert!(extract_daily_times("daily", Weekday::Sun, &ctx).is_err());
/// ```
pub fn extract_daily_times(segment: &str, day: Weekday, ctx: &Context) -> Result<Option<String>> {
    let cell = showtimes_syntax::parse_daily_cell(segment, &ctx.vocabulary)?;
    Ok(cell.times_on(day, ctx).map(|times| join_times(&times)))
}

/// Drop the leading days of a specific-day segment and keep its times.
///
/// ```
/// use showtimes::extract::remove_days_from_showtime;
/// use showtimes::Context;
///
/// let ctx = Context::default();
/// assert_eq!(remove_days_from_showtime("Sat/Sun 20:00", &ctx).unwrap(), "20:00");
/// assert_eq!(remove_days_from_showtime("Sun also 11:00, 22:00", &ctx).unwrap(), "11:00, 22:00");
/// assert!(remove_days_from_showtime("daily 20:00", &ctx).is_err());
/// ```
pub fn remove_days_from_showtime(segment: &str, ctx: &Context) -> Result<String> {
    let cell = showtimes_syntax::parse_cell(segment, &ctx.vocabulary)?;

    match cell.segments.as_slice() {
        [Segment::Days(segment)] => Ok(join_times(&segment.times)),
        _ => Err(Error::NotDaySegment(segment.to_string())),
    }
}

/// Lines `"<theater>: <times>"` of all the showings on a given day, from a
/// list of `"<theater>: <cell>"` entries.
///
/// A theater whose showtimes have several segments matching the day will
/// get one line per segment.
///
/// ```
/// use chrono::Weekday;
/// use showtimes::extract::times_for_one_day;
/// use showtimes::Context;
///
/// let ctx = Context::default();
/// let entries = ["Werkstattkino: M 20:00"];
///
/// assert_eq!(
///     times_for_one_day(&entries, Weekday::Mon, &ctx).unwrap(),
///     ["Werkstattkino: 20:00"],
/// );
///
/// assert!(times_for_one_day(&entries, Weekday::Sun, &ctx).unwrap().is_empty());
/// ```
pub fn times_for_one_day(
    entries: &[impl AsRef<str>],
    day: Weekday,
    ctx: &Context,
) -> Result<Vec<String>> {
    let showtimes = entries
        .iter()
        .map(|entry| TheaterShowtime::parse(entry.as_ref(), ctx))
        .collect::<Result<Vec<_>>>()?;

    Ok(DaySchedule::build(&showtimes, day, ctx).lines())
}
