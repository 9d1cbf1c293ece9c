mod listing;
mod schedule;

use chrono::Weekday;

use crate::{extract_daily_times, Context, Error};

/// Weekdays in the order days are listed in reports.
const WEEK: [Weekday; 7] = showtimes_syntax::WEEK;

fn sample() -> impl Iterator<Item = &'static str> {
    include_str!("data/sample.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Daily times of a cell for each day of the week.
fn daily_week(cell: &str, ctx: &Context) -> Result<Vec<Option<String>>, Error> {
    WEEK.into_iter()
        .map(|day| extract_daily_times(cell, day, ctx))
        .collect()
}

/// Expected daily times, with `None` written as `"-"`.
fn week_of(days: [&str; 7]) -> Vec<Option<String>> {
    days.into_iter()
        .map(|times| (times != "-").then(|| times.to_string()))
        .collect()
}
