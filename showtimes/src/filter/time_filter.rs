use chrono::Weekday;

use showtimes_syntax::rules::daily::{DailyPattern, DayOverride, TimeEntry};
use showtimes_syntax::rules::{DaySegment, Segment, ShowtimeCell};
use showtimes_syntax::sorted_vec::UniqueSortedVec;
use showtimes_syntax::ShowTime;

use crate::filter::day_filter::DayFilter;
use crate::Context;

/// Project a part of a cell to the times it holds for a given weekday.
pub trait TimeFilter {
    /// Times of the given day, `None` when there is no showing at all, which
    /// is never represented by an empty list.
    fn times_on(&self, day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>>;
}

impl TimeFilter for ShowtimeCell {
    /// Times of all segments merged in increasing order.
    fn times_on(&self, day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>> {
        let times = self
            .segments
            .iter()
            .filter_map(|segment| segment.times_on(day, ctx))
            .map(UniqueSortedVec::from)
            .fold(UniqueSortedVec::new(), UniqueSortedVec::union);

        (!times.is_empty()).then(|| times.into())
    }
}

impl TimeFilter for Segment {
    fn times_on(&self, day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>> {
        match self {
            Segment::Daily(pattern) => pattern.times_on(day, ctx),
            Segment::Days(segment) => segment.times_on(day, ctx),
        }
    }
}

impl TimeFilter for DaySegment {
    fn times_on(&self, day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>> {
        self.days.filter(day, ctx).then(|| self.times.clone())
    }
}

impl TimeFilter for DailyPattern {
    fn times_on(&self, day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>> {
        match self {
            DailyPattern::Plain { times, day_override } => Some(
                override_times(day_override.as_ref(), day, ctx)
                    .unwrap_or(times.as_slice())
                    .to_vec(),
            ),
            DailyPattern::ExceptWhole { except, entries } => {
                if except.filter(day, ctx) {
                    return None;
                }

                entry_times(entries, day, ctx)
            }
            DailyPattern::ExceptPerTime { entries, day_override } => {
                if let Some(times) = override_times(day_override.as_ref(), day, ctx) {
                    return Some(times.to_vec());
                }

                entry_times(entries, day, ctx)
            }
        }
    }
}

/// Times of entries which are not excepted on this day.
fn entry_times(entries: &[TimeEntry], day: Weekday, ctx: &Context) -> Option<Vec<ShowTime>> {
    let times: Vec<_> = entries
        .iter()
        .filter(|entry| entry.except.as_ref().map_or(true, |except| !except.filter(day, ctx)))
        .map(|entry| entry.time)
        .collect();

    (!times.is_empty()).then_some(times)
}

fn override_times<'a>(
    day_override: Option<&'a DayOverride>,
    day: Weekday,
    ctx: &Context,
) -> Option<&'a [ShowTime]> {
    day_override
        .filter(|day_override| day_override.days.filter(day, ctx))
        .map(|day_override| day_override.times.as_slice())
}
