use chrono::Weekday;

use showtimes_syntax::rules::day as ds;

use crate::context::{Context, DayMatching};

/// Check if a weekday is selected by some part of a cell.
pub trait DayFilter {
    fn filter(&self, day: Weekday, ctx: &Context) -> bool;
}

impl<T: DayFilter> DayFilter for [T] {
    fn filter(&self, day: Weekday, ctx: &Context) -> bool {
        self.iter().any(|x| x.filter(day, ctx))
    }
}

impl DayFilter for ds::DayList {
    fn filter(&self, day: Weekday, ctx: &Context) -> bool {
        match ctx.matching {
            DayMatching::Exact => self.items.filter(day, ctx),
            DayMatching::Substring => self.raw.contains(ctx.vocabulary.code(day)),
        }
    }
}

impl DayFilter for ds::DayItem {
    fn filter(&self, day: Weekday, ctx: &Context) -> bool {
        match self {
            ds::DayItem::Single(token) => token.filter(day, ctx),
            ds::DayItem::Range { start, end } => {
                let (Some(start), Some(end)) = (start.day, end.day) else {
                    return false;
                };

                let start = start.num_days_from_monday();
                let end = end.num_days_from_monday();
                let day = day.num_days_from_monday();

                if start <= end {
                    (start..=end).contains(&day)
                } else {
                    // Handle wrapping ranges
                    day >= start || day <= end
                }
            }
        }
    }
}

impl DayFilter for ds::DayToken {
    fn filter(&self, day: Weekday, _ctx: &Context) -> bool {
        self.day == Some(day)
    }
}
