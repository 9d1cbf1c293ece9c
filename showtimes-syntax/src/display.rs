use std::fmt::{Display, Formatter, Result};

use crate::rules::daily::{DailyPattern, DayOverride, TimeEntry};
use crate::rules::day::{DayItem, DayList, DayToken};
use crate::rules::{DaySegment, Segment, ShowtimeCell};
use crate::vocabulary::{ALSO, DAILY, EXCEPT};

fn write_list(f: &mut Formatter<'_>, seq: &[impl Display], sep: &str) -> Result {
    let Some(first) = seq.first() else {
        return Ok(());
    };

    write!(f, "{first}")?;

    for elem in &seq[1..] {
        write!(f, "{sep}{elem}")?;
    }

    Ok(())
}

impl Display for ShowtimeCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_list(f, &self.segments, "; ")
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Daily(pattern) => write!(f, "{pattern}"),
            Self::Days(segment) => write!(f, "{segment}"),
        }
    }
}

impl Display for DaySegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ", self.days)?;

        if self.also {
            write!(f, "{ALSO} ")?;
        }

        write_list(f, &self.times, ", ")?;

        if let Some(comment) = &self.comment {
            write!(f, " ({comment})")?;
        }

        Ok(())
    }
}

impl Display for DailyPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{DAILY} ")?;

        let day_override = match self {
            Self::Plain { times, day_override } => {
                write_list(f, times, ", ")?;
                day_override
            }
            Self::ExceptWhole { except, entries } => {
                write!(f, "{EXCEPT} {except} ")?;
                return write_list(f, entries, ", ");
            }
            Self::ExceptPerTime { entries, day_override } => {
                write_list(f, entries, ", ")?;
                day_override
            }
        };

        if let Some(day_override) = day_override {
            write!(f, " {day_override}")?;
        }

        Ok(())
    }
}

impl Display for TimeEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.time)?;

        if let Some(except) = &self.except {
            write!(f, " ({EXCEPT} {except})")?;
        }

        Ok(())
    }
}

impl Display for DayOverride {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} ", self.days)?;
        write_list(f, &self.times, ", ")?;
        write!(f, ")")
    }
}

impl Display for DayList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_list(f, &self.items, "/")
    }
}

impl Display for DayItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Single(token) => write!(f, "{token}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl Display for DayToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.raw)
    }
}
