pub mod daily;
pub mod day;

use crate::show_time::ShowTime;

// ShowtimeCell

/// All the showings of a film in one theater, as a sequence of segments
/// separated by `;` in the listing.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct ShowtimeCell {
    pub segments: Vec<Segment>,
}

impl ShowtimeCell {
    /// Iterate over all the times mentioned in this cell, whichever day they
    /// apply to.
    pub fn times(&self) -> impl Iterator<Item = ShowTime> + '_ {
        self.segments.iter().flat_map(Segment::times)
    }
}

// Segment

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Segment {
    /// Times repeated every day, eg. `daily except W 19:10`
    Daily(daily::DailyPattern),
    /// Times of explicitly listed days, eg. `Sat/Sun also 15:30`
    Days(DaySegment),
}

impl Segment {
    fn times(&self) -> Box<dyn Iterator<Item = ShowTime> + '_> {
        match self {
            Self::Daily(pattern) => Box::new(pattern.times()),
            Self::Days(segment) => Box::new(segment.times.iter().copied()),
        }
    }
}

// DaySegment

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DaySegment {
    pub days: day::DayList,
    /// Set when the segment was introduced by "also", the times are then an
    /// addition to a daily pattern.
    pub also: bool,
    pub times: Vec<ShowTime>,
    pub comment: Option<String>,
}
