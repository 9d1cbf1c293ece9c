// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

// DayList

/// A list of days joined by `/`, such as `Sat/Sun` or `F-Sun/W`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DayList {
    /// Text of the list as written in the cell.
    pub raw: String,
    pub items: Vec<DayItem>,
}

// DayItem

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum DayItem {
    Single(DayToken),
    /// A range of days, wrapping over the end of the week (`F-Sun`).
    Range { start: DayToken, end: DayToken },
}

// DayToken

/// A word in a day position, which may not name an actual day: listings
/// sometimes put commentary where days are expected.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DayToken {
    pub raw: String,
    pub day: Option<Weekday>,
}
