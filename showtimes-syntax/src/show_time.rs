use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/// An hour+minute pair as printed in a listing.
///
/// Values are not checked against a 24h clock, listings are trusted to write
/// sensible times and late shows are sometimes written past midnight.
///
/// The hour keeps the width it was written with (`9:45` or `09:45`), which
/// only matters for display: both forms compare equal.
#[derive(Clone, Copy)]
pub struct ShowTime {
    hour: u8,
    minute: u8,
    short_hour: bool,
}

impl ShowTime {
    /// Create a new show time, printed with two-digit hours.
    ///
    /// ```
    /// use showtimes_syntax::ShowTime;
    ///
    /// assert_eq!(ShowTime::new(20, 15).to_string(), "20:15");
    /// assert_eq!(ShowTime::new(9, 45).to_string(), "09:45");
    /// assert_eq!(ShowTime::new(25, 99).to_string(), "25:99");
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute, short_hour: false }
    }

    /// Print hours below 10 with a single digit.
    ///
    /// ```
    /// use showtimes_syntax::ShowTime;
    ///
    /// let time = ShowTime::new(9, 45).with_short_hour(true);
    /// assert_eq!(time.to_string(), "9:45");
    /// assert_eq!(time, ShowTime::new(9, 45));
    /// ```
    #[inline]
    pub const fn with_short_hour(self, short_hour: bool) -> Self {
        Self { short_hour, ..self }
    }

    #[inline]
    fn key(self) -> (u8, u8) {
        (self.hour, self.minute)
    }
}

impl PartialEq for ShowTime {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ShowTime {}

impl Hash for ShowTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl PartialOrd for ShowTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShowTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for ShowTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.short_hour {
            write!(f, "{}:{:02}", self.hour, self.minute)
        } else {
            write!(f, "{:02}:{:02}", self.hour, self.minute)
        }
    }
}

impl Debug for ShowTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

/// Join times the way listings print them: `"15:00, 17:45"`.
///
/// ```
/// use showtimes_syntax::ShowTime;
/// use showtimes_syntax::show_time::join_times;
///
/// let times = [ShowTime::new(15, 0), ShowTime::new(17, 45)];
/// assert_eq!(join_times(&times), "15:00, 17:45");
/// ```
pub fn join_times(times: &[ShowTime]) -> String {
    times
        .iter()
        .map(ShowTime::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
