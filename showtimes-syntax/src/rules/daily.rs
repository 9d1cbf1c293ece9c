use crate::rules::day::DayList;
use crate::show_time::ShowTime;

// DailyPattern

/// The three encodings of a daily segment met in listings.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum DailyPattern {
    /// `daily 19:00 (Sun 19:30)`
    Plain {
        times: Vec<ShowTime>,
        day_override: Option<DayOverride>,
    },
    /// `daily except Sat/Tu 21:30`, times may still have their own exception
    /// as in `daily except W 16:10 (except Sat), 22:15`
    ExceptWhole {
        except: DayList,
        entries: Vec<TimeEntry>,
    },
    /// `daily 16:20 (except F), 18:35`
    ExceptPerTime {
        entries: Vec<TimeEntry>,
        day_override: Option<DayOverride>,
    },
}

impl DailyPattern {
    /// Iterate over the times of the pattern, including overrides.
    pub fn times(&self) -> impl Iterator<Item = ShowTime> + '_ {
        let (default, day_override): (Vec<_>, _) = match self {
            Self::Plain { times, day_override } => (times.clone(), day_override.as_ref()),
            Self::ExceptWhole { entries, .. } => {
                (entries.iter().map(|entry| entry.time).collect(), None)
            }
            Self::ExceptPerTime { entries, day_override } => (
                entries.iter().map(|entry| entry.time).collect(),
                day_override.as_ref(),
            ),
        };

        default
            .into_iter()
            .chain(day_override.into_iter().flat_map(|x| x.times.iter().copied()))
    }
}

// TimeEntry

/// A time of a daily list with its own exception: `20:30 (except M)`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TimeEntry {
    pub time: ShowTime,
    pub except: Option<DayList>,
}

// DayOverride

/// Replacement of the daily times on some days: `(Sun 19:30)`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DayOverride {
    pub days: DayList,
    pub times: Vec<ShowTime>,
}
