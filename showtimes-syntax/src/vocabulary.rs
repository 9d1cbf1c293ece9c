//! Words of the source listings and their english counterparts.
//!
//! Cells are written in german (`tgl. außer Mi. 17:20`) and translated to a
//! compact english notation (`daily except W 17:20`) before being parsed.

use chrono::Weekday;

use crate::error::{Error, Result};

/// The seven days in the order schedules are printed.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Marker of a segment repeated every day.
pub const DAILY: &str = "daily";

/// Conjunction introducing excluded days.
pub const EXCEPT: &str = "except";

/// Conjunction introducing extra showings on top of a daily pattern.
pub const ALSO: &str = "also";

const GERMAN_DAYS: [(Weekday, &str, &str); 7] = [
    (Weekday::Sun, "So.", "Sun"),
    (Weekday::Mon, "Mo.", "M"),
    (Weekday::Tue, "Di.", "Tu"),
    (Weekday::Wed, "Mi.", "W"),
    (Weekday::Thu, "Do.", "Th"),
    (Weekday::Fri, "Fr.", "F"),
    (Weekday::Sat, "Sa.", "Sat"),
];

/// Names of a single weekday.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DayName {
    pub day: Weekday,
    /// Abbreviation used by the listings, eg. `"Mi."`
    pub source: String,
    /// Code used in translated cells, eg. `"W"`
    pub code: String,
}

/// An immutable mapping between the words of a listing and the english
/// notation.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Vocabulary {
    /// Always stored in the order of [`WEEK`].
    days: Vec<DayName>,
    daily: String,
    except: String,
    also: String,
}

impl Vocabulary {
    /// Vocabulary of the german listings.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use showtimes_syntax::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::german();
    /// assert_eq!(vocabulary.code(Weekday::Wed), "W");
    /// assert_eq!(vocabulary.source(Weekday::Wed), "Mi.");
    /// ```
    pub fn german() -> Self {
        Self {
            days: GERMAN_DAYS
                .iter()
                .map(|&(day, source, code)| DayName {
                    day,
                    source: source.to_string(),
                    code: code.to_string(),
                })
                .collect(),
            daily: "tgl.".to_string(),
            except: "außer".to_string(),
            also: "auch".to_string(),
        }
    }

    /// Build a vocabulary from `(day, source, code)` triples and the source
    /// words for "daily", "except" and "also".
    ///
    /// Each weekday must be given exactly once, codes must be distinct and
    /// source abbreviations may not contain each other so that replacing them
    /// in any order gives the same result.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use showtimes_syntax::Vocabulary;
    ///
    /// let french = Vocabulary::new(
    ///     [
    ///         (Weekday::Mon, "lun.", "M"),
    ///         (Weekday::Tue, "mar.", "Tu"),
    ///         (Weekday::Wed, "mer.", "W"),
    ///         (Weekday::Thu, "jeu.", "Th"),
    ///         (Weekday::Fri, "ven.", "F"),
    ///         (Weekday::Sat, "sam.", "Sat"),
    ///         (Weekday::Sun, "dim.", "Sun"),
    ///     ],
    ///     "tlj",
    ///     "sauf",
    ///     "aussi",
    /// );
    ///
    /// assert_eq!(french.unwrap().source(Weekday::Sun), "dim.");
    /// assert!(Vocabulary::new([(Weekday::Mon, "Mo.", "M")], "tgl.", "außer", "auch").is_err());
    /// ```
    pub fn new<S: Into<String>>(
        days: impl IntoIterator<Item = (Weekday, S, S)>,
        daily: impl Into<String>,
        except: impl Into<String>,
        also: impl Into<String>,
    ) -> Result<Self> {
        let mut slots: [Option<DayName>; 7] = Default::default();

        for (day, source, code) in days {
            let idx = week_index(day);

            if slots[idx].is_some() {
                return Err(Error::InvalidVocabulary("a weekday is named twice"));
            }

            slots[idx] = Some(DayName { day, source: source.into(), code: code.into() });
        }

        let days: Vec<_> = slots.into_iter().flatten().collect();

        if days.len() != WEEK.len() {
            return Err(Error::InvalidVocabulary("all seven weekdays must be named"));
        }

        for (i, x) in days.iter().enumerate() {
            if x.source.is_empty() || x.code.is_empty() {
                return Err(Error::InvalidVocabulary("empty day name"));
            }

            for y in &days[i + 1..] {
                if x.code == y.code {
                    return Err(Error::InvalidVocabulary("two weekdays share a code"));
                }

                if x.source.contains(y.source.as_str()) || y.source.contains(x.source.as_str()) {
                    return Err(Error::InvalidVocabulary(
                        "source abbreviations overlap each other",
                    ));
                }
            }
        }

        Ok(Self {
            days,
            daily: daily.into(),
            except: except.into(),
            also: also.into(),
        })
    }

    /// Iterate over day names in the order of [`WEEK`].
    pub fn days(&self) -> impl Iterator<Item = &DayName> {
        self.days.iter()
    }

    /// English code of a weekday.
    pub fn code(&self, day: Weekday) -> &str {
        &self.days[week_index(day)].code
    }

    /// Abbreviation of a weekday in the source listings.
    pub fn source(&self, day: Weekday) -> &str {
        &self.days[week_index(day)].source
    }

    /// Resolve a day token, either written as an english code or as a source
    /// abbreviation which was left untranslated.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use showtimes_syntax::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::german();
    /// assert_eq!(vocabulary.parse_day("Th"), Some(Weekday::Thu));
    /// assert_eq!(vocabulary.parse_day("Fr."), Some(Weekday::Fri));
    /// assert_eq!(vocabulary.parse_day("Pause"), None);
    /// ```
    pub fn parse_day(&self, token: &str) -> Option<Weekday> {
        self.days
            .iter()
            .find(|name| name.code == token || name.source == token)
            .map(|name| name.day)
    }

    /// Source word marking a segment repeated every day.
    pub fn daily(&self) -> &str {
        &self.daily
    }

    /// Source word introducing excluded days.
    pub fn except(&self) -> &str {
        &self.except
    }

    /// Source word introducing additional showings.
    pub fn also(&self) -> &str {
        &self.also
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::german()
    }
}

/// Position of a weekday in [`WEEK`].
pub(crate) fn week_index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}
