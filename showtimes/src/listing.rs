use std::fmt::Display;
use std::sync::Arc;

use chrono::Weekday;

use showtimes_syntax::translate::translate_times_simple;

use crate::error::Result;
use crate::schedule::{DaySchedule, TheaterShowtime};
use crate::Context;

// Language

/// Language version of a screening, as tagged in film titles.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    /// Original version, tagged `(OF)`.
    Original,
    /// Original version with german subtitles, tagged `(OmU)`.
    OriginalSubtitled,
    /// Original version with english subtitles, tagged `(OmeU)`.
    OriginalEnglishSubtitles,
    /// Dubbed or german film, which has no tag.
    #[default]
    German,
}

impl Language {
    /// Find the language tag in the raw text of a title.
    ///
    /// ```
    /// use showtimes::Language;
    ///
    /// assert_eq!(Language::classify("\n  Paterson\n  (OmU)\n"), Language::OriginalSubtitled);
    /// assert_eq!(Language::classify("Toni Erdmann"), Language::German);
    /// ```
    pub fn classify(title_text: &str) -> Self {
        [Self::Original, Self::OriginalSubtitled, Self::OriginalEnglishSubtitles]
            .into_iter()
            .find(|lang| title_text.contains(&format!("({})", lang.tag())))
            .unwrap_or(Self::German)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Original => "OF",
            Self::OriginalSubtitled => "OmU",
            Self::OriginalEnglishSubtitles => "OmeU",
            Self::German => "German",
        }
    }

    pub fn is_original(self) -> bool {
        self != Self::German
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// RawShowtime

/// Theater and showtimes of a film as they are found in the listings.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RawShowtime {
    pub theater: Arc<str>,
    pub cell: String,
}

impl RawShowtime {
    pub fn new(theater: impl Into<Arc<str>>, cell: impl Into<String>) -> Self {
        Self { theater: theater.into(), cell: cell.into() }
    }

    /// The cell, cleaned and translated to english.
    pub fn translated(&self, ctx: &Context) -> String {
        translate_times_simple(&ctx.vocabulary, &self.cell)
    }

    /// A `"<theater>: <showtimes>"` line with translated showtimes.
    ///
    /// ```
    /// use showtimes::{Context, RawShowtime};
    ///
    /// let raw = RawShowtime::new("Rio", "tgl. außer Mi. 17:20; So. auch 12:10");
    ///
    /// assert_eq!(
    ///     raw.schedule_line(&Context::default()),
    ///     "Rio: daily except W 17:20; Sun also 12:10",
    /// );
    /// ```
    pub fn schedule_line(&self, ctx: &Context) -> String {
        format!("{}: {}", self.theater, self.translated(ctx))
    }

    pub fn to_theater_showtime(&self, ctx: &Context) -> Result<TheaterShowtime> {
        let cell = showtimes_syntax::parse_cell(&self.translated(ctx), &ctx.vocabulary)?;
        Ok(TheaterShowtime::new(self.theater.clone(), cell))
    }
}

// Film

/// A film of the listings, with all the theaters showing it.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub language: Language,
    pub is_3d: bool,
    pub showtimes: Vec<RawShowtime>,
}

impl Film {
    pub fn new(title: impl Into<String>, language: Language, showtimes: Vec<RawShowtime>) -> Self {
        Self { title: title.into(), language, is_3d: false, showtimes }
    }

    /// Build a film from the raw text of its title, which spreads over
    /// several lines:
    ///
    /// ```
    /// use showtimes::{Film, Language};
    ///
    /// let film = Film::from_title_text("\n\n   Avatar 3D\n   \n   (OF)\n  ", Vec::new()).unwrap();
    /// assert_eq!(film.title, "Avatar 3D");
    /// assert_eq!(film.language, Language::Original);
    /// assert_eq!(film.display_title(), "Avatar 3D (3D) [OF]");
    ///
    /// assert!(Film::from_title_text("\n  \n", Vec::new()).is_none());
    /// ```
    pub fn from_title_text(text: &str, showtimes: Vec<RawShowtime>) -> Option<Self> {
        let title = text.lines().map(str::trim).find(|line| line.chars().count() > 1)?;

        Some(Self {
            title: title.to_string(),
            language: Language::classify(text),
            is_3d: text.contains("3D"),
            showtimes,
        })
    }

    /// Title as displayed in reports, eg. `Arrival (3D) [OmU]`.
    pub fn display_title(&self) -> String {
        let suffix_3d = if self.is_3d { " (3D)" } else { "" };
        format!("{}{} [{}]", self.title, suffix_3d, self.language)
    }

    /// One translated `"<theater>: <showtimes>"` line per theater.
    pub fn schedule_lines(&self, ctx: &Context) -> Vec<String> {
        self.showtimes.iter().map(|raw| raw.schedule_line(ctx)).collect()
    }

    /// Showings of this film on a given day.
    pub fn day_schedule(&self, day: Weekday, ctx: &Context) -> Result<DaySchedule> {
        let showtimes = self
            .showtimes
            .iter()
            .map(|raw| raw.to_theater_showtime(ctx))
            .collect::<Result<Vec<_>>>()?;

        Ok(DaySchedule::build(&showtimes, day, ctx))
    }
}
