//! Text reports of the listings, one block per film.
//!
//! ```
//! use chrono::Weekday;
//! use showtimes::{Context, Film, Language, RawShowtime, Report};
//!
//! let films = [
//!     Film::new("Paterson", Language::OriginalSubtitled, vec![
//!         RawShowtime::new("Rio", "Mo. 20:00"),
//!         RawShowtime::new("Theatiner", "tgl. 18:00"),
//!     ]),
//!     Film::new("Toni Erdmann", Language::German, vec![RawShowtime::new("Rio", "tgl. 17:00")]),
//! ];
//!
//! let report = Report::new(Context::default());
//! let blocks = report.for_day(&films, Weekday::Mon);
//!
//! assert_eq!(
//!     showtimes::report::render(&blocks),
//!     "Paterson [OmU]:\n\tRio: 20:00\n\tTheatiner: 18:00\n\n",
//! );
//! ```

use std::fmt::Display;

use chrono::Weekday;

use crate::listing::Film;
use crate::Context;

/// Lines listed under a film title.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FilmBlock {
    pub title: String,
    pub lines: Vec<String>,
}

impl Display for FilmBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.lines.is_empty() {
            writeln!(f, "{}:", self.title)?;
        }

        for line in &self.lines {
            writeln!(f, "\t{line}")?;
        }

        writeln!(f)
    }
}

/// Concatenate the blocks of a report.
pub fn render(blocks: &[FilmBlock]) -> String {
    blocks.iter().map(FilmBlock::to_string).collect()
}

/// Selects the films of a report and formats their showtimes.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Report {
    ctx: Context,
    include_german: bool,
}

impl Report {
    pub fn new(ctx: Context) -> Self {
        Self { ctx, include_german: false }
    }

    /// Also report films which are not in their original version.
    pub fn include_german(self, include_german: bool) -> Self {
        Self { include_german, ..self }
    }

    fn selected<'a>(&'a self, films: &'a [Film]) -> impl Iterator<Item = &'a Film> + 'a {
        films
            .iter()
            .filter(|film| self.include_german || film.language.is_original())
    }

    /// Translated showtimes of the films for the whole week.
    pub fn all_days(&self, films: &[Film]) -> Vec<FilmBlock> {
        self.selected(films)
            .map(|film| FilmBlock {
                title: film.display_title(),
                lines: film.schedule_lines(&self.ctx),
            })
            .collect()
    }

    /// Showtimes of the films on a given day. Films which are not shown on
    /// this day are omitted, so are films with showtimes that can't be read.
    pub fn for_day(&self, films: &[Film], day: Weekday) -> Vec<FilmBlock> {
        self.selected(films)
            .filter_map(|film| {
                let schedule = match film.day_schedule(day, &self.ctx) {
                    Ok(schedule) => schedule,
                    Err(_err) => {
                        #[cfg(feature = "log")]
                        log::warn!("Skipping showtimes of {}: {_err}", film.display_title());
                        return None;
                    }
                };

                if schedule.is_empty() {
                    #[cfg(feature = "log")]
                    log::debug!("No showing of {} on {day}", film.display_title());
                    return None;
                }

                Some(FilmBlock { title: film.display_title(), lines: schedule.lines() })
            })
            .collect()
    }
}
