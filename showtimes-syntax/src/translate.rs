//! Rewriting of raw listing cells into the english notation.

use crate::vocabulary::{Vocabulary, ALSO, DAILY, EXCEPT};

/// Replace every source weekday abbreviation with its english code, other
/// text is left untouched.
///
/// ```
/// use showtimes_syntax::Vocabulary;
/// use showtimes_syntax::translate::translate_days;
///
/// let vocabulary = Vocabulary::german();
/// assert_eq!(translate_days(&vocabulary, "Fr./Mo./Mi. 21:00"), "F/M/W 21:00");
/// assert_eq!(translate_days(&vocabulary, ""), "");
/// ```
pub fn translate_days(vocabulary: &Vocabulary, text: &str) -> String {
    vocabulary
        .days()
        .fold(text.to_string(), |text, name| text.replace(&name.source, &name.code))
}

/// Clean a raw cell into a single english line: only the first line is kept,
/// keywords and days are translated.
///
/// ```
/// use showtimes_syntax::Vocabulary;
/// use showtimes_syntax::translate::translate_times_simple;
///
/// let vocabulary = Vocabulary::german();
///
/// assert_eq!(
///     translate_times_simple(&vocabulary, "tgl. außer Mi. 17:20; So. auch 12:10"),
///     "daily except W 17:20; Sun also 12:10",
/// );
///
/// assert_eq!(
///     translate_times_simple(&vocabulary, "tgl. außer Di. 22:55\n    \n     (\n      Kritik\n     )"),
///     "daily except Tu 22:55",
/// );
/// ```
pub fn translate_times_simple(vocabulary: &Vocabulary, raw: &str) -> String {
    let raw = raw.replace('\u{a0}', " ");
    let first_line = raw.trim_start().lines().next().unwrap_or_default().trim();

    // Some cells have their commentary opening on the first line only
    let first_line = first_line.strip_suffix('(').unwrap_or(first_line).trim();

    let english = first_line
        .replace(vocabulary.daily(), DAILY)
        .replace(vocabulary.except(), EXCEPT)
        .replace(vocabulary.also(), ALSO);

    translate_days(vocabulary, &english)
}
