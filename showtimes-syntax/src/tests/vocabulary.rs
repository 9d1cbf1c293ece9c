use chrono::Weekday;

use crate::vocabulary::WEEK;
use crate::{Error, Vocabulary};

#[test]
fn german_is_a_bijection() {
    let vocabulary = Vocabulary::german();

    for day in WEEK {
        assert_eq!(vocabulary.parse_day(vocabulary.code(day)), Some(day));
        assert_eq!(vocabulary.parse_day(vocabulary.source(day)), Some(day));
    }

    assert_eq!(vocabulary.days().count(), 7);
}

#[test]
fn week_starts_on_sunday() {
    let vocabulary = Vocabulary::german();
    let codes: Vec<_> = vocabulary.days().map(|name| name.code.as_str()).collect();
    assert_eq!(codes, ["Sun", "M", "Tu", "W", "Th", "F", "Sat"]);
}

#[test]
fn parse_day_is_exact() {
    let vocabulary = Vocabulary::german();
    assert_eq!(vocabulary.parse_day("Sa"), None);
    assert_eq!(vocabulary.parse_day("Mathäser"), None);
    assert_eq!(vocabulary.parse_day("Fr"), None);
}

#[test]
fn custom_vocabulary_is_sorted() -> Result<(), Error> {
    let english = Vocabulary::new(
        [
            (Weekday::Mon, "Mon.", "M"),
            (Weekday::Tue, "Tue.", "Tu"),
            (Weekday::Wed, "Wed.", "W"),
            (Weekday::Thu, "Thu.", "Th"),
            (Weekday::Fri, "Fri.", "F"),
            (Weekday::Sat, "Sat.", "Sat"),
            (Weekday::Sun, "Sun.", "Sun"),
        ],
        "every day",
        "but",
        "and",
    )?;

    assert_eq!(english.days().next().map(|name| name.day), Some(Weekday::Sun));
    assert_eq!(english.parse_day("Sun."), Some(Weekday::Sun));
    assert_eq!(english.daily(), "every day");
    Ok(())
}

#[test]
fn invalid_vocabularies() {
    let mut days: Vec<_> = WEEK
        .iter()
        .map(|&day| (day, format!("{day}."), format!("{day}")))
        .collect();

    assert!(Vocabulary::new(days.clone(), "d", "e", "a").is_ok());

    // missing day
    assert!(Vocabulary::new(days[1..].to_vec(), "d", "e", "a").is_err());

    // named twice
    let mut twice = days.clone();
    twice[1].0 = Weekday::Sun;
    assert!(Vocabulary::new(twice, "d", "e", "a").is_err());

    // shared code
    let mut shared = days.clone();
    shared[1].2 = shared[0].2.clone();
    assert!(Vocabulary::new(shared, "d", "e", "a").is_err());

    // overlapping abbreviations
    days[1].1 = "S".to_string();
    assert!(Vocabulary::new(days, "d", "e", "a").is_err());
}
