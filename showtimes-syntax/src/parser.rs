use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::rules as rl;
use crate::rules::daily as dl;
use crate::rules::day as ds;
use crate::show_time::ShowTime;
use crate::vocabulary::Vocabulary;

#[cfg(feature = "log")]
static WARN_UNKNOWN_DAY: std::sync::Once = std::sync::Once::new();

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct ShowtimeParser;

/// Parse a translated cell, made of any sequence of daily and specific-day
/// segments.
///
/// ```
/// use showtimes_syntax::{parse_cell, Vocabulary};
///
/// let cell = parse_cell("Th 19:30; Sun 16:00", &Vocabulary::german()).unwrap();
/// assert_eq!(cell.segments.len(), 2);
/// assert!(parse_cell("daily (mit Pause)", &Vocabulary::german()).is_err());
/// ```
pub fn parse_cell(data: &str, vocabulary: &Vocabulary) -> Result<rl::ShowtimeCell> {
    let cell_pair = ShowtimeParser::parse(Rule::input_cell, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no cell found");

    Ok(build_cell(cell_pair, vocabulary))
}

/// Parse a cell starting with a daily segment, the leading "daily" marker is
/// optional.
///
/// ```
/// use showtimes_syntax::rules::Segment;
/// use showtimes_syntax::{parse_daily_cell, Vocabulary};
///
/// let cell = parse_daily_cell("except W 19:10; Sat/Sun also 15:30", &Vocabulary::german()).unwrap();
/// assert!(matches!(cell.segments[0], Segment::Daily(_)));
/// assert!(parse_daily_cell("Sat/Sun 15:30", &Vocabulary::german()).is_err());
/// ```
pub fn parse_daily_cell(data: &str, vocabulary: &Vocabulary) -> Result<rl::ShowtimeCell> {
    let cell_pair = ShowtimeParser::parse(Rule::input_daily_cell, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no daily cell found");

    Ok(build_cell(cell_pair, vocabulary))
}

/// Search a text for an `(except <days>)` clause.
///
/// Anything else is ignored, so that a missing or unreadable clause simply
/// results in `None`.
///
/// ```
/// use showtimes_syntax::{parse_exception, Vocabulary};
///
/// let except = parse_exception("21:30 (except Sat/Tu)", &Vocabulary::german()).unwrap();
/// assert_eq!(except.raw, "Sat/Tu");
/// assert!(parse_exception("21:30 (mit Pause)", &Vocabulary::german()).is_none());
/// ```
pub fn parse_exception(data: &str, vocabulary: &Vocabulary) -> Option<ds::DayList> {
    let exception_pair = ShowtimeParser::parse(Rule::input_exception, data)
        .ok()?
        .find(|pair| pair.as_rule() == Rule::time_exception)?;

    Some(build_time_exception(exception_pair, vocabulary))
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- Cells
// ---

fn build_cell(pair: Pair<Rule>, vocabulary: &Vocabulary) -> rl::ShowtimeCell {
    let parent = pair.as_rule();
    assert!(matches!(parent, Rule::cell | Rule::daily_cell));

    let segments = pair
        .into_inner()
        .map(|pair| match pair.as_rule() {
            Rule::daily_segment => rl::Segment::Daily(build_daily_segment(pair, vocabulary)),
            Rule::except_whole | Rule::daily_times => {
                rl::Segment::Daily(build_daily_body(pair, vocabulary))
            }
            Rule::day_segment => rl::Segment::Days(build_day_segment(pair, vocabulary)),
            other => unexpected_token(other, parent),
        })
        .collect();

    rl::ShowtimeCell { segments }
}

// ---
// --- Daily segments
// ---

fn build_daily_segment(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::DailyPattern {
    assert_eq!(pair.as_rule(), Rule::daily_segment);

    let body = pair
        .into_inner()
        .next()
        .expect("grammar error: empty daily segment");

    build_daily_body(body, vocabulary)
}

fn build_daily_body(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::DailyPattern {
    match pair.as_rule() {
        Rule::except_whole => build_except_whole(pair, vocabulary),
        Rule::daily_times => build_daily_times(pair, vocabulary),
        other => unexpected_token(other, Rule::daily_segment),
    }
}

fn build_except_whole(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::DailyPattern {
    assert_eq!(pair.as_rule(), Rule::except_whole);
    let mut pairs = pair.into_inner();

    let except = build_day_list(pairs.next().expect("missing excepted days"), vocabulary);

    let entries = pairs
        .filter(|pair| pair.as_rule() != Rule::comment)
        .map(|pair| build_timed_entry(pair, vocabulary))
        .collect();

    dl::DailyPattern::ExceptWhole { except, entries }
}

fn build_daily_times(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::DailyPattern {
    assert_eq!(pair.as_rule(), Rule::daily_times);
    let mut entries = Vec::new();
    let mut day_override = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::timed_entry => entries.push(build_timed_entry(pair, vocabulary)),
            Rule::day_override => day_override = Some(build_day_override(pair, vocabulary)),
            Rule::comment => {}
            other => unexpected_token(other, Rule::daily_times),
        }
    }

    if entries.iter().any(|entry| entry.except.is_some()) {
        dl::DailyPattern::ExceptPerTime { entries, day_override }
    } else {
        let times = entries.into_iter().map(|entry| entry.time).collect();
        dl::DailyPattern::Plain { times, day_override }
    }
}

fn build_timed_entry(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::TimeEntry {
    assert_eq!(pair.as_rule(), Rule::timed_entry);
    let mut pairs = pair.into_inner();

    let time = build_time(pairs.next().expect("empty timed entry"));

    let except = match pairs.next() {
        None => None,
        Some(pair) if pair.as_rule() == Rule::comment => None,
        Some(pair) => Some(build_time_exception(pair, vocabulary)),
    };

    dl::TimeEntry { time, except }
}

fn build_time_exception(pair: Pair<Rule>, vocabulary: &Vocabulary) -> ds::DayList {
    assert_eq!(pair.as_rule(), Rule::time_exception);

    build_day_list(
        pair.into_inner().next().expect("empty exception"),
        vocabulary,
    )
}

fn build_day_override(pair: Pair<Rule>, vocabulary: &Vocabulary) -> dl::DayOverride {
    assert_eq!(pair.as_rule(), Rule::day_override);
    let mut pairs = pair.into_inner();

    let days = build_day_list(pairs.next().expect("empty day override"), vocabulary);
    let times = build_time_list(pairs.next().expect("missing override times"));
    dl::DayOverride { days, times }
}

// ---
// --- Specific-day segments
// ---

fn build_day_segment(pair: Pair<Rule>, vocabulary: &Vocabulary) -> rl::DaySegment {
    assert_eq!(pair.as_rule(), Rule::day_segment);
    let mut pairs = pair.into_inner();

    let days = build_day_list(pairs.next().expect("empty day segment"), vocabulary);

    let also = pairs.peek().map(|x| x.as_rule()) == Some(Rule::also_kw);

    if also {
        pairs.next();
    }

    let times = build_time_list(pairs.next().expect("missing segment times"));
    let comment = pairs.next().and_then(build_comment);
    rl::DaySegment { days, also, times, comment }
}

fn build_comment(pair: Pair<Rule>) -> Option<String> {
    assert_eq!(pair.as_rule(), Rule::comment);

    pair.into_inner()
        .next()
        .map(|text| text.as_str().trim().to_string())
        .filter(|text| !text.is_empty())
}

// ---
// --- Days
// ---

fn build_day_list(pair: Pair<Rule>, vocabulary: &Vocabulary) -> ds::DayList {
    assert_eq!(pair.as_rule(), Rule::day_list);
    let raw = pair.as_str().trim().to_string();

    let items = pair
        .into_inner()
        .map(|pair| match pair.as_rule() {
            Rule::day => ds::DayItem::Single(build_day(pair, vocabulary)),
            Rule::day_range => {
                let mut pairs = pair.into_inner();
                let start = build_day(pairs.next().expect("empty day range"), vocabulary);
                let end = build_day(pairs.next().expect("missing range end"), vocabulary);
                ds::DayItem::Range { start, end }
            }
            other => unexpected_token(other, Rule::day_list),
        })
        .collect();

    ds::DayList { raw, items }
}

fn build_day(pair: Pair<Rule>, vocabulary: &Vocabulary) -> ds::DayToken {
    assert_eq!(pair.as_rule(), Rule::day);
    let raw = pair.as_str();

    let day = vocabulary.parse_day(raw);

    if day.is_none() {
        #[cfg(feature = "log")]
        WARN_UNKNOWN_DAY.call_once(|| {
            log::warn!("Found unknown day `{raw}` in showtimes, further unknown days are not reported")
        });
    }

    ds::DayToken { raw: raw.to_string(), day }
}

// ---
// --- Times
// ---

fn build_time_list(pair: Pair<Rule>) -> Vec<ShowTime> {
    assert_eq!(pair.as_rule(), Rule::time_list);
    pair.into_inner().map(build_time).collect()
}

fn build_time(pair: Pair<Rule>) -> ShowTime {
    assert_eq!(pair.as_rule(), Rule::time);
    let mut pairs = pair.into_inner();

    let hour_str = pairs.next().expect("missing hour").as_str();
    let hour = hour_str.parse().expect("invalid hour format");

    let minute = pairs
        .next()
        .expect("missing minutes")
        .as_str()
        .parse()
        .expect("invalid minutes format");

    ShowTime::new(hour, minute).with_short_hour(hour_str.len() == 1)
}
