use chrono::Weekday;

use crate::tests::WEEK;
use crate::{times_for_one_day, Context, DaySchedule, Error, TheaterShowtime};

fn week_schedule(entries: &[&str]) -> Result<Vec<Vec<String>>, Error> {
    let ctx = Context::default();

    WEEK.into_iter()
        .map(|day| times_for_one_day(entries, day, &ctx))
        .collect()
}

fn lines<const N: usize>(lines: [&str; N]) -> Vec<String> {
    lines.into_iter().map(str::to_string).collect()
}

#[test]
fn single_day() -> Result<(), Error> {
    let mut expected = vec![Vec::new(); 7];
    expected[1] = lines(["Werkstattkino: 20:00"]);
    assert_eq!(week_schedule(&["Werkstattkino: M 20:00"])?, expected);
    Ok(())
}

#[test]
fn weekend() -> Result<(), Error> {
    let mut expected = vec![Vec::new(); 7];
    expected[0] = lines(["Werkstattkino: 20:00"]);
    expected[6] = lines(["Werkstattkino: 20:00"]);
    assert_eq!(week_schedule(&["Werkstattkino: Sat/Sun 20:00"])?, expected);
    Ok(())
}

#[test]
fn theater_order_is_kept() -> Result<(), Error> {
    let entries = ["Mathäser: Sun 11:00 (mit Pause)", "Cinemaxx: Th 19:30; Sun 16:00"];
    let mut expected = vec![Vec::new(); 7];
    expected[0] = lines(["Mathäser: 11:00", "Cinemaxx: 16:00"]);
    expected[4] = lines(["Cinemaxx: 19:30"]);
    assert_eq!(week_schedule(&entries)?, expected);
    Ok(())
}

#[test]
fn commentary_is_dropped() -> Result<(), Error> {
    let entries =
        ["Filmmuseum München: Sun 21:00; W 18:30 (+Vorfilm »Drei Minuten in einem Film von Ozu«)"];

    let mut expected = vec![Vec::new(); 7];
    expected[0] = lines(["Filmmuseum München: 21:00"]);
    expected[3] = lines(["Filmmuseum München: 18:30"]);
    assert_eq!(week_schedule(&entries)?, expected);
    Ok(())
}

#[test]
fn daily_entry() -> Result<(), Error> {
    let line = lines(["Museum Lichtspiele: 22:55"]);
    let mut expected = vec![line; 7];
    expected[2] = Vec::new();
    assert_eq!(week_schedule(&["Museum Lichtspiele: daily except Tu 22:55"])?, expected);
    Ok(())
}

#[test]
fn mixed_theaters() -> Result<(), Error> {
    let entries = [
        "Cinema: Th 22:05; Sat 12:35",
        "Mathäser: Th/M/W 16:45",
        "Museum Lichtspiele: daily 16:40, 19:50, 22:50",
    ];

    let daily = "Museum Lichtspiele: 16:40, 19:50, 22:50";

    assert_eq!(
        week_schedule(&entries)?,
        [
            lines([daily]),
            lines(["Mathäser: 16:45", daily]),
            lines([daily]),
            lines(["Mathäser: 16:45", daily]),
            lines(["Cinema: 22:05", "Mathäser: 16:45", daily]),
            lines([daily]),
            lines(["Cinema: 12:35", daily]),
        ],
    );

    Ok(())
}

#[test]
fn segments_of_a_theater_are_not_merged() -> Result<(), Error> {
    let entries = [
        "Cinema: Th/Sun 15:30, 18:45; Fr. 16:15, 19:30, 22:45; Sat 9:45, 15:45, 21:45; \
         Sun also 22:00; M 18:30, 21:45; Tu 16:00, 19:00, 22:15; W 19:15, 22:30",
        "Gloria: Sun 21:00",
        "Mathäser: Th/Sun/Tu/W 20:00; Fr./Sat 23:00; W also 22:45",
    ];

    assert_eq!(
        week_schedule(&entries)?,
        [
            lines([
                "Cinema: 15:30, 18:45",
                "Cinema: 22:00",
                "Gloria: 21:00",
                "Mathäser: 20:00",
            ]),
            lines(["Cinema: 18:30, 21:45"]),
            lines(["Cinema: 16:00, 19:00, 22:15", "Mathäser: 20:00"]),
            lines(["Cinema: 19:15, 22:30", "Mathäser: 20:00", "Mathäser: 22:45"]),
            lines(["Cinema: 15:30, 18:45", "Mathäser: 20:00"]),
            lines(["Cinema: 16:15, 19:30, 22:45", "Mathäser: 23:00"]),
            lines(["Cinema: 9:45, 15:45, 21:45", "Mathäser: 23:00"]),
        ],
    );

    Ok(())
}

#[test]
fn missing_separator() {
    let ctx = Context::default();

    assert!(matches!(
        times_for_one_day(&["Werkstattkino M 20:00"], Weekday::Mon, &ctx),
        Err(Error::MissingSeparator(_)),
    ));

    assert!(matches!(
        times_for_one_day(&[": M 20:00"], Weekday::Mon, &ctx),
        Err(Error::MissingSeparator(_)),
    ));
}

#[test]
fn theater_with_colon_in_name() -> Result<(), Error> {
    let ctx = Context::default();
    let showtime = TheaterShowtime::parse("Cinema 8: M 20:00", &ctx)?;
    assert_eq!(&*showtime.theater, "Cinema 8");

    // Times are never taken for the separator
    let showtime = TheaterShowtime::parse("Rio 20:00: M 20:00", &ctx)?;
    assert_eq!(&*showtime.theater, "Rio 20:00");
    Ok(())
}

#[test]
fn entry_display() -> Result<(), Error> {
    let showtime: TheaterShowtime = "Rio: Sat 9:45 (Preview)".parse()?;
    assert_eq!(showtime.to_string(), "Rio: Sat 9:45 (Preview)");

    let schedule = DaySchedule::build([&showtime], Weekday::Sat, &Context::default());
    assert_eq!(schedule.lines(), ["Rio: 9:45"]);
    Ok(())
}

#[test]
fn times_are_kept_as_written() -> Result<(), Error> {
    let entries = ["Cinema: Sat 9:45, 15:45, 21:45", "Rio: Sat/Sun 09:30"];

    assert_eq!(
        times_for_one_day(&entries, Weekday::Sat, &Context::default())?,
        ["Cinema: 9:45, 15:45, 21:45", "Rio: 09:30"],
    );

    Ok(())
}
