use chrono::Weekday;

use crate::{Context, Error, Film, Language, RawShowtime};

#[test]
fn classify_language() {
    assert_eq!(Language::classify("Arrival (OF)"), Language::Original);
    assert_eq!(Language::classify("Paterson (OmU)"), Language::OriginalSubtitled);
    assert_eq!(Language::classify("Le amiche (OmeU)"), Language::OriginalEnglishSubtitles);
    assert_eq!(Language::classify("Toni Erdmann"), Language::German);
    assert_eq!(Language::classify("OF without parenthesis"), Language::German);
    assert!(!Language::German.is_original());
    assert!(Language::OriginalEnglishSubtitles.is_original());
}

#[test]
fn film_from_title_text() {
    let film = Film::from_title_text("\n\n      Paterson\n     \n     (OmU)\n    ", Vec::new())
        .expect("missing title");

    assert_eq!(film.title, "Paterson");
    assert_eq!(film.language, Language::OriginalSubtitled);
    assert!(!film.is_3d);
    assert_eq!(film.display_title(), "Paterson [OmU]");

    // Lines of a single character are never a title
    let film = Film::from_title_text("\n X \n Toni Erdmann \n", Vec::new()).expect("missing title");
    assert_eq!(film.title, "Toni Erdmann");
    assert_eq!(film.display_title(), "Toni Erdmann [German]");
}

#[test]
fn film_in_3d() {
    let film = Film::from_title_text(
        "Captain America: Civil War (The First Avenger: Civil War)\n3D\n(OF)",
        Vec::new(),
    )
    .expect("missing title");

    assert_eq!(
        film.display_title(),
        "Captain America: Civil War (The First Avenger: Civil War) (3D) [OF]",
    );
}

#[test]
fn schedule_lines_are_translated() {
    let film = Film::new(
        "Batman v Superman: Dawn of Justice",
        Language::Original,
        vec![
            RawShowtime::new("Museum Lichtspiele", "tgl.\u{a0}außer Di. 22:55\n   (\n   Kritik\n   )"),
            RawShowtime::new("Cinema", "Do./So. 15:30; So. auch 22:00"),
        ],
    );

    assert_eq!(
        film.schedule_lines(&Context::default()),
        [
            "Museum Lichtspiele: daily except Tu 22:55",
            "Cinema: Th/Sun 15:30; Sun also 22:00",
        ],
    );
}

#[test]
fn film_day_schedule() -> Result<(), Error> {
    let ctx = Context::default();

    let film = Film::new(
        "Banshun",
        Language::OriginalEnglishSubtitles,
        vec![RawShowtime::new("Filmmuseum München", "So. 21:00; Mi. 18:30 (+Vorfilm)")],
    );

    assert_eq!(film.day_schedule(Weekday::Wed, &ctx)?.lines(), ["Filmmuseum München: 18:30"]);
    assert!(film.day_schedule(Weekday::Thu, &ctx)?.is_empty());

    let broken = Film::new("Broken", Language::Original, vec![RawShowtime::new("Rio", "Termine folgen")]);
    assert!(broken.day_schedule(Weekday::Thu, &ctx).is_err());
    Ok(())
}
