use std::env;

use showtimes::{Context, DaySchedule, TheaterShowtime, WEEK};
use showtimes_syntax::translate::translate_times_simple;

const THEATER: &str = "Cinema";

fn main() {
    let raw = env::args().nth(1).expect("Usage: ./schedule <SHOWTIMES>");
    let ctx = Context::default();
    let translated = translate_times_simple(&ctx.vocabulary, &raw);

    let cell = match showtimes_syntax::parse_cell(&translated, &ctx.vocabulary) {
        Ok(val) => val,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    println!(" - showtimes: {raw:?}");
    println!(" - translated: {translated:?}");
    println!(" - canonical: {cell}");

    let showtime = TheaterShowtime::new(THEATER, cell);

    for day in WEEK {
        let schedule = DaySchedule::build([&showtime], day, &ctx);

        println!("---");
        println!("{day}:");

        if schedule.is_empty() {
            println!(" (empty)");
        }

        for entry in &schedule.entries {
            println!(" - {entry}");
        }
    }
}
