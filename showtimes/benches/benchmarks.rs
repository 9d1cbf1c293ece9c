use chrono::Weekday;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use showtimes::filter::time_filter::TimeFilter;
use showtimes::{times_for_one_day, Context};
use showtimes_syntax::translate::translate_times_simple;
use showtimes_syntax::{parse_cell, parse_daily_cell, Vocabulary};

const RAW_CELL: &str = "tgl. außer Mi. 17:20; So. auch 12:10\n    \n     (\n      Kritik\n     )";
const DAILY: &str = "daily 15:30, 17:20 (except Tu/Th), 21:45 (except Sat/Sun)";
const ENTRIES: [&str; 3] = [
    "Mathäser: Sun 11:00 (mit Pause)",
    "Cinemaxx: Th 19:30; Sun 16:00",
    "Rio: daily 16:30, 18:45 (Sun 18:00, 20:15)",
];

fn criterion_benches(c: &mut Criterion) {
    let vocabulary = Vocabulary::german();
    let ctx = Context::default();

    c.bench_function("translate cell", |b| {
        b.iter(|| translate_times_simple(&vocabulary, black_box(RAW_CELL)))
    });

    c.bench_function("parse daily", |b| {
        b.iter(|| parse_daily_cell(black_box(DAILY), &vocabulary).unwrap())
    });

    c.bench_function("parse entries", |b| {
        b.iter(|| {
            for entry in ENTRIES {
                let (_, cell) = entry.split_once(": ").unwrap();
                parse_cell(black_box(cell), &vocabulary).unwrap();
            }
        })
    });

    let daily = parse_daily_cell(DAILY, &vocabulary).unwrap();

    c.bench_function("times_on daily", |b| {
        b.iter(|| black_box(&daily).times_on(black_box(Weekday::Sat), &ctx))
    });

    c.bench_function("times_for_one_day", |b| {
        b.iter(|| times_for_one_day(black_box(&ENTRIES), Weekday::Sun, &ctx).unwrap())
    });
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
