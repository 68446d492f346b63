use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scorecard_core::filter::{filter_records, ScoreQuery};
use scorecard_core::{ScoreRecord, Scorecard, View};

const MODULES: [&str; 4] = ["Onboarding", "Safety Basics", "Safety Advanced", "Leadership"];

fn make_records(n: usize) -> Vec<ScoreRecord> {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            ScoreRecord::new(
                format!("user{i}@example.com"),
                MODULES[i % MODULES.len()],
                (i % 10) as f64,
                ((i % 10) * 10) as f64,
                created,
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = make_records(10_000);
    let query = ScoreQuery::new("USER1", "safety");

    c.bench_function("filter_10k_both_needles", |b| {
        b.iter(|| filter_records(black_box(&records), black_box(&query)))
    });

    let empty = ScoreQuery::default();
    c.bench_function("filter_10k_empty_query", |b| {
        b.iter(|| filter_records(black_box(&records), black_box(&empty)))
    });
}

fn bench_search_and_page(c: &mut Criterion) {
    let mut card = Scorecard::new();
    card.finish_load(Ok(make_records(10_000)));

    c.bench_function("search_then_last_page", |b| {
        b.iter(|| {
            card.set_module_query("safety");
            card.search();
            let last = card.total_pages();
            card.go_to_page(last);
            match card.view() {
                View::Ready(page) => black_box(page.rows.len()),
                _ => 0,
            }
        })
    });
}

criterion_group!(benches, bench_filter, bench_search_and_page);
criterion_main!(benches);
