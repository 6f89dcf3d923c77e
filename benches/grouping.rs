use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_core::domain::{CategoryCode, CategoryFilter, FeedOrder, TransactionRecord};
use pocket_core::engine::{build_feed, compute_category_totals, group_by_month_and_day};
use rust_decimal::Decimal;

fn build_records(count: u64) -> Vec<TransactionRecord> {
    let newest = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    (0..count)
        .map(|idx| {
            let category = CategoryCode::ALL[(idx % CategoryCode::ALL.len() as u64) as usize];
            let amount = if category == CategoryCode::Income {
                Decimal::from(1500)
            } else {
                Decimal::new(-(((idx % 200) as i64) * 37 + 100), 2)
            };
            TransactionRecord::new(
                idx,
                format!("Merchant {}", idx % 250),
                category,
                amount,
                newest - Duration::minutes((idx * 53) as i64),
            )
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let records = build_records(black_box(10_000));

    c.bench_function("group_all_10k", |b| {
        b.iter(|| black_box(group_by_month_and_day(&records)))
    });

    c.bench_function("feed_food_newest_first_10k", |b| {
        b.iter(|| {
            black_box(build_feed(
                &records,
                CategoryFilter::Only(CategoryCode::Food),
                FeedOrder::NewestFirst,
            ))
        })
    });

    c.bench_function("category_totals_10k", |b| {
        b.iter(|| black_box(compute_category_totals(&records)))
    });
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
