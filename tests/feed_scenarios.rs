use pocket_core::{
    domain::{CategoryCode, CategoryFilter, FeedOrder},
    engine::{
        build_feed, compute_category_totals, filter_by_category, group_by_month_and_day,
        summarize_flow, TransactionFeed,
    },
    sample_data::{recent_transactions, sample_raw_transactions, sample_transactions},
};
use rust_decimal::Decimal;

fn categories(records: &[pocket_core::domain::TransactionRecord]) -> Vec<CategoryCode> {
    records.iter().map(|r| r.category).collect()
}

#[test]
fn recent_sample_groups_into_one_month_and_two_days() {
    let records = recent_transactions().unwrap();
    let grouped = group_by_month_and_day(filter_by_category(&records, CategoryFilter::All));

    assert_eq!(grouped.month_keys(), ["February 2025"]);
    let month = &grouped.months[0];
    assert_eq!(month.days.len(), 2);

    assert_eq!(month.days[0].key, "Friday, February 21");
    assert_eq!(categories(&month.days[0].records), [CategoryCode::Food]);

    assert_eq!(month.days[1].key, "Thursday, February 20");
    assert_eq!(
        categories(&month.days[1].records),
        [
            CategoryCode::Income,
            CategoryCode::Groceries,
            CategoryCode::Housing
        ]
    );
}

#[test]
fn income_filter_selects_the_salary_alone() {
    let records = recent_transactions().unwrap();
    let grouped = group_by_month_and_day(filter_by_category(
        &records,
        CategoryFilter::Only(CategoryCode::Income),
    ));

    assert_eq!(grouped.months.len(), 1);
    assert_eq!(grouped.day_count(), 1);
    let salary: Vec<_> = grouped.records().collect();
    assert_eq!(salary.len(), 1);
    assert_eq!(salary[0].title, "Salary");
    assert_eq!(salary[0].amount, Decimal::from(2400));
}

#[test]
fn unmatched_filter_yields_empty_grouping() {
    let records = recent_transactions().unwrap();
    let grouped = group_by_month_and_day(filter_by_category(
        &records,
        CategoryFilter::Only(CategoryCode::Transport),
    ));
    assert!(grouped.is_empty());
    assert_eq!(grouped.record_count(), 0);
}

#[test]
fn full_sample_spans_five_days_and_nine_records() {
    let records = sample_transactions().unwrap();
    assert_eq!(records.len(), 9);

    let grouped = build_feed(&records, CategoryFilter::All, FeedOrder::AsSupplied);
    assert_eq!(grouped.months.len(), 1);
    assert_eq!(grouped.day_count(), 5);
    let per_day: usize = grouped.months[0].days.iter().map(|d| d.records.len()).sum();
    assert_eq!(per_day, 9);
}

#[test]
fn shared_day_keeps_supplied_order_over_time_of_day() {
    let records = recent_transactions().unwrap();
    let grouped = group_by_month_and_day(&records);
    let titles: Vec<_> = grouped.months[0].days[1]
        .records
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    // The rent payment happened first that morning but is listed last.
    assert_eq!(titles, ["Salary", "Whole Foods Market", "Rent Payment"]);

    let sorted = build_feed(&records, CategoryFilter::All, FeedOrder::OldestFirst);
    let day = &sorted.months[0].days[0];
    assert_eq!(day.key, "Thursday, February 20");
    assert_eq!(day.records[0].title, "Rent Payment");
}

#[test]
fn sample_totals_balance() {
    let records = sample_transactions().unwrap();
    let totals = compute_category_totals(&records).unwrap();
    assert_eq!(totals[&CategoryCode::Food], Decimal::new(-1900, 2));
    assert_eq!(totals[&CategoryCode::Groceries], Decimal::new(-11212, 2));

    let flow = summarize_flow(&records).unwrap();
    assert_eq!(flow.income, Decimal::from(2400));
    assert_eq!(flow.expenses, Decimal::new(-149102, 2));
    assert_eq!(flow.net, Decimal::new(90898, 2));
}

#[test]
fn feed_from_raw_sample_matches_validated_sample() {
    let feed = TransactionFeed::from_raw(sample_raw_transactions()).unwrap();
    assert_eq!(feed.records(), sample_transactions().unwrap().as_slice());
    assert_eq!(feed.grouped(CategoryFilter::All).record_count(), 9);
}
