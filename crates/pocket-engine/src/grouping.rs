//! Month and day grouping for transaction feeds.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use pocket_domain::TransactionRecord;

const MONTH_KEY_FORMAT: &str = "%B %Y";
const DAY_KEY_FORMAT: &str = "%A, %B %-d";

/// Month heading such as `February 2025`.
pub fn month_key(timestamp: NaiveDateTime) -> String {
    timestamp.format(MONTH_KEY_FORMAT).to_string()
}

/// Day heading such as `Friday, February 21`.
pub fn day_key(timestamp: NaiveDateTime) -> String {
    timestamp.format(DAY_KEY_FORMAT).to_string()
}

/// Records that share one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayGroup {
    pub key: String,
    pub date: NaiveDate,
    pub records: Vec<TransactionRecord>,
}

/// Day groups that share one calendar month, in first-seen order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthGroup {
    pub key: String,
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayGroup>,
}

impl MonthGroup {
    pub fn day(&self, key: &str) -> Option<&DayGroup> {
        self.days.iter().find(|day| day.key == key)
    }

    pub fn record_count(&self) -> usize {
        self.days.iter().map(|day| day.records.len()).sum()
    }
}

/// Ordered month → day → records structure consumed by the display layer.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GroupedResult {
    pub months: Vec<MonthGroup>,
}

impl GroupedResult {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn month(&self, key: &str) -> Option<&MonthGroup> {
        self.months.iter().find(|month| month.key == key)
    }

    pub fn month_keys(&self) -> Vec<&str> {
        self.months.iter().map(|month| month.key.as_str()).collect()
    }

    pub fn day_count(&self) -> usize {
        self.months.iter().map(|month| month.days.len()).sum()
    }

    pub fn record_count(&self) -> usize {
        self.months.iter().map(MonthGroup::record_count).sum()
    }

    /// Iterates every record in rendering order.
    pub fn records(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.months
            .iter()
            .flat_map(|month| month.days.iter())
            .flat_map(|day| day.records.iter())
    }
}

/// Groups records by calendar month, then by calendar day.
///
/// Records are visited in the order supplied and never re-sorted. A month or
/// day entry is created where it is first seen; later records for the same
/// month or day are appended to that entry even when they are not adjacent in
/// the input.
pub fn group_by_month_and_day<'a, I>(records: I) -> GroupedResult
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut result = GroupedResult::default();

    for record in records {
        let date = record.date();
        let month_index = match result
            .months
            .iter()
            .position(|month| month.year == date.year() && month.month == date.month())
        {
            Some(index) => index,
            None => {
                result.months.push(MonthGroup {
                    key: month_key(record.timestamp),
                    year: date.year(),
                    month: date.month(),
                    days: Vec::new(),
                });
                result.months.len() - 1
            }
        };
        let month = &mut result.months[month_index];

        let day_index = match month.days.iter().position(|day| day.date == date) {
            Some(index) => index,
            None => {
                month.days.push(DayGroup {
                    key: day_key(record.timestamp),
                    date,
                    records: Vec::new(),
                });
                month.days.len() - 1
            }
        };
        month.days[day_index].records.push(record.clone());
    }

    tracing::debug!(
        months = result.months.len(),
        days = result.day_count(),
        records = result.record_count(),
        "grouped transactions by month and day"
    );
    result
}
