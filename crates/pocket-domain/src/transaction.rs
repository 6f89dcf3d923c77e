use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::CategoryCode;
use crate::error::ValidationError;

/// Wall-clock formats accepted in addition to RFC 3339.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Caller-supplied identifier, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(value) => write!(f, "{value}"),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

/// One financial event with category, signed amount, and timestamp.
///
/// Positive amounts are income/credits, negative amounts are expenses/debits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: RecordId,
    pub title: String,
    pub category: CategoryCode,
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        category: CategoryCode,
        amount: Decimal,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            amount,
            timestamp,
        }
    }

    /// Strictly positive amounts count as income; zero does not.
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Calendar date of the record, ignoring time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Unvalidated transaction as it arrives from a static source or a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawTransaction {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub amount: Decimal,
    pub timestamp: String,
}

impl RawTransaction {
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        category: impl Into<String>,
        amount: Decimal,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            amount,
            timestamp: timestamp.into(),
        }
    }
}

impl TryFrom<RawTransaction> for TransactionRecord {
    type Error = ValidationError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let category = raw.category.parse::<CategoryCode>()?;
        let timestamp = parse_timestamp(&raw.timestamp)?;
        Ok(Self {
            id: raw.id,
            title: raw.title,
            category,
            amount: raw.amount,
            timestamp,
        })
    }
}

/// Parses a record timestamp into wall-clock time.
///
/// RFC 3339 offsets are dropped: a collection shares a single time zone, so the
/// local wall-clock reading is what determines month and day keys.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ValidationError::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn at(value: &str) -> NaiveDateTime {
        parse_timestamp(value).expect("valid timestamp")
    }

    fn record(amount: Decimal) -> TransactionRecord {
        TransactionRecord::new(
            1u64,
            "Boundary",
            CategoryCode::Personal,
            amount,
            at("2025-02-20 12:00"),
        )
    }

    #[test]
    fn zero_amount_is_not_income() {
        assert!(!record(Decimal::ZERO).is_income());
        assert!(record(Decimal::new(1, 2)).is_income());
        assert!(!record(Decimal::new(-1, 2)).is_income());
    }

    #[test]
    fn rfc3339_keeps_wall_clock_time() {
        let parsed = at("2025-02-21T23:30:00-05:00");
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 2, 21).unwrap());
        assert_eq!(parsed.hour(), 23);
    }

    #[test]
    fn naive_formats_are_accepted() {
        for value in [
            "2025-02-20T08:00:00",
            "2025-02-20 08:00:00",
            "2025-02-20T08:00",
            "2025-02-20 08:00",
        ] {
            assert_eq!(at(value).hour(), 8, "format `{value}`");
        }
    }

    #[test]
    fn unparseable_timestamp_is_rejected() {
        let err = parse_timestamp("yesterday-ish").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTimestamp {
                value: "yesterday-ish".into()
            }
        );
        assert!(parse_timestamp("2025-02-30 10:00").is_err());
    }

    #[test]
    fn raw_conversion_validates_category_then_timestamp() {
        let raw = RawTransaction::new(7u64, "Bus", "transit", Decimal::new(-250, 2), "bogus");
        let err = TransactionRecord::try_from(raw).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory(_)));

        let raw = RawTransaction::new("tx-1", "Bus", "transport", Decimal::new(-250, 2), "2025-02-19 07:45");
        let record = TransactionRecord::try_from(raw).unwrap();
        assert_eq!(record.id, RecordId::Text("tx-1".into()));
        assert_eq!(record.category, CategoryCode::Transport);
    }

    #[test]
    fn raw_transactions_deserialize_numeric_and_text_ids() {
        let json = r#"[
            {"id": 3, "title": "Salary", "category": "income", "amount": 2400, "timestamp": "2025-02-20T09:00:00"},
            {"id": "b-2", "title": "Lunch", "category": "food", "amount": "-12.40", "timestamp": "2025-02-20 12:30"}
        ]"#;
        let raws: Vec<RawTransaction> = serde_json::from_str(json).unwrap();
        assert_eq!(raws[0].id, RecordId::Number(3));
        assert_eq!(raws[0].amount, Decimal::from(2400));
        assert_eq!(raws[1].id, RecordId::Text("b-2".into()));
        assert_eq!(raws[1].amount, Decimal::new(-1240, 2));
    }
}
