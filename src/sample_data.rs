//! Bundled sample transactions shown before any data is loaded.
//!
//! The list runs newest day first, the way the Transactions screen supplies it.
//! Within a day the entries keep screen order rather than time order (the rent
//! payment is listed after the groceries even though it happened first).

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use pocket_domain::{RawTransaction, TransactionRecord};
use pocket_engine::{validate_records, EngineError};

static SAMPLE_RAW: Lazy<Vec<RawTransaction>> = Lazy::new(|| {
    vec![
        RawTransaction::new(1u64, "Starbucks Coffee", "food", Decimal::new(-575, 2), "2025-02-21T09:15:00"),
        RawTransaction::new(2u64, "Salary", "income", Decimal::from(2400), "2025-02-20T09:00:00"),
        RawTransaction::new(3u64, "Whole Foods Market", "groceries", Decimal::new(-8432, 2), "2025-02-20T13:40:00"),
        RawTransaction::new(4u64, "Rent Payment", "housing", Decimal::from(-1200), "2025-02-20T08:00:00"),
        RawTransaction::new(5u64, "Uber Ride", "transport", Decimal::new(-1850, 2), "2025-02-19T22:10:00"),
        RawTransaction::new(6u64, "Electric Bill", "utilities", Decimal::new(-9640, 2), "2025-02-19T10:05:00"),
        RawTransaction::new(7u64, "Gym Membership", "personal", Decimal::from(-45), "2025-02-18T07:30:00"),
        RawTransaction::new(8u64, "Chipotle", "food", Decimal::new(-1325, 2), "2025-02-18T12:45:00"),
        RawTransaction::new(9u64, "Farmers Market", "groceries", Decimal::new(-2780, 2), "2025-02-17T11:20:00"),
    ]
});

/// Number of leading sample records that form the short "recent" list.
pub const RECENT_COUNT: usize = 4;

pub fn sample_raw_transactions() -> Vec<RawTransaction> {
    SAMPLE_RAW.to_vec()
}

/// The full nine-record sample, validated.
pub fn sample_transactions() -> Result<Vec<TransactionRecord>, EngineError> {
    validate_records(sample_raw_transactions())
}

/// The first [`RECENT_COUNT`] sample records, spanning two days.
pub fn recent_transactions() -> Result<Vec<TransactionRecord>, EngineError> {
    validate_records(sample_raw_transactions().into_iter().take(RECENT_COUNT))
}
