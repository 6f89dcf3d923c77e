use std::collections::BTreeMap;

use rust_decimal::Decimal;

use pocket_domain::{CategoryCode, TransactionRecord};

use crate::EngineError;

/// Sums `amount` per category, keyed in category declaration order.
///
/// Only categories present in `records` appear in the map. A sum that leaves
/// the `Decimal` range is reported instead of wrapping or panicking.
pub fn compute_category_totals<'a, I>(
    records: I,
) -> Result<BTreeMap<CategoryCode, Decimal>, EngineError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut totals: BTreeMap<CategoryCode, Decimal> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.category).or_insert(Decimal::ZERO);
        *total = checked_sum(*total, record.amount, || format!("{} total", record.category))?;
    }
    Ok(totals)
}

/// Adds two amounts, naming `context` in the error when the result overflows.
pub(crate) fn checked_sum(
    left: Decimal,
    right: Decimal,
    context: impl FnOnce() -> String,
) -> Result<Decimal, EngineError> {
    left.checked_add(right).ok_or_else(|| {
        let context = context();
        tracing::warn!(%context, "amount overflow");
        EngineError::Overflow { context }
    })
}
