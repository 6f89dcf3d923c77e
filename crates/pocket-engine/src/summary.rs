//! Income/expense summaries backing the dashboard-style displays.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use pocket_domain::{CategoryCode, TransactionRecord};

use crate::totals::{checked_sum, compute_category_totals};
use crate::EngineError;

/// Income and spending split of a record set.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FlowSummary {
    pub income: Decimal,
    /// Sum of non-income records; zero or negative.
    pub expenses: Decimal,
    pub net: Decimal,
    pub count: usize,
}

/// One category's spending and its share of total spending.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: CategoryCode,
    pub total: Decimal,
    pub percent: i64,
}

pub fn summarize_flow<'a, I>(records: I) -> Result<FlowSummary, EngineError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut summary = FlowSummary::default();
    for record in records {
        if record.is_income() {
            summary.income = checked_sum(summary.income, record.amount, || "income".into())?;
        } else {
            summary.expenses =
                checked_sum(summary.expenses, record.amount, || "expenses".into())?;
        }
        summary.count += 1;
    }
    summary.net = checked_sum(summary.income, summary.expenses, || "net flow".into())?;
    Ok(summary)
}

/// Spending per category as a whole-number percent of all spending.
///
/// Income records are excluded. Shares are sorted by descending magnitude;
/// ties keep category declaration order.
pub fn category_shares<'a, I>(records: I) -> Result<Vec<CategoryShare>, EngineError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let spending: Vec<&TransactionRecord> = records
        .into_iter()
        .filter(|record| !record.is_income())
        .collect();
    let total_expenses = spending.iter().try_fold(Decimal::ZERO, |acc, record| {
        checked_sum(acc, record.amount, || "expenses".into())
    })?;

    let mut shares: Vec<CategoryShare> = compute_category_totals(spending)?
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category,
            total,
            percent: percent_of(total, total_expenses),
        })
        .collect();
    shares.sort_by(|a, b| b.total.abs().cmp(&a.total.abs()));
    Ok(shares)
}

fn percent_of(value: Decimal, total: Decimal) -> i64 {
    if total.is_zero() {
        return 0;
    }
    value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|percent| percent.round().to_i64())
        .unwrap_or(0)
}
