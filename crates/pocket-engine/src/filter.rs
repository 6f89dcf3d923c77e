use pocket_domain::{CategoryFilter, TransactionRecord};

/// Narrows `records` to those passing `filter`, keeping their relative order.
///
/// `CategoryFilter::All` returns every record unchanged. A filter that matches
/// nothing yields an empty vector rather than an error.
pub fn filter_by_category<'a>(
    records: &'a [TransactionRecord],
    filter: CategoryFilter,
) -> Vec<&'a TransactionRecord> {
    let filtered: Vec<&TransactionRecord> = records
        .iter()
        .filter(|record| filter.matches(record.category))
        .collect();
    tracing::debug!(
        filter = %filter,
        total = records.len(),
        kept = filtered.len(),
        "filtered transactions by category"
    );
    filtered
}
