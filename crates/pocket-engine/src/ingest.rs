//! Validation of raw transaction input.

use pocket_domain::{RawTransaction, TransactionRecord};

use crate::EngineError;

/// Converts raw inputs into validated records, preserving order.
///
/// Fails fast on the first malformed record so it is never silently mis-grouped.
pub fn validate_records(
    raws: impl IntoIterator<Item = RawTransaction>,
) -> Result<Vec<TransactionRecord>, EngineError> {
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let id = raw.id.clone();
            TransactionRecord::try_from(raw).map_err(|source| {
                tracing::warn!(index, id = %id, error = %source, "rejected transaction record");
                EngineError::InvalidRecord { index, id, source }
            })
        })
        .collect()
}

/// Parses a JSON array of raw transactions and validates every entry.
pub fn records_from_json(document: &str) -> Result<Vec<TransactionRecord>, EngineError> {
    let raws: Vec<RawTransaction> =
        serde_json::from_str(document).map_err(|err| EngineError::Json(err.to_string()))?;
    let records = validate_records(raws)?;
    tracing::debug!(count = records.len(), "loaded transactions from JSON");
    Ok(records)
}
