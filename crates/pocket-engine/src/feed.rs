//! Screen-level pipeline: filter, optionally order, then group.

use std::cmp::Reverse;

use pocket_domain::{CategoryFilter, FeedOrder, RawTransaction, TransactionRecord};

use crate::{
    filter::filter_by_category,
    grouping::{group_by_month_and_day, GroupedResult},
    ingest::validate_records,
    summary::{summarize_flow, FlowSummary},
    EngineError,
};

/// Runs `group_by_month_and_day(order(filter_by_category(records, filter)))`.
///
/// With `FeedOrder::AsSupplied` the ordering step is the identity. The other
/// policies stable-sort by timestamp, so records sharing a timestamp keep
/// their supplied order.
pub fn build_feed(
    records: &[TransactionRecord],
    filter: CategoryFilter,
    order: FeedOrder,
) -> GroupedResult {
    let mut selected = filter_by_category(records, filter);
    apply_order(&mut selected, order);
    group_by_month_and_day(selected)
}

fn apply_order(records: &mut [&TransactionRecord], order: FeedOrder) {
    match order {
        FeedOrder::AsSupplied => {}
        FeedOrder::NewestFirst => records.sort_by_key(|record| Reverse(record.timestamp)),
        FeedOrder::OldestFirst => records.sort_by_key(|record| record.timestamp),
    }
}

/// An immutable record set plus the ordering policy applied to every query.
#[derive(Debug, Clone, Default)]
pub struct TransactionFeed {
    records: Vec<TransactionRecord>,
    order: FeedOrder,
}

impl TransactionFeed {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records,
            order: FeedOrder::default(),
        }
    }

    pub fn from_raw(raws: impl IntoIterator<Item = RawTransaction>) -> Result<Self, EngineError> {
        Ok(Self::new(validate_records(raws)?))
    }

    pub fn with_order(mut self, order: FeedOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> FeedOrder {
        self.order
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&TransactionRecord> {
        filter_by_category(&self.records, filter)
    }

    pub fn grouped(&self, filter: CategoryFilter) -> GroupedResult {
        build_feed(&self.records, filter, self.order)
    }

    pub fn flow(&self, filter: CategoryFilter) -> Result<FlowSummary, EngineError> {
        summarize_flow(self.filtered(filter))
    }
}
