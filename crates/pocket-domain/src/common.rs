//! Shared enums used across transaction queries.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Ordering applied to a record set before it is grouped into a feed.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FeedOrder {
    /// Keep records exactly as supplied; groups follow first-seen order.
    #[default]
    AsSupplied,
    NewestFirst,
    OldestFirst,
}

impl FeedOrder {
    pub const ALL: [FeedOrder; 3] = [
        FeedOrder::AsSupplied,
        FeedOrder::NewestFirst,
        FeedOrder::OldestFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedOrder::AsSupplied => "as-supplied",
            FeedOrder::NewestFirst => "newest-first",
            FeedOrder::OldestFirst => "oldest-first",
        }
    }
}

impl fmt::Display for FeedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedOrder {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        FeedOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownFeedOrder(value.trim().to_string()))
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use serde;
