//! Domain types representing transaction categories and category filters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fixed set of category codes a transaction can carry.
///
/// Declaration order is the canonical ordering used by per-category totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryCode {
    Food,
    Groceries,
    Housing,
    Transport,
    Utilities,
    Personal,
    Income,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 7] = [
        CategoryCode::Food,
        CategoryCode::Groceries,
        CategoryCode::Housing,
        CategoryCode::Transport,
        CategoryCode::Utilities,
        CategoryCode::Personal,
        CategoryCode::Income,
    ];

    /// Returns the bare code string, e.g. `groceries`.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryCode::Food => "food",
            CategoryCode::Groceries => "groceries",
            CategoryCode::Housing => "housing",
            CategoryCode::Transport => "transport",
            CategoryCode::Utilities => "utilities",
            CategoryCode::Personal => "personal",
            CategoryCode::Income => "income",
        }
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryCode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        CategoryCode::ALL
            .into_iter()
            .find(|code| code.as_str() == needle)
            .ok_or_else(|| ValidationError::UnknownCategory(value.trim().to_string()))
    }
}

/// The active category selection narrowing a transaction list.
///
/// `All` is the no-op selector and is spelled `all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryCode),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "all";

    /// Returns `true` when a record with `code` passes this filter.
    pub fn matches(&self, code: CategoryCode) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == code,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<CategoryCode> for CategoryFilter {
    fn from(code: CategoryCode) -> Self {
        CategoryFilter::Only(code)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(code) => write!(f, "{code}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(CategoryFilter::All);
        }
        value.parse::<CategoryCode>().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}
