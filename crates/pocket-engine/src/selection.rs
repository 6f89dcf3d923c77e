use pocket_domain::{CategoryCode, CategoryFilter, ValidationError};

/// Externally owned filter state driven by explicit selection events.
///
/// Starts at `all`; every state is re-enterable, there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelection {
    current: CategoryFilter,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(filter: CategoryFilter) -> Self {
        Self { current: filter }
    }

    pub fn current(&self) -> CategoryFilter {
        self.current
    }

    /// Transitions to `filter`, returning the previous state.
    pub fn select(&mut self, filter: CategoryFilter) -> CategoryFilter {
        let previous = std::mem::replace(&mut self.current, filter);
        if previous != filter {
            tracing::debug!(from = %previous, to = %filter, "category filter changed");
        }
        previous
    }

    /// Transitions using a code string; unknown codes leave the state untouched.
    pub fn select_code(&mut self, code: &str) -> Result<CategoryFilter, ValidationError> {
        let filter = code.parse::<CategoryFilter>()?;
        Ok(self.select(filter))
    }

    pub fn reset(&mut self) -> CategoryFilter {
        self.select(CategoryFilter::All)
    }

    /// Every state the selection may take, `all` first.
    pub fn states() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(CategoryCode::ALL.into_iter().map(CategoryFilter::Only))
    }
}
