use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Progress towards a savings goal, as rendered by a progress bar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GoalProgress {
    pub saved: Decimal,
    pub target: Decimal,
}

impl GoalProgress {
    pub fn new(saved: Decimal, target: Decimal) -> Self {
        Self { saved, target }
    }

    /// Whole percent in `0..=100`; a non-positive target reports 0.
    pub fn percent(&self) -> u8 {
        if self.target <= Decimal::ZERO || self.saved <= Decimal::ZERO {
            return 0;
        }
        // Both operands are positive here, so an overflowing ratio is far above 100.
        let raw = self
            .saved
            .checked_div(self.target)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|percent| percent.round())
            .unwrap_or(Decimal::ONE_HUNDRED);
        raw.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    }

    /// Amount still to save, never negative; saturates at `Decimal::MAX`.
    pub fn remaining(&self) -> Decimal {
        if self.saved >= self.target {
            return Decimal::ZERO;
        }
        self.target
            .checked_sub(self.saved)
            .unwrap_or(Decimal::MAX)
    }

    pub fn is_complete(&self) -> bool {
        self.target > Decimal::ZERO && self.saved >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(saved: i64, target: i64) -> GoalProgress {
        GoalProgress::new(Decimal::from(saved), Decimal::from(target))
    }

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(progress(1, 3).percent(), 33);
        assert_eq!(progress(2, 3).percent(), 67);
        assert_eq!(progress(3500, 10000).percent(), 35);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(progress(1500, 1000).percent(), 100);
        assert_eq!(progress(-50, 1000).percent(), 0);
        assert_eq!(progress(50, 0).percent(), 0);
    }

    #[test]
    fn remaining_never_goes_negative() {
        assert_eq!(progress(400, 1000).remaining(), Decimal::from(600));
        assert_eq!(progress(1200, 1000).remaining(), Decimal::ZERO);
        assert!(progress(1000, 1000).is_complete());
        assert!(!progress(0, 0).is_complete());
    }

    #[test]
    fn extreme_inputs_saturate_instead_of_overflowing() {
        let tiny = GoalProgress::new(Decimal::ONE, Decimal::new(1, 28));
        assert_eq!(tiny.percent(), 100);
        assert!(tiny.is_complete());

        let widest = GoalProgress::new(Decimal::MIN, Decimal::MAX);
        assert_eq!(widest.percent(), 0);
        assert_eq!(widest.remaining(), Decimal::MAX);

        let flipped = GoalProgress::new(Decimal::MAX, Decimal::new(1, 28));
        assert_eq!(flipped.percent(), 100);
        assert_eq!(flipped.remaining(), Decimal::ZERO);
    }
}
