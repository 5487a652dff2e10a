use serde::{Deserialize, Serialize};

/// How a product's quality evolves while it sits on the shelf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityChange {
    Increasing,
    Decreasing,
    Unchanging,
}

/// Rule bundle shared by every product of a category.
///
/// Immutable after construction; products hold it by shared reference and
/// never edit fields in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    /// Whether products of this category have a finite shelf life.
    pub expiring: bool,
    pub quality_change: QualityChange,
    /// Recompute the price from quality every day instead of keeping the base price.
    pub daily_pricing: bool,
    /// Quality delta applied per elapsed change interval.
    pub quality_change_factor: i32,
    /// Quality at or below which the product is pulled from the shelf.
    pub lowest_quality_boundary: i32,
    /// Ceiling for increasing quality; never reported above this.
    pub highest_quality_boundary: i32,
    /// Length of one quality-change interval in days.
    pub days_until_quality_change: u32,
    /// Optional markdown applied near the expiry date.
    pub expiry_discount: bool,
    pub expiry_discount_percent: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("quality change factor cannot be negative: {0}")]
    NegativeChangeFactor(i32),

    #[error("days until quality change must be positive for changing quality")]
    ZeroChangeInterval,

    #[error("expiry discount percent must be within [0, 100]: {0}")]
    DiscountPercentOutOfRange(i32),
}

impl RuleSet {
    /// Build a validated rule set.
    ///
    /// A zero-length change interval is rejected for the modes that divide
    /// by it; an `Unchanging` rule never consults the interval.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        expiring: bool,
        quality_change: QualityChange,
        daily_pricing: bool,
        quality_change_factor: i32,
        lowest_quality_boundary: i32,
        highest_quality_boundary: i32,
        days_until_quality_change: u32,
        expiry_discount: bool,
        expiry_discount_percent: i32,
    ) -> Result<Self, RuleError> {
        if quality_change_factor < 0 {
            return Err(RuleError::NegativeChangeFactor(quality_change_factor));
        }
        if days_until_quality_change == 0 && quality_change != QualityChange::Unchanging {
            return Err(RuleError::ZeroChangeInterval);
        }
        if !(0..=100).contains(&expiry_discount_percent) {
            return Err(RuleError::DiscountPercentOutOfRange(expiry_discount_percent));
        }

        Ok(Self {
            expiring,
            quality_change,
            daily_pricing,
            quality_change_factor,
            lowest_quality_boundary,
            highest_quality_boundary,
            days_until_quality_change,
            expiry_discount,
            expiry_discount_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rule_set() {
        let rules = RuleSet::new(true, QualityChange::Decreasing, true, 1, 30, 100, 1, false, 0);
        assert!(rules.is_ok());
    }

    #[test]
    fn test_zero_interval_rejected_for_changing_quality() {
        let err = RuleSet::new(true, QualityChange::Decreasing, true, 1, 30, 100, 0, false, 0)
            .unwrap_err();
        assert!(matches!(err, RuleError::ZeroChangeInterval));
    }

    #[test]
    fn test_zero_interval_allowed_for_unchanging_quality() {
        let rules = RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 0, true, 25);
        assert!(rules.is_ok());
    }

    #[test]
    fn test_negative_change_factor_rejected() {
        let err = RuleSet::new(true, QualityChange::Decreasing, true, -1, 30, 100, 1, false, 0)
            .unwrap_err();
        assert!(matches!(err, RuleError::NegativeChangeFactor(-1)));
    }

    #[test]
    fn test_discount_percent_bounds() {
        let err = RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 1, true, 101)
            .unwrap_err();
        assert!(matches!(err, RuleError::DiscountPercentOutOfRange(101)));

        let err = RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 1, true, -5)
            .unwrap_err();
        assert!(matches!(err, RuleError::DiscountPercentOutOfRange(-5)));

        assert!(RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 1, true, 100).is_ok());
        assert!(RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 1, true, 0).is_ok());
    }
}
