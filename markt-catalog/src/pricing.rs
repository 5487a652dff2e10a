use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

/// Position of the evaluation date inside the near-expiry markdown window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiscountWindow {
    /// Exactly one day before the expiry date.
    OneDayBeforeExpiry,
    /// The expiry date itself.
    ExpiryDay,
}

/// Current price of a product given its base price and current quality.
///
/// Resolution order, first match wins:
/// 1. daily pricing + discount window one day before expiry: discounted
///    quality-adjusted price.
/// 2. any other discount window hit: base price minus the markdown, where
///    the markdown is still computed off the quality-adjusted price. The
///    asymmetric markdown base reproduces observed behavior and must not
///    be "corrected" without a product decision.
/// 3. daily pricing: quality-adjusted price.
/// 4. otherwise: base price.
///
/// The quality-adjusted price is `base + 0.10 * quality`; negative quality
/// legitimately pulls it below the base price.
pub fn current_price(
    base_price: f64,
    current_quality: i32,
    rules: &RuleSet,
    window: Option<DiscountWindow>,
) -> f64 {
    let quality_adjusted = base_price + 0.10 * f64::from(current_quality);
    let markdown = quality_adjusted * f64::from(rules.expiry_discount_percent) / 100.0;
    let discount_applies = rules.expiry_discount && window.is_some();

    if rules.daily_pricing && discount_applies && window == Some(DiscountWindow::OneDayBeforeExpiry)
    {
        return quality_adjusted - markdown;
    }
    if discount_applies {
        return base_price - markdown;
    }
    if rules.daily_pricing {
        return quality_adjusted;
    }
    base_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::QualityChange;

    fn daily_priced_no_discount() -> RuleSet {
        RuleSet::new(true, QualityChange::Decreasing, true, 1, 30, 100, 1, false, 0).unwrap()
    }

    fn fixed_price_no_discount() -> RuleSet {
        RuleSet::new(false, QualityChange::Increasing, false, 1, 1, 50, 10, false, 0).unwrap()
    }

    fn fixed_price_with_discount() -> RuleSet {
        RuleSet::new(true, QualityChange::Unchanging, false, 0, 1, 1, 1, true, 25).unwrap()
    }

    fn daily_priced_with_discount() -> RuleSet {
        RuleSet::new(true, QualityChange::Decreasing, true, 1, 30, 100, 1, true, 25).unwrap()
    }

    #[test]
    fn test_daily_pricing_adds_quality_factor() {
        let rules = daily_priced_no_discount();
        assert_eq!(current_price(75.0, 30, &rules, None), 78.0);
    }

    #[test]
    fn test_negative_quality_lowers_price_below_base() {
        let rules = daily_priced_no_discount();
        assert_eq!(current_price(75.0, -20, &rules, None), 73.0);
    }

    #[test]
    fn test_fixed_pricing_keeps_base_price() {
        let rules = fixed_price_no_discount();
        assert_eq!(current_price(40.0, 50, &rules, None), 40.0);
    }

    #[test]
    fn test_discount_window_ignored_without_discount_rule() {
        let rules = daily_priced_no_discount();
        let price = current_price(75.0, 30, &rules, Some(DiscountWindow::OneDayBeforeExpiry));
        assert_eq!(price, 78.0);
    }

    #[test]
    fn test_daily_pricing_discount_one_day_before_expiry() {
        let rules = daily_priced_with_discount();
        // Quality-adjusted 78.0, marked down by 25% of itself.
        let price = current_price(75.0, 30, &rules, Some(DiscountWindow::OneDayBeforeExpiry));
        assert!((price - 58.5).abs() < 1e-9);
    }

    #[test]
    fn discount_on_expiry_day_keeps_base_price_minus_adjusted_markdown() {
        let rules = fixed_price_with_discount();
        // Base 7.0, quality 0: markdown computed off the adjusted price
        // even though the undiscounted base applies.
        let price = current_price(7.0, 0, &rules, Some(DiscountWindow::ExpiryDay));
        assert!((price - 5.25).abs() < 1e-9);

        // With nonzero quality the asymmetry becomes visible: markdown base
        // is 7.2, discounted base is still 7.0.
        let price = current_price(7.0, 2, &rules, Some(DiscountWindow::ExpiryDay));
        assert!((price - (7.0 - 7.2 * 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_pricing_discount_one_day_before_expiry() {
        let rules = fixed_price_with_discount();
        let price = current_price(7.0, 0, &rules, Some(DiscountWindow::OneDayBeforeExpiry));
        assert!((price - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_price_is_pure() {
        let rules = daily_priced_with_discount();
        let first = current_price(75.0, 30, &rules, Some(DiscountWindow::ExpiryDay));
        let second = current_price(75.0, 30, &rules, Some(DiscountWindow::ExpiryDay));
        assert_eq!(first, second);
    }
}
