use crate::rules::{QualityChange, RuleSet};

/// Current quality of a product after `elapsed_days` on the shelf.
///
/// Quality steps once per full change interval. Increasing quality is
/// capped at the category's highest boundary; decreasing quality is not
/// floor-clamped — the lowest boundary only drives marketability, so the
/// reported value may drop below it (and below zero).
///
/// `elapsed_days` must be non-negative; evaluating before the store date
/// is a caller error.
pub fn current_quality(elapsed_days: i64, start_quality: i32, rules: &RuleSet) -> i32 {
    debug_assert!(elapsed_days >= 0, "evaluation date precedes store date");

    if rules.quality_change == QualityChange::Unchanging {
        return start_quality;
    }

    let intervals = (elapsed_days / i64::from(rules.days_until_quality_change)) as i32;
    let delta = intervals * rules.quality_change_factor;

    match rules.quality_change {
        QualityChange::Increasing => {
            (start_quality + delta).min(rules.highest_quality_boundary)
        }
        QualityChange::Decreasing => start_quality - delta,
        QualityChange::Unchanging => start_quality,
    }
}
