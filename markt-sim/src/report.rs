use markt_shared::format_expiry;
use markt_shelf::{Marketability, ProductStatus};

use crate::service::DayReport;

const BANNER: &str = "########## Products to remove ##########";

/// Render one product's status block, field order fixed for report parity.
pub fn render_status(status: &ProductStatus) -> String {
    format!(
        "Product: {}\n\
         Product group: {}\n\
         Base price: {:.2} Euro\n\
         Expiry date: {}\n\
         Lowest accepted quality: {}\n\
         Current quality: {}\n\
         Current daily price: {:.2} Euro\n\
         Marketable: {}",
        status.name,
        status.group_display_name,
        status.base_price,
        format_expiry(status.expiry_date),
        status.lowest_quality_boundary,
        status.current_quality,
        status.current_price,
        render_verdict(status.marketability),
    )
}

pub fn render_verdict(marketability: Marketability) -> &'static str {
    match marketability {
        Marketability::Acceptable => "Yes",
        Marketability::QualityBelowBoundary => {
            "No - quality below the accepted boundary - please remove from the shelf!"
        }
        Marketability::Expired => "No - the product is expired - please remove from the shelf!",
    }
}

/// Render a full simulated day: kept products first, then the removals.
pub fn render_day(report: &DayReport) -> String {
    let mut out = format!("Day {} ({}):\n", report.day, report.date);

    for status in &report.kept {
        out.push_str(&render_status(status));
        out.push_str("\n\n");
    }
    for status in &report.removed {
        out.push_str(BANNER);
        out.push('\n');
        out.push_str(&render_status(status));
        out.push('\n');
        out.push_str(&"#".repeat(BANNER.len()));
        out.push_str("\n\n");
    }
    out.push_str(&"-".repeat(BANNER.len()));
    out.push('\n');
    out
}
