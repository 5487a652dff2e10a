pub mod group;
pub mod pricing;
pub mod quality;
pub mod rules;

pub use group::{GroupRegistry, ProductGroup};
pub use pricing::{current_price, DiscountWindow};
pub use quality::current_quality;
pub use rules::{QualityChange, RuleSet};
