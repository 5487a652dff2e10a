use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use markt_catalog::{current_price, current_quality, DiscountWindow, ProductGroup};
use markt_shared::elapsed_days;

/// Why a product may or may not stay on the shelf.
///
/// The quality check takes precedence over the expiry check when both
/// fail. The expiry reason uses the strict `expiry < date` comparison the
/// human-facing report always used, while [`Product::is_marketable`] keeps
/// the inclusive form: on the expiry day itself the verdict still reads
/// acceptable and the product is pulled on the next day's sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Marketability {
    Acceptable,
    QualityBelowBoundary,
    Expired,
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("base price cannot be negative: {0}")]
    NegativeBasePrice(f64),

    #[error("start quality cannot be negative: {0}")]
    NegativeStartQuality(i32),

    #[error("products of expiring group '{0}' need an expiry date")]
    MissingExpiryDate(String),

    #[error("products of non-expiring group '{0}' cannot carry an expiry date")]
    UnexpectedExpiryDate(String),
}

/// One shelf entry: a category rule bound to base attributes.
///
/// Quality, price and marketability are derived from the evaluation date
/// on every call; nothing date-dependent is cached on the product.
#[derive(Debug, Clone)]
pub struct Product {
    id: Uuid,
    name: String,
    base_price: f64,
    /// `None` for products of non-expiring groups.
    expiry_date: Option<NaiveDate>,
    start_quality: i32,
    /// Assigned once, when a shelf accepts the product.
    store_date: Option<NaiveDate>,
    group: Arc<ProductGroup>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        base_price: f64,
        expiry_date: Option<NaiveDate>,
        start_quality: i32,
        group: Arc<ProductGroup>,
    ) -> Result<Self, ProductError> {
        if base_price < 0.0 {
            return Err(ProductError::NegativeBasePrice(base_price));
        }
        if start_quality < 0 {
            return Err(ProductError::NegativeStartQuality(start_quality));
        }
        check_expiry_invariant(&group, expiry_date)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            base_price,
            expiry_date,
            start_quality,
            store_date: None,
            group,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn start_quality(&self) -> i32 {
        self.start_quality
    }

    pub fn store_date(&self) -> Option<NaiveDate> {
        self.store_date
    }

    pub fn group(&self) -> &Arc<ProductGroup> {
        &self.group
    }

    /// Move the product to another category (administrative).
    ///
    /// The expiry invariant is re-checked against the new group's rules.
    pub fn reassign_group(&mut self, group: Arc<ProductGroup>) -> Result<(), ProductError> {
        check_expiry_invariant(&group, self.expiry_date)?;
        self.group = group;
        Ok(())
    }

    /// Stamp the store date. First call wins; a shelf never re-shelves.
    pub(crate) fn shelve(&mut self, date: NaiveDate) {
        if self.store_date.is_none() {
            self.store_date = Some(date);
        }
    }

    /// Whole days on the shelf as of `date`; zero before placement.
    fn elapsed(&self, date: NaiveDate) -> i64 {
        self.store_date
            .map_or(0, |store_date| elapsed_days(store_date, date))
    }

    pub fn current_quality(&self, date: NaiveDate) -> i32 {
        current_quality(self.elapsed(date), self.start_quality, &self.group.rules)
    }

    pub fn current_price(&self, date: NaiveDate) -> f64 {
        current_price(
            self.base_price,
            self.current_quality(date),
            &self.group.rules,
            self.discount_window(date),
        )
    }

    fn discount_window(&self, date: NaiveDate) -> Option<DiscountWindow> {
        let expiry = self.expiry_date?;
        match elapsed_days(date, expiry) {
            1 => Some(DiscountWindow::OneDayBeforeExpiry),
            0 => Some(DiscountWindow::ExpiryDay),
            _ => None,
        }
    }

    /// Whether the product may stay on the shelf as of `date`.
    ///
    /// Expiring groups: not yet strictly past the expiry date (the expiry
    /// day itself is still marketable) and quality at or above the lowest
    /// boundary. Non-expiring groups: quality strictly above the boundary.
    pub fn is_marketable(&self, date: NaiveDate) -> bool {
        let rules = &self.group.rules;
        let quality = self.current_quality(date);

        if rules.expiring {
            let not_expired = self.expiry_date.is_some_and(|expiry| expiry >= date);
            not_expired && quality >= rules.lowest_quality_boundary
        } else {
            quality > rules.lowest_quality_boundary
        }
    }

    /// Human-facing verdict, quality reason first.
    pub fn marketability(&self, date: NaiveDate) -> Marketability {
        let rules = &self.group.rules;

        if self.current_quality(date) < rules.lowest_quality_boundary {
            return Marketability::QualityBelowBoundary;
        }
        if self.expiry_date.is_some_and(|expiry| expiry < date) {
            return Marketability::Expired;
        }
        Marketability::Acceptable
    }

    /// Snapshot of everything a status report shows for one product.
    pub fn status(&self, date: NaiveDate) -> ProductStatus {
        ProductStatus {
            name: self.name.clone(),
            group_display_name: self.group.display_name.clone(),
            base_price: self.base_price,
            expiry_date: self.expiry_date,
            lowest_quality_boundary: self.group.rules.lowest_quality_boundary,
            current_quality: self.current_quality(date),
            current_price: self.current_price(date),
            marketability: self.marketability(date),
        }
    }
}

fn check_expiry_invariant(
    group: &ProductGroup,
    expiry_date: Option<NaiveDate>,
) -> Result<(), ProductError> {
    match (group.rules.expiring, expiry_date) {
        (true, None) => Err(ProductError::MissingExpiryDate(group.name.clone())),
        (false, Some(_)) => Err(ProductError::UnexpectedExpiryDate(group.name.clone())),
        _ => Ok(()),
    }
}

/// Per-date product snapshot in report field order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductStatus {
    pub name: String,
    pub group_display_name: String,
    pub base_price: f64,
    pub expiry_date: Option<NaiveDate>,
    pub lowest_quality_boundary: i32,
    pub current_quality: i32,
    pub current_price: f64,
    pub marketability: Marketability,
}
