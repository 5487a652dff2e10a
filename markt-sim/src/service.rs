use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use markt_catalog::group::CatalogError;
use markt_catalog::GroupRegistry;
use markt_shelf::product::ProductError;
use markt_shelf::{Product, ProductStatus, Shelf};

use crate::csv::{self, CsvError, CsvProduct};

/// Everything that happened on one simulated day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayReport {
    pub day: u32,
    pub date: NaiveDate,
    pub kept: Vec<ProductStatus>,
    pub removed: Vec<ProductStatus>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error(transparent)]
    UnknownGroup(#[from] CatalogError),

    #[error(transparent)]
    InvalidProduct(#[from] ProductError),
}

/// Simulation driver: owns the group registry and the shelf, seeds the
/// assortment through the CSV round trip, then steps the calendar one day
/// at a time. Pure orchestration — every rule decision lives in the
/// catalog and shelf crates.
pub struct MarketService {
    registry: GroupRegistry,
    shelf: Shelf,
    start_date: NaiveDate,
}

impl MarketService {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            registry: GroupRegistry::with_default_groups(),
            shelf: Shelf::new(),
            start_date,
        }
    }

    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Seed the stock assortment, round-trip it through the CSV file at
    /// `csv_path`, and place the imported products on the shelf.
    ///
    /// Records that cannot be bound (unknown group name, invalid
    /// attributes) are logged and skipped; one bad record never aborts
    /// the import.
    pub fn stock_from_csv(&mut self, csv_path: &str) -> Result<(), ServiceError> {
        let seeded = csv::seed_products(self.start_date);
        csv::export_products(csv_path, &seeded)?;

        let imported = csv::import_products(csv_path)?;
        tracing::info!(count = imported.len(), csv_path, "imported products");

        for record in imported {
            match self.bind(&record) {
                Ok(product) => self.shelf.place(product, self.start_date),
                Err(error) => {
                    tracing::warn!(product = record.name, %error, "skipping unbindable record");
                }
            }
        }
        Ok(())
    }

    /// Resolve a record's group name and build the product.
    fn bind(&self, record: &CsvProduct) -> Result<Product, ServiceError> {
        let group = self.registry.find(&record.group_name)?;
        let product = Product::new(
            record.name.clone(),
            record.base_price,
            record.expiry_date,
            record.start_quality,
            group,
        )?;
        Ok(product)
    }

    /// Advance one day: sweep the shelf for `date`, then snapshot what
    /// stayed and what was pulled.
    pub fn step(&mut self, day: u32, date: NaiveDate) -> DayReport {
        let removed = self.shelf.sweep(date);

        DayReport {
            day,
            date,
            kept: self
                .shelf
                .products()
                .iter()
                .map(|product| product.status(date))
                .collect(),
            removed: removed.iter().map(|product| product.status(date)).collect(),
        }
    }

    /// Run the daily loop for `days` calendar days starting at the
    /// service's start date. Day 1 evaluates the start date itself.
    pub fn run(&mut self, days: u32) -> Vec<DayReport> {
        let mut reports = Vec::new();
        let mut date = self.start_date;

        for day in 1..days {
            reports.push(self.step(day, date));
            date = date + chrono::Days::new(1);
        }
        reports
    }
}
