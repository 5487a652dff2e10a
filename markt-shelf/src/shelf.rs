use chrono::NaiveDate;
use uuid::Uuid;

use crate::product::Product;

/// Owns the shelved products and is the only component that removes them.
///
/// Marketability is recomputed from `(product, date)` on every pass, never
/// cached, so two sweeps for the same date with no placement in between
/// remove nothing the second time.
pub struct Shelf {
    products: Vec<Product>,
}

impl Shelf {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Stamp the store date and accept the product if it is marketable as
    /// of `date`. Products that arrive already expired or substandard are
    /// dropped quietly; stocking them was the mistake, not an error.
    pub fn place(&mut self, mut product: Product, date: NaiveDate) {
        product.shelve(date);
        if product.is_marketable(date) {
            self.products.push(product);
        } else {
            tracing::warn!(
                product = product.name(),
                %date,
                "rejected non-marketable product at placement"
            );
        }
    }

    /// Remove and return every product that is no longer marketable as of
    /// `date`, keeping the survivors in placement order.
    pub fn sweep(&mut self, date: NaiveDate) -> Vec<Product> {
        let (kept, removed): (Vec<_>, Vec<_>) = self
            .products
            .drain(..)
            .partition(|product| product.is_marketable(date));
        self.products = kept;

        if !removed.is_empty() {
            tracing::debug!(removed = removed.len(), %date, "swept shelf");
        }
        removed
    }

    /// Administrative single-product removal, independent of marketability.
    pub fn remove(&mut self, id: Uuid) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id() == id)?;
        Some(self.products.remove(index))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markt_catalog::GroupRegistry;
    use std::sync::Arc;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn cheese_product(registry: &GroupRegistry, name: &str, quality: i32, expiry_days: u64) -> Product {
        let cheese = registry.find("Cheese").unwrap();
        Product::new(
            name,
            50.0,
            Some(start() + chrono::Days::new(expiry_days)),
            quality,
            cheese,
        )
        .unwrap()
    }

    fn wine_product(registry: &GroupRegistry, name: &str, quality: i32) -> Product {
        let wine = registry.find("Wine").unwrap();
        Product::new(name, 40.0, None, quality, wine).unwrap()
    }

    #[test]
    fn test_place_stamps_store_date() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        shelf.place(cheese_product(&registry, "Gouda", 40, 60), start());

        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf.products()[0].store_date(), Some(start()));
    }

    #[test]
    fn test_place_drops_non_marketable_product() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        // Quality 10 is below the cheese boundary of 30.
        shelf.place(cheese_product(&registry, "Stale", 10, 60), start());

        assert!(shelf.is_empty());
    }

    #[test]
    fn test_sweep_partitions_and_returns_removed() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        shelf.place(cheese_product(&registry, "Gouda", 40, 60), start());
        shelf.place(cheese_product(&registry, "Tilsiter", 31, 60), start());
        shelf.place(wine_product(&registry, "Delheim", 40), start());

        // Day 5: Tilsiter has decayed to 26, below the boundary.
        let removed = shelf.sweep(start() + chrono::Days::new(5));
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name(), "Tilsiter");
        assert_eq!(shelf.len(), 2);
    }

    #[test]
    fn test_sweep_is_idempotent_for_a_date() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        shelf.place(cheese_product(&registry, "Gouda", 40, 60), start());
        shelf.place(cheese_product(&registry, "Tilsiter", 31, 60), start());

        let date = start() + chrono::Days::new(5);
        let first = shelf.sweep(date);
        assert_eq!(first.len(), 1);
        let second = shelf.sweep(date);
        assert!(second.is_empty());
    }

    #[test]
    fn test_sweep_keeps_placement_order() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        for name in ["A", "B", "C"] {
            shelf.place(wine_product(&registry, name, 40), start());
        }

        shelf.sweep(start() + chrono::Days::new(30));
        let names: Vec<_> = shelf.products().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_remove_by_id() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        shelf.place(wine_product(&registry, "Bodegas", 50), start());
        let id = shelf.products()[0].id();

        let removed = shelf.remove(id).unwrap();
        assert_eq!(removed.name(), "Bodegas");
        assert!(shelf.is_empty());
        assert!(shelf.remove(id).is_none());
    }

    #[test]
    fn test_shared_rule_instance_across_products() {
        let registry = GroupRegistry::with_default_groups();
        let mut shelf = Shelf::new();
        shelf.place(cheese_product(&registry, "Gouda", 40, 60), start());
        shelf.place(cheese_product(&registry, "Cheddar", 40, 84), start());

        let products = shelf.products();
        assert!(Arc::ptr_eq(products[0].group(), products[1].group()));
    }
}
