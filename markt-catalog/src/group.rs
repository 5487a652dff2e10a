use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::rules::{QualityChange, RuleSet};

/// A product category: a name, a display name for reports, and the rule
/// set governing every product in the category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductGroup {
    pub name: String,
    /// The name shown to shoppers in status reports.
    pub display_name: String,
    pub rules: RuleSet,
}

impl ProductGroup {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            rules,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown product group: {0}")]
    UnknownGroup(String),
}

/// Name-keyed registry of product groups.
///
/// Groups are handed out as `Arc` so every product of a category shares
/// one immutable rule instance.
pub struct GroupRegistry {
    groups: HashMap<String, Arc<ProductGroup>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the stock categories.
    pub fn with_default_groups() -> Self {
        let mut registry = Self::new();
        for group in default_groups() {
            registry.register(group);
        }
        registry
    }

    pub fn register(&mut self, group: ProductGroup) {
        self.groups.insert(group.name.clone(), Arc::new(group));
    }

    /// Look up a group by name, failing for names nobody registered.
    pub fn find(&self, name: &str) -> Result<Arc<ProductGroup>, CatalogError> {
        self.groups
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownGroup(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock categories: cheese loses quality daily and is priced off it,
/// wine matures slowly and never expires, meat holds its quality but gets
/// marked down near the expiry date.
pub fn default_groups() -> Vec<ProductGroup> {
    let cheese = RuleSet::new(
        true,
        QualityChange::Decreasing,
        true, // daily pricing
        1,    // quality change factor
        30,   // lowest quality boundary
        100,  // highest quality boundary
        1,    // days until quality change
        false,
        0,
    )
    .expect("cheese rule set is valid");

    let wine = RuleSet::new(
        false,
        QualityChange::Increasing,
        false,
        1,
        1,
        50,
        10, // matures every ten days
        false,
        0,
    )
    .expect("wine rule set is valid");

    let meat = RuleSet::new(
        true,
        QualityChange::Unchanging,
        false,
        0,
        1,
        1,
        1,
        true, // 25% markdown near expiry
        25,
    )
    .expect("meat rule set is valid");

    vec![
        ProductGroup::new("Cheese", "Kaese", cheese),
        ProductGroup::new("Wine", "Wein", wine),
        ProductGroup::new("Meat", "Fleisch", meat),
    ]
}
