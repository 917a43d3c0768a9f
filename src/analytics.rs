//! Inventory and cooking statistics.

use crate::model::{Category, InventoryEntry, ItemStatus, Location};
use crate::pantry::CookRecord;
use itertools::Itertools;
use serde::Serialize;

/// Aggregate view of the inventory, optionally restricted to one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub location: Option<Location>,
    pub item_count: usize,
    pub total_quantity: f64,
    /// Quantity per location, in `Location::ALL` order.
    pub by_location: Vec<(Location, f64)>,
    /// Quantity per category, largest first.
    pub by_category: Vec<(Category, f64)>,
    /// Display names of entries flagged as expiring soon.
    pub expiring: Vec<String>,
    /// Base names of entries with nothing left.
    pub out_of_stock: Vec<String>,
}

impl InventorySummary {
    pub fn build(entries: &[InventoryEntry], location: Option<Location>) -> Self {
        let scoped: Vec<&InventoryEntry> = entries
            .iter()
            .filter(|e| location.is_none_or(|l| e.location == l))
            .collect();

        let by_location = Location::ALL
            .iter()
            .map(|l| {
                let total = scoped
                    .iter()
                    .filter(|e| e.location == *l)
                    .map(|e| e.available())
                    .sum();
                (*l, total)
            })
            .collect();

        let by_category = scoped
            .iter()
            .map(|e| (e.category, e.available()))
            .into_grouping_map()
            .sum()
            .into_iter()
            .sorted_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect();

        Self {
            location,
            item_count: scoped.len(),
            total_quantity: scoped.iter().map(|e| e.available()).sum(),
            by_location,
            by_category,
            expiring: scoped
                .iter()
                .filter(|e| e.status == ItemStatus::ExpiringSoon)
                .map(|e| e.display_name())
                .collect(),
            out_of_stock: scoped
                .iter()
                .filter(|e| e.available() <= 0.0)
                .map(|e| e.base_name.clone())
                .collect(),
        }
    }
}

/// The `n` most cooked recipes with their cook counts. Ties are ordered by name.
pub fn top_cooked(history: &[CookRecord], n: usize) -> Vec<(String, usize)> {
    history
        .iter()
        .map(|record| record.recipe.clone())
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(n)
        .collect()
}
