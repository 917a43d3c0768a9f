use super::quantity::{format_amount, sanitize_quantity};
use crate::normalize::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Pantry,
    Fridge,
    Freezer,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Pantry, Location::Fridge, Location::Freezer];
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Pantry => "Pantry",
            Location::Fridge => "Fridge",
            Location::Freezer => "Freezer",
        };
        f.write_str(name)
    }
}

/// Coarse grouping used for display and analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Meat,
    Dairy,
    #[serde(rename = "Dry Goods")]
    DryGoods,
    Condiments,
    Other,
}

static CATEGORY_PATTERNS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    [
        (Category::Vegetables, r"tomato|lettuce|broccoli|onion|spinach|pepper"),
        (Category::Meat, r"chicken|beef|pork|fish|ham|tuna"),
        (Category::Dairy, r"milk|yogurt|cheese|butter|cream"),
        (Category::DryGoods, r"rice|pasta|flour|oats|bread|sugar"),
        (Category::Condiments, r"oil|olive|salt|vinegar"),
    ]
    .into_iter()
    .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (category, re)))
    .collect()
});

impl Category {
    /// Guesses a category from an item name. Falls back to `Other`.
    pub fn infer(name: &str) -> Category {
        let name = normalize(name);
        CATEGORY_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(&name))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Vegetables => "Vegetables",
            Category::Meat => "Meat",
            Category::Dairy => "Dairy",
            Category::DryGoods => "Dry Goods",
            Category::Condiments => "Condiments",
            Category::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Freshness marker of an inventory entry.
///
/// `ExpiringSoon` and `LongShelfLife` are set by whoever tracks dates;
/// `Used` is set when cooking drains the entry to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    Fresh,
    ExpiringSoon,
    LongShelfLife,
    Used,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemStatus::Fresh => "Fresh",
            ItemStatus::ExpiringSoon => "Expiring soon",
            ItemStatus::LongShelfLife => "Long shelf life",
            ItemStatus::Used => "Used",
        };
        f.write_str(name)
    }
}

/// Identity of an inventory entry or shopping row: `name|unit|location`,
/// with the name normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(name: &str, unit: &str, location: Location) -> Self {
        ItemKey(format!("{}|{}|{}", normalize(name), unit, location))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single stocked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub base_name: String,
    #[serde(default)]
    pub quantity: f64,
    pub unit: String,
    pub location: Location,
    pub category: Category,
    #[serde(default)]
    pub status: ItemStatus,
}

impl InventoryEntry {
    /// Creates a fresh entry, inferring its category from the name.
    pub fn new(base_name: &str, quantity: f64, unit: &str, location: Location) -> Self {
        Self {
            base_name: base_name.trim().to_string(),
            quantity: sanitize_quantity(quantity),
            unit: unit.to_string(),
            location,
            category: Category::infer(base_name),
            status: ItemStatus::Fresh,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.base_name, &self.unit, self.location)
    }

    pub fn normalized_name(&self) -> String {
        normalize(&self.base_name)
    }

    /// Quantity as used for matching; malformed values count as zero.
    pub fn available(&self) -> f64 {
        sanitize_quantity(self.quantity)
    }

    /// Label such as `Tomatoes (3 units)`.
    pub fn display_name(&self) -> String {
        format!(
            "{} ({} {})",
            self.base_name,
            format_amount(self.available()),
            self.unit
        )
    }
}
