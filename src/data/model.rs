use crate::error::SnapshotError;
use crate::model::{InventoryEntry, ItemStatus, Location, Preferences};
use crate::pantry::CookRecord;
use crate::shopping::{ShoppingList, ShoppingRow};
use serde::{Deserialize, Serialize};
use std::fs;

/// Everything a household stores, in the JSON layout used on disk.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PantrySnapshot {
    pub inventory: Vec<InventoryEntry>,
    pub shopping: ShoppingList,
    pub history: Vec<CookRecord>,
    pub preferences: Preferences,
}

impl PantrySnapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot as pretty JSON.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// A small sample household used when no snapshot file is given.
    pub fn demo() -> Self {
        let inventory = vec![
            InventoryEntry::new("Tomatoes", 3.0, "units", Location::Fridge)
                .with_status(ItemStatus::ExpiringSoon),
            InventoryEntry::new("Milk", 1.0, "L", Location::Fridge),
            InventoryEntry::new("Chicken", 500.0, "g", Location::Freezer)
                .with_status(ItemStatus::ExpiringSoon),
            InventoryEntry::new("Rice", 1.0, "kg", Location::Pantry),
            InventoryEntry::new("Olive Oil", 500.0, "ml", Location::Pantry)
                .with_status(ItemStatus::LongShelfLife),
            InventoryEntry::new("Pasta", 2.0, "packs", Location::Pantry),
        ];

        let shopping = [
            ShoppingRow::new("Lettuce", 1.0, "unit", Location::Fridge),
            ShoppingRow::new("Sugar", 1.0, "kg", Location::Pantry),
            ShoppingRow::new("Eggs", 12.0, "units", Location::Fridge),
        ]
        .into_iter()
        .collect();

        Self {
            inventory,
            shopping,
            history: Vec::new(),
            preferences: Preferences::default(),
        }
    }
}
