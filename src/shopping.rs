use crate::error::PantryError;
use crate::model::{InventoryEntry, ItemKey, Location, sanitize_quantity};
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Upper bound for a shopping row quantity.
pub const MAX_ROW_QUANTITY: f64 = 999_999.0;
pub const DEFAULT_UNIT: &str = "units";

/// An item to buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingRow {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub location: Location,
    #[serde(default)]
    pub purchased: bool,
}

impl ShoppingRow {
    pub fn new(name: &str, quantity: f64, unit: &str, location: Location) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity: sanitize_quantity(quantity).min(MAX_ROW_QUANTITY),
            unit: unit.to_string(),
            location,
            purchased: false,
        }
    }

    /// A row for one unit of a missing ingredient. Unit and location are
    /// borrowed from an inventory entry with the same name when there is one,
    /// otherwise `units` in the pantry.
    pub fn for_missing(name: &str, inventory: &[InventoryEntry]) -> Self {
        let key = normalize(name);
        match inventory.iter().find(|e| e.normalized_name() == key) {
            Some(entry) => Self::new(name, 1.0, &entry.unit, entry.location),
            None => Self::new(name, 1.0, DEFAULT_UNIT, Location::Pantry),
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name, &self.unit, self.location)
    }
}

/// The household shopping list. `add_row` merges rows with the same key;
/// `change_location` re-keys a row without merging, so keys may collide
/// afterwards and lookups then find the first matching row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    rows: Vec<ShoppingRow>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ShoppingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &ItemKey) -> Option<&ShoppingRow> {
        self.rows.iter().find(|r| &r.key() == key)
    }

    fn get_mut(&mut self, key: &ItemKey) -> Result<&mut ShoppingRow, PantryError> {
        self.rows
            .iter_mut()
            .find(|r| &r.key() == key)
            .ok_or_else(|| PantryError::RowNotFound(key.to_string()))
    }

    /// Adds a row, or adds its quantity to the row with the same key.
    pub fn add_row(&mut self, row: ShoppingRow) -> ItemKey {
        let key = row.key();
        match self.rows.iter_mut().find(|r| r.key() == key) {
            Some(existing) => {
                existing.quantity = (existing.quantity + row.quantity).min(MAX_ROW_QUANTITY);
            }
            None => self.rows.push(row),
        }
        key
    }

    /// Changes a row quantity by `delta`, keeping it within `0..=999_999`.
    pub fn update_quantity(&mut self, key: &ItemKey, delta: f64) -> Result<f64, PantryError> {
        let row = self.get_mut(key)?;
        let next = if delta.is_finite() {
            row.quantity + delta
        } else {
            row.quantity
        };
        row.quantity = next.clamp(0.0, MAX_ROW_QUANTITY);
        Ok(row.quantity)
    }

    pub fn toggle_purchased(&mut self, key: &ItemKey) -> Result<bool, PantryError> {
        let row = self.get_mut(key)?;
        row.purchased = !row.purchased;
        Ok(row.purchased)
    }

    /// Moves a row to another location. The row's key changes accordingly.
    pub fn change_location(
        &mut self,
        key: &ItemKey,
        location: Location,
    ) -> Result<ItemKey, PantryError> {
        let row = self.get_mut(key)?;
        row.location = location;
        Ok(row.key())
    }

    pub fn remove_row(&mut self, key: &ItemKey) -> Result<ShoppingRow, PantryError> {
        let pos = self
            .rows
            .iter()
            .position(|r| &r.key() == key)
            .ok_or_else(|| PantryError::RowNotFound(key.to_string()))?;
        Ok(self.rows.remove(pos))
    }

    /// Purchased rows with a positive quantity, ready to merge into the inventory.
    pub fn purchased(&self) -> impl Iterator<Item = &ShoppingRow> {
        self.rows.iter().filter(|r| r.purchased && r.quantity > 0.0)
    }

    /// Resets every purchased row to an unpurchased, empty row.
    pub(crate) fn clear_purchased(&mut self) {
        for row in self.rows.iter_mut().filter(|r| r.purchased) {
            row.purchased = false;
            row.quantity = 0.0;
        }
    }
}

impl FromIterator<ShoppingRow> for ShoppingList {
    fn from_iter<T: IntoIterator<Item = ShoppingRow>>(iter: T) -> Self {
        let mut list = ShoppingList::new();
        for row in iter {
            list.add_row(row);
        }
        list
    }
}
