//! The household state container.
//!
//! `Pantry` is owned by the application layer and passed to the engine by
//! reference. It serializes its own mutations simply by requiring `&mut self`;
//! callers sharing one across threads wrap it in their own lock.

use crate::cook::{CookOutcome, Depletion, deplete};
use crate::data::PantrySnapshot;
use crate::engine::Engine;
use crate::error::PantryError;
use crate::model::{
    DietaryPreference, InventoryEntry, ItemKey, ItemStatus, Location, Preferences, Servings,
    sanitize_quantity,
};
use crate::scoring::{ScoredRecipe, SuggestionQuery};
use crate::shopping::{ShoppingList, ShoppingRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of cook events kept in the history.
pub const HISTORY_LIMIT: usize = 200;

/// One cooked meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookRecord {
    pub recipe: String,
    pub servings: Servings,
    pub cooked_at: DateTime<Utc>,
}

/// Result of [`Pantry::cook`].
#[derive(Debug, Clone, PartialEq)]
pub struct CookReport {
    pub recipe: String,
    pub depletions: Vec<Depletion>,
    pub skipped: Vec<String>,
    /// Base names of entries that ran out.
    pub used_up: Vec<String>,
}

/// Changes applied to an inventory entry by [`Pantry::update_item`].
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub quantity: Option<f64>,
    pub status: Option<ItemStatus>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    inventory: Vec<InventoryEntry>,
    shopping: ShoppingList,
    history: Vec<CookRecord>,
    preferences: Preferences,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: PantrySnapshot) -> Self {
        let mut history = snapshot.history;
        history.truncate(HISTORY_LIMIT);
        Self {
            inventory: snapshot.inventory,
            shopping: snapshot.shopping,
            history,
            preferences: snapshot.preferences,
        }
    }

    pub fn to_snapshot(&self) -> PantrySnapshot {
        PantrySnapshot {
            inventory: self.inventory.clone(),
            shopping: self.shopping.clone(),
            history: self.history.clone(),
            preferences: self.preferences.clone(),
        }
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn shopping_mut(&mut self) -> &mut ShoppingList {
        &mut self.shopping
    }

    /// Cook events, newest first.
    pub fn history(&self) -> &[CookRecord] {
        &self.history
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn item(&self, key: &ItemKey) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|e| &e.key() == key)
    }

    // --- Inventory ---

    /// Stocks an item. An entry with the same key absorbs the quantity and
    /// becomes fresh again; otherwise a new entry is appended.
    pub fn add_item(
        &mut self,
        base_name: &str,
        quantity: f64,
        unit: &str,
        location: Location,
    ) -> ItemKey {
        let key = ItemKey::new(base_name, unit, location);
        let quantity = sanitize_quantity(quantity);
        match self.inventory.iter_mut().find(|e| e.key() == key) {
            Some(entry) => {
                entry.quantity = entry.available() + quantity;
                entry.status = ItemStatus::Fresh;
            }
            None => self
                .inventory
                .push(InventoryEntry::new(base_name, quantity, unit, location)),
        }
        key
    }

    /// Applies a patch to an entry. When the patched entry ends up with the
    /// key of another entry, the two merge: the other entry absorbs the
    /// quantity and the patched one is removed.
    pub fn update_item(&mut self, key: &ItemKey, patch: ItemPatch) -> Result<ItemKey, PantryError> {
        let pos = self
            .inventory
            .iter()
            .position(|e| &e.key() == key)
            .ok_or_else(|| PantryError::ItemNotFound(key.to_string()))?;

        let entry = &mut self.inventory[pos];
        if let Some(quantity) = patch.quantity {
            entry.quantity = sanitize_quantity(quantity);
        }
        if let Some(status) = patch.status {
            entry.status = status;
        }
        if let Some(location) = patch.location {
            entry.location = location;
        }
        let new_key = entry.key();

        let collision = self
            .inventory
            .iter()
            .enumerate()
            .position(|(i, e)| i != pos && e.key() == new_key);
        if let Some(target) = collision {
            let moved = self.inventory.remove(pos);
            let target = if target > pos { target - 1 } else { target };
            let existing = &mut self.inventory[target];
            existing.quantity = existing.available() + moved.available();
            if let Some(status) = patch.status {
                existing.status = status;
            }
            tracing::debug!(key = %new_key, "merged inventory entries");
        }
        Ok(new_key)
    }

    pub fn remove_item(&mut self, key: &ItemKey) -> Result<InventoryEntry, PantryError> {
        let pos = self
            .inventory
            .iter()
            .position(|e| &e.key() == key)
            .ok_or_else(|| PantryError::ItemNotFound(key.to_string()))?;
        Ok(self.inventory.remove(pos))
    }

    // --- Preferences ---

    pub fn toggle_favorite(&mut self, recipe_name: &str) -> bool {
        self.preferences.toggle_favorite(recipe_name)
    }

    pub fn set_dietary(&mut self, dietary: Option<DietaryPreference>) {
        self.preferences.dietary = dietary;
    }

    // --- Recipes ---

    pub fn suggest<'e>(&self, engine: &'e Engine, query: &SuggestionQuery) -> Vec<ScoredRecipe<'e>> {
        engine.suggest(&self.inventory, &self.preferences, query)
    }

    /// Cooks a catalog recipe: depletes the inventory and records the meal.
    ///
    /// Missing ingredients never block cooking. The new inventory replaces the
    /// old one in a single step.
    pub fn cook(
        &mut self,
        engine: &Engine,
        recipe_name: &str,
        servings: Servings,
    ) -> Result<CookReport, PantryError> {
        let recipe = engine
            .recipe(recipe_name)
            .ok_or_else(|| PantryError::UnknownRecipe(recipe_name.to_string()))?;

        let CookOutcome {
            inventory,
            depletions,
            skipped,
        } = deplete(&self.inventory, recipe, servings);

        let used_up = inventory
            .iter()
            .zip(&self.inventory)
            .filter(|(after, before)| {
                after.status == ItemStatus::Used && before.status != ItemStatus::Used
            })
            .map(|(after, _)| after.base_name.clone())
            .collect();

        self.inventory = inventory;
        self.history.insert(
            0,
            CookRecord {
                recipe: recipe.name.clone(),
                servings,
                cooked_at: Utc::now(),
            },
        );
        self.history.truncate(HISTORY_LIMIT);
        tracing::info!(recipe = %recipe.name, %servings, "cooked");

        Ok(CookReport {
            recipe: recipe.name.clone(),
            depletions,
            skipped,
            used_up,
        })
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // --- Shopping ---

    /// Adds one row per missing ingredient name. Returns the keys touched.
    pub fn add_missing_to_shopping(&mut self, missing: &[String]) -> Vec<ItemKey> {
        missing
            .iter()
            .map(|name| {
                let row = ShoppingRow::for_missing(name, &self.inventory);
                self.shopping.add_row(row)
            })
            .collect()
    }

    /// Moves purchased rows into the inventory and resets them on the list.
    /// Returns how many rows were merged.
    pub fn finalize_purchase(&mut self) -> usize {
        let bought: Vec<ShoppingRow> = self.shopping.purchased().cloned().collect();
        for row in &bought {
            self.add_item(&row.name, row.quantity, &row.unit, row.location);
        }
        self.shopping.clear_purchased();
        tracing::debug!(rows = bought.len(), "finalized purchase");
        bought.len()
    }
}
