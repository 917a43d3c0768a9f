//! Inventory depletion after cooking a recipe.

use crate::model::{InventoryEntry, ItemStatus, Recipe, Servings, sanitize_quantity};
use serde::Serialize;

/// What cooking took from one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Depletion {
    /// Ingredient name as declared by the recipe.
    pub ingredient: String,
    /// Amount the recipe asked for at the requested servings.
    pub requested: f64,
    /// Amount actually removed from the inventory.
    pub consumed: f64,
}

impl Depletion {
    /// True when stock ran out before the request was met.
    pub fn is_short(&self) -> bool {
        self.consumed < self.requested
    }
}

/// The inventory after cooking plus a per-ingredient account of what was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookOutcome {
    pub inventory: Vec<InventoryEntry>,
    pub depletions: Vec<Depletion>,
    /// Required ingredients with no matching entry at all.
    pub skipped: Vec<String>,
}

/// Applies a recipe's consumption to a copy of `inventory`.
///
/// Each requirement, scaled by `servings`, is drawn from the entries whose
/// normalized base name matches, in inventory order, until it is met or the
/// matching entries are empty. Quantities never drop below zero and
/// ingredients without a matching entry are skipped. An entry that cooking
/// drew from and left at zero is marked [`ItemStatus::Used`]; entries that
/// were not drawn from keep their status, and nothing is removed.
///
/// The input slice is not modified.
pub fn deplete(inventory: &[InventoryEntry], recipe: &Recipe, servings: Servings) -> CookOutcome {
    let mut next = inventory.to_vec();
    let keys: Vec<String> = next.iter().map(InventoryEntry::normalized_name).collect();
    let mut depletions = Vec::new();
    let mut skipped = Vec::new();

    for ingredient in recipe.ingredients() {
        let matches: Vec<usize> = keys
            .iter()
            .enumerate()
            .filter(|(_, key)| **key == ingredient.key)
            .map(|(i, _)| i)
            .collect();

        if matches.is_empty() {
            skipped.push(ingredient.name.clone());
            continue;
        }

        let requested = servings.scale(ingredient.quantity);
        let mut remaining = requested;
        for i in matches {
            if remaining <= 0.0 {
                break;
            }
            let entry = &mut next[i];
            let available = sanitize_quantity(entry.quantity);
            let taken = available.min(remaining);
            if taken <= 0.0 {
                continue;
            }
            entry.quantity = sanitize_quantity(available - taken);
            remaining -= taken;
            if entry.quantity == 0.0 {
                entry.status = ItemStatus::Used;
            }
        }

        let consumed = requested - remaining;
        tracing::debug!(
            recipe = %recipe.name,
            ingredient = %ingredient.name,
            requested,
            consumed,
            "depleted inventory"
        );
        depletions.push(Depletion {
            ingredient: ingredient.name.clone(),
            requested,
            consumed,
        });
    }

    CookOutcome {
        inventory: next,
        depletions,
        skipped,
    }
}
