use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dietary restrictions declared by the household. All flags default to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryPreference {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub lactose_free: bool,
    pub nut_free: bool,
}

impl DietaryPreference {
    /// True when no restriction is active.
    pub fn is_unrestricted(&self) -> bool {
        *self == DietaryPreference::default()
    }
}

/// Per-household preferences consulted when ranking recipes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dietary: Option<DietaryPreference>,
    /// Recipe names marked as favorite.
    pub favorites: BTreeSet<String>,
}

impl Preferences {
    pub fn is_favorite(&self, recipe_name: &str) -> bool {
        self.favorites.contains(recipe_name)
    }

    /// Adds the recipe to the favorites, or removes it if already there.
    /// Returns whether the recipe is a favorite afterwards.
    pub fn toggle_favorite(&mut self, recipe_name: &str) -> bool {
        if self.favorites.remove(recipe_name) {
            false
        } else {
            self.favorites.insert(recipe_name.to_string());
            true
        }
    }
}
