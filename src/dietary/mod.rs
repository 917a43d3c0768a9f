//! Dietary restriction filtering.
//!
//! A recipe is checked against every active restriction independently; the
//! ingredients are classified through an [`AllergenClassifier`] and each rule
//! looks for the tags it forbids.

use crate::model::{DietaryPreference, Recipe};
use serde::Serialize;
use std::fmt;

mod classifier;

pub use classifier::{AllergenClassifier, AllergenTags, PatternClassifier};

/// A restriction that a recipe can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DietaryRule {
    Vegan,
    Vegetarian,
    GlutenFree,
    LactoseFree,
    NutFree,
}

impl DietaryRule {
    /// Tags that make a recipe violate this rule.
    pub fn forbidden(self) -> AllergenTags {
        match self {
            DietaryRule::Vegan => AllergenTags::ANIMAL_PRODUCT | AllergenTags::MEAT,
            DietaryRule::Vegetarian => AllergenTags::MEAT,
            DietaryRule::GlutenFree => AllergenTags::GLUTEN,
            DietaryRule::LactoseFree => AllergenTags::DAIRY,
            DietaryRule::NutFree => AllergenTags::NUTS,
        }
    }

    /// Rules switched on by a preference, in a fixed order.
    pub fn active(preference: &DietaryPreference) -> Vec<DietaryRule> {
        [
            (preference.vegan, DietaryRule::Vegan),
            (preference.vegetarian, DietaryRule::Vegetarian),
            (preference.gluten_free, DietaryRule::GlutenFree),
            (preference.lactose_free, DietaryRule::LactoseFree),
            (preference.nut_free, DietaryRule::NutFree),
        ]
        .into_iter()
        .filter_map(|(on, rule)| on.then_some(rule))
        .collect()
    }
}

impl fmt::Display for DietaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DietaryRule::Vegan => "vegan",
            DietaryRule::Vegetarian => "vegetarian",
            DietaryRule::GlutenFree => "gluten-free",
            DietaryRule::LactoseFree => "lactose-free",
            DietaryRule::NutFree => "nut-free",
        };
        f.write_str(name)
    }
}

/// Applies dietary preferences to recipes using a classifier.
pub struct DietaryFilter<'c> {
    classifier: &'c dyn AllergenClassifier,
}

impl<'c> DietaryFilter<'c> {
    pub fn new(classifier: &'c dyn AllergenClassifier) -> Self {
        Self { classifier }
    }

    /// Union of the tags of every required ingredient.
    pub fn allergens(&self, recipe: &Recipe) -> AllergenTags {
        recipe
            .ingredients()
            .iter()
            .fold(AllergenTags::empty(), |acc, ingredient| {
                acc | self.classifier.classify(&ingredient.name)
            })
    }

    /// Every active rule the recipe violates. Empty when no preference is given.
    pub fn exclusion_reasons(
        &self,
        recipe: &Recipe,
        preference: Option<&DietaryPreference>,
    ) -> Vec<DietaryRule> {
        let Some(preference) = preference else {
            return Vec::new();
        };
        let rules = DietaryRule::active(preference);
        if rules.is_empty() {
            return Vec::new();
        }

        let tags = self.allergens(recipe);
        rules
            .into_iter()
            .filter(|rule| tags.intersects(rule.forbidden()))
            .collect()
    }

    pub fn is_excluded(&self, recipe: &Recipe, preference: Option<&DietaryPreference>) -> bool {
        !self.exclusion_reasons(recipe, preference).is_empty()
    }

    /// The recipes that survive the preference, in input order.
    pub fn retain<'r>(
        &self,
        recipes: &'r [Recipe],
        preference: Option<&DietaryPreference>,
    ) -> Vec<&'r Recipe> {
        recipes
            .iter()
            .filter(|recipe| {
                let excluded = self.is_excluded(recipe, preference);
                if excluded {
                    tracing::debug!(recipe = %recipe.name, "excluded by dietary preference");
                }
                !excluded
            })
            .collect()
    }
}
