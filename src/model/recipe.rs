use super::quantity::sanitize_quantity;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parses `easy`, `Medium`, ` HARD ` and so on.
    pub fn from_label(label: &str) -> Option<Difficulty> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// One line of a recipe's requirements: how much of an ingredient a single
/// serving consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredIngredient {
    /// The name as declared by the recipe, kept for display.
    pub name: String,
    /// Normalized name used for matching against the inventory.
    #[serde(skip)]
    pub key: String,
    pub quantity: f64,
}

/// A catalog recipe. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    ingredients: Vec<RequiredIngredient>,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
    pub tags: BTreeSet<String>,
    pub steps: Vec<String>,
    pub rating: Option<f32>,
}

impl Recipe {
    /// Builds a recipe from its per-serving requirements, in declaration order.
    ///
    /// Entries whose names normalize to the same key are folded into the first
    /// declaration and their quantities are summed, so every requirement is
    /// distinct. Malformed quantities are treated as zero.
    pub fn new<I, S>(name: &str, requirements: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut ingredients: Vec<RequiredIngredient> = Vec::new();
        for (raw_name, quantity) in requirements {
            let raw_name: String = raw_name.into();
            let key = normalize(&raw_name);
            let quantity = sanitize_quantity(quantity);
            match ingredients.iter_mut().find(|i| i.key == key) {
                Some(existing) => existing.quantity += quantity,
                None => ingredients.push(RequiredIngredient {
                    name: raw_name.trim().to_string(),
                    key,
                    quantity,
                }),
            }
        }

        Self {
            name: name.trim().to_string(),
            ingredients,
            time_minutes: DEFAULT_TIME_MINUTES,
            difficulty: Difficulty::default(),
            tags: BTreeSet::new(),
            steps: Vec::new(),
            rating: None,
        }
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time_minutes = minutes;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Requirements in declaration order.
    pub fn ingredients(&self) -> &[RequiredIngredient] {
        &self.ingredients
    }

    /// Number of distinct required ingredients.
    pub fn required_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Case- and accent-insensitive name check.
    pub fn is_named(&self, name: &str) -> bool {
        normalize(&self.name) == normalize(name)
    }
}

/// Preparation time assumed when a recipe does not state one.
pub const DEFAULT_TIME_MINUTES: u32 = 60;
