//! The recipe catalog: built-in recipes, JSON loading and candidate picking.

use crate::dietary::DietaryFilter;
use crate::error::CatalogError;
use crate::model::{DEFAULT_TIME_MINUTES, DietaryPreference, Difficulty, Recipe};
use crate::normalize::normalize;
use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// A trait for external recipe formats that can be turned into catalog recipes.
///
/// Implement it on your own deserialized structs to feed recipes from a
/// database row, an API payload or any other source into a [`RecipeCatalog`].
pub trait IntoRecipes {
    fn into_recipes(self) -> Result<Vec<Recipe>, CatalogError>;
}

/// An ordered list of recipes with unique names.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Builds a catalog, rejecting empty and duplicate names.
    /// Names are compared after normalization.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = AHashSet::new();
        for (index, recipe) in recipes.iter().enumerate() {
            if recipe.name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(normalize(&recipe.name)) {
                return Err(CatalogError::DuplicateRecipe(recipe.name.clone()));
            }
        }
        Ok(Self { recipes })
    }

    pub fn from_source(source: impl IntoRecipes) -> Result<Self, CatalogError> {
        Self::new(source.into_recipes()?)
    }

    /// Parses a JSON array of recipes. See [`RawRecipe`] for the accepted shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawRecipe> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::from_source(raw)
    }

    /// The sample recipes shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Looks a recipe up by name, ignoring case and accents.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.is_named(name))
    }

    /// Picks up to `max` recipes worth sending to a recipe writer for the
    /// given pantry item names.
    ///
    /// Recipes excluded by `dietary` are dropped, the rest are ranked by how
    /// many of their ingredient names appear in `pantry` (ties keep catalog
    /// order) and recipes with no overlap are discarded. When nothing
    /// overlaps, the first `max` allowed recipes are returned instead.
    pub fn candidates(
        &self,
        filter: &DietaryFilter<'_>,
        pantry: &[String],
        dietary: Option<&DietaryPreference>,
        max: usize,
    ) -> Vec<&Recipe> {
        let stocked: AHashSet<String> = pantry.iter().map(|p| normalize(p)).collect();
        let allowed = filter.retain(&self.recipes, dietary);

        let mut scored: Vec<(&Recipe, usize)> = allowed
            .iter()
            .map(|recipe| {
                let overlap = recipe
                    .ingredients()
                    .iter()
                    .filter(|i| stocked.contains(&i.key))
                    .count();
                (*recipe, overlap)
            })
            .filter(|(_, overlap)| *overlap > 0)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        if scored.is_empty() {
            tracing::debug!("no pantry overlap, falling back to catalog order");
            return allowed.into_iter().take(max).collect();
        }
        scored.into_iter().take(max).map(|(r, _)| r).collect()
    }
}

/// Default number of candidates handed to the suggestion endpoint.
pub const DEFAULT_CANDIDATES: usize = 6;

// --- JSON format ---

/// One recipe as stored in a catalog JSON file.
///
/// Requirements come from `uses` (`{"Tomatoes": 2, ...}`, order preserved);
/// without it, a list-valued `ingredients` field is read with one unit of
/// each. `time` accepts minutes as a number or text such as `"20 min"`, and
/// `difficulty` is matched ignoring case.
#[derive(Debug, Deserialize)]
pub struct RawRecipe {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub uses: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default, alias = "time_minutes", alias = "timeMinutes")]
    pub time: Option<RawTime>,
    #[serde(default)]
    pub difficulty: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Minutes(f64),
    Text(String),
}

impl RawTime {
    /// Whole minutes; fractions are rounded and negative values become zero.
    pub fn minutes(&self) -> u32 {
        match self {
            RawTime::Minutes(m) if m.is_finite() => m.round().clamp(0.0, u32::MAX as f64) as u32,
            RawTime::Minutes(_) => DEFAULT_TIME_MINUTES,
            RawTime::Text(label) => parse_minutes(label),
        }
    }
}

static MINUTES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*min").expect("valid minutes pattern"));

/// Reads the minutes out of a label like `"20 min"`. Labels without a
/// number of minutes fall back to an hour.
pub fn parse_minutes(label: &str) -> u32 {
    MINUTES_PATTERN
        .captures(label)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_TIME_MINUTES)
}

impl RawRecipe {
    /// Unknown or missing labels fall back to [`Difficulty::Easy`].
    fn difficulty(&self) -> Difficulty {
        let Some(value) = &self.difficulty else {
            return Difficulty::default();
        };
        value
            .as_str()
            .and_then(Difficulty::from_label)
            .unwrap_or_else(|| {
                tracing::warn!(recipe = %self.name, %value, "unknown difficulty, using default");
                Difficulty::default()
            })
    }

    fn requirements(&self) -> Vec<(String, f64)> {
        if let Some(uses) = &self.uses {
            return uses
                .iter()
                .map(|(name, qty)| (name.clone(), qty.as_f64().unwrap_or(0.0)))
                .collect();
        }
        match &self.ingredients {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(|name| (name.to_string(), 1.0))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl IntoRecipes for Vec<RawRecipe> {
    fn into_recipes(self) -> Result<Vec<Recipe>, CatalogError> {
        Ok(self
            .into_iter()
            .map(|raw| {
                let minutes = raw
                    .time
                    .as_ref()
                    .map_or(DEFAULT_TIME_MINUTES, RawTime::minutes);
                let difficulty = raw.difficulty();
                let mut recipe = Recipe::new(&raw.name, raw.requirements())
                    .with_time(minutes)
                    .with_difficulty(difficulty)
                    .with_tags(raw.tags)
                    .with_steps(raw.steps);
                if let Some(rating) = raw.rating {
                    recipe = recipe.with_rating(rating);
                }
                recipe
            })
            .collect())
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Tomato Pasta",
            [("Tomatoes", 2.0), ("Pasta", 1.0), ("Olive Oil", 15.0)],
        )
        .with_time(20)
        .with_difficulty(Difficulty::Easy)
        .with_rating(4.5)
        .with_tags(["Vegetarian", "Quick"])
        .with_steps(["Cook the pasta.", "Saute the tomatoes.", "Toss and serve."]),
        Recipe::new(
            "Chicken & Rice Bowl",
            [("Chicken", 250.0), ("Rice", 0.25), ("Olive Oil", 10.0)],
        )
        .with_time(35)
        .with_difficulty(Difficulty::Medium)
        .with_rating(4.8)
        .with_tags(["High Protein"])
        .with_steps(["Brown the chicken.", "Cook the rice.", "Assemble the bowl."]),
        Recipe::new(
            "Milk Pudding",
            [("Milk", 0.3), ("Rice", 0.1), ("Sugar", 25.0)],
        )
        .with_time(25)
        .with_difficulty(Difficulty::Easy)
        .with_rating(4.2)
        .with_tags(["Dessert"])
        .with_steps(["Simmer the rice in milk.", "Sweeten.", "Chill."]),
    ]
}
