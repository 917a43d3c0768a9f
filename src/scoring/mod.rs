use crate::index::InventoryIndex;
use crate::model::{Recipe, Servings};
use serde::{Deserialize, Serialize};

mod missing;
mod query;

pub use missing::missing_ingredients;
pub use query::{SortOrder, SuggestionQuery};

/// Tunable constants of the feasibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Recipes taking at most this many minutes get the quick bonus.
    pub quick_threshold_minutes: u32,
    pub quick_bonus: f64,
    pub favorite_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            quick_threshold_minutes: 20,
            quick_bonus: 8.0,
            favorite_bonus: 10.0,
        }
    }
}

/// The parts a score is made of, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Coverage percentage, `0..=100`.
    pub coverage: f64,
    pub time_bonus: f64,
    pub favorite_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        (self.coverage + self.time_bonus + self.favorite_bonus).round() as i64
    }
}

/// A recipe together with how well the current inventory covers it.
///
/// Derived on demand and never stored; recompute it whenever the inventory or
/// the preferences change.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub have_count: usize,
    pub required_count: usize,
    /// Declared names of the ingredients that are absent or short.
    pub missing: Vec<String>,
    /// Ranking value. Can exceed 100 once bonuses apply.
    pub score: i64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredRecipe<'_> {
    /// True when every requirement is covered.
    pub fn is_cookable(&self) -> bool {
        self.have_count == self.required_count
    }

    pub fn missing_count(&self) -> usize {
        self.required_count - self.have_count
    }
}

/// Computes feasibility scores.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one recipe against an inventory index.
    ///
    /// An ingredient counts as available when the indexed quantity covers the
    /// per-serving requirement multiplied by `servings`. A recipe with no
    /// requirements is fully covered.
    pub fn score<'a>(
        &self,
        index: &InventoryIndex,
        recipe: &'a Recipe,
        servings: Servings,
        favorite: bool,
    ) -> ScoredRecipe<'a> {
        let required_count = recipe.required_count();
        let missing = missing_ingredients(index, recipe, servings);
        let have_count = required_count - missing.len();

        let coverage = (have_count as f64 / required_count.max(1) as f64) * 100.0;
        let coverage = if required_count == 0 { 100.0 } else { coverage };
        let time_bonus = if recipe.time_minutes <= self.config.quick_threshold_minutes {
            self.config.quick_bonus
        } else {
            0.0
        };
        let favorite_bonus = if favorite {
            self.config.favorite_bonus
        } else {
            0.0
        };

        let breakdown = ScoreBreakdown {
            coverage,
            time_bonus,
            favorite_bonus,
        };

        ScoredRecipe {
            recipe,
            have_count,
            required_count,
            missing,
            score: breakdown.total(),
            breakdown,
        }
    }
}

/// Sorts by descending score. The sort is stable, so recipes with equal
/// scores keep their catalog order.
pub fn rank(scored: &mut [ScoredRecipe<'_>]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}
