use super::ScoredRecipe;
use crate::model::{Difficulty, Servings};
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// How suggestions are ordered. Every order is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Highest score first.
    #[default]
    Score,
    /// Quickest first.
    Time,
    /// Alphabetical by recipe name.
    Name,
}

/// Options for a suggestion run.
#[derive(Debug, Clone, Default)]
pub struct SuggestionQuery {
    pub servings: Servings,
    pub cookable_only: bool,
    pub search: Option<String>,
    pub max_time_minutes: Option<u32>,
    pub difficulties: Vec<Difficulty>,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl SuggestionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn servings(mut self, servings: impl Into<Servings>) -> Self {
        self.servings = servings.into();
        self
    }

    pub fn cookable_only(mut self, cookable_only: bool) -> Self {
        self.cookable_only = cookable_only;
        self
    }

    pub fn search(mut self, text: &str) -> Self {
        let text = normalize(text);
        self.search = (!text.is_empty()).then_some(text);
        self
    }

    pub fn max_time(mut self, minutes: u32) -> Self {
        self.max_time_minutes = Some(minutes);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        if !self.difficulties.contains(&difficulty) {
            self.difficulties.push(difficulty);
        }
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a scored recipe passes every filter of this query.
    pub(crate) fn accepts(&self, scored: &ScoredRecipe<'_>) -> bool {
        if self.cookable_only && !scored.is_cookable() {
            return false;
        }
        if let Some(max) = self.max_time_minutes {
            if scored.recipe.time_minutes > max {
                return false;
            }
        }
        if !self.difficulties.is_empty() && !self.difficulties.contains(&scored.recipe.difficulty)
        {
            return false;
        }
        match &self.search {
            Some(text) => matches_text(scored, text),
            None => true,
        }
    }

    pub(crate) fn order(&self, scored: &mut [ScoredRecipe<'_>]) {
        match self.sort {
            SortOrder::Score => super::rank(scored),
            SortOrder::Time => scored.sort_by_key(|s| s.recipe.time_minutes),
            SortOrder::Name => scored.sort_by_cached_key(|s| normalize(&s.recipe.name)),
        }
    }
}

fn matches_text(scored: &ScoredRecipe<'_>, text: &str) -> bool {
    let recipe = scored.recipe;
    normalize(&recipe.name).contains(text)
        || recipe.tags.iter().any(|tag| normalize(tag).contains(text))
        || recipe
            .ingredients()
            .iter()
            .any(|ingredient| ingredient.key.contains(text))
}
