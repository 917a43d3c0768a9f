use crate::catalog::RecipeCatalog;
use crate::dietary::{AllergenClassifier, DietaryFilter, DietaryRule, PatternClassifier};
use crate::index::InventoryIndex;
use crate::model::{DietaryPreference, InventoryEntry, Preferences, Recipe, Servings};
use crate::scoring::{ScoredRecipe, Scorer, ScoringConfig, SuggestionQuery, missing_ingredients};

/// Ranks a recipe catalog against an inventory.
///
/// An `Engine` holds no inventory of its own: every call takes a snapshot of
/// the inventory and preferences and returns derived data, so the same engine
/// can serve any number of pantries.
pub struct Engine {
    catalog: RecipeCatalog,
    scorer: Scorer,
    classifier: Box<dyn AllergenClassifier>,
}

pub struct EngineBuilder {
    catalog: RecipeCatalog,
    config: ScoringConfig,
    classifier: Box<dyn AllergenClassifier>,
}

impl EngineBuilder {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog,
            config: ScoringConfig::default(),
            classifier: Box::new(PatternClassifier),
        }
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default pattern-based allergen detection.
    pub fn with_classifier(mut self, classifier: Box<dyn AllergenClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            catalog: self.catalog,
            scorer: Scorer::new(self.config),
            classifier: self.classifier,
        }
    }
}

impl Engine {
    pub fn builder(catalog: RecipeCatalog) -> EngineBuilder {
        EngineBuilder::new(catalog)
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.catalog.get(name)
    }

    pub fn dietary_filter(&self) -> DietaryFilter<'_> {
        DietaryFilter::new(self.classifier.as_ref())
    }

    /// Rules of `preference` that `recipe` violates.
    pub fn exclusion_reasons(
        &self,
        recipe: &Recipe,
        preference: Option<&DietaryPreference>,
    ) -> Vec<DietaryRule> {
        self.dietary_filter().exclusion_reasons(recipe, preference)
    }

    /// Scores and ranks the catalog.
    ///
    /// Recipes excluded by the dietary preference are dropped first, then every
    /// remaining recipe is scored against `inventory`, the query filters are
    /// applied and the result is ordered. Equal keys keep catalog order.
    pub fn suggest(
        &self,
        inventory: &[InventoryEntry],
        preferences: &Preferences,
        query: &SuggestionQuery,
    ) -> Vec<ScoredRecipe<'_>> {
        let index = InventoryIndex::build(inventory);
        let filter = self.dietary_filter();
        let allowed = filter.retain(self.catalog.recipes(), preferences.dietary.as_ref());

        let mut scored: Vec<ScoredRecipe<'_>> = allowed
            .into_iter()
            .map(|recipe| {
                self.scorer.score(
                    &index,
                    recipe,
                    query.servings,
                    preferences.is_favorite(&recipe.name),
                )
            })
            .filter(|scored| query.accepts(scored))
            .collect();

        query.order(&mut scored);
        if let Some(limit) = query.limit {
            scored.truncate(limit);
        }

        tracing::debug!(
            catalog = self.catalog.len(),
            returned = scored.len(),
            "ranked recipes"
        );
        scored
    }

    /// Scores a single recipe, ignoring dietary preferences.
    pub fn score<'a>(
        &self,
        inventory: &[InventoryEntry],
        recipe: &'a Recipe,
        servings: Servings,
        favorite: bool,
    ) -> ScoredRecipe<'a> {
        let index = InventoryIndex::build(inventory);
        self.scorer.score(&index, recipe, servings, favorite)
    }

    /// Declared names of the ingredients `inventory` is short of.
    pub fn missing(
        &self,
        inventory: &[InventoryEntry],
        recipe: &Recipe,
        servings: Servings,
    ) -> Vec<String> {
        missing_ingredients(&InventoryIndex::build(inventory), recipe, servings)
    }

    /// Candidate recipes for an external recipe writer, given plain pantry names.
    pub fn candidates(
        &self,
        pantry: &[String],
        dietary: Option<&DietaryPreference>,
        max: usize,
    ) -> Vec<&Recipe> {
        self.catalog
            .candidates(&self.dietary_filter(), pantry, dietary, max)
    }
}
