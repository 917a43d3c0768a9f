//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the pantry crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use pantry::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = RecipeCatalog::from_json(&std::fs::read_to_string("path/to/recipes.json")?)?;
//! let snapshot = PantrySnapshot::from_file("path/to/pantry.json")?;
//! let pantry = Pantry::from_snapshot(snapshot);
//!
//! let engine = Engine::builder(catalog).build();
//! for scored in pantry.suggest(&engine, &SuggestionQuery::new().cookable_only(true)) {
//!     println!("{}", ScoreFormatter::format_line(&scored));
//! }
//! # Ok(())
//! # }
//! ```

// Engine and catalog
pub use crate::catalog::{IntoRecipes, RecipeCatalog};
pub use crate::engine::{Engine, EngineBuilder};

// Domain model
pub use crate::model::{
    Category, DietaryPreference, Difficulty, InventoryEntry, ItemKey, ItemStatus, Location,
    Preferences, Recipe, Servings,
};

// Core operations
pub use crate::cook::{CookOutcome, deplete};
pub use crate::dietary::{AllergenClassifier, AllergenTags, DietaryFilter, DietaryRule};
pub use crate::index::InventoryIndex;
pub use crate::normalize::normalize;
pub use crate::scoring::{ScoredRecipe, Scorer, ScoringConfig, SortOrder, SuggestionQuery};

// State and persistence
pub use crate::data::PantrySnapshot;
pub use crate::pantry::{CookReport, Pantry};
pub use crate::shopping::{ShoppingList, ShoppingRow};

// Error types
pub use crate::error::{CatalogError, PantryError, SnapshotError};

// Reporting
pub use crate::report::ScoreFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
