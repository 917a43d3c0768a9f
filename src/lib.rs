//! # Pantry - Recipe Matching and Scoring Engine
//!
//! **Pantry** ranks a recipe catalog against what a household actually has on
//! its shelves. It works out which recipes can be cooked right now, what is
//! missing for the rest, filters out recipes that break dietary restrictions
//! and updates the inventory when a meal is cooked.
//!
//! ## Core Workflow
//!
//! Every engine operation is a pure function of its inputs: it takes a
//! snapshot of the inventory and preferences and returns derived data or a new
//! snapshot. State lives in a [`pantry::Pantry`] owned by the caller.
//!
//! 1.  **Load a catalog**: use [`catalog::RecipeCatalog::builtin`], parse JSON with
//!     [`catalog::RecipeCatalog::from_json`], or implement [`catalog::IntoRecipes`] for your own format.
//! 2.  **Build an engine**: `Engine::builder(catalog)` accepts a [`scoring::ScoringConfig`]
//!     and an optional custom [`dietary::AllergenClassifier`].
//! 3.  **Suggest**: `engine.suggest(inventory, preferences, query)` returns recipes ranked
//!     by feasibility score.
//! 4.  **Cook or shop**: [`cook::deplete`] (or [`pantry::Pantry::cook`]) consumes ingredients,
//!     and the missing list feeds the shopping list.
//!
//! ## Quick Start
//!
//! ```rust
//! use pantry::prelude::*;
//!
//! let engine = Engine::builder(RecipeCatalog::builtin()).build();
//!
//! let mut pantry = Pantry::new();
//! pantry.add_item("Tomatoes", 2.0, "units", Location::Fridge);
//! pantry.add_item("Pasta", 1.0, "packs", Location::Pantry);
//! pantry.add_item("Olive Oil", 15.0, "ml", Location::Pantry);
//!
//! let ranked = pantry.suggest(&engine, &SuggestionQuery::new());
//! assert_eq!(ranked[0].recipe.name, "Tomato Pasta");
//! assert!(ranked[0].missing.is_empty());
//!
//! let report = pantry.cook(&engine, "Tomato Pasta", Servings::ONE).unwrap();
//! assert!(report.used_up.contains(&"Tomatoes".to_string()));
//! ```

pub mod analytics;
pub mod catalog;
pub mod cook;
pub mod data;
pub mod dietary;
pub mod engine;
pub mod error;
pub mod index;
pub mod model;
pub mod normalize;
pub mod pantry;
pub mod prelude;
pub mod report;
pub mod scoring;
pub mod shopping;
