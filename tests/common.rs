//! Common test utilities for building inventories and recipes.
use pantry::prelude::*;

/// Inventory that exactly covers one serving of `Tomato Pasta`.
#[allow(dead_code)]
pub fn create_pasta_inventory() -> Vec<InventoryEntry> {
    vec![
        InventoryEntry::new("Tomatoes", 2.0, "units", Location::Fridge),
        InventoryEntry::new("Pasta", 1.0, "packs", Location::Pantry),
        InventoryEntry::new("Olive Oil", 15.0, "ml", Location::Pantry),
    ]
}

/// `Tomato Pasta`: `{Tomatoes: 2, Pasta: 1, Olive Oil: 15}`, 20 minutes.
#[allow(dead_code)]
pub fn create_tomato_pasta() -> Recipe {
    Recipe::new(
        "Tomato Pasta",
        [("Tomatoes", 2.0), ("Pasta", 1.0), ("Olive Oil", 15.0)],
    )
    .with_time(20)
    .with_difficulty(Difficulty::Easy)
    .with_tags(["Vegetarian", "Quick"])
}

/// A small Spanish-language catalog, one unit per ingredient.
#[allow(dead_code)]
pub fn create_spanish_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Tortilla de patata",
            [
                ("patatas", 1.0),
                ("huevo", 1.0),
                ("cebolla", 1.0),
                ("aceite de oliva", 1.0),
            ],
        )
        .with_time(35),
        Recipe::new(
            "Garbanzos con espinacas",
            [
                ("garbanzos cocidos", 1.0),
                ("espinacas", 1.0),
                ("ajo", 1.0),
                ("pimentón", 1.0),
            ],
        )
        .with_time(18)
        .with_tags(["vegano", "rápido"]),
        Recipe::new(
            "Pasta con atún",
            [("pasta", 1.0), ("atún", 1.0), ("tomate triturado", 1.0)],
        )
        .with_time(15),
        Recipe::new(
            "Tostadas con mantequilla de cacahuete",
            [("pan", 1.0), ("mantequilla de cacahuete", 1.0)],
        )
        .with_time(5),
    ]
}

/// The built-in catalog wrapped in an engine with default settings.
#[allow(dead_code)]
pub fn create_engine() -> Engine {
    Engine::builder(RecipeCatalog::builtin()).build()
}

/// Names of scored recipes, in order.
#[allow(dead_code)]
pub fn names(scored: &[ScoredRecipe<'_>]) -> Vec<String> {
    scored.iter().map(|s| s.recipe.name.clone()).collect()
}
