//! Tests for the feasibility scorer, the missing-ingredient resolver and ranking.
mod common;
use common::*;
use pantry::prelude::*;
use pantry::scoring::missing_ingredients;

#[test]
fn test_fully_stocked_recipe_scores_full_coverage() {
    let inventory = create_pasta_inventory();
    let recipe = create_tomato_pasta();
    let index = InventoryIndex::build(&inventory);

    let scored = Scorer::default().score(&index, &recipe, Servings::ONE, false);
    assert_eq!(scored.have_count, 3);
    assert_eq!(scored.required_count, 3);
    assert_eq!(scored.breakdown.coverage, 100.0);
    assert!(scored.missing.is_empty());
    assert!(scored.is_cookable());
    // 100 coverage + 8 for a 20 minute recipe
    assert_eq!(scored.score, 108);
}

#[test]
fn test_double_servings_makes_everything_missing() {
    let inventory = create_pasta_inventory();
    let recipe = create_tomato_pasta();
    let index = InventoryIndex::build(&inventory);

    let scored = Scorer::default().score(&index, &recipe, Servings::new(2.0), false);
    assert_eq!(scored.have_count, 0);
    assert_eq!(scored.missing, vec!["Tomatoes", "Pasta", "Olive Oil"]);
    assert_eq!(scored.missing_count(), 3);
    assert_eq!(scored.score, 8);
}

#[test]
fn test_recipe_without_requirements_is_fully_feasible() {
    let recipe = Recipe::new("Glass of water", Vec::<(String, f64)>::new()).with_time(1);
    let index = InventoryIndex::build(&[]);

    let scored = Scorer::default().score(&index, &recipe, Servings::ONE, false);
    assert_eq!(scored.have_count, 0);
    assert_eq!(scored.required_count, 0);
    assert_eq!(scored.breakdown.coverage, 100.0);
    assert!(scored.missing.is_empty());
}

#[test]
fn test_favorite_bonus_can_push_score_past_100() {
    let inventory = create_pasta_inventory();
    let recipe = create_tomato_pasta();
    let index = InventoryIndex::build(&inventory);

    let scored = Scorer::default().score(&index, &recipe, Servings::ONE, true);
    assert_eq!(scored.score, 118);
    assert_eq!(scored.breakdown.favorite_bonus, 10.0);
}

#[test]
fn test_partial_coverage_is_rounded() {
    let inventory = vec![InventoryEntry::new("Olive Oil", 15.0, "ml", Location::Pantry)];
    let engine = create_engine();
    let recipe = engine.recipe("Chicken & Rice Bowl").unwrap();

    let scored = engine.score(&inventory, recipe, Servings::ONE, false);
    assert_eq!(scored.have_count, 1);
    assert_eq!(scored.score, 33);
    assert_eq!(scored.missing, vec!["Chicken", "Rice"]);
}

#[test]
fn test_invalid_servings_fall_back_to_one() {
    let inventory = create_pasta_inventory();
    let recipe = create_tomato_pasta();
    let index = InventoryIndex::build(&inventory);

    for servings in [0.0, -2.0, f64::NAN] {
        let scored = Scorer::default().score(&index, &recipe, Servings::new(servings), false);
        assert_eq!(scored.have_count, 3);
    }
}

#[test]
fn test_matching_ignores_case_and_accents() {
    let inventory = vec![
        InventoryEntry::new("Atún", 1.0, "cans", Location::Pantry),
        InventoryEntry::new("PASTA", 1.0, "packs", Location::Pantry),
    ];
    let recipe = Recipe::new("Pasta con atun", [("atun", 1.0), ("pasta", 1.0)]);
    let missing = missing_ingredients(&InventoryIndex::build(&inventory), &recipe, Servings::ONE);
    assert!(missing.is_empty());
}

#[test]
fn test_missing_keeps_declared_names_and_order() {
    let recipe = Recipe::new(
        "Gazpacho",
        [("Tomates", 4.0), ("Pepino", 1.0), ("Ajo", 1.0), ("Pimiento", 1.0)],
    );
    let inventory = vec![InventoryEntry::new("pepino", 1.0, "units", Location::Fridge)];
    let missing = missing_ingredients(&InventoryIndex::build(&inventory), &recipe, Servings::ONE);
    assert_eq!(missing, vec!["Tomates", "Ajo", "Pimiento"]);
}

#[test]
fn test_missing_is_empty_whenever_cookable() {
    let inventory = vec![
        InventoryEntry::new("Tomatoes", 10.0, "units", Location::Fridge),
        InventoryEntry::new("Pasta", 5.0, "packs", Location::Pantry),
        InventoryEntry::new("Olive Oil", 80.0, "ml", Location::Pantry),
    ];
    let recipe = create_tomato_pasta();
    let index = InventoryIndex::build(&inventory);

    for servings in 1..=6u32 {
        let scored = Scorer::default().score(&index, &recipe, Servings::from(servings), false);
        assert_eq!(scored.is_cookable(), scored.missing.is_empty());
    }
}

#[test]
fn test_index_is_order_independent_and_sums_entries() {
    let mut entries = vec![
        InventoryEntry::new("Rice", 1.0, "kg", Location::Pantry),
        InventoryEntry::new("rice", 200.0, "g", Location::Pantry),
        InventoryEntry::new("Milk", 1.0, "L", Location::Fridge),
        InventoryEntry::new("Ríce ", 3.0, "kg", Location::Freezer),
    ];
    let forward = InventoryIndex::build(&entries);
    entries.reverse();
    let backward = InventoryIndex::build(&entries);

    assert_eq!(forward, backward);
    assert_eq!(forward.available("RICE"), 204.0);
    assert_eq!(forward.available("milk"), 1.0);
    assert_eq!(forward.available("sugar"), 0.0);
    assert_eq!(forward.len(), 2);
}

#[test]
fn test_suggest_ranks_by_score() {
    let engine = create_engine();
    let inventory = create_pasta_inventory();

    let ranked = engine.suggest(&inventory, &Preferences::default(), &SuggestionQuery::new());
    assert_eq!(
        names(&ranked),
        vec!["Tomato Pasta", "Chicken & Rice Bowl", "Milk Pudding"]
    );
    assert_eq!(ranked[0].score, 108);
    assert_eq!(ranked[1].score, 33);
    assert_eq!(ranked[2].score, 0);
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let recipes = vec![
        Recipe::new("Zucchini bake", [("Zucchini", 1.0)]),
        Recipe::new("Apple pie", [("Apples", 1.0)]),
        Recipe::new("Mango salad", [("Mango", 1.0)]),
    ];
    let engine = Engine::builder(RecipeCatalog::new(recipes.clone()).unwrap()).build();
    let ranked = engine.suggest(&[], &Preferences::default(), &SuggestionQuery::new());
    assert_eq!(names(&ranked), vec!["Zucchini bake", "Apple pie", "Mango salad"]);

    let reversed: Vec<Recipe> = recipes.into_iter().rev().collect();
    let engine = Engine::builder(RecipeCatalog::new(reversed).unwrap()).build();
    let ranked = engine.suggest(&[], &Preferences::default(), &SuggestionQuery::new());
    assert_eq!(names(&ranked), vec!["Mango salad", "Apple pie", "Zucchini bake"]);
}

#[test]
fn test_favorites_change_ranking() {
    let engine = create_engine();
    let mut preferences = Preferences::default();
    preferences.toggle_favorite("Milk Pudding");

    let ranked = engine.suggest(&[], &preferences, &SuggestionQuery::new());
    // Tomato Pasta has the quick bonus (8), Milk Pudding the favorite bonus (10).
    assert_eq!(names(&ranked)[0], "Milk Pudding");
    assert_eq!(ranked[0].score, 10);
    assert_eq!(ranked[1].score, 8);
}

#[test]
fn test_cookable_only_filter() {
    let engine = create_engine();
    let inventory = create_pasta_inventory();
    let query = SuggestionQuery::new().cookable_only(true);

    let ranked = engine.suggest(&inventory, &Preferences::default(), &query);
    assert_eq!(names(&ranked), vec!["Tomato Pasta"]);

    let ranked = engine.suggest(&[], &Preferences::default(), &query);
    assert!(ranked.is_empty());
}

#[test]
fn test_query_filters_and_sort_orders() {
    let engine = create_engine();
    let prefs = Preferences::default();

    let by_tag = engine.suggest(&[], &prefs, &SuggestionQuery::new().search("dessert"));
    assert_eq!(names(&by_tag), vec!["Milk Pudding"]);

    let by_ingredient = engine.suggest(&[], &prefs, &SuggestionQuery::new().search("  RICE"));
    assert_eq!(names(&by_ingredient), vec!["Chicken & Rice Bowl", "Milk Pudding"]);

    let quick = engine.suggest(&[], &prefs, &SuggestionQuery::new().max_time(25));
    assert_eq!(names(&quick), vec!["Tomato Pasta", "Milk Pudding"]);

    let medium = engine.suggest(
        &[],
        &prefs,
        &SuggestionQuery::new().difficulty(Difficulty::Medium),
    );
    assert_eq!(names(&medium), vec!["Chicken & Rice Bowl"]);

    let by_time = engine.suggest(&[], &prefs, &SuggestionQuery::new().sort(SortOrder::Time));
    assert_eq!(
        names(&by_time),
        vec!["Tomato Pasta", "Milk Pudding", "Chicken & Rice Bowl"]
    );

    let by_name = engine.suggest(&[], &prefs, &SuggestionQuery::new().sort(SortOrder::Name));
    assert_eq!(
        names(&by_name),
        vec!["Chicken & Rice Bowl", "Milk Pudding", "Tomato Pasta"]
    );

    let limited = engine.suggest(&[], &prefs, &SuggestionQuery::new().limit(1));
    assert_eq!(limited.len(), 1);
}

#[test]
fn test_custom_scoring_config() {
    let config = ScoringConfig {
        quick_threshold_minutes: 30,
        quick_bonus: 5.0,
        favorite_bonus: 0.0,
    };
    let engine = Engine::builder(RecipeCatalog::builtin())
        .with_config(config)
        .build();
    let mut prefs = Preferences::default();
    prefs.toggle_favorite("Tomato Pasta");

    let ranked = engine.suggest(&[], &prefs, &SuggestionQuery::new());
    let pudding = ranked.iter().find(|s| s.recipe.name == "Milk Pudding").unwrap();
    let pasta = ranked.iter().find(|s| s.recipe.name == "Tomato Pasta").unwrap();
    assert_eq!(pudding.score, 5);
    assert_eq!(pasta.score, 5);
}
