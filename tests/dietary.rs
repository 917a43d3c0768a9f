//! Tests for dietary filtering and the allergen classifier seam.
mod common;
use common::*;
use pantry::prelude::*;

fn spanish_engine() -> Engine {
    Engine::builder(RecipeCatalog::new(create_spanish_recipes()).unwrap()).build()
}

fn pref(f: impl FnOnce(&mut DietaryPreference)) -> DietaryPreference {
    let mut p = DietaryPreference::default();
    f(&mut p);
    p
}

#[test]
fn test_vegan_excludes_egg_regardless_of_inventory() {
    let engine = spanish_engine();
    let tortilla = engine.recipe("Tortilla de patata").unwrap();
    let vegan = pref(|p| p.vegan = true);

    assert_eq!(
        engine.exclusion_reasons(tortilla, Some(&vegan)),
        vec![DietaryRule::Vegan]
    );

    let inventory = vec![
        InventoryEntry::new("patatas", 5.0, "units", Location::Pantry),
        InventoryEntry::new("huevo", 6.0, "units", Location::Fridge),
        InventoryEntry::new("cebolla", 2.0, "units", Location::Pantry),
        InventoryEntry::new("aceite de oliva", 1.0, "L", Location::Pantry),
    ];
    let prefs = Preferences {
        dietary: Some(vegan),
        ..Preferences::default()
    };
    let ranked = engine.suggest(&inventory, &prefs, &SuggestionQuery::new());
    assert!(names(&ranked).iter().all(|n| n != "Tortilla de patata"));
}

#[test]
fn test_no_preference_excludes_nothing() {
    let engine = spanish_engine();
    let filter = engine.dietary_filter();
    for recipe in engine.catalog().recipes() {
        assert!(!filter.is_excluded(recipe, None));
        assert!(!filter.is_excluded(recipe, Some(&DietaryPreference::default())));
    }
}

#[test]
fn test_each_rule_applies_independently() {
    let engine = spanish_engine();
    let catalog = engine.catalog();
    let filter = engine.dietary_filter();

    let vegetarian = pref(|p| p.vegetarian = true);
    let kept = filter.retain(catalog.recipes(), Some(&vegetarian));
    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|r| r.name != "Pasta con atún"));

    let gluten_free = pref(|p| p.gluten_free = true);
    let kept: Vec<&str> = filter
        .retain(catalog.recipes(), Some(&gluten_free))
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(kept, vec!["Tortilla de patata", "Garbanzos con espinacas"]);

    let toast = catalog.get("Tostadas con mantequilla de cacahuete").unwrap();
    let strict = pref(|p| {
        p.gluten_free = true;
        p.lactose_free = true;
        p.nut_free = true;
    });
    assert_eq!(
        filter.exclusion_reasons(toast, Some(&strict)),
        vec![
            DietaryRule::GlutenFree,
            DietaryRule::LactoseFree,
            DietaryRule::NutFree
        ]
    );
}

#[test]
fn test_vegan_also_excludes_meat() {
    let engine = spanish_engine();
    let vegan = pref(|p| p.vegan = true);
    let pasta = engine.recipe("Pasta con atún").unwrap();
    assert!(engine.dietary_filter().is_excluded(pasta, Some(&vegan)));

    let garbanzos = engine.recipe("garbanzos con espinacas").unwrap();
    assert!(!engine.dietary_filter().is_excluded(garbanzos, Some(&vegan)));
}

#[test]
fn test_builtin_milk_pudding_is_not_vegan() {
    let engine = create_engine();
    let vegan = pref(|p| p.vegan = true);
    let prefs = Preferences {
        dietary: Some(vegan),
        ..Preferences::default()
    };
    let ranked = engine.suggest(&[], &prefs, &SuggestionQuery::new());
    // Chicken is meat and milk is an animal product; only the pasta survives.
    assert_eq!(names(&ranked), vec!["Tomato Pasta"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let engine = spanish_engine();
    let filter = engine.dietary_filter();
    let p = pref(|p| {
        p.vegetarian = true;
        p.nut_free = true;
    });

    let once: Vec<Recipe> = filter
        .retain(engine.catalog().recipes(), Some(&p))
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Recipe> = filter
        .retain(&once, Some(&p))
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
}

#[test]
fn test_recipe_allergens_are_derived_from_ingredients() {
    let engine = spanish_engine();
    let toast = engine.recipe("Tostadas con mantequilla de cacahuete").unwrap();
    let tags = engine.dietary_filter().allergens(toast);
    assert!(tags.contains(AllergenTags::GLUTEN | AllergenTags::NUTS | AllergenTags::DAIRY));
    assert!(!tags.contains(AllergenTags::MEAT));
}

struct EverythingHasNuts;

impl AllergenClassifier for EverythingHasNuts {
    fn classify(&self, _ingredient: &str) -> AllergenTags {
        AllergenTags::NUTS
    }
}

#[test]
fn test_custom_classifier_replaces_patterns() {
    let engine = Engine::builder(RecipeCatalog::builtin())
        .with_classifier(Box::new(EverythingHasNuts))
        .build();
    let prefs = Preferences {
        dietary: Some(pref(|p| p.nut_free = true)),
        ..Preferences::default()
    };
    assert!(engine.suggest(&[], &prefs, &SuggestionQuery::new()).is_empty());

    let vegan = Preferences {
        dietary: Some(pref(|p| p.vegan = true)),
        ..Preferences::default()
    };
    assert_eq!(engine.suggest(&[], &vegan, &SuggestionQuery::new()).len(), 3);
}

#[test]
fn test_vegetarian_catches_meat_inside_longer_names() {
    let engine = create_engine();
    let vegetarian = pref(|p| p.vegetarian = true);
    for ingredient in ["Chicken breast", "pechuga de pollo", "carne picada"] {
        let recipe = Recipe::new("Plato", [(ingredient, 1.0)]);
        assert_eq!(
            engine.exclusion_reasons(&recipe, Some(&vegetarian)),
            vec![DietaryRule::Vegetarian],
            "{ingredient}"
        );
    }
}
