//! Tests for inventory depletion after cooking.
mod common;
use common::*;
use pantry::prelude::*;

fn quantity_of(inventory: &[InventoryEntry], name: &str) -> f64 {
    inventory
        .iter()
        .filter(|e| normalize(&e.base_name) == normalize(name))
        .map(|e| e.quantity)
        .sum()
}

#[test]
fn test_cooking_uses_up_exact_stock() {
    let inventory = create_pasta_inventory();
    let outcome = deplete(&inventory, &create_tomato_pasta(), Servings::ONE);

    let tomatoes = &outcome.inventory[0];
    assert_eq!(tomatoes.quantity, 0.0);
    assert_eq!(tomatoes.status, ItemStatus::Used);
    assert!(outcome.inventory.iter().all(|e| e.status == ItemStatus::Used));
    assert_eq!(outcome.inventory.len(), 3, "used entries stay in the inventory");
}

#[test]
fn test_depletion_is_clamped_at_zero() {
    let inventory = create_pasta_inventory();
    let outcome = deplete(&inventory, &create_tomato_pasta(), Servings::new(3.0));

    assert!(outcome.inventory.iter().all(|e| e.quantity >= 0.0));
    let tomatoes = &outcome.depletions[0];
    assert_eq!(tomatoes.requested, 6.0);
    assert_eq!(tomatoes.consumed, 2.0);
    assert!(tomatoes.is_short());
}

#[test]
fn test_input_snapshot_is_untouched() {
    let inventory = create_pasta_inventory();
    let before = inventory.clone();
    let _ = deplete(&inventory, &create_tomato_pasta(), Servings::ONE);
    assert_eq!(inventory, before);
}

#[test]
fn test_unknown_ingredients_are_skipped() {
    let inventory = vec![InventoryEntry::new("Tomatoes", 5.0, "units", Location::Fridge)];
    let recipe = Recipe::new("Caprese", [("Tomatoes", 2.0), ("Mozzarella", 1.0), ("Basil", 1.0)]);

    let outcome = deplete(&inventory, &recipe, Servings::ONE);
    assert_eq!(outcome.skipped, vec!["Mozzarella", "Basil"]);
    assert_eq!(outcome.depletions.len(), 1);
    assert_eq!(quantity_of(&outcome.inventory, "tomatoes"), 3.0);
    assert_eq!(outcome.inventory[0].status, ItemStatus::Fresh);
}

#[test]
fn test_consumption_scales_with_servings() {
    let inventory = vec![
        InventoryEntry::new("Rice", 1.0, "kg", Location::Pantry),
        InventoryEntry::new("Milk", 1.0, "L", Location::Fridge),
        InventoryEntry::new("Sugar", 100.0, "g", Location::Pantry),
    ];
    let engine = create_engine();
    let pudding = engine.recipe("Milk Pudding").unwrap();

    let outcome = deplete(&inventory, pudding, Servings::new(2.0));
    assert_eq!(quantity_of(&outcome.inventory, "Sugar"), 50.0);
    assert!((quantity_of(&outcome.inventory, "Milk") - 0.4).abs() < 1e-9);
    assert!((quantity_of(&outcome.inventory, "Rice") - 0.8).abs() < 1e-9);
    assert!(outcome.inventory.iter().all(|e| e.status == ItemStatus::Fresh));
}

#[test]
fn test_shared_names_are_drained_in_inventory_order() {
    let inventory = vec![
        InventoryEntry::new("Tomatoes", 1.0, "units", Location::Fridge),
        InventoryEntry::new("Olive Oil", 100.0, "ml", Location::Pantry),
        InventoryEntry::new("tomatoes", 3.0, "units", Location::Pantry),
    ];
    let recipe = Recipe::new("Tomato salad", [("Tomatoes", 2.0), ("Olive Oil", 5.0)]);

    let outcome = deplete(&inventory, &recipe, Servings::ONE);
    assert_eq!(outcome.inventory[0].quantity, 0.0);
    assert_eq!(outcome.inventory[0].status, ItemStatus::Used);
    assert_eq!(outcome.inventory[2].quantity, 2.0);
    assert_eq!(outcome.inventory[2].status, ItemStatus::Fresh);
    assert_eq!(outcome.depletions[0].consumed, 2.0);
}

#[test]
fn test_matching_on_normalized_names() {
    let inventory = vec![InventoryEntry::new("  Jamón ", 200.0, "g", Location::Fridge)];
    let recipe = Recipe::new("Bocadillo", [("jamon", 50.0)]);
    let outcome = deplete(&inventory, &recipe, Servings::ONE);
    assert_eq!(outcome.inventory[0].quantity, 150.0);
}

#[test]
fn test_cooking_a_covered_recipe_leaves_nothing_missing_beforehand() {
    let engine = create_engine();
    let inventory = create_pasta_inventory();
    let recipe = engine.recipe("Tomato Pasta").unwrap();

    let scored = engine.score(&inventory, recipe, Servings::ONE, false);
    assert!(scored.is_cookable());
    assert!(engine.missing(&inventory, recipe, Servings::ONE).is_empty());

    let outcome = deplete(&inventory, recipe, Servings::ONE);
    assert!(outcome.depletions.iter().all(|d| !d.is_short()));
}

#[test]
fn test_untouched_empty_entries_keep_their_status() {
    let inventory = vec![
        InventoryEntry::new("Tomatoes", 2.0, "units", Location::Fridge),
        InventoryEntry::new("Tomatoes", 0.0, "units", Location::Pantry)
            .with_status(ItemStatus::ExpiringSoon),
        InventoryEntry::new("Tomatoes", 0.0, "units", Location::Freezer),
    ];
    let recipe = Recipe::new("Tomato salad", [("Tomatoes", 1.0)]);

    let outcome = deplete(&inventory, &recipe, Servings::ONE);
    assert_eq!(outcome.inventory[0].quantity, 1.0);
    assert_eq!(outcome.inventory[0].status, ItemStatus::Fresh);
    assert_eq!(outcome.inventory[1].status, ItemStatus::ExpiringSoon);
    assert_eq!(outcome.inventory[2].status, ItemStatus::Fresh);
}
