use crate::index::InventoryIndex;
use crate::model::{Recipe, Servings};

/// Names of the required ingredients the inventory cannot cover for the
/// given number of servings.
///
/// Names are returned as the recipe declares them, in declaration order, so
/// they can go straight onto a shopping list.
pub fn missing_ingredients(
    index: &InventoryIndex,
    recipe: &Recipe,
    servings: Servings,
) -> Vec<String> {
    recipe
        .ingredients()
        .iter()
        .filter(|ingredient| {
            index.available_normalized(&ingredient.key) < servings.scale(ingredient.quantity)
        })
        .map(|ingredient| ingredient.name.clone())
        .collect()
}
