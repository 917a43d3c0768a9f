use clap::Parser;
use pantry::data::PantrySnapshot;
use pantry::model::{InventoryEntry, ItemStatus, Location};
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate a synthetic recipe catalog and pantry snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where to write the generated pantry snapshot
    #[arg(long, default_value = "generated_pantry.json")]
    snapshot: String,

    /// Where to write the generated recipe catalog
    #[arg(long, default_value = "generated_recipes.json")]
    catalog: String,

    /// Number of recipes to generate
    #[arg(long, default_value_t = 200)]
    recipes: usize,

    /// Minimum number of ingredients per recipe
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// Maximum number of ingredients per recipe
    #[arg(long, default_value_t = 8)]
    max: usize,
}

const INGREDIENTS: &[(&str, &str, f64)] = &[
    ("Tomatoes", "units", 4.0),
    ("Onion", "units", 2.0),
    ("Garlic", "cloves", 3.0),
    ("Olive Oil", "ml", 30.0),
    ("Pasta", "packs", 1.0),
    ("Rice", "kg", 0.3),
    ("Chicken", "g", 300.0),
    ("Beef", "g", 250.0),
    ("Milk", "L", 0.5),
    ("Cheese", "g", 100.0),
    ("Eggs", "units", 3.0),
    ("Flour", "g", 200.0),
    ("Butter", "g", 50.0),
    ("Sugar", "g", 80.0),
    ("Spinach", "g", 150.0),
    ("Chickpeas", "g", 200.0),
    ("Almonds", "g", 40.0),
    ("Lettuce", "units", 1.0),
    ("Broccoli", "g", 200.0),
    ("Yogurt", "g", 125.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.min > cli.max || cli.max > INGREDIENTS.len() {
        eprintln!(
            "Error: need --min ({}) <= --max ({}) <= {}",
            cli.min,
            cli.max,
            INGREDIENTS.len()
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} recipes ({} to {} ingredients each)...",
        cli.recipes, cli.min, cli.max
    );

    let catalog: Vec<Value> = (0..cli.recipes)
        .map(|i| generate_recipe(&mut rng, i, cli.min, cli.max))
        .collect();
    fs::write(&cli.catalog, serde_json::to_string_pretty(&catalog)?)?;
    println!("-> Wrote catalog to '{}'", cli.catalog);

    let snapshot = PantrySnapshot {
        inventory: generate_inventory(&mut rng),
        ..PantrySnapshot::default()
    };
    snapshot.save(&cli.snapshot)?;
    println!(
        "-> Wrote {} inventory entries to '{}'",
        snapshot.inventory.len(),
        cli.snapshot
    );

    Ok(())
}

fn generate_recipe(rng: &mut ThreadRng, i: usize, min: usize, max: usize) -> Value {
    let count = rng.random_range(min..=max);
    let mut uses = Map::new();
    for (name, _, typical) in INGREDIENTS.choose_multiple(rng, count) {
        let qty = (typical * rng.random_range(0.25..1.0) * 100.0).round() / 100.0;
        uses.insert(name.to_string(), json!(qty));
    }
    let difficulty = ["Easy", "Medium", "Hard"]
        .choose(rng)
        .copied()
        .unwrap_or("Easy");

    json!({
        "name": format!("Recipe {:04}", i),
        "uses": uses,
        "time": format!("{} min", rng.random_range(5..=90)),
        "difficulty": difficulty,
        "rating": (rng.random_range(30..=50) as f32) / 10.0,
        "tags": [],
    })
}

fn generate_inventory(rng: &mut ThreadRng) -> Vec<InventoryEntry> {
    let statuses = [
        ItemStatus::Fresh,
        ItemStatus::Fresh,
        ItemStatus::ExpiringSoon,
        ItemStatus::LongShelfLife,
    ];
    let mut inventory = Vec::new();
    for (name, unit, typical) in INGREDIENTS {
        if !rng.random_bool(0.7) {
            continue;
        }
        let location = *Location::ALL.choose(rng).unwrap_or(&Location::Pantry);
        let status = *statuses.choose(rng).unwrap_or(&ItemStatus::Fresh);
        let qty = (typical * rng.random_range(0.0..3.0) * 100.0).round() / 100.0;
        inventory.push(InventoryEntry::new(name, qty, unit, location).with_status(status));
    }
    inventory
}
