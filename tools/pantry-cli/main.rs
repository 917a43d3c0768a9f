use clap::{Args, Parser, Subcommand, ValueEnum};
use pantry::analytics::{InventorySummary, top_cooked};
use pantry::catalog::DEFAULT_CANDIDATES;
use pantry::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Recipe suggestions and pantry bookkeeping from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the pantry snapshot JSON file. Uses a demo pantry when omitted.
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    /// Path to a recipe catalog JSON file. Uses the built-in recipes when omitted.
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Path to a scoring configuration JSON file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank recipes against the pantry
    Suggest(SuggestArgs),
    /// List what a recipe still needs
    Missing {
        recipe: String,
        #[arg(long, default_value_t = 1.0)]
        servings: f64,
    },
    /// Cook a recipe and write the depleted inventory back to the snapshot
    Cook {
        recipe: String,
        #[arg(long, default_value_t = 1.0)]
        servings: f64,
    },
    /// Add a recipe's missing ingredients to the shopping list
    Shop {
        recipe: String,
        #[arg(long, default_value_t = 1.0)]
        servings: f64,
    },
    /// Pick candidate recipes for a list of pantry item names
    Candidates {
        items: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_CANDIDATES)]
        max: usize,
        #[command(flatten)]
        diet: DietArgs,
    },
    /// Show inventory statistics
    Summary {
        #[arg(long, value_enum)]
        location: Option<LocationCli>,
    },
}

#[derive(Args, Debug)]
struct SuggestArgs {
    #[arg(long, default_value_t = 1.0)]
    servings: f64,
    /// Only show recipes with nothing missing
    #[arg(long)]
    cookable: bool,
    /// Free-text search over names, tags and ingredients
    #[arg(short, long)]
    query: Option<String>,
    #[arg(long)]
    max_time: Option<u32>,
    #[arg(long, value_enum)]
    difficulty: Vec<DifficultyCli>,
    #[arg(long, value_enum, default_value = "score")]
    sort: SortCli,
    #[arg(long)]
    limit: Option<usize>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    diet: DietArgs,
}

#[derive(Args, Debug)]
struct DietArgs {
    #[arg(long)]
    vegan: bool,
    #[arg(long)]
    vegetarian: bool,
    #[arg(long)]
    gluten_free: bool,
    #[arg(long)]
    lactose_free: bool,
    #[arg(long)]
    nut_free: bool,
}

impl DietArgs {
    fn preference(&self) -> Option<DietaryPreference> {
        let pref = DietaryPreference {
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            gluten_free: self.gluten_free,
            lactose_free: self.lactose_free,
            nut_free: self.nut_free,
        };
        (!pref.is_unrestricted()).then_some(pref)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortCli {
    Score,
    Time,
    Name,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyCli {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocationCli {
    Pantry,
    Fridge,
    Freezer,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let engine = load_engine(&cli);
    let mut pantry = Pantry::from_snapshot(load_snapshot(cli.snapshot.as_deref()));

    match &cli.command {
        Command::Suggest(args) => run_suggest(&engine, &mut pantry, args),
        Command::Missing { recipe, servings } => {
            let recipe = find_recipe(&engine, recipe);
            let missing = engine.missing(pantry.inventory(), recipe, Servings::new(*servings));
            if missing.is_empty() {
                println!("Nothing missing for '{}'.", recipe.name);
            } else {
                println!("Missing for '{}':", recipe.name);
                for name in missing {
                    println!("  - {}", name);
                }
            }
        }
        Command::Cook { recipe, servings } => {
            let report = pantry
                .cook(&engine, recipe, Servings::new(*servings))
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("Cooked '{}'.", report.recipe);
            for d in &report.depletions {
                let note = if d.is_short() { " (short)" } else { "" };
                println!("  -> {}: used {} of {}{}", d.ingredient, d.consumed, d.requested, note);
            }
            for name in &report.skipped {
                println!("  -> {}: not in inventory, skipped", name);
            }
            if !report.used_up.is_empty() {
                println!("Used up: {}", report.used_up.join(", "));
            }
            save_snapshot(cli.snapshot.as_deref(), &pantry);
        }
        Command::Shop { recipe, servings } => {
            let recipe = find_recipe(&engine, recipe);
            let missing = engine.missing(pantry.inventory(), recipe, Servings::new(*servings));
            let keys = pantry.add_missing_to_shopping(&missing);
            println!("Added {} item(s) to the shopping list.", keys.len());
            save_snapshot(cli.snapshot.as_deref(), &pantry);
        }
        Command::Candidates { items, max, diet } => {
            let pref = diet.preference();
            for recipe in engine.candidates(items, pref.as_ref(), *max) {
                println!("  - {}", recipe.name);
            }
        }
        Command::Summary { location } => {
            let location = location.map(|l| match l {
                LocationCli::Pantry => Location::Pantry,
                LocationCli::Fridge => Location::Fridge,
                LocationCli::Freezer => Location::Freezer,
            });
            print_summary(&InventorySummary::build(pantry.inventory(), location));
            let top = top_cooked(pantry.history(), 5);
            if !top.is_empty() {
                println!("\nMost cooked:");
                for (name, count) in top {
                    println!("  {:>3}x {}", count, name);
                }
            }
        }
    }

    tracing::debug!(elapsed = ?start.elapsed(), "done");
}

fn run_suggest(engine: &Engine, pantry: &mut Pantry, args: &SuggestArgs) {
    if let Some(pref) = args.diet.preference() {
        pantry.set_dietary(Some(pref));
    }

    let mut query = SuggestionQuery::new()
        .servings(args.servings)
        .cookable_only(args.cookable)
        .sort(match args.sort {
            SortCli::Score => SortOrder::Score,
            SortCli::Time => SortOrder::Time,
            SortCli::Name => SortOrder::Name,
        });
    if let Some(text) = &args.query {
        query = query.search(text);
    }
    if let Some(minutes) = args.max_time {
        query = query.max_time(minutes);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    for d in &args.difficulty {
        query = query.difficulty(match d {
            DifficultyCli::Easy => Difficulty::Easy,
            DifficultyCli::Medium => Difficulty::Medium,
            DifficultyCli::Hard => Difficulty::Hard,
        });
    }

    let ranked = pantry.suggest(engine, &query);
    if args.json {
        let json = serde_json::to_string_pretty(&ranked)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize results: {}", e)));
        println!("{}", json);
        return;
    }

    if ranked.is_empty() {
        println!("No recipes match.");
        return;
    }
    for scored in &ranked {
        println!("{}", ScoreFormatter::format_line(scored));
        println!("        {}", ScoreFormatter::format_breakdown(scored));
    }
}

fn print_summary(summary: &InventorySummary) {
    println!("--- Inventory Summary ---");
    println!("Items:          {}", summary.item_count);
    println!("Total quantity: {}", summary.total_quantity);
    for (location, qty) in &summary.by_location {
        println!("  {:<8} {}", location.to_string(), qty);
    }
    println!("By category:");
    for (category, qty) in &summary.by_category {
        println!("  {:<10} {}", category.to_string(), qty);
    }
    println!("Expiring soon:  {}", summary.expiring.join(", "));
    println!("Out of stock:   {}", summary.out_of_stock.join(", "));
}

fn load_engine(cli: &Cli) -> Engine {
    let catalog = match &cli.catalog {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
            });
            RecipeCatalog::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid catalog: {}", e)))
        }
        None => RecipeCatalog::builtin(),
    };

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            serde_json::from_str(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid config: {}", e)))
        }
        None => ScoringConfig::default(),
    };

    Engine::builder(catalog).with_config(config).build()
}

fn load_snapshot(path: Option<&str>) -> PantrySnapshot {
    match path {
        Some(path) => PantrySnapshot::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e))),
        None => {
            tracing::info!("no snapshot file provided, using demo pantry");
            PantrySnapshot::demo()
        }
    }
}

fn save_snapshot(path: Option<&str>, pantry: &Pantry) {
    match path {
        Some(path) => {
            pantry
                .to_snapshot()
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
            println!("Snapshot written to '{}'.", path);
        }
        None => println!("(demo pantry, changes not saved)"),
    }
}

fn find_recipe<'e>(engine: &'e Engine, name: &str) -> &'e Recipe {
    engine
        .recipe(name)
        .unwrap_or_else(|| exit_with_error(&format!("Unknown recipe '{}'", name)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
