//! penamap — command-line interface for penamap-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ penamap stats
//!
//! - List every place
//!   $ penamap places
//!
//! - Autocomplete suggestions
//!   $ penamap search bar
//!
//! - Category and icon of a name
//!   $ penamap classify "Parada Bus Centro"
//!
//! - Select a place and dump the map scene
//!   $ penamap show "Bar Pepe"
//!
//! Data source
//! -----------
//!
//! By default the dataset bundled with `penamap-core` is used. Point
//! `--input <path>` at another `.json` or `.json.gz` KML export, and add
//! `--skip-invalid` to drop broken placemarks instead of failing.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use penamap_cli::logging::init_logging;
use penamap_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let options = LoadOptions {
        skip_invalid: args.skip_invalid,
    };

    let owned;
    let store: &PlaceStore = match &args.input {
        Some(path) => {
            owned = PlaceStore::load_from_path(path, options)
                .with_context(|| format!("loading {path}"))?;
            &owned
        }
        None => PlaceStore::load()?,
    };
    tracing::debug!(places = store.len(), "place store ready");

    match args.command {
        Commands::Stats => {
            let stats = store.stats();
            println!("Place store statistics:");
            println!("  Places: {}", stats.places);
            for (category, count) in stats.by_category {
                println!("  {category}: {count}");
            }
        }

        Commands::Places => {
            for p in store {
                println!("{} [{}] ({})", p.name, p.category(), p.coordinate);
            }
        }

        Commands::Search { query } => {
            let mut controller = SearchController::new(store);
            controller.set_query(&query);
            let suggestions = &controller.state().suggestions;
            if suggestions.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for p in suggestions {
                    println!("{}", p.name);
                }
            }
        }

        Commands::Classify { name } => {
            let category = Category::classify(&name);
            println!("Category: {category}");
            match category.icon_url() {
                Some(icon) => println!("Icon: {icon}"),
                None => println!("Icon: (default)"),
            }
        }

        Commands::Show { name } => {
            let mut controller = SearchController::new(store);
            controller.set_query(&name);
            if controller.select_suggestion(&name).is_empty() {
                eprintln!("No place named: {name}");
            } else {
                let scene = MapScene::render(&controller, &MapConfig::from_env());
                println!("{}", serde_json::to_string_pretty(&scene)?);
            }
        }
    }

    Ok(())
}
