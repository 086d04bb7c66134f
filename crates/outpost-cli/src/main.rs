//! CLI frontend for the Outpost colony engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "outpost",
    about = "Outpost — a deterministic colony crafting and simulation engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog materials and blueprints
    List {
        /// What to list: materials, blueprints (default: both)
        kind: Option<String>,

        /// Catalog JSON file (default: bundled starter content)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show detailed information about a material or blueprint
    Show {
        /// Material or blueprint id (e.g. mat_titanium, bp_rifle)
        id: String,

        /// Catalog JSON file (default: bundled starter content)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Craft one item from a blueprint and slot assignments
    Craft {
        /// Blueprint id (e.g. bp_rifle)
        blueprint: String,

        /// Slot assignments as slot=material pairs
        /// (e.g. slot_body=mat_titanium slot_core=mat_crystal)
        assignments: Vec<String>,

        /// RNG seed for the item id
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the crafted item as JSON instead of tables
        #[arg(short, long)]
        json: bool,

        /// Catalog JSON file (default: bundled starter content)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Run a tick-based colony simulation
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "60")]
        ticks: u64,

        /// Wall-clock seconds per tick
        #[arg(long, default_value = "1.0")]
        dt: f64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Time-scale multiplier (simulated seconds per wall-clock second)
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Show all events (not just notable ones)
        #[arg(short, long)]
        verbose: bool,

        /// Catalog JSON file (default: bundled starter content)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { kind, catalog } => commands::list::run(catalog.as_deref(), kind.as_deref()),
        Commands::Show { id, catalog } => commands::show::run(catalog.as_deref(), &id),
        Commands::Craft {
            blueprint,
            assignments,
            seed,
            json,
            catalog,
        } => commands::craft::run(catalog.as_deref(), &blueprint, &assignments, seed, json),
        Commands::Simulate {
            ticks,
            dt,
            seed,
            speed,
            verbose,
            catalog,
        } => commands::simulate::run(catalog.as_deref(), ticks, dt, seed, speed, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
