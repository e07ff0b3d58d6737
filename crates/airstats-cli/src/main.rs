// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use airstats_core::views::GeoView;
use airstats_core::{
    compute_views, load_csv, resolve, AppConfig, ConfigManager, Dataset, FilterSelection, Views,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the busiest-airports CSV
    #[arg(short, long, env = "AIRSTATS_DATA", default_value = "busiest_airports.csv")]
    data: PathBuf,

    /// Path to a JSON config file (defaults to the per-user config dir)
    #[arg(short, long, env = "AIRSTATS_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print every view for a filter
    Views {
        /// Country to filter on ("All" or omitted for every country)
        #[arg(short = 'C', long)]
        country: Option<String>,
        /// Print the views as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// List the country filter options
    Countries,
    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::default_location(),
    };
    log::info!("Using config — config_path={}", manager.path().display());

    match &cli.command {
        Commands::Views { country, json } => {
            let config = manager.load()?;
            let dataset = load_dataset(&cli.data, &config)?;
            let selection = FilterSelection::from_option(country.as_deref());
            log::info!(
                "Computing views — filter={} data={}",
                selection,
                cli.data.display()
            );
            let views = compute_views(&dataset, &resolve(&selection), &config.view);
            if *json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print_report(&selection, &views);
            }
        }
        Commands::Countries => {
            let config = manager.load()?;
            let dataset = load_dataset(&cli.data, &config)?;
            for option in dataset.filter_options() {
                println!("{}", option);
            }
        }
        Commands::Config { init } => run_config(&manager, *init)?,
    }

    Ok(())
}

fn load_dataset(path: &Path, config: &AppConfig) -> Result<Dataset> {
    load_csv(path, &config.columns).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_config(manager: &ConfigManager, init: bool) -> Result<()> {
    if init {
        manager.save(&AppConfig::default())?;
        println!("Wrote default config to {}", manager.path().display());
        return Ok(());
    }
    let config = manager.load()?;
    println!("# {}", manager.path().display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn print_report(selection: &FilterSelection, views: &Views) {
    println!("Busiest Airports — {}", selection);
    println!();
    println!(
        "Airports: {}    Passengers: {}",
        views.global_summary.airport_count, views.global_summary.total_passengers
    );

    println!();
    println!("## Highlights");
    match &views.top_airport {
        Some(top) => {
            println!("- Busiest airport: {} ({} passengers)", top.airport, top.total_passengers);
            println!("- Total passengers: {}", views.summary.total_passengers);
        }
        None => println!("No data for the selected country."),
    }

    println!();
    println!("## Map");
    match views.geo {
        GeoView::Located {
            center_lat,
            center_lon,
            zoom,
            pitch,
        } => println!(
            "center=({:.4}, {:.4}) zoom={} pitch={} points={}",
            center_lat,
            center_lon,
            zoom,
            pitch,
            views.heatmap.len()
        ),
        GeoView::NoGeography => println!("No geographic data for the selected country."),
    }

    println!();
    println!("## Rank vs passengers");
    if views.rank_scatter.is_empty() {
        println!("No data for the selected country.");
    }
    for p in &views.rank_scatter {
        println!(
            "{:>3}  {:<55} {:>12}  size={:.1}",
            p.rank, p.airport, p.total_passengers, p.bubble_size
        );
    }

    println!();
    println!("## Top {} airports", views.top_airports.len());
    for r in &views.top_airports {
        println!("{:<55} {:>12}", r.airport, r.total_passengers);
    }

    println!();
    println!("## Passengers by country");
    if views.is_global() {
        for c in &views.country_totals {
            println!("{:<30} {:>12}", c.country, c.total_passengers);
        }
    } else {
        println!("Only available for all countries.");
    }

    println!();
    println!("## Airports by country");
    if views.is_global() {
        for c in &views.country_airport_counts {
            println!("{:<30} {:>3}", c.country, c.airport_count);
        }
    } else {
        println!("Only available for all countries.");
    }
}
