// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod config;
pub mod dataset;
pub mod engine;
pub mod filter;
pub mod loader;
pub mod record;
pub mod views;

pub use config::{AppConfig, ConfigManager, ViewConfig};
pub use dataset::Dataset;
pub use engine::compute_views;
pub use filter::{resolve, FilterSelection, Predicate};
pub use loader::{load_csv, load_reader, ColumnAliases};
pub use record::AirportRecord;
pub use views::Views;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirstatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}
