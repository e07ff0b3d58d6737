// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};

/// One row of the busiest-airports table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub rank: u32,
    pub airport: String,
    pub country: String,
    pub total_passengers: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportRecord {
    /// Checks the per-row domain constraints. Cross-row constraints
    /// (unique rank, unique airport) are checked by the loader.
    pub fn validate(&self) -> Result<(), String> {
        if self.rank == 0 {
            return Err("rank must be 1-based".to_string());
        }
        if self.airport.trim().is_empty() {
            return Err("airport name is empty".to_string());
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} outside [-90, 90]", self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("longitude {} outside [-180, 180]", self.longitude));
        }
        Ok(())
    }
}
