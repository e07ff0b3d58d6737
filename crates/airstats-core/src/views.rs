// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Derived, read-only view structures handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::record::AirportRecord;

/// Airport count and passenger total over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub airport_count: usize,
    pub total_passengers: u64,
}

/// Map camera for the geospatial panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeoView {
    Located {
        center_lat: f64,
        center_lon: f64,
        zoom: f64,
        pitch: f64,
    },
    /// The filtered subset is empty, so there is nothing to centre on.
    NoGeography,
}

impl GeoView {
    pub fn is_located(&self) -> bool {
        matches!(self, GeoView::Located { .. })
    }
}

/// One bubble of the rank/passengers chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub rank: u32,
    pub total_passengers: u64,
    pub airport: String,
    pub bubble_size: f64,
}

/// One weighted point of the passenger heat layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    pub total_passengers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAirportCount {
    pub country: String,
    pub airport_count: usize,
}

/// Every view computed for one filter selection.
///
/// `country_totals`, `country_airport_counts` and `global_summary` always
/// describe the full dataset. The rest describe the filtered subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Views {
    /// Country of the active filter, `None` for all countries.
    pub filter: Option<String>,
    pub summary: Summary,
    pub global_summary: Summary,
    pub top_airport: Option<AirportRecord>,
    pub geo: GeoView,
    pub rank_scatter: Vec<ScatterPoint>,
    pub heatmap: Vec<HeatPoint>,
    pub top_airports: Vec<AirportRecord>,
    pub country_totals: Vec<CountryTotal>,
    pub country_airport_counts: Vec<CountryAirportCount>,
}

impl Views {
    /// True when no country filter is active. Country-level panels are only
    /// meaningful in that case and should be hidden otherwise.
    pub fn is_global(&self) -> bool {
        self.filter.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.summary.airport_count == 0
    }
}
