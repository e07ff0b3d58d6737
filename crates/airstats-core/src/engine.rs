// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::collections::HashMap;

use crate::config::ViewConfig;
use crate::dataset::Dataset;
use crate::filter::Predicate;
use crate::record::AirportRecord;
use crate::views::{
    CountryAirportCount, CountryTotal, GeoView, HeatPoint, ScatterPoint, Summary, Views,
};

/// Computes every view for one filter. Pure: the same inputs always give the
/// same `Views`, and an empty subset degrades instead of failing.
pub fn compute_views(dataset: &Dataset, predicate: &Predicate, config: &ViewConfig) -> Views {
    let subset: Vec<&AirportRecord> = dataset.iter().filter(|r| predicate.matches(r)).collect();

    log::debug!(
        "Computing views — filter={:?} subset={} dataset={}",
        predicate.country(),
        subset.len(),
        dataset.len()
    );

    Views {
        filter: predicate.country().map(str::to_string),
        summary: summarize(subset.iter().copied()),
        global_summary: summarize(dataset.iter()),
        top_airport: top_airport(&subset).cloned(),
        geo: geo_view(&subset, predicate.is_country_filter(), config),
        rank_scatter: rank_scatter(&subset, config.bubble_divisor),
        heatmap: subset
            .iter()
            .map(|r| HeatPoint {
                latitude: r.latitude,
                longitude: r.longitude,
                weight: r.total_passengers,
            })
            .collect(),
        top_airports: top_airports(&subset, config.top_airports),
        country_totals: country_totals(dataset, config.top_countries),
        country_airport_counts: country_airport_counts(dataset),
    }
}

/// Loaded datasets never overflow `u64` (the loader rejects them), so the
/// saturating add only matters for tables built in memory.
pub fn summarize<'a>(records: impl Iterator<Item = &'a AirportRecord>) -> Summary {
    records.fold(Summary::default(), |acc, r| Summary {
        airport_count: acc.airport_count + 1,
        total_passengers: acc.total_passengers.saturating_add(r.total_passengers),
    })
}

/// Busiest record; on a tie the earliest one wins.
pub fn top_airport<'a>(subset: &[&'a AirportRecord]) -> Option<&'a AirportRecord> {
    let mut best: Option<&AirportRecord> = None;
    for &r in subset {
        match best {
            Some(b) if r.total_passengers <= b.total_passengers => {}
            _ => best = Some(r),
        }
    }
    best
}

pub fn geo_view(subset: &[&AirportRecord], country_selected: bool, config: &ViewConfig) -> GeoView {
    if subset.is_empty() {
        return GeoView::NoGeography;
    }
    let n = subset.len() as f64;
    let (lat_sum, lon_sum) = subset
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));

    GeoView::Located {
        center_lat: lat_sum / n,
        center_lon: lon_sum / n,
        zoom: if country_selected {
            config.zoom_country
        } else {
            config.zoom_global
        },
        pitch: config.pitch,
    }
}

pub fn rank_scatter(subset: &[&AirportRecord], bubble_divisor: f64) -> Vec<ScatterPoint> {
    subset
        .iter()
        .map(|r| ScatterPoint {
            rank: r.rank,
            total_passengers: r.total_passengers,
            airport: r.airport.clone(),
            bubble_size: r.total_passengers as f64 / bubble_divisor,
        })
        .collect()
}

pub fn top_airports(subset: &[&AirportRecord], n: usize) -> Vec<AirportRecord> {
    let mut sorted = subset.to_vec();
    // sort_by is stable, so equal counts keep dataset order
    sorted.sort_by(|a, b| b.total_passengers.cmp(&a.total_passengers));
    sorted.into_iter().take(n).cloned().collect()
}

/// Groups the full dataset by country, keeping first-appearance order so the
/// later stable sort breaks ties the same way every time.
fn group_by_country<T, F>(dataset: &Dataset, mut fold: F) -> Vec<(String, T)>
where
    T: Default,
    F: FnMut(&mut T, &AirportRecord),
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, T)> = Vec::new();
    for r in dataset {
        let slot = *index.entry(r.country.as_str()).or_insert_with(|| {
            groups.push((r.country.clone(), T::default()));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, r);
    }
    groups
}

pub fn country_totals(dataset: &Dataset, limit: usize) -> Vec<CountryTotal> {
    let mut totals = group_by_country(dataset, |sum: &mut u64, r| {
        *sum = sum.saturating_add(r.total_passengers)
    });
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .take(limit)
        .map(|(country, total_passengers)| CountryTotal {
            country,
            total_passengers,
        })
        .collect()
}

pub fn country_airport_counts(dataset: &Dataset) -> Vec<CountryAirportCount> {
    let mut counts = group_by_country(dataset, |count: &mut usize, _| *count += 1);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(country, airport_count)| CountryAirportCount {
            country,
            airport_count,
        })
        .collect()
}
