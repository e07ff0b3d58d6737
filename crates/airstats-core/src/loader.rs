// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! CSV ingestion for the busiest-airports table.
//!
//! Header names vary between exports ("lat" vs "latitude", "long" vs "lon"),
//! so headers are mapped onto the canonical record fields through an alias
//! table once, before any row is read. Rows that break the record's domain
//! constraints are rejected with [`AirstatsError::MalformedRecord`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::Dataset;
use crate::record::AirportRecord;
use crate::AirstatsError;

/// External header names accepted for each canonical field.
/// Matching is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub rank: Vec<String>,
    pub airport: Vec<String>,
    pub country: Vec<String>,
    pub total_passengers: Vec<String>,
    pub latitude: Vec<String>,
    pub longitude: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            rank: names(&["Rank"]),
            airport: names(&["Airport", "Name"]),
            country: names(&["Country"]),
            total_passengers: names(&["Total passengers", "total_passengers", "Passengers"]),
            latitude: names(&["lat", "latitude"]),
            longitude: names(&["long", "lon", "lng", "longitude"]),
        }
    }
}

/// Column positions of the canonical fields in one particular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    rank: usize,
    airport: usize,
    country: usize,
    total_passengers: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnAliases {
    fn find(headers: &csv::StringRecord, aliases: &[String], field: &str) -> Result<usize, AirstatsError> {
        headers
            .iter()
            .position(|h| aliases.iter().any(|a| a.trim().eq_ignore_ascii_case(h.trim())))
            .ok_or_else(|| AirstatsError::MissingColumn(field.to_string()))
    }

    fn resolve(&self, headers: &csv::StringRecord) -> Result<ColumnIndex, AirstatsError> {
        let index = ColumnIndex {
            rank: Self::find(headers, &self.rank, "rank")?,
            airport: Self::find(headers, &self.airport, "airport")?,
            country: Self::find(headers, &self.country, "country")?,
            total_passengers: Self::find(headers, &self.total_passengers, "total_passengers")?,
            latitude: Self::find(headers, &self.latitude, "latitude")?,
            longitude: Self::find(headers, &self.longitude, "longitude")?,
        };

        let used = [
            index.rank,
            index.airport,
            index.country,
            index.total_passengers,
            index.latitude,
            index.longitude,
        ];
        for (i, h) in headers.iter().enumerate() {
            if !used.contains(&i) {
                log::debug!("Ignoring extra column — header={:?} index={}", h, i);
            }
        }

        Ok(index)
    }
}

pub fn load_csv<P: AsRef<Path>>(path: P, aliases: &ColumnAliases) -> Result<Dataset, AirstatsError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = load_reader(file, aliases)?;
    log::info!(
        "Dataset loaded — path={} airports={}",
        path.display(),
        dataset.len()
    );
    Ok(dataset)
}

pub fn load_reader<R: Read>(reader: R, aliases: &ColumnAliases) -> Result<Dataset, AirstatsError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let index = aliases.resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut seen_airports = HashSet::new();
    let mut seen_ranks = HashSet::new();
    let mut total_passengers: u64 = 0;
    let mut max_rank: Option<(u32, u64)> = None;

    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        if row.iter().all(|f| f.is_empty()) {
            continue;
        }

        let record = parse_row(&row, &index)
            .and_then(|r| {
                r.validate()?;
                Ok(r)
            })
            .map_err(|reason| AirstatsError::MalformedRecord { line, reason })?;

        if !seen_ranks.insert(record.rank) {
            return Err(AirstatsError::MalformedRecord {
                line,
                reason: format!("duplicate rank {}", record.rank),
            });
        }
        if !seen_airports.insert(record.airport.clone()) {
            return Err(AirstatsError::MalformedRecord {
                line,
                reason: format!("duplicate airport {:?}", record.airport),
            });
        }
        total_passengers = total_passengers
            .checked_add(record.total_passengers)
            .ok_or_else(|| AirstatsError::MalformedRecord {
                line,
                reason: "total passengers across the table overflow u64".to_string(),
            })?;
        if max_rank.map_or(true, |(rank, _)| record.rank > rank) {
            max_rank = Some((record.rank, line));
        }
        records.push(record);
    }

    // Ranks are unique and >= 1, so they are exactly 1..=n unless one exceeds n.
    let n = records.len();
    if let Some((rank, line)) = max_rank {
        if rank as usize > n {
            return Err(AirstatsError::MalformedRecord {
                line,
                reason: format!("rank {rank} leaves a gap; ranks must run 1..={n}"),
            });
        }
    }
    log::debug!("Parsed airport rows — rows={}", n);

    Ok(Dataset::new(records))
}

fn field<'r>(row: &'r csv::StringRecord, idx: usize, name: &str) -> Result<&'r str, String> {
    match row.get(idx) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing {name}")),
    }
}

/// Accepts "92,699,893", "92_699_893" and "92 699 893" as well as plain digits.
fn parse_passengers(raw: &str) -> Result<u64, String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    let value: i64 = cleaned
        .parse()
        .map_err(|_| format!("invalid passenger count {raw:?}"))?;
    u64::try_from(value).map_err(|_| format!("negative passenger count {value}"))
}

fn parse_row(row: &csv::StringRecord, index: &ColumnIndex) -> Result<AirportRecord, String> {
    let rank_raw = field(row, index.rank, "rank")?;
    let rank = rank_raw
        .parse::<u32>()
        .map_err(|_| format!("invalid rank {rank_raw:?}"))?;

    let lat_raw = field(row, index.latitude, "latitude")?;
    let latitude = lat_raw
        .parse::<f64>()
        .map_err(|_| format!("invalid latitude {lat_raw:?}"))?;

    let lon_raw = field(row, index.longitude, "longitude")?;
    let longitude = lon_raw
        .parse::<f64>()
        .map_err(|_| format!("invalid longitude {lon_raw:?}"))?;

    Ok(AirportRecord {
        rank,
        airport: field(row, index.airport, "airport")?.to_string(),
        country: field(row, index.country, "country")?.to_string(),
        total_passengers: parse_passengers(field(row, index.total_passengers, "total_passengers")?)?,
        latitude,
        longitude,
    })
}
