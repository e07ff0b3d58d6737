// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::collections::HashSet;
use std::sync::Arc;

use crate::filter::FilterSelection;
use crate::record::AirportRecord;

/// The loaded table. Immutable after construction; clones share the same rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[AirportRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<AirportRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AirportRecord> {
        self.records.iter()
    }

    /// Distinct country values in first-appearance order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Options for a country selector: `All` followed by every distinct country.
    pub fn filter_options(&self) -> Vec<FilterSelection> {
        std::iter::once(FilterSelection::All)
            .chain(
                self.countries()
                    .into_iter()
                    .map(|c| FilterSelection::Country(c.to_string())),
            )
            .collect()
    }
}

impl From<Vec<AirportRecord>> for Dataset {
    fn from(records: Vec<AirportRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AirportRecord;
    type IntoIter = std::slice::Iter<'a, AirportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
