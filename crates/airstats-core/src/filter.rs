// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::AirportRecord;

/// Sentinel label for the unfiltered selection.
pub const ALL_LABEL: &str = "All";

/// What the user picked in the country selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterSelection {
    #[default]
    All,
    Country(String),
}

impl FilterSelection {
    /// `None` means no filter.
    pub fn from_option(country: Option<&str>) -> Self {
        match country {
            Some(c) => c.parse().unwrap_or(FilterSelection::All),
            None => FilterSelection::All,
        }
    }
}

impl FromStr for FilterSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            Ok(FilterSelection::All)
        } else {
            Ok(FilterSelection::Country(trimmed.to_string()))
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSelection::All => f.write_str(ALL_LABEL),
            FilterSelection::Country(c) => f.write_str(c),
        }
    }
}

/// Row predicate produced by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    country: Option<String>,
}

impl Predicate {
    pub fn matches(&self, record: &AirportRecord) -> bool {
        match &self.country {
            Some(c) => record.country == *c,
            None => true,
        }
    }

    pub fn is_country_filter(&self) -> bool {
        self.country.is_some()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Turns a selection into a predicate. Country values are not checked against
/// the dataset; one that matches nothing simply selects an empty subset.
pub fn resolve(selection: &FilterSelection) -> Predicate {
    match selection {
        FilterSelection::All => Predicate { country: None },
        FilterSelection::Country(c) => Predicate {
            country: Some(c.clone()),
        },
    }
}
