// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use airstats_core::views::{CountryTotal, GeoView, Summary};
use airstats_core::{compute_views, resolve, AirportRecord, Dataset, FilterSelection, ViewConfig};

fn rec(rank: u32, airport: &str, country: &str, pax: u64, lat: f64, lon: f64) -> AirportRecord {
    AirportRecord {
        rank,
        airport: airport.to_string(),
        country: country.to_string(),
        total_passengers: pax,
        latitude: lat,
        longitude: lon,
    }
}

/// Two airports in two countries, mirrored around the origin.
fn two_airports() -> Dataset {
    Dataset::new(vec![
        rec(1, "A", "X", 100, 10.0, 20.0),
        rec(2, "B", "Y", 50, -10.0, -20.0),
    ])
}

fn mixed() -> Dataset {
    Dataset::new(vec![
        rec(1, "ATL", "United States", 93_699_630, 33.64, -84.43),
        rec(2, "DFW", "United States", 73_362_946, 32.90, -97.04),
        rec(3, "DXB", "United Arab Emirates", 66_069_981, 25.25, 55.36),
        rec(4, "LAX", "United States", 65_924_298, 33.94, -118.41),
        rec(5, "IST", "Turkey", 64_289_107, 41.26, 28.73),
        rec(6, "LHR", "United Kingdom", 61_614_508, 51.47, -0.46),
        rec(7, "SAW", "Turkey", 35_000_000, 40.90, 29.31),
        rec(8, "LGW", "United Kingdom", 32_800_000, 51.15, -0.19),
    ])
}

fn views_for(ds: &Dataset, selection: FilterSelection) -> airstats_core::Views {
    compute_views(ds, &resolve(&selection), &ViewConfig::default())
}

#[test]
fn test_two_airports_all() {
    let views = views_for(&two_airports(), FilterSelection::All);

    assert_eq!(
        views.summary,
        Summary {
            airport_count: 2,
            total_passengers: 150
        }
    );
    assert_eq!(views.top_airport.as_ref().unwrap().airport, "A");
    match views.geo {
        GeoView::Located {
            center_lat,
            center_lon,
            zoom,
            ..
        } => {
            assert_eq!(center_lat, 0.0);
            assert_eq!(center_lon, 0.0);
            assert_eq!(zoom, 2.0);
        }
        GeoView::NoGeography => panic!("expected a located view"),
    }
    let top: Vec<&str> = views.top_airports.iter().map(|r| r.airport.as_str()).collect();
    assert_eq!(top, vec!["A", "B"]);
    assert_eq!(
        views.country_totals,
        vec![
            CountryTotal {
                country: "X".to_string(),
                total_passengers: 100
            },
            CountryTotal {
                country: "Y".to_string(),
                total_passengers: 50
            },
        ]
    );
    assert!(views.is_global());
}

#[test]
fn test_two_airports_country_filter() {
    let ds = two_airports();
    let all = views_for(&ds, FilterSelection::All);
    let views = views_for(&ds, FilterSelection::Country("Y".to_string()));

    assert_eq!(
        views.summary,
        Summary {
            airport_count: 1,
            total_passengers: 50
        }
    );
    assert_eq!(views.top_airport.as_ref().unwrap().airport, "B");
    assert_eq!(views.rank_scatter.len(), 1);
    assert_eq!(views.rank_scatter[0].rank, 2);
    assert_eq!(views.country_totals, all.country_totals);
    assert_eq!(views.filter.as_deref(), Some("Y"));
    assert!(!views.is_global());
    assert!(matches!(views.geo, GeoView::Located { zoom, .. } if zoom == 5.0));
}

#[test]
fn test_empty_subset_degrades() {
    let views = views_for(&mixed(), FilterSelection::Country("Atlantis".to_string()));

    assert_eq!(views.summary, Summary::default());
    assert!(views.top_airport.is_none());
    assert_eq!(views.geo, GeoView::NoGeography);
    assert!(views.rank_scatter.is_empty());
    assert!(views.heatmap.is_empty());
    assert!(views.top_airports.is_empty());
    assert!(views.is_empty());
    // Full-dataset views are unaffected
    assert_eq!(views.global_summary.airport_count, 8);
    assert!(!views.country_totals.is_empty());
}

#[test]
fn test_empty_dataset() {
    let views = views_for(&Dataset::new(Vec::new()), FilterSelection::All);
    assert_eq!(views.summary, Summary::default());
    assert_eq!(views.geo, GeoView::NoGeography);
    assert!(views.country_totals.is_empty());
    assert!(views.country_airport_counts.is_empty());
}

#[test]
fn test_summary_matches_predicate_for_every_option() {
    let ds = mixed();
    for option in ds.filter_options() {
        let predicate = resolve(&option);
        let views = compute_views(&ds, &predicate, &ViewConfig::default());

        let expected_count = ds.iter().filter(|r| predicate.matches(r)).count();
        let expected_sum: u64 = ds
            .iter()
            .filter(|r| predicate.matches(r))
            .map(|r| r.total_passengers)
            .sum();
        assert_eq!(views.summary.airport_count, expected_count, "{option}");
        assert_eq!(views.summary.total_passengers, expected_sum, "{option}");

        let top = views.top_airport.as_ref().expect("every option has data");
        assert!(ds
            .iter()
            .filter(|r| predicate.matches(r))
            .all(|r| r.total_passengers <= top.total_passengers));
    }
}

#[test]
fn test_summary_saturates_on_huge_passenger_counts() {
    let half = u64::MAX / 2 + 1;
    let ds = Dataset::new(vec![
        rec(1, "A", "X", half, 0.0, 0.0),
        rec(2, "B", "Y", half, 0.0, 0.0),
    ]);
    let views = views_for(&ds, FilterSelection::All);
    assert_eq!(views.summary.airport_count, 2);
    assert_eq!(views.summary.total_passengers, u64::MAX);
    assert_eq!(views.global_summary, views.summary);

    let only_y = views_for(&ds, FilterSelection::Country("Y".to_string()));
    assert_eq!(only_y.summary.total_passengers, half);
}

#[test]
fn test_top_airports_properties() {
    let ds = mixed();
    for option in ds.filter_options() {
        let predicate = resolve(&option);
        let views = compute_views(&ds, &predicate, &ViewConfig::default());
        let subset_len = ds.iter().filter(|r| predicate.matches(r)).count();

        assert_eq!(views.top_airports.len(), subset_len.min(5), "{option}");
        assert!(views
            .top_airports
            .windows(2)
            .all(|w| w[0].total_passengers >= w[1].total_passengers));
        assert!(views
            .top_airports
            .iter()
            .all(|r| predicate.matches(r) && ds.iter().any(|d| d == r)));
    }
}

#[test]
fn test_country_views_ignore_filter() {
    let ds = mixed();
    let all = views_for(&ds, FilterSelection::All);
    for option in ds.filter_options() {
        let views = views_for(&ds, option);
        assert_eq!(views.country_totals, all.country_totals);
        assert_eq!(views.country_airport_counts, all.country_airport_counts);
        assert_eq!(views.global_summary, all.global_summary);
    }

    let countries: Vec<&str> = all.country_totals.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(
        countries,
        vec!["United States", "Turkey", "United Kingdom", "United Arab Emirates"]
    );
    assert!(all
        .country_airport_counts
        .windows(2)
        .all(|w| w[0].airport_count >= w[1].airport_count));
    assert_eq!(all.country_airport_counts[0].airport_count, 3);
    // Turkey and United Kingdom tie on 2 and keep first-appearance order
    assert_eq!(all.country_airport_counts[1].country, "Turkey");
    assert_eq!(all.country_airport_counts[2].country, "United Kingdom");
}

#[test]
fn test_compute_views_is_idempotent() {
    let ds = mixed();
    let predicate = resolve(&FilterSelection::Country("United States".to_string()));
    let config = ViewConfig::default();
    let first = compute_views(&ds, &predicate, &config);
    let second = compute_views(&ds, &predicate, &config);
    assert_eq!(first, second);
}

#[test]
fn test_scatter_keeps_dataset_order() {
    let views = views_for(&mixed(), FilterSelection::Country("United States".to_string()));
    let ranks: Vec<u32> = views.rank_scatter.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, vec![1, 2, 4]);
    assert_eq!(views.heatmap.len(), 3);
    assert_eq!(views.heatmap[0].weight, 93_699_630);
}

#[test]
fn test_custom_config_limits() {
    let config = ViewConfig {
        top_airports: 2,
        top_countries: 1,
        zoom_global: 1.5,
        ..ViewConfig::default()
    };
    let views = compute_views(&mixed(), &resolve(&FilterSelection::All), &config);
    assert_eq!(views.top_airports.len(), 2);
    assert_eq!(views.country_totals.len(), 1);
    assert!(matches!(views.geo, GeoView::Located { zoom, .. } if zoom == 1.5));
}

#[test]
fn test_views_serialize_to_json() {
    let views = views_for(&two_airports(), FilterSelection::Country("Nowhere".to_string()));
    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json["geo"]["kind"], "no_geography");
    assert!(json["top_airport"].is_null());
    assert_eq!(json["summary"]["airport_count"], 0);
}
