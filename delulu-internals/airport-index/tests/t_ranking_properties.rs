//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! Ranking and validation properties over small hand-written datasets.
//!
//! - exact code > exact name/city > prefix > substring
//! - ties break on shorter name, then code
//! - results never exceed the limit, and repeated queries are identical
//! - empty queries, zero limits and duplicate codes are rejected
//!
//! Run with:
//!     cargo test -p delulu-airport-index --test t_ranking_properties

use delulu_airport_index::{
    bundled, Airport, AirportIndex, DataIntegrityError, InvalidQueryError, MatchTier,
    MatchedField,
};

fn new_york_dataset() -> AirportIndex {
    AirportIndex::from_records(vec![
        Airport::new(
            "LAX",
            "Los Angeles International",
            "Los Angeles",
            "United States",
        ),
        Airport::new(
            "JFK",
            "John F. Kennedy International",
            "New York",
            "United States",
        ),
        Airport::new("LGA", "LaGuardia", "New York", "United States"),
    ])
    .unwrap()
}

fn codes(airports: &[&Airport]) -> Vec<String> {
    airports.iter().map(|a| a.code.clone()).collect()
}

#[test]
fn test_city_exact_match_first() {
    let index = new_york_dataset();
    let hits = index.search_matches("Los Angeles", 10).unwrap();
    assert_eq!(hits[0].airport.code, "LAX");
    assert_eq!(hits[0].tier, MatchTier::ExactNameOrCity);
    assert_eq!(hits[0].field, MatchedField::City);
}

#[test]
fn test_same_city_orders_by_name_length() {
    let index = new_york_dataset();
    let found = index.search("New York", 10).unwrap();
    assert_eq!(codes(&found), ["LGA", "JFK"]);
}

#[test]
fn test_code_beats_name_substring() {
    // "Flaxton" contains "lax" but only the LAX code is an exact match.
    let index = AirportIndex::from_records(vec![
        Airport::new("FLX", "Flaxton Regional", "Flaxton", "Nowhere"),
        Airport::new("LAX", "Los Angeles International", "Los Angeles", "United States"),
        Airport::new("LXA", "Lhasa Gonggar", "Lhasa", "China"),
    ])
    .unwrap();

    let hits = index.search_matches("LAX", 5).unwrap();
    assert_eq!(hits[0].airport.code, "LAX");
    assert_eq!(hits[0].tier, MatchTier::ExactCode);
    assert_eq!(hits[1].airport.code, "FLX");
    assert_eq!(hits[1].tier, MatchTier::Substring);
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_tier_order_across_records() {
    let index = AirportIndex::from_records(vec![
        Airport::new("AAA", "Port Rome Harbour", "Ostia", "Italy"), // substring
        Airport::new("BBB", "Romeo Field", "Verona", "Italy"),      // prefix
        Airport::new("CCC", "Fiumicino", "Rome", "Italy"),          // exact city
        Airport::new("ROM", "Urbe", "Latium", "Italy"),             // only the code "rom" matches
    ])
    .unwrap();

    let hits = index.search_matches("rome", 10).unwrap();
    let tiers: Vec<_> = hits.iter().map(|h| (h.airport.code.as_str(), h.tier)).collect();
    assert_eq!(
        tiers,
        [
            ("CCC", MatchTier::ExactNameOrCity),
            ("BBB", MatchTier::Prefix),
            ("AAA", MatchTier::Substring),
        ]
    );

    let hits = index.search_matches("rom", 10).unwrap();
    assert_eq!(hits[0].airport.code, "ROM");
    assert_eq!(hits[0].tier, MatchTier::ExactCode);
}

#[test]
fn test_exact_name_match() {
    let index = AirportIndex::from_records(vec![
        Airport::new("DAL", "Dallas Love Field", "Dallas", "United States"),
        Airport::new("DFW", "Dallas/Fort Worth International", "Dallas", "United States"),
    ])
    .unwrap();
    let hits = index.search_matches("dallas love field", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].field, MatchedField::Name);
    assert_eq!(hits[0].tier, MatchTier::ExactNameOrCity);
}

#[test]
fn test_ties_break_on_code() {
    // Same tier, same name length: alphabetical by code, whatever the load order.
    let forward = AirportIndex::from_records(vec![
        Airport::new("ZZB", "Twin Field B", "Twin City", "Nowhere"),
        Airport::new("AAB", "Twin Field A", "Twin City", "Nowhere"),
    ])
    .unwrap();
    let backward = AirportIndex::from_records(vec![
        Airport::new("AAB", "Twin Field A", "Twin City", "Nowhere"),
        Airport::new("ZZB", "Twin Field B", "Twin City", "Nowhere"),
    ])
    .unwrap();

    for index in [&forward, &backward] {
        let found = index.search("twin city", 10).unwrap();
        assert_eq!(codes(&found), ["AAB", "ZZB"]);
    }
}

#[test]
fn test_record_appears_once_at_best_tier() {
    // Code, city and name all match "nice" in some way.
    let index = AirportIndex::from_records(vec![Airport::new(
        "NCE",
        "Nice Côte d'Azur",
        "Nice",
        "France",
    )])
    .unwrap();
    let hits = index.search_matches("nice", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].tier, MatchTier::ExactNameOrCity);
    assert_eq!(hits[0].field, MatchedField::City);
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let index = bundled().unwrap();
    assert_eq!(index.search("lax", 1).unwrap(), index.search("LAX", 1).unwrap());
    assert_eq!(
        index.search("  new YORK ", 10).unwrap(),
        index.search("New York", 10).unwrap()
    );
}

#[test]
fn test_limit_is_respected() {
    let index = bundled().unwrap();
    for query in ["a", "in", "int", "airport", "san", "x"] {
        for limit in [1, 2, 3, 5, 10, 50, 500] {
            let found = index.search(query, limit).unwrap();
            assert!(
                found.len() <= limit,
                "{query:?} limit {limit} returned {}",
                found.len()
            );
        }
    }
}

#[test]
fn test_truncation_happens_after_ranking() {
    // The best match is loaded last; a limit of 1 must still find it.
    let mut records: Vec<Airport> = (0..26u8)
        .map(|i| {
            let c = (b'A' + i) as char;
            Airport::new(
                format!("{c}{c}Q"),
                format!("Quay Terminal {c}"),
                "Harbourquay",
                "Nowhere",
            )
        })
        .collect();
    records.push(Airport::new("QAY", "Pier", "Quay", "Nowhere"));
    let index = AirportIndex::from_records(records).unwrap();

    let found = index.search("quay", 1).unwrap();
    assert_eq!(codes(&found), ["QAY"]);
}

#[test]
fn test_repeated_queries_are_identical() {
    let index = bundled().unwrap();
    let first = codes(&index.search("int", 20).unwrap());
    for _ in 0..10 {
        assert_eq!(codes(&index.search("int", 20).unwrap()), first);
    }
    assert_eq!(index.len(), bundled().unwrap().len());
}

#[test]
fn test_invalid_query_errors() {
    let index = new_york_dataset();
    assert_eq!(index.search("", 10), Err(InvalidQueryError::EmptyQuery));
    assert_eq!(index.search("   ", 10), Err(InvalidQueryError::EmptyQuery));
    assert_eq!(index.search("JFK", 0), Err(InvalidQueryError::ZeroLimit));
    // Index still answers afterwards.
    assert_eq!(codes(&index.search("JFK", 1).unwrap()), ["JFK"]);
}

#[test]
fn test_no_match_is_not_an_error() {
    let index = new_york_dataset();
    assert_eq!(index.search("Reykjavik", 10), Ok(Vec::new()));
}

#[test]
fn test_duplicate_code_is_data_integrity_error() {
    let json = r#"[
        {"code": "JFK", "name": "John F. Kennedy International", "city": "New York", "country": "United States"},
        {"code": "JFK", "name": "Duplicate", "city": "Somewhere", "country": "Nowhere"}
    ]"#;
    let err = AirportIndex::from_json(json).unwrap_err();
    assert!(
        matches!(err, DataIntegrityError::DuplicateCode { ref code, .. } if code == "JFK"),
        "{err:?}"
    );
}

#[test]
fn test_optional_fields_are_optional() {
    let json = r#"[
        {"code": "HND", "name": "Haneda Airport", "city": "Tokyo", "country": "Japan", "timezone": "Asia/Tokyo"},
        {"code": "NRT", "name": "Narita International Airport", "city": "Tokyo", "country": "Japan"}
    ]"#;
    let index = AirportIndex::from_json(json).unwrap();
    assert_eq!(index.get("hnd").unwrap().timezone.as_deref(), Some("Asia/Tokyo"));
    assert_eq!(index.get("NRT").unwrap().timezone, None);
}
