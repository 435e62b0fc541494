//! Query-layer tests against the bundled dataset.

use countrykit_core::CountryDb;

fn db() -> &'static CountryDb {
    CountryDb::load().expect("bundled dataset loads")
}

#[test]
fn iso_lookups_round_trip_for_every_country() {
    let db = db();
    for country in db.countries() {
        let by2 = db.find_by_cca2(&country.cca2).expect("cca2 indexed");
        let by3 = db.find_by_cca3(&country.cca3).expect("cca3 indexed");
        assert!(std::ptr::eq(country, by2), "{} cca2 round trip", country.cca2);
        assert!(std::ptr::eq(country, by3), "{} cca3 round trip", country.cca3);
    }
}

#[test]
fn lookups_ignore_case() {
    let db = db();
    assert_eq!(db.find_by_cca2("us"), db.find_by_cca2("US"));
    assert_eq!(db.find_by_cca3("gbr"), db.find_by_cca3("GBR"));
}

#[test]
fn united_states_by_cca2() {
    let us = db().find_by_cca2("US").unwrap();
    assert_eq!(us.name(), "United States");
    assert_eq!(us.calling_code(), Some("+1"));
}

#[test]
fn united_kingdom_by_cca3() {
    let gb = db().find_by_cca3("GBR").unwrap();
    assert_eq!(gb.name(), "United Kingdom");
    assert_eq!(gb.cca2(), "GB");
}

#[test]
fn unknown_code_is_absent() {
    assert!(db().find_by_cca2("ZZ").is_none());
}

#[test]
fn calling_code_with_and_without_plus_are_identical() {
    let db = db();
    let bare = db.find_by_calling_code("1");
    let plus = db.find_by_calling_code("+1");
    assert_eq!(bare, plus);
    let codes: Vec<_> = plus.iter().map(|c| c.cca2()).collect();
    assert!(codes.contains(&"US"));
    assert!(codes.contains(&"CA"));
}

#[test]
fn currency_filter_is_sound() {
    let usd = db().filter_by_currency("USD");
    assert!(!usd.is_empty());
    assert!(usd.iter().all(|c| c.uses_currency("USD")));
}

#[test]
fn currency_filter_is_complete() {
    let db = db();
    let hits = db.filter_by_currency("eur");
    let expected = db
        .countries()
        .iter()
        .filter(|c| c.uses_currency("EUR"))
        .count();
    assert!(expected > 0);
    assert_eq!(hits.len(), expected);
}

#[test]
fn language_filter_includes_us_and_uk() {
    let en = db().filter_by_language("en");
    assert!(!en.is_empty());
    let codes: Vec<_> = en.iter().map(|c| c.cca2()).collect();
    assert!(codes.contains(&"US"));
    assert!(codes.contains(&"GB"));
    assert!(en.iter().all(|c| c.speaks_language("en")));
}

#[test]
fn name_search_finds_united_states_and_kingdom() {
    let db = db();
    for query in ["united", "UNITED"] {
        let hits = db.search_by_name(query);
        let codes: Vec<_> = hits.iter().map(|c| c.cca2()).collect();
        assert!(codes.contains(&"US"), "query {query:?}");
        assert!(codes.contains(&"GB"), "query {query:?}");
    }
}

#[test]
fn name_search_is_sound_and_complete() {
    let db = db();
    let hits = db.search_by_name("united");
    let expected: Vec<_> = db
        .countries()
        .iter()
        .filter(|c| {
            c.name().to_lowercase().contains("united")
                || c.native_name().to_lowercase().contains("united")
        })
        .collect();
    assert_eq!(hits, expected);
}

#[test]
fn regions_are_sorted_and_deduplicated() {
    let db = db();
    let regions = db.regions();
    let mut sorted = regions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(regions, sorted);
    assert!(regions.contains(&"Europe"));
    assert!(!regions.contains(&""));

    for region in &regions {
        assert!(!db.filter_by_region(region).is_empty());
    }
}

#[test]
fn subregion_filter_matches_exactly() {
    let na = db().filter_by_subregion("north america");
    assert!(!na.is_empty());
    assert!(na.iter().all(|c| c.subregion() == Some("North America")));
}

#[test]
fn reference_tables_are_full_not_used_only() {
    let db = db();
    assert!(db.currencies().iter().any(|c| c.code == "USD"));
    assert!(db.languages().iter().any(|l| l.code == "en"));
    assert!(db.dial_codes().iter().any(|d| d.code == "+1"));
}

#[test]
fn stats_match_table_sizes() {
    let db = db();
    let stats = db.stats();
    assert_eq!(stats.countries, db.countries().len());
    assert_eq!(stats.regions, db.regions().len());
    assert_eq!(stats.currencies, db.currencies().len());
    assert_eq!(stats.languages, db.languages().len());
}

#[test]
fn bundled_dataset_is_referentially_consistent() {
    let issues = db().validate();
    assert!(issues.is_empty(), "dataset problems: {issues:#?}");
}
