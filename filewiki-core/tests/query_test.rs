//! Integration tests for the query engine
//!
//! Runs the filter against the built-in catalog and a hand-built catalog.

use filewiki_core::{filter, Catalog, Category, CategoryFilter, ExtensionRecord, QueryState};

fn record(extension: &'static str, category: Category, short: &'static str) -> ExtensionRecord {
    ExtensionRecord {
        extension,
        display_name: "Sample",
        category,
        short_description: short,
        long_description: "",
        platform_compatibility: &[],
        associated_technologies: &[],
        strengths: &[],
        weaknesses: &[],
        popularity_score: 50,
    }
}

fn two_record_catalog() -> Catalog {
    Catalog::new(vec![
        record(".vpk", Category::Game, "Valve package"),
        record(".exe", Category::Executable, "Windows program"),
    ])
    .unwrap()
}

fn is_subsequence(result: &[&ExtensionRecord], input: &[ExtensionRecord]) -> bool {
    let mut input = input.iter();
    result
        .iter()
        .all(|wanted| input.any(|candidate| candidate.extension == wanted.extension))
}

#[test]
fn test_all_with_empty_search_is_identity() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), CategoryFilter::All, "");

    assert_eq!(result.len(), catalog.len());
    for (got, expected) in result.iter().zip(catalog.iter()) {
        assert_eq!(got.extension, expected.extension);
    }
}

#[test]
fn test_category_exclusivity() {
    let catalog = Catalog::builtin();
    for category in Category::ALL {
        let result = filter(catalog.records(), CategoryFilter::Only(category), "");
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.category == category));
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = Catalog::builtin();
    let upper = filter(catalog.records(), CategoryFilter::All, "VPK");
    let lower = filter(catalog.records(), CategoryFilter::All, "vpk");
    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn test_result_preserves_order() {
    let catalog = Catalog::builtin();
    for query in ["", "a", "windows", "архив", "x"] {
        for category in [CategoryFilter::All, CategoryFilter::Only(Category::Archive)] {
            let result = filter(catalog.records(), category, query);
            assert!(is_subsequence(&result, catalog.records()), "query {query:?}");
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = Catalog::builtin();
    let first = filter(catalog.records(), CategoryFilter::All, "file");
    let second = filter(catalog.records(), CategoryFilter::All, "file");
    assert_eq!(first, second);
}

#[test]
fn test_scenario_search_by_extension() {
    let catalog = two_record_catalog();
    let result = filter(catalog.records(), CategoryFilter::All, ".vpk");
    let extensions: Vec<_> = result.iter().map(|r| r.extension).collect();
    assert_eq!(extensions, vec![".vpk"]);
}

#[test]
fn test_scenario_builtin_search_by_extension() {
    let result = filter(Catalog::builtin().records(), CategoryFilter::All, ".vpk");
    let extensions: Vec<_> = result.iter().map(|r| r.extension).collect();
    assert_eq!(extensions, vec![".vpk"]);
}

#[test]
fn test_scenario_category_only() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), CategoryFilter::Only(Category::Executable), "");

    let expected: Vec<_> = catalog
        .iter()
        .filter(|r| r.category == Category::Executable)
        .map(|r| r.extension)
        .collect();
    let got: Vec<_> = result.iter().map(|r| r.extension).collect();

    assert_eq!(got, expected);
    assert!(got.contains(&".exe"));
}

#[test]
fn test_scenario_category_and_text_both_constrain() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), CategoryFilter::Only(Category::Image), "vpk");
    assert!(result.is_empty());
}

#[test]
fn test_unmatched_query_is_empty_not_error() {
    let catalog = two_record_catalog();
    assert!(filter(catalog.records(), CategoryFilter::All, "zzzz-no-such").is_empty());
}

#[test]
fn test_filter_on_empty_catalog() {
    assert!(filter(&[], CategoryFilter::All, "").is_empty());
}

#[test]
fn test_query_state_drives_view() {
    let catalog = Catalog::builtin();

    let state = QueryState::default();
    assert_eq!(state.apply(catalog).len(), catalog.len());

    let state = state.with_category(Category::Game);
    let games = state.apply(catalog);
    assert!(games.iter().all(|r| r.category == Category::Game));

    let state = state.with_search("valve");
    let valve = state.apply(catalog);
    assert!(valve.iter().any(|r| r.extension == ".vpk"));
    assert!(valve.len() <= games.len());
}
