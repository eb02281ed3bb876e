//! Query Engine
//!
//! Filters the catalog by category and a free-text query. Text matching is a
//! case-insensitive substring check against the extension, the display name
//! and the short description; there is no tokenization or ranking, and the
//! result keeps catalog order.

use crate::{Catalog, CategoryFilter, ExtensionRecord};
use tracing::debug;

/// Filter `records` by category and search text.
///
/// An empty `search` matches every record. The input is never modified and
/// the output is an order-preserving subsequence of it.
pub fn filter<'a>(
    records: &'a [ExtensionRecord],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a ExtensionRecord> {
    let needle = search.to_lowercase();

    let result: Vec<&ExtensionRecord> = records
        .iter()
        .filter(|record| category.matches(record.category) && matches_search(record, &needle))
        .collect();

    debug!(
        ?category,
        search,
        matched = result.len(),
        total = records.len(),
        "Filtered catalog"
    );

    result
}

/// `needle` must already be lowercase
fn matches_search(record: &ExtensionRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [record.extension, record.display_name, record.short_description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter state of the gallery.
///
/// A value, not a shared variable: each transition returns a new state and the
/// view is re-derived from it with [`QueryState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
}

impl QueryState {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Same search, different category
    pub fn with_category(self, category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    /// Same category, different search text
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// All categories, empty search
    pub fn cleared(self) -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty()
    }

    /// Run the query against a catalog
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ExtensionRecord> {
        filter(catalog.records(), self.category, &self.search)
    }
}
