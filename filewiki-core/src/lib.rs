//! FileWiki - Reference catalog of file extensions
//!
//! A compiled-in catalog of file formats with a substring query engine,
//! derived detail statistics and an optional AI assist client.

pub mod category;
pub mod catalog;
mod data;
pub mod error;
pub mod query;
pub mod record;

#[cfg(feature = "assist")]
pub mod assist;

pub use catalog::Catalog;
pub use category::{Accent, Category, CategoryFilter};
pub use error::{FileWikiError, Result};
pub use query::{filter, QueryState};
pub use record::{compatibility_score, normalize_extension, DetailStats, ExtensionRecord};

#[cfg(feature = "assist")]
pub use assist::{AssistClient, AssistConfig};

/// Version of the compiled-in dataset
pub const CATALOG_VERSION: &str = "2.0.4";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(!CATALOG_VERSION.is_empty());
        assert_eq!(CATALOG_VERSION.split('.').count(), 3);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_covers_every_category() {
        for (category, count) in Catalog::builtin().category_counts() {
            assert!(count > 0, "no records for {:?}", category);
        }
    }
}
