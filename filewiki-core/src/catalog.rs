//! Catalog Store
//!
//! The built-in catalog is a process-wide, read-only value initialized on
//! first access. Custom catalogs can be built with [`Catalog::new`], which
//! checks the record invariants.

use crate::record::normalize_extension;
use crate::{data, Category, ExtensionRecord, FileWikiError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::error;

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Immutable collection of extension records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ExtensionRecord>,
    /// extension -> position in `records`
    by_extension: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog, validating uniqueness, extension format and score range
    pub fn new(records: Vec<ExtensionRecord>) -> Result<Self> {
        let mut by_extension = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            validate_record(record)?;
            if by_extension.insert(record.extension, idx).is_some() {
                return Err(FileWikiError::DuplicateExtension(record.extension.to_string()));
            }
        }

        Ok(Self { records, by_extension })
    }

    /// The compiled-in catalog
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let built = Catalog::new(data::RECORDS.to_vec());
            debug_assert!(built.is_ok(), "invalid built-in catalog: {:?}", built.as_ref().err());
            built.unwrap_or_else(|e| {
                error!(error = %e, "Built-in catalog failed validation");
                Catalog {
                    records: Vec::new(),
                    by_extension: HashMap::new(),
                }
            })
        })
    }

    /// Re-check every invariant of an existing catalog
    pub fn validate(&self) -> Result<()> {
        Catalog::new(self.records.clone()).map(|_| ())
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtensionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by extension; case-insensitive, leading dot optional
    pub fn get(&self, extension: &str) -> Option<&ExtensionRecord> {
        let key = normalize_extension(extension);
        self.by_extension
            .get(key.as_str())
            .map(|&idx| &self.records[idx])
    }

    /// Number of records per category, in sidebar order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self.records.iter().filter(|r| r.category == category).count();
                (category, count)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ExtensionRecord;
    type IntoIter = std::slice::Iter<'a, ExtensionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate_record(record: &ExtensionRecord) -> Result<()> {
    let ext = record.extension;
    let well_formed = ext.len() > 1
        && ext.starts_with('.')
        && !ext.chars().any(|c| c.is_whitespace() || c.is_uppercase());
    if !well_formed {
        return Err(FileWikiError::InvalidExtension(ext.to_string()));
    }

    if record.popularity_score > 100 {
        return Err(FileWikiError::PopularityOutOfRange {
            extension: ext.to_string(),
            score: record.popularity_score,
        });
    }

    Ok(())
}
