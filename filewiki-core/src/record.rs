//! Catalog records and derived display statistics

use crate::Category;
use serde::Serialize;

/// One file extension entry of the catalog.
///
/// Records are compiled-in constant data, so every field borrows `'static`
/// text. The `extension` (e.g. `.vpk`) is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRecord {
    /// Identifying token including the leading dot
    pub extension: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    pub category: Category,
    /// One-paragraph summary shown on the card
    pub short_description: &'static str,
    /// Full text shown in the detail view
    pub long_description: &'static str,
    /// Platforms that can open the format, in display order
    pub platform_compatibility: &'static [&'static str],
    pub associated_technologies: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    /// 0-100
    pub popularity_score: u8,
}

impl ExtensionRecord {
    /// Display-only statistics for the detail view
    pub fn detail_stats(&self) -> DetailStats {
        DetailStats {
            popularity: self.popularity_score.min(100),
            compatibility: compatibility_score(self.platform_compatibility.len()),
        }
    }
}

/// Derived bars of the detail view, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailStats {
    pub popularity: u8,
    pub compatibility: u8,
}

impl DetailStats {
    /// Labelled rows in chart order
    pub fn rows(&self) -> [(&'static str, u8); 2] {
        [
            ("Популярность", self.popularity),
            ("Совместимость", self.compatibility),
        ]
    }
}

/// Each supported platform is worth 20 points, capped at 100
pub fn compatibility_score(platforms: usize) -> u8 {
    platforms.saturating_mul(20).min(100) as u8
}

/// Normalize user input to the catalog key form: trimmed, lowercase, leading dot.
pub fn normalize_extension(input: &str) -> String {
    let trimmed = input.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}
