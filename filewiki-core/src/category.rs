//! File categories and their display accents
//!
//! The category set is closed: every catalog record carries exactly one of
//! the nine variants below.

use crate::{FileWikiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Audio,
    Video,
    Archive,
    Document,
    Executable,
    System,
    Code,
    Game,
}

impl Category {
    /// All categories in sidebar order
    pub const ALL: [Category; 9] = [
        Category::Image,
        Category::Audio,
        Category::Video,
        Category::Archive,
        Category::Document,
        Category::Executable,
        Category::System,
        Category::Code,
        Category::Game,
    ];

    /// Localized display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Image => "Изображения",
            Category::Audio => "Аудио",
            Category::Video => "Видео",
            Category::Archive => "Архивы",
            Category::Document => "Документы",
            Category::Executable => "Программы",
            Category::System => "Системные",
            Category::Code => "Код",
            Category::Game => "Игровые / Valve",
        }
    }

    /// Stable lowercase identifier (used on the command line and in JSON)
    pub fn id(self) -> &'static str {
        match self {
            Category::Image => "image",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Archive => "archive",
            Category::Document => "document",
            Category::Executable => "executable",
            Category::System => "system",
            Category::Code => "code",
            Category::Game => "game",
        }
    }

    /// Display accent for cards and charts
    pub fn accent(self) -> Accent {
        match self {
            Category::Image => Accent::Cyan,
            Category::Audio => Accent::Fuchsia,
            Category::Video => Accent::Violet,
            Category::Archive => Accent::Amber,
            Category::Document => Accent::Emerald,
            Category::Executable => Accent::Rose,
            Category::System => Accent::Slate,
            Category::Code => Accent::Lime,
            Category::Game => Accent::Orange,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FileWikiError;

    /// Accepts the identifier in any case (`image`, `GAME`) or the exact label.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(trimmed) || c.label() == trimmed)
            .ok_or_else(|| FileWikiError::UnknownCategory(s.to_string()))
    }
}

/// Display accent identifier attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Fuchsia,
    Violet,
    Amber,
    Emerald,
    Rose,
    Slate,
    Lime,
    Orange,
    /// Neutral fallback
    Zinc,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Fuchsia => "fuchsia",
            Accent::Violet => "violet",
            Accent::Amber => "amber",
            Accent::Emerald => "emerald",
            Accent::Rose => "rose",
            Accent::Slate => "slate",
            Accent::Lime => "lime",
            Accent::Orange => "orange",
            Accent::Zinc => "zinc",
        }
    }

    /// Chart colour as `#rrggbb`
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Cyan => "#22d3ee",
            Accent::Fuchsia => "#e879f9",
            Accent::Violet => "#a78bfa",
            Accent::Amber => "#fbbf24",
            Accent::Emerald => "#34d399",
            Accent::Rose => "#fb7185",
            Accent::Slate => "#94a3b8",
            Accent::Lime => "#a3e635",
            Accent::Orange => "#fb923c",
            Accent::Zinc => "#a1a1aa",
        }
    }
}

/// Active category of the gallery: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check if a record of `category` passes this filter
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => active == category,
        }
    }

    /// Heading shown above the gallery
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "База знаний",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            CategoryFilter::All => Accent::Zinc,
            CategoryFilter::Only(category) => category.accent(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = FileWikiError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}
