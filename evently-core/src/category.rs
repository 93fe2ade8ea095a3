//! The closed set of event categories and their display descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventlyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Music,
    Art,
    Food,
    Tech,
    Sports,
    Networking,
    Workshop,
    Entertainment,
}

/// Display metadata for a category, in the order the category bar shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub key: Category,
    pub label: &'static str,
    /// Hex color, e.g. `#8B5CF6`
    pub color: &'static str,
}

pub const CATEGORIES: [CategoryDescriptor; 8] = [
    CategoryDescriptor { key: Category::Music, label: "Music", color: "#8B5CF6" },
    CategoryDescriptor { key: Category::Art, label: "Art", color: "#EC4899" },
    CategoryDescriptor { key: Category::Food, label: "Food", color: "#F97316" },
    CategoryDescriptor { key: Category::Tech, label: "Tech", color: "#3B82F6" },
    CategoryDescriptor { key: Category::Sports, label: "Sports", color: "#10B981" },
    CategoryDescriptor { key: Category::Networking, label: "Networking", color: "#F59E0B" },
    CategoryDescriptor { key: Category::Workshop, label: "Workshop", color: "#EF4444" },
    CategoryDescriptor { key: Category::Entertainment, label: "Entertainment", color: "#8B5CF6" },
];

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Art => "art",
            Category::Food => "food",
            Category::Tech => "tech",
            Category::Sports => "sports",
            Category::Networking => "networking",
            Category::Workshop => "workshop",
            Category::Entertainment => "entertainment",
        }
    }

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        // CATEGORIES is declared in enum order
        &CATEGORIES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl CategoryDescriptor {
    /// The descriptor color as an RGB triple, or None if the hex string is malformed.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = EventlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CATEGORIES
            .iter()
            .map(|d| d.key)
            .find(|c| c.key() == wanted)
            .ok_or_else(|| EventlyError::UnknownCategory(s.to_string()))
    }
}

/// Category selection from the category bar: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = EventlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}
