//! Prayer model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for a prayer, using an ASCII slug.
///
/// The catalog is fixed, so slugs stand in for generated ids and stay
/// readable in logs and persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrayerId(String);

impl PrayerId {
    /// Create an id from a slug string
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of prayer categories used by the catalog.
///
/// Display labels are the Hindi strings the category selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// आरती
    Aarti,
    /// चालीसा
    Chalisa,
    /// मंत्र
    Mantra,
    /// भजन
    Bhajan,
    /// भक्ति
    Bhakti,
}

impl Category {
    /// All categories, in selector order
    pub const ALL: [Self; 5] = [
        Self::Aarti,
        Self::Chalisa,
        Self::Mantra,
        Self::Bhajan,
        Self::Bhakti,
    ];

    /// The Hindi label shown in the UI and used as the selector value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aarti => "आरती",
            Self::Chalisa => "चालीसा",
            Self::Mantra => "मंत्र",
            Self::Bhajan => "भजन",
            Self::Bhakti => "भक्ति",
        }
    }

    /// Parse a category from its Hindi label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category restriction: either the सभी sentinel or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction (the सभी option)
    #[default]
    All,
    /// Exactly one category
    Only(Category),
}

impl CategoryFilter {
    /// The selector value meaning "all categories"
    pub const ALL_LABEL: &'static str = "सभी";

    /// Whether a card with the given category passes this filter.
    /// Exact equality under `Only`, always true under `All`.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }

    /// Parse a selector value, treating the सभी sentinel (and unknown
    /// labels) as no restriction.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Category::from_label(label).map_or(Self::All, Self::Only)
    }

    /// The selector value for this filter
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }
}

/// One prayer card in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prayer {
    /// Stable identifier
    pub id: PrayerId,
    /// Title shown as the card heading
    pub title: String,
    /// Short description shown under the title
    pub description: String,
    /// Category the card is tagged with
    pub category: Category,
}

impl Prayer {
    /// Create a prayer card
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: PrayerId::new(id),
            title: title.into(),
            description: description.into(),
            category,
        }
    }

    /// All text the search matches against: title and description
    /// concatenated, in render order.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_category_from_unknown_label() {
        assert_eq!(Category::from_label("कविता"), None);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_filter_only_is_exact() {
        let filter = CategoryFilter::Only(Category::Bhakti);
        assert!(filter.matches(Category::Bhakti));
        assert!(!filter.matches(Category::Aarti));
        assert!(!filter.matches(Category::Mantra));
    }

    #[test]
    fn test_filter_from_sentinel_label() {
        assert_eq!(
            CategoryFilter::from_label(CategoryFilter::ALL_LABEL),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::from_label("चालीसा"),
            CategoryFilter::Only(Category::Chalisa)
        );
    }

    #[test]
    fn test_searchable_text_contains_title_and_description() {
        let prayer = Prayer::new(
            "hanuman-chalisa",
            "हनुमान चालीसा",
            "Forty verses in praise of Hanuman",
            Category::Chalisa,
        );
        let text = prayer.searchable_text();
        assert!(text.contains("हनुमान चालीसा"));
        assert!(text.contains("Forty verses"));
    }
}
