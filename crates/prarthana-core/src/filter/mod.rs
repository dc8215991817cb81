//! Prayer filtering (search text + category).
//!
//! The filter is a pure function from the catalog and the current filter
//! state to a visible-card set and a placeholder flag. Frontends render the
//! outcome; they hold no filtering logic of their own.

use regex::RegexBuilder;

use crate::models::{CategoryFilter, Prayer, PrayerId};

/// The two live filter inputs. Recomputed state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search query, as typed
    pub search: String,
    /// Category restriction
    pub category: CategoryFilter,
}

impl FilterState {
    /// Reset both inputs: empty search, no category restriction.
    /// Equivalent to the user clearing both fields by hand.
    pub fn clear(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
    }

    /// Whether either input narrows the view
    #[must_use]
    pub fn is_active(&self) -> bool {
        !normalize_query(&self.search).is_empty() || self.category != CategoryFilter::All
    }
}

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Ids of the cards to show, in catalog order
    pub visible: Vec<PrayerId>,
    /// Whether the no-results placeholder should be shown
    pub show_placeholder: bool,
}

/// Normalize a search query: lowercase + trim. No tokenization.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decide per-card visibility for the whole catalog.
///
/// A card is shown if and only if it passes the category filter (exact
/// equality, or no restriction) and the text filter (case-insensitive
/// substring over title + description, or empty query). Card order is
/// preserved; the function is deterministic, so repeated calls with the
/// same inputs converge to the same outcome.
#[must_use]
pub fn filter_prayers(prayers: &[Prayer], state: &FilterState) -> FilterOutcome {
    let query = normalize_query(&state.search);

    let visible: Vec<PrayerId> = prayers
        .iter()
        .filter(|prayer| state.category.matches(prayer.category))
        .filter(|prayer| matches_query(prayer, &query))
        .map(|prayer| prayer.id.clone())
        .collect();

    let show_placeholder = visible.is_empty();
    FilterOutcome {
        visible,
        show_placeholder,
    }
}

fn matches_query(prayer: &Prayer, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    prayer.searchable_text().to_lowercase().contains(query)
}

/// One piece of text after highlight segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any match
    Plain(String),
    /// Text matching the search term
    Highlight(String),
}

/// Split `text` into plain and highlighted segments around every
/// case-insensitive occurrence of `term`. An empty or whitespace-only term
/// yields the whole text as one plain segment. Concatenating the segments
/// always reproduces `text`.
#[must_use]
pub fn highlight_matches(text: &str, term: &str) -> Vec<Segment> {
    let term = term.trim();
    if term.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let Ok(re) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::Plain(text.to_string())];
    };

    let mut segments = Vec::new();
    let mut last_end = 0;
    for found in re.find_iter(text) {
        if found.start() > last_end {
            segments.push(Segment::Plain(text[last_end..found.start()].to_string()));
        }
        segments.push(Segment::Highlight(found.as_str().to_string()));
        last_end = found.end();
    }
    if last_end < text.len() {
        segments.push(Segment::Plain(text[last_end..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{catalog, Category};
    use pretty_assertions::assert_eq;

    fn sample_prayers() -> Vec<Prayer> {
        vec![
            Prayer::new("a", "Ram Bhajan", "Songs in praise of Ram", Category::Bhajan),
            Prayer::new("b", "Gayatri Mantra", "The great mantra", Category::Mantra),
            Prayer::new("c", "Shiv Bhakti", "Shiv tandav stotra", Category::Bhakti),
        ]
    }

    fn visible_ids(prayers: &[Prayer], state: &FilterState) -> Vec<String> {
        filter_prayers(prayers, state)
            .visible
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn identity_filter_shows_every_card() {
        let prayers = catalog();
        let outcome = filter_prayers(&prayers, &FilterState::default());
        assert_eq!(outcome.visible.len(), prayers.len());
        assert!(!outcome.show_placeholder);
    }

    #[test]
    fn category_filter_narrows_strictly() {
        let prayers = sample_prayers();
        let state = FilterState {
            search: String::new(),
            category: CategoryFilter::Only(Category::Mantra),
        };
        let shown = visible_ids(&prayers, &state);
        assert_eq!(shown, vec!["b"]);
        for prayer in &prayers {
            let is_shown = shown.iter().any(|id| id == prayer.id.as_str());
            assert_eq!(is_shown, prayer.category == Category::Mantra);
        }
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let prayers = sample_prayers();
        for query in ["RAM", "ram", "Ram"] {
            let state = FilterState {
                search: query.to_string(),
                category: CategoryFilter::All,
            };
            assert_eq!(visible_ids(&prayers, &state), vec!["a"], "query {query}");
        }
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let prayers = sample_prayers();
        let state = FilterState {
            search: "  mantra  ".to_string(),
            category: CategoryFilter::All,
        };
        assert_eq!(visible_ids(&prayers, &state), vec!["b"]);
    }

    #[test]
    fn search_and_category_combine() {
        let prayers = sample_prayers();
        let state = FilterState {
            search: "shiv".to_string(),
            category: CategoryFilter::Only(Category::Bhakti),
        };
        assert_eq!(visible_ids(&prayers, &state), vec!["c"]);

        let mismatched = FilterState {
            search: "shiv".to_string(),
            category: CategoryFilter::Only(Category::Mantra),
        };
        let outcome = filter_prayers(&prayers, &mismatched);
        assert!(outcome.visible.is_empty());
        assert!(outcome.show_placeholder);
    }

    #[test]
    fn recompute_is_idempotent() {
        let prayers = catalog();
        let state = FilterState {
            search: "चालीसा".to_string(),
            category: CategoryFilter::All,
        };
        let first = filter_prayers(&prayers, &state);
        let second = filter_prayers(&prayers, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_results_sets_placeholder() {
        let prayers = catalog();
        let state = FilterState {
            search: "xyunlikely123".to_string(),
            category: CategoryFilter::Only(Category::Bhakti),
        };
        let outcome = filter_prayers(&prayers, &state);
        assert!(outcome.visible.is_empty());
        assert!(outcome.show_placeholder);
    }

    #[test]
    fn clear_restores_identity_filter() {
        let prayers = catalog();
        let mut state = FilterState {
            search: "गणेश".to_string(),
            category: CategoryFilter::Only(Category::Aarti),
        };
        assert!(state.is_active());

        state.clear();
        assert_eq!(state, FilterState::default());
        assert!(!state.is_active());

        let outcome = filter_prayers(&prayers, &state);
        assert_eq!(outcome.visible.len(), prayers.len());
    }

    #[test]
    fn highlight_marks_case_insensitive_occurrences() {
        let segments = highlight_matches("Ram naam, RAM dhun", "ram");
        assert_eq!(
            segments,
            vec![
                Segment::Highlight("Ram".to_string()),
                Segment::Plain(" naam, ".to_string()),
                Segment::Highlight("RAM".to_string()),
                Segment::Plain(" dhun".to_string()),
            ]
        );
    }

    #[test]
    fn highlight_round_trips_input_text() {
        let text = "गायत्री मंत्र - वेदों का सार";
        let segments = highlight_matches(text, "मंत्र");
        let rebuilt: String = segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(s) | Segment::Highlight(s) => s.as_str(),
            })
            .collect();
        assert_eq!(rebuilt, text);
        assert!(segments.contains(&Segment::Highlight("मंत्र".to_string())));
    }

    #[test]
    fn highlight_with_empty_term_is_one_plain_segment() {
        let segments = highlight_matches("some text", "   ");
        assert_eq!(segments, vec![Segment::Plain("some text".to_string())]);
    }

    #[test]
    fn highlight_escapes_regex_metacharacters() {
        let segments = highlight_matches("a.b and acb", "a.b");
        assert_eq!(
            segments,
            vec![
                Segment::Highlight("a.b".to_string()),
                Segment::Plain(" and acb".to_string()),
            ]
        );
    }
}
