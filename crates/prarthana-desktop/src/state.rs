//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use prarthana_core::filter::{filter_prayers, FilterState};
use prarthana_core::{CategoryFilter, Prayer};

use crate::services::{SharedFavoritesStore, VoiceSearchService};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The fixed prayer catalog, in display order
    pub prayers: Signal<Vec<Prayer>>,
    /// Current search query, as typed
    pub search_query: Signal<String>,
    /// Active category restriction
    pub category_filter: Signal<CategoryFilter>,
    /// Favorites persistence backend
    pub favorites_store: Signal<SharedFavoritesStore>,
    /// Optional voice-search capability; `None` when the host has none
    pub voice_search: Signal<Option<Arc<VoiceSearchService>>>,
}

impl AppState {
    /// Snapshot the live filter inputs
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: (self.search_query)(),
            category: (self.category_filter)(),
        }
    }

    /// Get the cards to show for the current filter state, in catalog order
    #[must_use]
    pub fn filtered_prayers(&self) -> Vec<Prayer> {
        let prayers = (self.prayers)();
        let outcome = filter_prayers(&prayers, &self.filter_state());

        prayers
            .into_iter()
            .filter(|prayer| outcome.visible.contains(&prayer.id))
            .collect()
    }

    /// Reset search text and category to the identity filter.
    /// Bound to the Escape key and the clear button.
    pub fn clear_filters(&mut self) {
        self.search_query.set(String::new());
        self.category_filter.set(CategoryFilter::All);
    }

    /// Write a voice transcript into the search field, replacing whatever
    /// is there. Whichever of typing and recognition finishes last wins.
    #[allow(dead_code)] // Called by voice search once microphone capture lands.
    pub fn apply_voice_transcript(&mut self, transcript: &str) {
        tracing::debug!(transcript, "applying voice transcript to search");
        self.search_query.set(transcript.to_string());
    }
}
