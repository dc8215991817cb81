//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use prarthana_core::models::catalog;
use prarthana_core::CategoryFilter;

use crate::services::{FileFavoritesStore, SharedFavoritesStore, VoiceSearchService};
use crate::state::AppState;
use crate::views::Home;

/// Global stylesheet, including the card entrance animation.
const STYLESHEET: &str = "
    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(12px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .prayer-card {
        animation: fade-in-up 0.3s ease-out;
    }
";

/// Root application component
#[component]
pub fn App() -> Element {
    let prayers = use_signal(catalog);
    let search_query = use_signal(String::new);
    let category_filter = use_signal(CategoryFilter::default);

    let favorites_store: Signal<SharedFavoritesStore> =
        use_signal(|| Arc::new(FileFavoritesStore::default()) as SharedFavoritesStore);

    // Voice search only exists when the host environment is configured for
    // it; absence is a normal branch, not an error.
    let voice_search = use_signal(|| match VoiceSearchService::from_env() {
        Ok(service) => {
            let status = service.config_status();
            if status.enabled {
                tracing::info!(language = %status.language, "voice search available");
                Some(Arc::new(service))
            } else {
                tracing::info!("voice search not configured, running without it");
                None
            }
        }
        Err(e) => {
            tracing::error!("Failed to initialize voice search: {e}");
            None
        }
    });

    use_context_provider(|| AppState {
        prayers,
        search_query,
        category_filter,
        favorites_store,
        voice_search,
    });

    rsx! {
        document::Style { {STYLESHEET} }

        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: #faf7f0;
                color: #111827;
            ",
            Home {}
        }
    }
}
