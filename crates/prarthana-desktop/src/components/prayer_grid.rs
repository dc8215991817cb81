//! Prayer grid component

use dioxus::prelude::*;

use super::PrayerCard;
use crate::state::AppState;

/// Grid of prayer cards for the current filter state.
///
/// Only matching cards are rendered, so the no-results placeholder exists
/// exactly when the visible set is empty and never more than once.
#[component]
pub fn PrayerGrid() -> Element {
    let mut state = use_context::<AppState>();
    let filtered = state.filtered_prayers();
    let total = (state.prayers)().len();
    let filters_active = state.filter_state().is_active();

    rsx! {
        if filters_active {
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                p {
                    style: "margin: 0; font-size: 12px; color: #6b7280;",
                    "{filtered.len()} / {total} प्रार्थनाएँ"
                }
                button {
                    style: "
                        padding: 6px 10px;
                        border: 1px solid #e5e7eb;
                        border-radius: 6px;
                        background: #ffffff;
                        font-size: 12px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.clear_filters(),
                    "फ़िल्टर हटाएँ"
                }
            }
        }

        div {
            class: "category-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                gap: 12px;
            ",

            if filtered.is_empty() {
                div {
                    class: "no-results-message",
                    style: "
                        grid-column: 1 / -1;
                        text-align: center;
                        padding: 2rem;
                        color: #666666;
                    ",
                    div {
                        style: "font-size: 3rem; margin-bottom: 1rem;",
                        "🔍"
                    }
                    h3 {
                        style: "margin: 0 0 8px 0;",
                        "कोई परिणाम नहीं मिला"
                    }
                    p {
                        style: "margin: 0;",
                        "कृपया अपनी खोज को संशोधित करें"
                    }
                }
            } else {
                for prayer in filtered {
                    {
                        let card_key = prayer.id.to_string();
                        rsx! {
                            PrayerCard {
                                key: "{card_key}",
                                prayer,
                            }
                        }
                    }
                }
            }
        }
    }
}
