//! Prayer card component

use dioxus::prelude::*;

use prarthana_core::favorites::add_to_favorites;
use prarthana_core::filter::{highlight_matches, Segment};
use prarthana_core::Prayer;

use crate::state::AppState;

/// A single prayer card in the grid.
#[component]
pub fn PrayerCard(prayer: Prayer) -> Element {
    let state = use_context::<AppState>();
    let search = (state.search_query)();
    let description_segments = highlight_matches(&prayer.description, &search);

    let read_title = prayer.title.clone();
    let favorite_title = prayer.title.clone();

    rsx! {
        div {
            class: "prayer-card",
            style: "
                background: #ffffff;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",

                h3 {
                    class: "prayer-title",
                    style: "margin: 0; font-size: 17px; color: #111827;",
                    "{prayer.title}"
                }
                span {
                    class: "category-badge",
                    style: "
                        font-size: 12px;
                        padding: 2px 8px;
                        border-radius: 999px;
                        background: #fef3c7;
                        color: #92400e;
                        white-space: nowrap;
                    ",
                    "{prayer.category.label()}"
                }
            }

            p {
                class: "prayer-description",
                style: "margin: 0; font-size: 13px; color: #6b7280;",
                for (index, segment) in description_segments.into_iter().enumerate() {
                    {
                        match segment {
                            Segment::Plain(text) => rsx! {
                                span { key: "{index}", "{text}" }
                            },
                            Segment::Highlight(text) => rsx! {
                                mark {
                                    key: "{index}",
                                    style: "background: #fde68a; border-radius: 2px;",
                                    "{text}"
                                }
                            },
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; margin-top: 4px;",

                button {
                    class: "read-btn",
                    style: "
                        flex: 1;
                        padding: 8px 12px;
                        border: none;
                        border-radius: 6px;
                        background: #ea580c;
                        color: #ffffff;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        open_prayer(&read_title);
                    },
                    "पढ़ें"
                }

                button {
                    class: "favorite-btn",
                    style: "
                        padding: 8px 12px;
                        border: 1px solid #e5e7eb;
                        border-radius: 6px;
                        background: #ffffff;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        add_favorite(&state, &favorite_title);
                    },
                    "♡"
                }
            }
        }
    }
}

/// Read-action stub: acknowledge the click with a blocking dialog.
fn open_prayer(title: &str) {
    tracing::debug!(title, "read action");
    rfd::MessageDialog::new()
        .set_title("प्रार्थना")
        .set_description(format!("{title} खोला जा रहा है..."))
        .show();
    // Navigation to a per-prayer reading view keyed by the title goes here.
}

/// Add the prayer to the favorites, confirming only when it was newly
/// added. Re-adding an existing favorite is a silent no-op.
fn add_favorite(state: &AppState, title: &str) {
    let store = (state.favorites_store)();
    match add_to_favorites(store.as_ref(), title) {
        Ok(true) => {
            rfd::MessageDialog::new()
                .set_title("पसंदीदा")
                .set_description(format!("{title} पसंदीदा में जोड़ा गया!"))
                .show();
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to save favorite: {e}");
        }
    }
}
