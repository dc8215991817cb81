//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search bar for filtering prayers.
///
/// Escape resets both the search text and the category selection, not just
/// this field.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "प्रार्थना खोजें...",
            value: "{state.search_query}",
            oninput: move |evt| {
                state.search_query.set(evt.value());
            },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    state.clear_filters();
                }
            },
            style: "
                flex: 1;
                padding: 8px 12px;
                border: 1px solid #e5e7eb;
                border-radius: 6px;
                font-size: 14px;
                background: #ffffff;
                color: #111827;
                outline: none;
            ",
        }
    }
}
