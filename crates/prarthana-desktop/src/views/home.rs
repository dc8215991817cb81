//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{CategorySelect, PrayerGrid, SearchBar};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 960px;
                margin: 0 auto;
                padding: 24px 16px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            h1 {
                style: "margin: 0; font-size: 24px; text-align: center;",
                "प्रार्थना संग्रह"
            }

            div {
                class: "filter-row",
                style: "display: flex; gap: 8px; align-items: center;",

                SearchBar {}
                CategorySelect {}
            }

            PrayerGrid {}
        }
    }
}
