//! Category selector component

use dioxus::prelude::*;

use prarthana_core::{Category, CategoryFilter};

use crate::state::AppState;

/// Dropdown restricting the grid to one category, with the सभी sentinel
/// meaning no restriction.
#[component]
pub fn CategorySelect() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.category_filter)();

    rsx! {
        select {
            class: "category-filter",
            value: "{current.label()}",
            onchange: move |evt| {
                state.category_filter.set(CategoryFilter::from_label(&evt.value()));
            },
            style: "
                padding: 8px 12px;
                border: 1px solid #e5e7eb;
                border-radius: 6px;
                font-size: 14px;
                background: #ffffff;
                color: #111827;
            ",

            option {
                value: CategoryFilter::ALL_LABEL,
                selected: current == CategoryFilter::All,
                {CategoryFilter::ALL_LABEL}
            }
            for category in Category::ALL {
                option {
                    key: "{category.label()}",
                    value: category.label(),
                    selected: current == CategoryFilter::Only(category),
                    {category.label()}
                }
            }
        }
    }
}
