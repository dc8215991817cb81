//! UI Components
//!
//! Reusable UI components for the desktop application.

mod category_select;
mod prayer_card;
mod prayer_grid;
mod search_bar;

pub use category_select::CategorySelect;
pub use prayer_card::PrayerCard;
pub use prayer_grid::PrayerGrid;
pub use search_bar::SearchBar;
