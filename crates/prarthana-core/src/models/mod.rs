//! Data models for Prarthana

mod catalog;
mod prayer;

pub use catalog::catalog;
pub use prayer::{Category, CategoryFilter, Prayer, PrayerId};
