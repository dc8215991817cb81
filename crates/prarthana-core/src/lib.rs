//! prarthana-core - Core library for Prarthana
//!
//! This crate contains the prayer catalog, the filter logic, and the
//! favorites abstraction shared by all Prarthana frontends.

pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;

pub use error::{Error, Result};
pub use models::{Category, CategoryFilter, Prayer, PrayerId};
