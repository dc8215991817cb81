//! Desktop services
//!
//! Persistence and optional capabilities injected into the app at startup.

mod favorites;
mod voice;

pub use favorites::{FileFavoritesStore, SharedFavoritesStore};
pub use voice::VoiceSearchService;
