//! # tileforge-assets
//!
//! Asset loading and caching for tileforge.
//!
//! Assets are held through weak references: the cache keeps a unique
//! object alive and shared while anything in the game still uses it,
//! and lets it drop the moment the last user is gone. A later request
//! reloads from disk.
//!
//! Loading for a concrete asset kind goes through the [`AssetLoader`]
//! seam; this crate ships a JSON loader, while image/font/sprite
//! loading belongs to the graphics toolkit layered on top.

pub mod cache;
pub mod error;
pub mod manager;

pub use cache::WeakCache;
pub use error::AssetError;
pub use manager::{AssetLoader, AssetManager, JsonLoader, JsonManager};
