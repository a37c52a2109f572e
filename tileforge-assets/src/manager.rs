//! Asset managers: a loader seam plus a cached front.

use crate::cache::WeakCache;
use crate::error::AssetError;
use serde_json::Value;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads one kind of asset from the filesystem.
///
/// Implementors resolve keys relative to the manager's asset root.
/// Keys carry whatever the asset kind needs: a bare filename for a
/// data file, a filename plus region for a sprite sheet, and so on.
pub trait AssetLoader {
    type Key: Eq + Hash + Clone;
    type Asset;

    fn load(&self, root: &Path, key: &Self::Key) -> Result<Self::Asset, AssetError>;
}

/// A cached front over an [`AssetLoader`].
///
/// Holds loaded assets weakly: an asset stays shared while used
/// anywhere in the game and is reloaded from disk after the last user
/// drops it.
pub struct AssetManager<L: AssetLoader> {
    root: PathBuf,
    loader: L,
    cache: WeakCache<L::Key, L::Asset>,
}

impl<L: AssetLoader> AssetManager<L> {
    /// Creates a manager resolving keys under `root`.
    pub fn new(root: impl Into<PathBuf>, loader: L) -> Self {
        Self {
            root: root.into(),
            loader,
            cache: WeakCache::new(),
        }
    }

    /// Returns the asset for `key`, loading it on a cache miss.
    pub fn get(&self, key: &L::Key) -> Result<Arc<L::Asset>, AssetError> {
        if let Some(asset) = self.cache.get(key) {
            tracing::debug!(root = %self.root.display(), "asset cache hit");
            return Ok(asset);
        }
        tracing::debug!(root = %self.root.display(), "asset cache miss, loading");
        self.cache
            .get_or_try_insert_with(key, || self.loader.load(&self.root, key))
    }

    /// The asset root this manager resolves keys under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sweeps dead cache entries; returns how many were removed.
    pub fn prune(&self) -> usize {
        self.cache.prune()
    }
}

/// Loads JSON data files into [`serde_json::Value`]s.
pub struct JsonLoader;

impl AssetLoader for JsonLoader {
    type Key = String;
    type Asset = Value;

    fn load(&self, root: &Path, key: &Self::Key) -> Result<Self::Asset, AssetError> {
        let path = root.join(key);
        let contents = std::fs::read_to_string(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| AssetError::Json { path, source })
    }
}

/// Cached manager for JSON data files.
pub type JsonManager = AssetManager<JsonLoader>;
