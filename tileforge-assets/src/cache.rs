//! Weak-reference cache.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Weak};

/// A cache that holds weak references to its values.
///
/// `get` returns a shared `Arc` while at least one user still holds
/// the value; once the last `Arc` drops, the entry goes dead and the
/// next request misses. Dead entries are swept opportunistically on
/// insert and explicitly via [`WeakCache::prune`].
pub struct WeakCache<K, V> {
    entries: RwLock<HashMap<K, Weak<V>>>,
}

impl<K: Eq + Hash + Clone, V> WeakCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Looks up a live value.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.read().get(key).and_then(Weak::upgrade)
    }

    /// Stores a value, keeping only a weak reference to it.
    pub fn insert(&self, key: K, value: &Arc<V>) {
        let mut entries = self.entries.write();
        entries.retain(|_, weak| weak.strong_count() > 0);
        entries.insert(key, Arc::downgrade(value));
    }

    /// Returns the cached value for `key`, or loads one with `load`,
    /// caches it, and returns it.
    ///
    /// On load failure nothing is cached and the error is returned.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &K,
        load: impl FnOnce() -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = Arc::new(load()?);
        self.insert(key.clone(), &value);
        Ok(value)
    }

    /// Removes dead entries; returns how many were swept.
    pub fn prune(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, weak| weak.strong_count() > 0);
        before - entries.len()
    }

    /// Number of entries whose value is still alive.
    pub fn live_count(&self) -> usize {
        self.entries
            .read()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl<K: Eq + Hash + Clone, V> Default for WeakCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_miss() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        assert!(cache.get(&"a".to_string()).is_none());
    }

    #[test]
    fn test_live_value_is_shared() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        let first = cache
            .get_or_try_insert_with(&"a".to_string(), || Ok::<_, ()>(7))
            .unwrap();
        let second = cache.get(&"a".to_string()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, 7);
    }

    #[test]
    fn test_entry_dies_with_last_user() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        let value = cache
            .get_or_try_insert_with(&"a".to_string(), || Ok::<_, ()>(7))
            .unwrap();
        assert_eq!(cache.live_count(), 1);

        drop(value);
        assert_eq!(cache.live_count(), 0);
        assert!(cache.get(&"a".to_string()).is_none());
    }

    #[test]
    fn test_reload_after_drop() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        let loads = std::cell::Cell::new(0);

        let value = cache
            .get_or_try_insert_with(&"a".to_string(), || {
                loads.set(loads.get() + 1);
                Ok::<_, ()>(7)
            })
            .unwrap();
        drop(value);

        cache
            .get_or_try_insert_with(&"a".to_string(), || {
                loads.set(loads.get() + 1);
                Ok::<_, ()>(7)
            })
            .unwrap();
        assert_eq!(loads.get(), 2);
    }

    #[test]
    fn test_load_failure_not_cached() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        let result = cache.get_or_try_insert_with(&"a".to_string(), || Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(cache.live_count(), 0);

        let value = cache
            .get_or_try_insert_with(&"a".to_string(), || Ok::<_, &str>(7))
            .unwrap();
        assert_eq!(*value, 7);
    }

    #[test]
    fn test_prune_sweeps_dead_entries() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        let kept = cache
            .get_or_try_insert_with(&"kept".to_string(), || Ok::<_, ()>(1))
            .unwrap();
        let dropped = cache
            .get_or_try_insert_with(&"dropped".to_string(), || Ok::<_, ()>(2))
            .unwrap();
        drop(dropped);

        assert_eq!(cache.prune(), 1);
        assert_eq!(cache.live_count(), 1);
        assert_eq!(*kept, 1);
    }
}
