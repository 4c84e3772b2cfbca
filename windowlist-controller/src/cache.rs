use alloc::vec::Vec;

use windowlist::Window;

use crate::key::{CacheKey, KeyMap};

/// Bookkeeping for one cached item instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Index the entry was last seen at.
    pub index: usize,
    /// Reconcile cycle the entry was last inside the window.
    pub last_seen: u64,
}

/// The outcome of reconciling the cache against one window.
///
/// `to_create` and `to_keep` are in ascending index order; `to_destroy`
/// carries the evicted keys in no particular order.
#[derive(Clone, Debug)]
pub struct Reconciliation<K> {
    pub to_create: Vec<K>,
    pub to_keep: Vec<K>,
    pub to_destroy: Vec<K>,
}

impl<K> Default for Reconciliation<K> {
    fn default() -> Self {
        Self {
            to_create: Vec::new(),
            to_keep: Vec::new(),
            to_destroy: Vec::new(),
        }
    }
}

impl<K> Reconciliation<K> {
    /// True when the window produced no cache churn at all.
    pub fn is_noop(&self) -> bool {
        self.to_create.is_empty() && self.to_destroy.is_empty()
    }
}

/// Cache of materialized item instances, keyed by stable identity.
///
/// The cache tracks which keys the host currently has instantiated, so a
/// window change turns into the minimal set of create/destroy operations.
/// An entry that just scrolled out of the window is retained for one
/// reconcile cycle before it is reported in `to_destroy`: an immediate
/// scroll back re-keeps it instead of destroying and recreating it.
///
/// Entries whose index no longer fits the collection are evicted without
/// the grace cycle, so shrinking the collection drains the affected keys
/// on the very next reconcile.
#[derive(Clone, Debug)]
pub struct ItemCache<K> {
    entries: KeyMap<K, CacheEntry>,
    version: u64,
}

impl<K: CacheKey> ItemCache<K> {
    pub fn new() -> Self {
        Self {
            entries: KeyMap::new(),
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Brings the cache in line with `window`, keying each in-window index
    /// through `key_of`.
    pub fn reconcile(
        &mut self,
        window: &Window,
        item_count: usize,
        mut key_of: impl FnMut(usize) -> K,
    ) -> Reconciliation<K> {
        debug_assert!(window.end_index <= item_count);
        self.version += 1;
        let version = self.version;
        let mut out = Reconciliation::default();

        for index in window.start_index..window.end_index {
            let key = key_of(index);
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.index = index;
                entry.last_seen = version;
                out.to_keep.push(key);
            } else {
                self.entries.insert(
                    key.clone(),
                    CacheEntry {
                        index,
                        last_seen: version,
                    },
                );
                out.to_create.push(key);
            }
        }

        self.entries.retain(|key, entry| {
            if entry.last_seen == version {
                return true;
            }
            let expired = version.saturating_sub(entry.last_seen) > 1;
            if expired || entry.index >= item_count {
                out.to_destroy.push(key.clone());
                false
            } else {
                true
            }
        });

        out
    }

    /// Clears every entry, returning the evicted keys. Used when the host
    /// replaces the backing collection wholesale.
    pub fn evict_all(&mut self) -> Vec<K> {
        core::mem::take(&mut self.entries).into_keys().collect()
    }
}

impl<K: CacheKey> Default for ItemCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
