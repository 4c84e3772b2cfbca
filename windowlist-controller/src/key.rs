#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bounds an item identity must satisfy to be cached.
///
/// Keys are cloned into reconciliation results and published entries, and
/// index the cache map: hashed under `std`, ordered under `no_std`.
#[cfg(feature = "std")]
pub trait CacheKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> CacheKey for K {}

#[cfg(not(feature = "std"))]
pub trait CacheKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> CacheKey for K {}
