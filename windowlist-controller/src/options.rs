use alloc::sync::Arc;

use windowlist::{BoxError, Error, ItemKey};

use crate::controller::WindowChange;

/// Render callback fired when the published window changes.
///
/// Returning an `Err` does not stop the engine: the failure is wrapped as
/// [`Error::HostCallback`], reported through the error hook, and the window
/// is republished on the next recompute.
pub type WindowChangeCallback<K> =
    Arc<dyn Fn(&WindowChange<'_, K>) -> Result<(), BoxError> + Send + Sync>;

/// Notification fired once per key entering (create) or leaving (destroy)
/// the cached window.
pub type LifecycleCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Hook receiving contained engine errors, currently host callback
/// failures.
pub type ErrorCallback = Arc<dyn Fn(&Error) + Send + Sync>;

/// When a pending recompute runs, relative to the input event that armed
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// Run on the next `on_frame` tick.
    NextFrame,
    /// Run on the first tick at least this many milliseconds after the
    /// event that armed the recompute. Later coalesced events do not move
    /// the deadline.
    DebounceMs(u64),
}

impl Default for Schedule {
    fn default() -> Self {
        Self::NextFrame
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct VirtualListOptions<K = ItemKey> {
    pub item_count: usize,
    /// Size assumed for every item until it is measured. Must be non-zero.
    pub estimated_item_size: u32,
    /// Extra items materialized on each side of the visible range.
    pub overscan: usize,
    pub schedule: Schedule,
    /// Maps an index to the item's stable identity.
    ///
    /// The default (the index itself) is only correct for collections that
    /// append/remove at the end or never change; supply a real key when
    /// items can move, or cached instances will be matched to the wrong
    /// rows.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
    pub on_window_change: Option<WindowChangeCallback<K>>,
    pub on_create: Option<LifecycleCallback<K>>,
    pub on_destroy: Option<LifecycleCallback<K>>,
    pub on_error: Option<ErrorCallback>,
}

impl<K> Clone for VirtualListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            estimated_item_size: self.estimated_item_size,
            overscan: self.overscan,
            schedule: self.schedule,
            get_item_key: Arc::clone(&self.get_item_key),
            on_window_change: self.on_window_change.clone(),
            on_create: self.on_create.clone(),
            on_destroy: self.on_destroy.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl VirtualListOptions<ItemKey> {
    /// Creates options for a list keyed by index (`ItemKey = u64`).
    pub fn new(item_count: usize, estimated_item_size: u32) -> Self {
        Self {
            item_count,
            estimated_item_size,
            overscan: 1,
            schedule: Schedule::default(),
            get_item_key: Arc::new(|i| i as u64),
            on_window_change: None,
            on_create: None,
            on_destroy: None,
            on_error: None,
        }
    }
}

impl<K> VirtualListOptions<K> {
    /// Creates options with a custom key mapping, for collections whose
    /// items can move between indices.
    pub fn new_with_key(
        item_count: usize,
        estimated_item_size: u32,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_count,
            estimated_item_size,
            overscan: 1,
            schedule: Schedule::default(),
            get_item_key: Arc::new(get_item_key),
            on_window_change: None,
            on_create: None,
            on_destroy: None,
            on_error: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_on_window_change(
        mut self,
        f: Option<
            impl Fn(&WindowChange<'_, K>) -> Result<(), BoxError> + Send + Sync + 'static,
        >,
    ) -> Self {
        self.on_window_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_create(mut self, f: Option<impl Fn(&K) + Send + Sync + 'static>) -> Self {
        self.on_create = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_destroy(mut self, f: Option<impl Fn(&K) + Send + Sync + 'static>) -> Self {
        self.on_destroy = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_error(mut self, f: Option<impl Fn(&Error) + Send + Sync + 'static>) -> Self {
        self.on_error = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for VirtualListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("item_count", &self.item_count)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("overscan", &self.overscan)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}
