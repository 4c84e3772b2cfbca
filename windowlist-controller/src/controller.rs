use alloc::sync::Arc;
use alloc::vec::Vec;

use windowlist::{Align, Error, ItemKey, SizeModel, Window, compute_window, scroll_offset_for};

use crate::cache::ItemCache;
use crate::key::CacheKey;
use crate::options::{Schedule, VirtualListOptions};

/// One materialized row in a published window.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowEntry<K> {
    pub key: K,
    pub index: usize,
    /// Absolute offset of the row's top edge in content coordinates.
    pub offset_from_top: u64,
    pub size: u32,
}

/// Payload of the window change callback.
///
/// The engine never holds item payloads, so entries carry geometry and
/// identity only; hosts resolve `index` against the collection they own
/// (or use [`WindowChange::iter_with`]). `total_size` sizes the scrollable
/// area (spacer or scrollbar geometry).
#[derive(Debug)]
pub struct WindowChange<'a, K> {
    pub window: Window,
    pub total_size: u64,
    /// Entries for `window`, in ascending index order.
    pub entries: &'a [WindowEntry<K>],
}

impl<K> WindowChange<'_, K> {
    /// Pairs each entry with its payload from a host-owned slice. Entries
    /// whose index falls outside the slice are skipped.
    pub fn iter_with<'b, T>(
        &'b self,
        items: &'b [T],
    ) -> impl Iterator<Item = (&'b T, &'b WindowEntry<K>)> {
        self.entries
            .iter()
            .filter_map(move |entry| items.get(entry.index).map(|item| (item, entry)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Idle,
    NextFrame,
    DueAt(u64),
}

/// A callback-driven windowed list.
///
/// This type owns the size model and the item cache and turns host events
/// into at most one window publish per frame tick:
/// - `on_scroll` / `on_viewport_resize` record the latest values and arm a
///   recompute; a burst of events while one is pending only updates the
///   target (coalescing).
/// - `on_frame(now_ms)` runs the recompute when it is due, per the
///   configured [`Schedule`].
/// - Geometry mutations (`measure_item`, `update_item_count`, ...) apply
///   immediately and always fire on the next tick, debounce or not.
///
/// It holds no UI objects and spawns nothing; the host drives it from its
/// own event loop and applies the published entries however it renders.
#[derive(Clone, Debug)]
pub struct VirtualList<K = ItemKey> {
    options: VirtualListOptions<K>,
    model: SizeModel,
    cache: ItemCache<K>,

    scroll_offset: u64,
    viewport_height: u32,
    pending: Pending,
    destroyed: bool,

    // Bumped by every layout-affecting mutation; part of the publish
    // identity so a measurement inside an unchanged index range still
    // republishes.
    layout_generation: u64,
    last_published: Option<(usize, usize, u64)>,
    last_window: Window,

    entries_scratch: Vec<WindowEntry<K>>,
}

impl<K: CacheKey> VirtualList<K> {
    pub fn new(options: VirtualListOptions<K>) -> Result<Self, Error> {
        let model = SizeModel::new(options.item_count, options.estimated_item_size)?;
        wdebug!(
            item_count = options.item_count,
            estimated_item_size = options.estimated_item_size,
            overscan = options.overscan,
            "VirtualList::new"
        );
        Ok(Self {
            model,
            cache: ItemCache::new(),
            scroll_offset: 0,
            viewport_height: 0,
            pending: Pending::Idle,
            destroyed: false,
            layout_generation: 0,
            last_published: None,
            last_window: Window::default(),
            entries_scratch: Vec::new(),
            options,
        })
    }

    pub fn options(&self) -> &VirtualListOptions<K> {
        &self.options
    }

    /// Records a scroll offset reported by the host and arms a recompute.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        if self.destroyed {
            return;
        }
        wtrace!(offset, now_ms, "on_scroll");
        self.scroll_offset = offset;
        self.arm(now_ms);
    }

    /// Records a viewport height change and arms a recompute.
    pub fn on_viewport_resize(&mut self, height: u32, now_ms: u64) {
        if self.destroyed {
            return;
        }
        wtrace!(height, now_ms, "on_viewport_resize");
        self.viewport_height = height;
        self.arm(now_ms);
    }

    /// Advances the controller; call once per host frame/timer tick.
    ///
    /// Runs the pending recompute when it is due and publishes the window
    /// if it changed. A no-op when nothing is pending.
    pub fn on_frame(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        let due = match self.pending {
            Pending::Idle => false,
            Pending::NextFrame => true,
            Pending::DueAt(deadline) => now_ms >= deadline,
        };
        if !due {
            return;
        }
        self.pending = Pending::Idle;
        self.recompute();
    }

    /// Runs a pending recompute immediately, ignoring any debounce
    /// deadline. A no-op when nothing is pending.
    pub fn flush(&mut self) {
        if self.destroyed || self.pending == Pending::Idle {
            return;
        }
        self.pending = Pending::Idle;
        self.recompute();
    }

    /// Records the measured size of one item, replacing its estimate.
    ///
    /// A measurement that actually changes the size republishes on the next
    /// tick regardless of the debounce; re-reporting an identical size does
    /// nothing.
    pub fn measure_item(&mut self, index: usize, size: u32) -> Result<(), Error> {
        if self.destroyed {
            return Ok(());
        }
        let changed = self.model.size_of(index) != Some(size);
        self.model.record_measured(index, size)?;
        if changed {
            self.layout_generation += 1;
            self.arm_immediate();
        }
        Ok(())
    }

    /// Grows or shrinks the collection. New indices assume the estimate;
    /// cached entries past the new end are destroyed on the next publish.
    pub fn update_item_count(&mut self, item_count: usize) {
        if self.destroyed || item_count == self.model.item_count() {
            return;
        }
        wdebug!(item_count, "update_item_count");
        self.model.set_item_count(item_count);
        self.layout_generation += 1;
        self.arm_immediate();
    }

    /// Replaces the estimate used for unmeasured items. Zero is rejected.
    pub fn set_estimated_item_size(&mut self, size: u32) -> Result<(), Error> {
        if self.destroyed || size == self.model.estimated_size() {
            return Ok(());
        }
        self.model.set_estimate(size)?;
        self.layout_generation += 1;
        self.arm_immediate();
        Ok(())
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.destroyed || overscan == self.options.overscan {
            return;
        }
        self.options.overscan = overscan;
        self.layout_generation += 1;
        self.arm_immediate();
    }

    /// Resolves and records the scroll offset that brings `index` into
    /// view, arming a recompute. Returns the clamped target so the host can
    /// apply it to its real scroll position.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        if self.destroyed {
            return self.scroll_offset;
        }
        let target = scroll_offset_for(
            &mut self.model,
            index,
            align,
            self.viewport_height,
            self.scroll_offset,
        );
        wdebug!(index, target, "scroll_to_index");
        self.scroll_offset = target;
        self.arm_immediate();
        target
    }

    /// Drops every cached entry, signalling `on_destroy` for each, and
    /// forces a full republish. For hosts replacing the backing collection
    /// wholesale (keys keep their meaning across `update_item_count`, but
    /// not across a replacement).
    pub fn evict_all(&mut self) {
        if self.destroyed {
            return;
        }
        let evicted = self.cache.evict_all();
        wdebug!(evicted = evicted.len(), "evict_all");
        if let Some(on_destroy) = &self.options.on_destroy {
            for key in &evicted {
                on_destroy(key);
            }
        }
        self.last_published = None;
        self.arm_immediate();
    }

    /// Cancels any pending recompute and detaches the list from its host.
    ///
    /// No callback fires after this returns; subsequent events, mutations,
    /// and ticks are no-ops. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        wdebug!("destroy");
        self.destroyed = true;
        self.pending = Pending::Idle;
    }

    /// The window from the most recent recompute.
    pub fn window(&self) -> Window {
        self.last_window
    }

    /// The latest scroll target reported by the host (unclamped; clamping
    /// happens when the window is computed).
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn item_count(&self) -> usize {
        self.model.item_count()
    }

    pub fn total_size(&mut self) -> u64 {
        self.model.total_size()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending != Pending::Idle
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn arm(&mut self, now_ms: u64) {
        if self.pending != Pending::Idle {
            return; // coalesce onto the existing deadline
        }
        self.pending = match self.options.schedule {
            Schedule::NextFrame => Pending::NextFrame,
            Schedule::DebounceMs(ms) => Pending::DueAt(now_ms.saturating_add(ms)),
        };
    }

    // Geometry changes are never delayed behind a debounce.
    fn arm_immediate(&mut self) {
        self.pending = Pending::NextFrame;
    }

    fn recompute(&mut self) {
        let window = compute_window(
            &mut self.model,
            self.scroll_offset,
            self.viewport_height,
            self.options.overscan,
        );
        self.last_window = window;

        let publish_id = (window.start_index, window.end_index, self.layout_generation);
        if self.last_published == Some(publish_id) {
            wtrace!(
                start = window.start_index,
                end = window.end_index,
                "recompute skipped, window unchanged"
            );
            return;
        }

        let key_of = Arc::clone(&self.options.get_item_key);
        let rec = self
            .cache
            .reconcile(&window, self.model.item_count(), |i| key_of(i));

        // Destroys first so pooling hosts can recycle freed instances into
        // the creates of the same publish.
        if let Some(on_destroy) = &self.options.on_destroy {
            for key in &rec.to_destroy {
                on_destroy(key);
            }
        }
        if let Some(on_create) = &self.options.on_create {
            for key in &rec.to_create {
                on_create(key);
            }
        }

        self.entries_scratch.clear();
        let mut offset = window.top_offset;
        for index in window.start_index..window.end_index {
            let size = self.model.size_of(index).unwrap_or(0);
            self.entries_scratch.push(WindowEntry {
                key: key_of(index),
                index,
                offset_from_top: offset,
                size,
            });
            offset = offset.saturating_add(size as u64);
        }

        let total_size = self.model.total_size();
        wdebug!(
            start = window.start_index,
            end = window.end_index,
            created = rec.to_create.len(),
            destroyed = rec.to_destroy.len(),
            total_size,
            "publish"
        );

        if let Some(on_window_change) = &self.options.on_window_change {
            let change = WindowChange {
                window,
                total_size,
                entries: &self.entries_scratch,
            };
            if let Err(err) = on_window_change(&change) {
                let err = Error::HostCallback(err);
                wwarn!(%err, "window change callback failed");
                if let Some(on_error) = &self.options.on_error {
                    on_error(&err);
                }
                // Cache state is already consistent; leave the publish
                // unrecorded and retry on the next tick.
                self.arm_immediate();
                return;
            }
        }

        self.last_published = Some(publish_id);
    }
}
