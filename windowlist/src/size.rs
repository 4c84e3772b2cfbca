use alloc::vec::Vec;

use crate::error::Error;
use crate::offsets::OffsetTable;

/// Per-item size bookkeeping for a windowed list.
///
/// Every index starts at the configured estimate and is upgraded in place
/// when the host reports a measured size. Offsets are served from a lazy
/// cumulative table, so queries that may rebuild the stale suffix take
/// `&mut self`.
///
/// The model holds geometry only. Item payloads stay with the caller; the
/// engine never sees them.
#[derive(Clone, Debug)]
pub struct SizeModel {
    sizes: Vec<u32>, // estimate until measured[i] is set
    measured: Vec<bool>,
    estimate: u32,
    offsets: OffsetTable,
}

impl SizeModel {
    /// Creates a model of `item_count` items, each seeded with
    /// `estimated_size`.
    ///
    /// A zero estimate would make every unmeasured offset collapse to the
    /// same value, so it is rejected instead of clamped.
    pub fn new(item_count: usize, estimated_size: u32) -> Result<Self, Error> {
        if estimated_size == 0 {
            return Err(Error::zero_size("estimated_size"));
        }
        wdebug!(item_count, estimated_size, "SizeModel::new");
        Ok(Self {
            sizes: alloc::vec![estimated_size; item_count],
            measured: alloc::vec![false; item_count],
            estimate: estimated_size,
            offsets: OffsetTable::new(item_count),
        })
    }

    pub fn item_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn estimated_size(&self) -> u32 {
        self.estimate
    }

    /// Grows or shrinks the collection. New indices are seeded with the
    /// current estimate; shrinking drops measurements past the new end.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count == self.sizes.len() {
            return;
        }
        wdebug!(
            from = self.sizes.len(),
            to = item_count,
            "SizeModel::set_item_count"
        );
        self.sizes.resize(item_count, self.estimate);
        self.measured.resize(item_count, false);
        self.offsets.resize(item_count);
    }

    /// Replaces the estimate used for every unmeasured index.
    pub fn set_estimate(&mut self, size: u32) -> Result<(), Error> {
        if size == 0 {
            return Err(Error::zero_size("estimated_size"));
        }
        if size == self.estimate {
            return Ok(());
        }
        self.estimate = size;
        let mut first_changed = None;
        for (i, measured) in self.measured.iter().enumerate() {
            if !measured && self.sizes[i] != size {
                self.sizes[i] = size;
                first_changed.get_or_insert(i);
            }
        }
        if let Some(i) = first_changed {
            self.offsets.invalidate_from(i);
        }
        Ok(())
    }

    /// Records the measured size of one item.
    ///
    /// Offsets from `index` onward become stale only when the size actually
    /// changed, so re-reporting an identical measurement is free.
    pub fn record_measured(&mut self, index: usize, size: u32) -> Result<(), Error> {
        if index >= self.sizes.len() {
            return Err(Error::out_of_bounds(index, self.sizes.len()));
        }
        wtrace!(index, size, "SizeModel::record_measured");
        if self.sizes[index] != size {
            self.sizes[index] = size;
            self.offsets.invalidate_from(index);
        }
        self.measured[index] = true;
        Ok(())
    }

    pub fn size_of(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// Cumulative size of all items before `index`.
    ///
    /// `index == item_count` is allowed and yields the total size; anything
    /// past that is out of bounds.
    pub fn offset_of(&mut self, index: usize) -> Result<u64, Error> {
        if index > self.sizes.len() {
            return Err(Error::out_of_bounds(index, self.sizes.len()));
        }
        Ok(self.offsets.prefix_sum(&self.sizes, index))
    }

    /// Maps a content offset to the index of the item occupying it.
    ///
    /// An offset at an item's exact start maps to that item; offsets at or
    /// past the total clamp to the last index. An empty model returns 0.
    pub fn index_at_offset(&mut self, offset: u64) -> usize {
        let count = self.sizes.len();
        if count == 0 {
            return 0;
        }
        self.offsets
            .lower_bound(&self.sizes, offset)
            .min(count - 1)
    }

    pub fn total_size(&mut self) -> u64 {
        self.offsets.total(&self.sizes)
    }

    /// Bounds-checked by the caller.
    pub(crate) fn prefix(&mut self, index: usize) -> u64 {
        debug_assert!(index <= self.sizes.len());
        self.offsets.prefix_sum(&self.sizes, index)
    }
}
