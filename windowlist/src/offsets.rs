use alloc::vec::Vec;

/// Cumulative offset table over per-item sizes.
///
/// `prefix[i]` is the total size of items `0..i`, so the vector is one
/// longer than the item count and `prefix[0]` is always 0. The table does
/// not own the sizes; callers pass the current size slice into every query
/// so stale entries can be rebuilt in place.
///
/// `clean` counts the leading prefix entries that still reflect the sizes.
/// A size change at item `i` leaves `prefix[..=i]` intact, so invalidation
/// just lowers the watermark and queries rebuild the stale suffix on
/// demand: amortized O(1) per lookup for sparse updates, O(n) worst case.
#[derive(Clone, Debug)]
pub(crate) struct OffsetTable {
    prefix: Vec<u64>, // len = item_count + 1, non-decreasing
    clean: usize,     // number of valid prefix entries, always >= 1
}

impl OffsetTable {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            prefix: alloc::vec![0; n + 1],
            clean: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Marks offsets from item `index` onward as stale.
    pub(crate) fn invalidate_from(&mut self, index: usize) {
        self.clean = self.clean.min(index + 1);
    }

    /// Grows or shrinks to `new_len` items. Surviving prefix entries keep
    /// their validity; appended entries start stale.
    pub(crate) fn resize(&mut self, new_len: usize) {
        self.prefix.resize(new_len + 1, 0);
        self.clean = self.clean.min(new_len + 1);
    }

    /// Rebuilds stale entries so that `prefix[..=upto]` is valid.
    fn ensure(&mut self, sizes: &[u32], upto: usize) {
        debug_assert_eq!(sizes.len(), self.len());
        debug_assert!(upto <= self.len());
        for i in self.clean..=upto {
            self.prefix[i] = self.prefix[i - 1].saturating_add(sizes[i - 1] as u64);
        }
        self.clean = self.clean.max(upto + 1);
    }

    /// Total size of items `0..count`.
    pub(crate) fn prefix_sum(&mut self, sizes: &[u32], count: usize) -> u64 {
        self.ensure(sizes, count);
        self.prefix[count]
    }

    pub(crate) fn total(&mut self, sizes: &[u32]) -> u64 {
        self.prefix_sum(sizes, sizes.len())
    }

    /// Returns the number of items whose prefix sum is <= `target`.
    ///
    /// This maps an offset to an index: an offset inside an item or at its
    /// exact start lands on that item, and an item ending exactly at
    /// `target` is counted as before it. The result is in `0..=len()`;
    /// callers clamp to the last item for offsets at or past the total.
    pub(crate) fn lower_bound(&mut self, sizes: &[u32], target: u64) -> usize {
        let n = self.len();
        self.ensure(sizes, n);
        self.prefix[1..].partition_point(|&sum| sum <= target)
    }
}
