/// Alignment used when resolving a scroll offset for a target index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item's top edge at the viewport top.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item's bottom edge at the viewport bottom.
    End,
    /// Minimal scroll that brings the item fully into view; no-op if it
    /// already is.
    Auto,
}

/// The materialized index range, plus the offset of its first item.
///
/// `top_offset` is the cumulative size of all items before `start_index`,
/// so hosts can position the rendered block with a single translation (or
/// a leading spacer) instead of laying out the skipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub top_offset: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Default item identity when no key extractor is supplied.
pub type ItemKey = u64;
