//! Core windowing math for single-axis virtualized lists.
//!
//! Rendering a list of tens of thousands of rows only stays cheap if the
//! work per frame depends on the viewport, not the collection. This crate
//! holds the geometry side of that contract: per-item sizes with lazy
//! cumulative offsets, fast offset → index lookup, and the calculation of
//! the overscanned window of indices a host should materialize.
//!
//! It is host-agnostic and payload-free. A UI layer is expected to provide:
//! - the viewport height and scroll offset
//! - an estimated item size, upgraded by measurements as rows render
//! - the backing collection itself (the engine only ever sees indices)
//!
//! For cache reconciliation, event coalescing, and the callback-driven
//! list facade, see the `windowlist-controller` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod offsets;
mod size;
mod types;
mod window;


pub use error::{BoxError, Error};
pub use size::SizeModel;
pub use types::{Align, ItemKey, Window};
pub use window::{clamp_scroll_offset, compute_window, max_scroll_offset, scroll_offset_for};
