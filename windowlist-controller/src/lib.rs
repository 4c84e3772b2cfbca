//! Item cache and scroll controller for the `windowlist` crate.
//!
//! The `windowlist` crate is a pure windowing function: sizes in, window
//! out. This crate adds the stateful shell a host event loop talks to:
//!
//! - [`VirtualList`]: owns the size model, turns scroll/resize events and
//!   geometry mutations into at most one window publish per frame tick
//!   (coalescing, optional debounce).
//! - [`ItemCache`]: tracks which item instances the host has materialized
//!   and reduces each window change to minimal create/destroy sets, with a
//!   one-cycle grace period for items that just scrolled out.
//!
//! The controller is host-agnostic: it never spawns, never sleeps, and
//! never touches UI objects. The host calls [`VirtualList::on_frame`] with
//! its own clock and applies published entries however it renders.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod controller;
mod key;
mod options;


pub use cache::{CacheEntry, ItemCache, Reconciliation};
pub use controller::{VirtualList, WindowChange, WindowEntry};
pub use key::CacheKey;
pub use options::{
    ErrorCallback, LifecycleCallback, Schedule, VirtualListOptions, WindowChangeCallback,
};

// The windowlist types that appear in this crate's public API.
pub use windowlist::{Align, BoxError, Error, ItemKey, Window};
