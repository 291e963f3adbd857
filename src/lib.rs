// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-vec`
//!
//! A `no_std`, fixed-capacity vector whose storage lives inside the value
//! itself.
//!
//! The core type, [`StaticVec<T, N>`], holds up to `N` elements of any type in
//! an inline array of possibly-uninitialized [`Slot`]s and tracks a logical
//! length `len ∈ 0..=N`. It behaves like a `Vec<T>` that can never reallocate:
//! elements can be pushed, popped, inserted and erased anywhere, but the
//! capacity is a compile-time constant and no heap memory is ever touched.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - Elements own resources (`String`, handles, boxes from another arena) and
//!   must be dropped exactly once.
//! - You want predictable, allocation-free behavior and can work with a fixed
//!   maximum length.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities or large element types (the whole slot
//!   array moves when the vector moves).
//! - You need the vector to grow past a bound chosen at compile time.
//!
//! ## Storage model
//!
//! - Slots `[0, len)` are live and contiguous; slots `[len, N)` are empty.
//! - Creating an empty vector constructs no `T`, so `T: Default` is never
//!   required just to hold elements.
//! - Every mutation goes through [`Slot`]'s construct/destroy operations.
//!   Element types without drop glue skip destruction entirely.
//!
//! ## Failure and rollback
//!
//! - Operations that would exceed capacity return [`Error::Full`] (single
//!   appends) or [`Error::CapacityExceeded`] (sized constructors, bulk appends,
//!   resizes, bulk inserts) and leave the vector unchanged.
//! - Checked access ([`StaticVec::at`], [`StaticVec::front`],
//!   [`StaticVec::back`]) returns [`Error::OutOfRange`].
//! - Element code may fail: `Clone`, `Default` and user closures can panic,
//!   and the `try_*` constructors take closures returning `Result`. Bulk
//!   appends (and the inserts and constructors built on them) restore the
//!   length they started from before the failure reaches the caller.
//!
//! ## Range and indexing behavior
//!
//! `StaticVec` follows Rust slice and `Vec` semantics for all **indexing**
//! and **range-based** views:
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices.
//! - [`StaticVec::drain`] behaves like `Vec::drain` and panics on a bad range.
//! - [`StaticVec::erase_range`] is the checked counterpart and returns
//!   [`Error::OutOfRange`] instead.
//!
//! Collecting into `StaticVec<T, N>` (via `FromIterator` / `collect`) or
//! `extend`ing it takes at most as many items as fit and leaves the rest of
//! the source unconsumed. [`StaticVec::try_from_iter`] and
//! [`StaticVec::emplace_back_range`] treat overflow as an error instead.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `StaticVec<T, N>` as a sequence.
//! - `tracing`: `trace`-level events whenever a bulk operation rolls back.
//!
//! ## Example
//!
//! ```rust
//! use static_vec::{static_vec, StaticVec};
//!
//! let mut v: StaticVec<String, 8> = StaticVec::new();
//! v.push("b".to_string()).unwrap();
//! v.insert(0, "a".to_string()).unwrap();
//! v.extend_from_slice(&["c".to_string(), "d".to_string()]).unwrap();
//! v.erase_range(1..3).unwrap();
//! assert_eq!(v, ["a", "d"]);
//! assert_eq!(static_vec![1, 2, 3].capacity(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod slot;
mod trace;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use slot::Slot;
pub use vec::{Drain, StaticVec};
