// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec`.
//!
//! These errors represent capacity and bounds conditions raised by the
//! container itself. Failures raised by element code (panics in `Clone`,
//! `Default`, user closures, or errors returned by fallible constructors)
//! are passed through unchanged and never wrapped.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A single-element append was attempted on a full vector.
    Full,
    /// A sizing or bulk operation would need more than `N` live elements.
    CapacityExceeded,
    /// An index or position was outside the current logical bounds.
    OutOfRange,
    /// An operation required `len == N`, which was not met.
    ///
    /// Used by [`StaticVec::try_into_array`](crate::StaticVec::try_into_array).
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("vector is full"),
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::OutOfRange => f.write_str("index out of range"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}
