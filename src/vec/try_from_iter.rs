// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns
    ///   `Err(Error::CapacityExceeded)`.
    /// - Any elements pushed before the overflow are dropped; the returned
    ///   `Err` does *not* include the partially filled vector.
    /// - The source iterator may be left partially consumed.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.emplace_back_range(iter)?;
        Ok(v)
    }
}
