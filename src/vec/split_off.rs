// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`, moved out.
    ///
    /// Returns [`Error::OutOfRange`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfRange);
        }

        self.len = at;
        let mut other = Self::new();
        for slot in &mut self.slots[at..len] {
            // SAFETY: slots `[at, len)` were live and are now outside the
            // live prefix; `other` receives at most `len - at <= N` elements.
            unsafe { other.push_unchecked(slot.take()) };
        }
        Ok(other)
    }
}
