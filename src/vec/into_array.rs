// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns
    /// [`Error::InvalidLen`] and drops the vector.
    #[inline]
    pub fn try_into_array(mut self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }
        // Ownership of every element moves into the array.
        self.len = 0;
        Ok(core::array::from_fn(|i| {
            // SAFETY: all `N` slots were live and each is taken exactly once.
            unsafe { self.slots[i].take() }
        }))
    }
}
