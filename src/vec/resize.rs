// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinks if `new_len <= len`. Returns [`Error::CapacityExceeded`] and
    /// leaves the vector unchanged if `new_len > N`. If a clone panics while
    /// growing, the vector is restored to its previous length.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        if new_len <= self.len {
            self.shrink_to(new_len);
            return Ok(());
        }
        self.emplace_back_many_with(new_len - self.len, f)
    }
}
