// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{resolve_range, StaticVec},
};

// Core imports
use core::ops::RangeBounds;

impl<T, const N: usize> StaticVec<T, N> {
    /// Erases the element at `index`, shifting subsequent elements left.
    ///
    /// Returns the index of the element that followed the erased one, which
    /// is `index` itself. `index == len` is a no-op returning `len`; anything
    /// larger is [`Error::OutOfRange`].
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
    /// assert_eq!(v.erase(1), Ok(1));
    /// assert_eq!(v, [1, 3]);
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        self.erase_range(index..index.saturating_add(1).min(self.len))
    }

    /// Erases the elements in `range`, shifting the tail down to its start.
    ///
    /// Returns the start of the range. An empty range is a no-op. Returns
    /// [`Error::OutOfRange`] without touching anything if the range is
    /// inverted or reaches past `len`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, Error> {
        let (start, end) = resolve_range(&range, self.len).ok_or(Error::OutOfRange)?;
        let count = end - start;
        if count > 0 {
            // Erased elements end up at the back, then get destroyed there.
            self.as_mut_slice()[start..].rotate_left(count);
            self.shrink_by(count);
        }
        Ok(start)
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.as_mut_slice()[index..].rotate_left(1);
        self.pop()
    }

    /// Like [`remove`](StaticVec::remove), but reports a bad index as
    /// [`Error::OutOfRange`].
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfRange)
    }

    /// Removes and returns the element at `index` by swapping with the last element.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        self.pop()
    }

    /// Like [`swap_remove`](StaticVec::swap_remove), but reports a bad index as
    /// [`Error::OutOfRange`].
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfRange)
    }
}
