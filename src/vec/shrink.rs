// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Destroys all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.shrink_to(0);
    }

    /// Destroys the last `n` elements, or all of them if `n > len`.
    #[inline]
    pub fn shrink_by(&mut self, n: usize) {
        self.shrink_to(self.len.saturating_sub(n));
    }

    /// Destroys trailing elements until `len == new_len`.
    ///
    /// No-op if `new_len >= len`. Elements are destroyed back to front.
    pub fn shrink_to(&mut self, new_len: usize) {
        while self.len > new_len {
            self.pop_back();
        }
    }

    /// Shortens the vector to `new_len`. Alias of
    /// [`shrink_to`](StaticVec::shrink_to), named after [`Vec::truncate`].
    ///
    /// [`Vec::truncate`]: https://doc.rust-lang.org/std/vec/struct.Vec.html#method.truncate
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.shrink_to(new_len);
    }
}
