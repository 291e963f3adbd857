// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Pops the last element, or returns `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live one and is now outside the
        // live prefix, so it is read exactly once.
        Some(unsafe { self.slots[self.len].take() })
    }

    /// Destroys the last element in place. No-op when empty.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        // SAFETY: as in `pop`; the length is decremented first so a panicking
        // destructor cannot cause a second drop.
        unsafe { self.slots[self.len].destroy() };
    }
}
