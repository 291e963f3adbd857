// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns the live elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: `Slot<T>` is a transparent wrapper around `MaybeUninit<T>`,
        // slots `[..len]` are live and `len <= N`.
        unsafe { core::slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns a raw pointer to the start of the slot storage.
    ///
    /// Only the first `len` elements are live. Code that dereferences this
    /// pointer must not read from `ptr.add(i)` for any `i >= len`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the slot storage.
    ///
    /// Only the first `len` elements are live. Writing past `len` does not
    /// change the logical contents, and whatever was written there is never
    /// dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }
}
