// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `value` in slot `len`.
    ///
    /// # Safety
    ///
    /// The vector must not be full.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        let len = self.len;
        self.len += 1;
        // SAFETY: slot `len` is past the live prefix, so it is empty.
        unsafe { self.slots[len].construct(value) }
    }

    /// Pushes `v` if not full; returns [`Error::Full`] otherwise.
    ///
    /// On `Err` the value is dropped and the vector is unchanged. Use
    /// [`push_within_capacity`](StaticVec::push_within_capacity) to get the
    /// value back.
    #[inline]
    pub fn push(&mut self, v: T) -> Result<&mut T, Error> {
        if self.len == N {
            return Err(Error::Full);
        }
        // SAFETY: checked above.
        Ok(unsafe { self.push_unchecked(v) })
    }

    /// Pushes `v` if not full; if at capacity, hands `v` back unchanged.
    #[inline]
    pub fn push_within_capacity(&mut self, v: T) -> Result<&mut T, T> {
        if self.len == N {
            return Err(v);
        }
        // SAFETY: checked above.
        Ok(unsafe { self.push_unchecked(v) })
    }

    /// Constructs the value returned by `f` directly in slot `len`.
    ///
    /// Returns [`Error::Full`] without calling `f` when the vector is full. If
    /// `f` panics, the length is not incremented.
    #[inline]
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(Error::Full);
        }
        let len = self.len;
        // SAFETY: slot `len` is empty; the length is only bumped once `f`
        // has returned.
        unsafe { self.slots[len].construct_with(f) };
        self.len += 1;
        // SAFETY: just constructed.
        Ok(unsafe { self.slots[len].value_mut() })
    }

    /// Fallible form of [`emplace_back_with`](StaticVec::emplace_back_with).
    ///
    /// A full vector yields `Error::Full` converted into `E`; an error from `f`
    /// is returned unchanged. Either way the vector is unchanged.
    #[inline]
    pub fn try_emplace_back_with<E, F>(&mut self, f: F) -> Result<&mut T, E>
    where
        E: From<Error>,
        F: FnOnce() -> Result<T, E>,
    {
        if self.len == N {
            return Err(Error::Full.into());
        }
        let len = self.len;
        // SAFETY: slot `len` is empty.
        unsafe { self.slots[len].try_construct_with(f)? };
        self.len += 1;
        // SAFETY: just constructed.
        Ok(unsafe { self.slots[len].value_mut() })
    }
}
