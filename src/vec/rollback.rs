// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Length rollback for bulk appends.

// Crate imports
use crate::{trace::trace_rollback, vec::StaticVec};

// Core imports
use core::{
    mem,
    ops::{Deref, DerefMut},
};

/// Records the length of a vector on entry to a bulk operation.
///
/// Dropping the guard without calling [`commit`](Rollback::commit) destroys
/// every element appended since entry, which is what happens when an element
/// constructor panics or the operation returns early with an error.
pub(crate) struct Rollback<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    entry: usize,
    op: &'static str,
}

impl<'a, T, const N: usize> Rollback<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a mut StaticVec<T, N>, op: &'static str) -> Self {
        let entry = vec.len;
        Self { vec, entry, op }
    }

    /// Keeps the appended elements and returns how many there were.
    #[inline]
    pub(crate) fn commit(self) -> usize {
        let appended = self.vec.len - self.entry;
        mem::forget(self);
        appended
    }
}

impl<T, const N: usize> Deref for Rollback<'_, T, N> {
    type Target = StaticVec<T, N>;
    fn deref(&self) -> &Self::Target {
        self.vec
    }
}

impl<T, const N: usize> DerefMut for Rollback<'_, T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.vec
    }
}

impl<T, const N: usize> Drop for Rollback<'_, T, N> {
    fn drop(&mut self) {
        if self.vec.len > self.entry {
            trace_rollback!(self.op, self.vec.len, self.entry);
            self.vec.shrink_to(self.entry);
        }
    }
}
