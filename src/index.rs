// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice
//! behavior exactly:
//! - panics on out-of-bounds or inverted ranges;
//! - supports every `SliceIndex` form, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! Use [`StaticVec::at`](crate::StaticVec::at) for a checked lookup.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
