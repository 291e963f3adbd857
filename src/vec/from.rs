// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    /// Builds a full vector, inferring the capacity from the array length.
    fn from(src: [T; N]) -> Self {
        Self::from_array(src)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for StaticVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        src.clone().into()
    }
}
