// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> FromIterator<T> for StaticVec<T, N> {
    /// Collecting into `StaticVec<T, N>` takes at most the first `N` elements
    /// from the iterator and does not consume any further elements.
    ///
    /// Use [`StaticVec::try_from_iter`] to treat overflow as an error.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
