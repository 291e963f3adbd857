// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::IntoIter,
    vec::{resolve_range, StaticVec},
};

// Core imports
use core::{iter::FusedIterator, ops::RangeBounds};

/// Owned iterator returned by [`StaticVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally wraps an [`IntoIter`] over a temporary `StaticVec` holding
///   the drained elements; whatever is not consumed is dropped with it.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut StaticVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> StaticVec<T, N> {
    /// Drains the specified range of elements and returns them as an iterator.
    ///
    /// Elements in `range` are moved out into a temporary `StaticVec` and
    /// yielded by value. The remainder of the vector is shifted left before
    /// this returns, so leaking the iterator leaves `self` consistent.
    ///
    /// This matches the behavior of [`Vec::drain`].
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`.
    ///
    /// # Examples
    /// ```
    /// # use static_vec::StaticVec;
    /// let mut v: StaticVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: StaticVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    ///
    /// [`Vec::drain`]: https://doc.rust-lang.org/std/vec/struct.Vec.html#method.drain
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let Some((start, end)) = resolve_range(&range, len) else {
            panic!("drain range out of bounds for length {len}");
        };

        let count = end - start;
        self.as_mut_slice()[start..].rotate_left(count);

        let keep = len - count;
        self.len = keep;
        let mut tmp = Self::new();
        for slot in &mut self.slots[keep..len] {
            // SAFETY: slots `[keep, len)` hold the drained elements and are
            // outside the live prefix now; `tmp` receives `count <= N` of them.
            unsafe { tmp.push_unchecked(slot.take()) };
        }

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}
