// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Kept
    /// elements are swapped down over rejected ones, which are destroyed at
    /// the end. If `f` panics, every element is still live but their order is
    /// unspecified.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](StaticVec::retain), but the predicate may mutate the
    /// elements it inspects.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let mut write = 0;
        let live = self.as_mut_slice();
        for read in 0..live.len() {
            if f(&mut live[read]) {
                live.swap(write, read);
                write += 1;
            }
        }
        self.shrink_to(write);
    }
}
