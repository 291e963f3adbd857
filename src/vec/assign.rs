// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{rollback::Rollback, StaticVec},
};

impl<T: Clone, const N: usize> StaticVec<T, N> {
    /// Replaces the contents with clones of `src`, reusing live elements.
    ///
    /// The overlapping prefix is assigned in place with [`Clone::clone_from`],
    /// surplus elements are destroyed and missing ones appended. Returns
    /// [`Error::CapacityExceeded`] and leaves the vector unchanged if
    /// `src.len() > N`.
    ///
    /// If a `clone_from` panics the vector stays valid, holding a mix of old
    /// and new elements. A panic while appending drops only the appended tail.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() > N {
            return Err(Error::CapacityExceeded);
        }
        self.assign_within_capacity(src);
        Ok(())
    }

    /// `src.len()` must not exceed `N`.
    pub(crate) fn assign_within_capacity(&mut self, src: &[T]) {
        debug_assert!(src.len() <= N);
        self.shrink_to(src.len());
        let overlap = self.len;
        for (dst, item) in self.as_mut_slice().iter_mut().zip(src) {
            dst.clone_from(item);
        }
        let mut guard = Rollback::new(self, "assign");
        for item in &src[overlap..] {
            // SAFETY: `src.len() <= N`.
            unsafe { guard.push_unchecked(item.clone()) };
        }
        guard.commit();
    }
}
