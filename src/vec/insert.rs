// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional inserts.
//!
//! Every insert appends at the end first (single push or a bulk append with
//! rollback), then rotates the new elements into place. The rotation only
//! moves values, so once the append succeeded nothing else can fail.

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    #[inline]
    fn check_position(&self, index: usize) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }

    /// Moves the last `count` elements so they start at `index`.
    #[inline]
    fn rotate_tail_to(&mut self, index: usize, count: usize) {
        self.as_mut_slice()[index..].rotate_right(count);
    }

    /// Inserts `value` at `index`, shifting everything after it right.
    ///
    /// `index == len` appends. Returns [`Error::OutOfRange`] if `index > len`
    /// and [`Error::Full`] if there is no free slot; in both cases `value` is
    /// dropped and the vector is unchanged.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 3]);
    /// let slot = v.insert(1, 2).unwrap();
    /// *slot *= 10;
    /// assert_eq!(v, [1, 20, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        self.check_position(index)?;
        self.push(value)?;
        self.rotate_tail_to(index, 1);
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Capacity is checked before anything is cloned. If a clone panics, the
    /// vector is restored to its previous contents.
    pub fn insert_many(&mut self, index: usize, count: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_position(index)?;
        self.emplace_back_many(count, value)?;
        self.rotate_tail_to(index, count);
        Ok(())
    }

    /// Inserts every item of `iter` at `index`, in order, and returns how many
    /// were inserted.
    ///
    /// If the source does not fit, the vector is restored and
    /// [`Error::CapacityExceeded`] is returned.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(index)?;
        let count = self.emplace_back_range(iter)?;
        self.rotate_tail_to(index, count);
        Ok(count)
    }

    /// Inserts clones of `src` at `index`, or fails without touching the vector.
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_position(index)?;
        self.extend_from_slice(src)?;
        self.rotate_tail_to(index, src.len());
        Ok(())
    }
}
