// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - [`Iter`] and [`IterMut`] walk the live slot prefix and read each element
//!   through [`Slot::value`]. Besides the usual adaptors they expose their
//!   position within the vector, so two iterators over the same vector can
//!   be compared and subtracted, and they support indexed access relative to
//!   the current position. [`Iter`] can also step back towards the start.
//! - [`IntoIter<T, N>`] yields by value and drops whatever is left unconsumed.
//!
//! All three support `DoubleEndedIterator`, `ExactSizeIterator`, and
//! `FusedIterator`.

mod from_iterator;

// Crate imports
use crate::{error::Error, slot::Slot, vec::StaticVec};

// Core imports
use core::{cmp::Ordering, fmt, iter::FusedIterator, mem, slice};

/// Views live slots as elements.
///
/// # Safety
///
/// Every slot in `slots` must be live.
#[inline]
unsafe fn live_slice<T>(slots: &[Slot<T>]) -> &[T] {
    // SAFETY: `Slot<T>` is layout-compatible with `T` and the caller
    // guarantees every slot is live.
    unsafe { slice::from_raw_parts(slots.as_ptr().cast::<T>(), slots.len()) }
}

/// Shared iterator over the live elements of a [`StaticVec`].
///
/// Created by [`StaticVec::iter`] or by iterating `&StaticVec`. Besides
/// walking forwards and backwards it works as a cursor: the front can be
/// moved in either direction with [`step_forward`](Iter::step_forward) and
/// [`step_back`](Iter::step_back) without yielding anything.
///
/// Two iterators are equal when they cover the same `[front, back)` range,
/// and they order by front position, then by back position.
pub struct Iter<'a, T> {
    // Reachable slots; `slots[0]` sits at vector position `floor`.
    slots: &'a [Slot<T>],
    floor: usize,
    // Remaining range, in vector positions.
    front: usize,
    back: usize, // exclusive
}

impl<'a, T> Iter<'a, T> {
    /// `live` must be the live prefix of a vector.
    #[inline]
    pub(crate) fn new(live: &'a [Slot<T>]) -> Self {
        Self {
            slots: live,
            floor: 0,
            front: 0,
            back: live.len(),
        }
    }

    /// Index, within the vector, of the element `next` would return.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }

    /// Signed distance from `origin` to `self`, in elements.
    ///
    /// Only meaningful for iterators over the same vector.
    #[inline]
    pub fn offset_from(&self, origin: &Iter<'_, T>) -> isize {
        self.front as isize - origin.front as isize
    }

    /// Moves the front `n` elements forward without yielding them.
    ///
    /// Fails with [`Error::OutOfRange`], leaving the iterator unchanged, if
    /// fewer than `n` elements remain.
    #[inline]
    pub fn step_forward(&mut self, n: usize) -> Result<(), Error> {
        if n > self.back - self.front {
            return Err(Error::OutOfRange);
        }
        self.front += n;
        Ok(())
    }

    /// Moves the front `n` elements back towards the start of the vector, so
    /// they will be yielded again.
    ///
    /// Fails with [`Error::OutOfRange`], leaving the iterator unchanged, if
    /// that would move before the first reachable element.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
    /// let mut it = v.iter();
    /// it.nth(1);
    /// assert_eq!(it.position(), 2);
    /// it.step_back(1).unwrap();
    /// assert_eq!(it.next(), Some(&2));
    /// assert!(it.step_back(3).is_err());
    /// ```
    #[inline]
    pub fn step_back(&mut self, n: usize) -> Result<(), Error> {
        if n > self.front - self.floor {
            return Err(Error::OutOfRange);
        }
        self.front -= n;
        Ok(())
    }

    /// The element `i` positions ahead of the front, without advancing.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        self.as_slice().get(i)
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        let rest = &self.slots[self.front - self.floor..self.back - self.floor];
        // SAFETY: the iterator only ever covers live slots.
        unsafe { live_slice(rest) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let slot = &self.slots[self.front - self.floor];
        self.front += 1;
        // SAFETY: the slot is live.
        Some(unsafe { slot.value() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if self.step_forward(n).is_err() {
            self.front = self.back;
            return None;
        }
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { self.slots[self.back - self.floor].value() })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        self.back -= n.min(self.back - self.front);
        self.next_back()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            floor: self.floor,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        (self.front, self.back) == (other.front, other.back)
    }
}
impl<T> Eq for Iter<'_, T> {}
impl<T> PartialOrd for Iter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Iter<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.front, self.back).cmp(&(other.front, other.back))
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// Mutable iterator over the live elements of a [`StaticVec`].
///
/// Supports the same position queries, indexed access, forward stepping and
/// comparisons as [`Iter`]. It cannot step back: an element it has yielded
/// may still be borrowed mutably. Convert it into an [`Iter`] to move
/// backwards over the elements it has not yet yielded.
pub struct IterMut<'a, T> {
    // Slots not yet yielded.
    slots: &'a mut [Slot<T>],
    // `slots` covers `[front, back)`, in vector positions.
    front: usize,
    back: usize,
}

impl<'a, T> IterMut<'a, T> {
    /// `live` must be the live prefix of a vector.
    #[inline]
    pub(crate) fn new(live: &'a mut [Slot<T>]) -> Self {
        let back = live.len();
        Self {
            slots: live,
            front: 0,
            back,
        }
    }

    /// Index, within the vector, of the element `next` would return.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }

    /// Signed distance from `origin` to `self`, in elements.
    ///
    /// Only meaningful for iterators over the same vector.
    #[inline]
    pub fn offset_from(&self, origin: &IterMut<'_, T>) -> isize {
        self.front as isize - origin.front as isize
    }

    /// Moves the front `n` elements forward without yielding them.
    ///
    /// Fails with [`Error::OutOfRange`], leaving the iterator unchanged, if
    /// fewer than `n` elements remain.
    #[inline]
    pub fn step_forward(&mut self, n: usize) -> Result<(), Error> {
        if n > self.slots.len() {
            return Err(Error::OutOfRange);
        }
        let slots = mem::take(&mut self.slots);
        self.slots = &mut slots[n..];
        self.front += n;
        Ok(())
    }

    /// The element `i` positions ahead of the front, without advancing.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Mutable form of [`get`](IterMut::get).
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        let slot = self.slots.get_mut(i)?;
        // SAFETY: the slot is live.
        Some(unsafe { slot.value_mut() })
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the iterator only ever covers live slots.
        unsafe { live_slice(&*self.slots) }
    }

    /// Consumes the iterator, returning the elements not yet yielded.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        let rest = self.slots;
        // SAFETY: as in `as_slice`, with the exclusive borrow carried over.
        unsafe { slice::from_raw_parts_mut(rest.as_mut_ptr().cast::<T>(), rest.len()) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let slots = mem::take(&mut self.slots);
        let (first, rest) = slots.split_first_mut()?;
        self.slots = rest;
        self.front += 1;
        // SAFETY: the slot is live and is never yielded again.
        Some(unsafe { first.value_mut() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if self.step_forward(n).is_err() {
            self.slots = &mut [];
            self.front = self.back;
            return None;
        }
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let slots = mem::take(&mut self.slots);
        let (last, rest) = slots.split_last_mut()?;
        self.slots = rest;
        self.back -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { last.value_mut() })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut T> {
        let slots = mem::take(&mut self.slots);
        let keep = slots.len() - n.min(slots.len());
        self.slots = &mut slots[..keep];
        self.back = self.front + keep;
        self.next_back()
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> PartialEq for IterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        (self.front, self.back) == (other.front, other.back)
    }
}
impl<T> Eq for IterMut<'_, T> {}
impl<T> PartialOrd for IterMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for IterMut<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.front, self.back).cmp(&(other.front, other.back))
    }
}

impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    /// Gives up write access, keeping the position. The result can step back
    /// only as far as the position it was converted at.
    fn from(it: IterMut<'a, T>) -> Self {
        Self {
            slots: it.slots,
            floor: it.front,
            front: it.front,
            back: it.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.as_slice()).finish()
    }
}

/// Owned iterator returned by `StaticVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are dropped
/// with the iterator.
pub struct IntoIter<T, const N: usize> {
    // Length is kept at 0; `[front, back)` are the live slots.
    pub(crate) v: StaticVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[front, back)` are live.
        unsafe { live_slice(&self.v.slots[self.front..self.back]) }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.v.slots[i].take() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        for i in self.front..self.front + skip {
            // Advance before dropping so a panicking destructor cannot
            // cause a second drop.
            self.front = i + 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            unsafe { self.v.slots[i].destroy() };
        }
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front, back)`.
            Some(unsafe { self.v.slots[self.back].take() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        for _ in 0..n.min(rem) {
            self.back -= 1;
            // SAFETY: as in `next_back`.
            unsafe { self.v.slots[self.back].destroy() };
        }
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        while self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            unsafe { self.v.slots[i].destroy() };
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator takes over ownership of the live slots.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}
