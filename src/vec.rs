// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector whose storage is an in-place
//! array of `N` [`Slot`]s. The logical length is the only record of which slots
//! are live: `slots[..len]` are live, `slots[len..]` are empty.
//!
//! Every mutation goes through [`Slot::construct`] / [`Slot::destroy`] (or
//! [`Slot::take`]), so the lifetime rules stay in one place. Bulk appends hold a
//! rollback guard that restores the length recorded at entry if an element
//! constructor panics or returns an error part-way through.
//!
//! No heap allocations are performed.

mod assign;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod rollback;
mod shrink;
mod slice;
mod split_off;
mod try_from;
mod try_from_iter;

pub use drain::Drain;

// Crate imports
use crate::{
    error::Error,
    iter::{Iter, IterMut},
    slot::Slot,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Deref, DerefMut, RangeBounds},
};

/// A fixed-capacity, inline vector.
///
/// `StaticVec<T, N>` stores up to `N` elements inside the value itself and
/// tracks a logical length `len ∈ 0..=N`. It behaves like a `Vec<T>` that can
/// never reallocate:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the storage is an array of `N` possibly-uninitialized [`Slot`]s, so
///   creating an empty vector does not construct any `T`;
/// - elements `[0, len)` are live and contiguous, `[len, N)` are empty;
/// - no heap allocations are performed.
///
/// # Failure model
///
/// Operations that would need more than `N` live elements fail with
/// [`Error::Full`] (single-element appends) or [`Error::CapacityExceeded`]
/// (sizing and bulk operations). These checks happen before any element is
/// touched, so the vector is left unchanged.
///
/// Element code may still fail: `Clone`, `Default` or a user closure can panic,
/// and the `try_*` constructors accept closures returning `Result`. Bulk
/// appends restore the length they started from before the failure propagates,
/// so a panic or error never leaves a partially appended run behind. Operations
/// that move existing elements around (`erase`, `retain`, `clone_from`) leave
/// the vector valid but possibly changed when element code fails.
///
/// # Indexing
///
/// `v[i]` and range indexing follow slice semantics and panic when out of
/// bounds. [`at`](StaticVec::at), [`front`](StaticVec::front) and
/// [`back`](StaticVec::back) are the checked forms and return
/// [`Error::OutOfRange`] instead.
///
/// # Examples
///
/// ```rust
/// use static_vec::StaticVec;
///
/// let mut v: StaticVec<String, 4> = StaticVec::new();
/// v.push("a".to_string()).unwrap();
/// v.insert(0, "b".to_string()).unwrap();
/// assert_eq!(v.as_slice(), &["b", "a"]);
/// assert_eq!(v.back().unwrap(), "a");
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) len: usize,
    pub(crate) slots: [Slot<T>; N],
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked indexed access.
    ///
    /// Accepts any integer type; negative indices and indices `>= len` return
    /// [`Error::OutOfRange`].
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
    /// assert_eq!(v.at(2), Ok(&3));
    /// assert_eq!(v.at(3), Err(Error::OutOfRange));
    /// assert_eq!(v.at(-1), Err(Error::OutOfRange));
    /// ```
    #[inline]
    pub fn at<I: TryInto<usize>>(&self, index: I) -> Result<&T, Error> {
        let i = index.try_into().map_err(|_| Error::OutOfRange)?;
        self.get(i).ok_or(Error::OutOfRange)
    }

    /// Mutable form of [`at`](StaticVec::at).
    #[inline]
    pub fn at_mut<I: TryInto<usize>>(&mut self, index: I) -> Result<&mut T, Error> {
        let i = index.try_into().map_err(|_| Error::OutOfRange)?;
        self.get_mut(i).ok_or(Error::OutOfRange)
    }

    /// Returns the first element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.at(0usize)
    }

    /// Returns the first element mutably, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.at_mut(0usize)
    }

    /// Returns the last element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        let last = self.len.checked_sub(1).ok_or(Error::OutOfRange)?;
        self.at(last)
    }

    /// Returns the last element mutably, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let last = self.len.checked_sub(1).ok_or(Error::OutOfRange)?;
        self.at_mut(last)
    }

    // iterators
    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    /// Returns an iterator that allows modifying each live element.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut::new(&mut self.slots[..len])
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

/// Resolves `range` against a vector of length `len`.
///
/// Returns `None` if the range is inverted or reaches past `len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Option<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1)?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start <= end && end <= len).then_some((start, end))
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self {
            // SAFETY: `out` has the same capacity as `self` and receives at
            // most `self.len() <= N` elements.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Assigns `source` in place, reusing the live prefix of `self`.
    ///
    /// The overlapping prefix is assigned element-wise with `clone_from`; the
    /// remainder is either appended or destroyed. If an element's `clone_from`
    /// panics, `self` is left valid with an unspecified mix of old and new
    /// elements.
    fn clone_from(&mut self, source: &Self) {
        self.assign_within_capacity(source.as_slice());
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<StaticVec<U, M>> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &StaticVec<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize> PartialEq<[U]> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}

impl<T, U, const N: usize, const M: usize> PartialOrd<StaticVec<U, M>> for StaticVec<T, N>
where
    T: PartialOrd<U>,
{
    /// Lexicographic comparison, element by element, then by length.
    fn partial_cmp(&self, other: &StaticVec<U, M>) -> Option<Ordering> {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.partial_cmp(b)? {
                Ordering::Equal => {}
                unequal => return Some(unequal),
            }
        }
        self.len.partial_cmp(&other.len)
    }
}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // Imports
    use super::StaticVec;
    use crate::Error;
    use alloc::{
        rc::Rc,
        string::{String, ToString},
        vec::Vec,
    };
    use core::cell::Cell;

    /// Element that counts how many times it has been dropped.
    #[derive(Debug)]
    pub(crate) struct Tracked {
        pub(crate) id: i32,
        pub(crate) drops: Rc<Cell<usize>>,
    }

    impl Tracked {
        pub(crate) fn new(id: i32, drops: &Rc<Cell<usize>>) -> Self {
            Self {
                id,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            Self::new(self.id, &self.drops)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    /// Element whose `Clone` panics once `budget` clones have been made.
    #[derive(Debug)]
    pub(crate) struct CloneBomb {
        pub(crate) id: i32,
        pub(crate) budget: Rc<Cell<usize>>,
    }

    impl Clone for CloneBomb {
        fn clone(&self) -> Self {
            let left = self.budget.get();
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.budget.set(left - 1);
            Self {
                id: self.id,
                budget: Rc::clone(&self.budget),
            }
        }
    }

    pub(crate) fn ids<const N: usize>(v: &StaticVec<Tracked, N>) -> Vec<i32> {
        v.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_push_pop() {
        let mut v: StaticVec<u8, 2> = StaticVec::default();
        v.push(1).unwrap();
        v.push(2).unwrap();
        assert!(v.push(9).is_err());
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_default_and_capacity() {
        let v: StaticVec<i32, 4> = StaticVec::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_empty());
        assert_eq!(v.spare_capacity(), 4);

        let v2: StaticVec<i32, 4> = StaticVec::new();
        assert_eq!(v2.len(), 0);
        assert_eq!(StaticVec::<i32, 4>::CAPACITY, 4);
    }

    #[test]
    fn test_full_then_push_leaves_vector_unchanged() {
        // Capacity 5 built from {1,2,3}; fill up, then overflow.
        let mut v: StaticVec<i32, 5> = StaticVec::from_array([1, 2, 3]);
        v.push(4).unwrap();
        v.push(5).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.push(6).unwrap_err(), Error::Full);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert!(v.is_full());
    }

    #[test]
    fn test_checked_accessors() {
        let mut v: StaticVec<i32, 5> = StaticVec::from_array([1, 2, 3, 4, 5]);
        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(4u8), Ok(&5));
        assert_eq!(v.at(5), Err(Error::OutOfRange));
        assert_eq!(v.at(-1i64), Err(Error::OutOfRange));
        assert_eq!(v.front(), Ok(&1));
        assert_eq!(v.back(), Ok(&5));
        *v.at_mut(1).unwrap() = 20;
        *v.front_mut().unwrap() = 10;
        *v.back_mut().unwrap() = 50;
        assert_eq!(v, [10, 20, 3, 4, 50]);

        v.clear();
        assert_eq!(v.front(), Err(Error::OutOfRange));
        assert_eq!(v.back(), Err(Error::OutOfRange));
        assert_eq!(v.at(0), Err(Error::OutOfRange));
    }

    #[test]
    fn test_contains_and_getters() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([7, 8, 9]);
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
    }

    #[test]
    fn test_first_and_last_mut() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        if let Some(first) = v.first_mut() {
            *first = 10;
        }
        if let Some(last) = v.last_mut() {
            *last = 30;
        }
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let mut empty: StaticVec<i32, 4> = StaticVec::default();
        assert!(empty.first_mut().is_none());
        assert!(empty.last_mut().is_none());
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v: StaticVec<i32, 3> = StaticVec::from_array([1, 2]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
    }

    #[test]
    fn test_borrow_and_borrow_mut_behave_like_slice() {
        use core::borrow::{Borrow, BorrowMut};

        let mut v: StaticVec<i32, 3> = StaticVec::from_array([1, 2, 3]);
        let b: &[i32] = Borrow::<[i32]>::borrow(&v);
        assert_eq!(b, v.as_slice());
        {
            let bm: &mut [i32] = BorrowMut::<[i32]>::borrow_mut(&mut v);
            bm[1] = 20;
        }
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn test_eq_across_capacities_and_types() {
        let a: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        let b: StaticVec<i32, 8> = StaticVec::from_array([1, 2, 3]);
        let c: StaticVec<i32, 3> = StaticVec::from_array([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a, &[1, 2, 3][..]);

        let s: StaticVec<String, 2> = StaticVec::from_array(["x".to_string()]);
        assert_eq!(s, ["x"]);
    }

    #[test]
    fn test_lexicographic_ordering() {
        use core::cmp::Ordering;

        let short: StaticVec<i32, 3> = StaticVec::from_array([1, 2, 3]);
        let ten: StaticVec<i32, 1> = StaticVec::from_array([10]);
        let longer: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3, 1]);

        assert!(short < ten);
        assert!(ten > short);
        assert!(short < longer);
        assert_eq!(short.partial_cmp(&short), Some(Ordering::Equal));
        assert_eq!(short.cmp(&short.clone()), Ordering::Equal);
    }

    #[derive(Debug)]
    struct Celsius(i32);

    impl PartialEq<i32> for Celsius {
        fn eq(&self, other: &i32) -> bool {
            self.0 == *other
        }
    }

    impl PartialOrd<i32> for Celsius {
        fn partial_cmp(&self, other: &i32) -> Option<core::cmp::Ordering> {
            self.0.partial_cmp(other)
        }
    }

    #[test]
    fn test_ordering_across_element_types() {
        use core::cmp::Ordering;

        let temps: StaticVec<Celsius, 4> = StaticVec::from_array([Celsius(1), Celsius(5)]);
        let same: StaticVec<i32, 2> = StaticVec::from_array([1, 5]);
        let bigger: StaticVec<i32, 3> = StaticVec::from_array([1, 6]);
        let prefix: StaticVec<i32, 3> = StaticVec::from_array([1]);

        assert_eq!(temps.partial_cmp(&same), Some(Ordering::Equal));
        assert!(temps < bigger);
        assert!(temps > prefix);
        assert_eq!(temps, same);
    }

    #[test]
    fn test_partial_ordering_stops_at_incomparable_element() {
        use core::cmp::Ordering;

        let a: StaticVec<f64, 3> = StaticVec::from_array([1.0, f64::NAN, 0.0]);
        let b: StaticVec<f64, 3> = StaticVec::from_array([1.0, 2.0, 3.0]);
        let c: StaticVec<f64, 3> = StaticVec::from_array([0.5, f64::NAN]);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Greater));
    }

    #[test]
    fn test_hash_matches_slice_hash() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        use alloc::format;
        let v: StaticVec<i32, 5> = StaticVec::from_array([1, 2]);
        let dbg = format!("{v:?}");
        assert!(dbg.contains("StaticVec"));
        assert!(dbg.contains("len"));
        assert!(dbg.contains("elements"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut v: StaticVec<String, 4> =
            StaticVec::from_array(["a".to_string(), "b".to_string()]);
        let c = v.clone();
        v[0].push('!');
        assert_eq!(v, ["a!", "b"]);
        assert_eq!(c, ["a", "b"]);
    }

    #[test]
    fn test_clone_from_shorter_source_truncates() {
        let mut longer: StaticVec<i32, 5> = StaticVec::from_array([1, 2, 3, 4, 5]);
        let shorter: StaticVec<i32, 5> = StaticVec::from_array([1, 2, 3]);
        longer.clone_from(&shorter);
        assert_eq!(longer, [1, 2, 3]);
        assert_eq!(longer.len(), 3);
        assert_eq!(longer.get(3), None);
        assert_eq!(longer.at(3), Err(Error::OutOfRange));
    }

    #[test]
    fn test_clone_from_longer_source_extends() {
        let mut shorter: StaticVec<String, 4> = StaticVec::from_array(["x".to_string()]);
        let longer: StaticVec<String, 4> =
            StaticVec::from_array(["a".to_string(), "b".to_string(), "c".to_string()]);
        shorter.clone_from(&longer);
        assert_eq!(shorter, longer);
    }

    #[test]
    fn test_drop_destroys_only_live_elements() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut v: StaticVec<Tracked, 8> = StaticVec::new();
            for id in 0..5 {
                v.push(Tracked::new(id, &drops)).unwrap();
            }
            v.pop_back();
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_clone_panic_drops_partial_copy() {
        let budget = Rc::new(Cell::new(usize::MAX));
        let mut v: StaticVec<CloneBomb, 4> = StaticVec::new();
        for id in 0..3 {
            v.push(CloneBomb {
                id,
                budget: Rc::clone(&budget),
            })
            .unwrap();
        }
        budget.set(1);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| v.clone()));
        assert!(res.is_err());
        // Original untouched.
        assert_eq!(v.iter().map(|b| b.id).collect::<Vec<_>>(), [0, 1, 2]);
        // Only `v` and `budget` itself hold the counter now.
        assert_eq!(Rc::strong_count(&budget), 4);
    }

    #[test]
    fn zero_capacity_vec_behaves() {
        let mut v: StaticVec<u8, 0> = StaticVec::default();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.push(1), Err(Error::Full));
        assert_eq!(v.extend_from_slice(&[1, 2]), Err(Error::CapacityExceeded));
        assert_eq!(v.resize(0, 9), Ok(()));
        assert_eq!(v.resize(1, 9), Err(Error::CapacityExceeded));
        assert_eq!(v.pop(), None);
        assert_eq!(v.try_into_array().unwrap().len(), 0);
    }

    #[test]
    fn test_zero_sized_type_supports_capacity() {
        let mut v: StaticVec<(), 4> = StaticVec::default();
        v.push(()).unwrap();
        v.push(()).unwrap();
        assert_eq!(v.len(), 2);
        v.truncate(1);
        assert_eq!(v.len(), 1);
        v.resize(4, ()).unwrap();
        assert!(v.is_full());
        assert_eq!(v.try_into_array().unwrap().len(), 4);
    }

    #[test]
    fn test_resolve_range_rejects_inverted_and_overlong() {
        use super::resolve_range;
        assert_eq!(resolve_range(&(1..3), 5), Some((1, 3)));
        assert_eq!(resolve_range(&(..), 5), Some((0, 5)));
        assert_eq!(resolve_range(&(..=4), 5), Some((0, 5)));
        assert_eq!(resolve_range(&(2..6), 5), None);
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 3..1;
        assert_eq!(resolve_range(&inverted, 5), None);
        assert_eq!(resolve_range(&(..=usize::MAX), 5), None);
    }
}
