// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{rollback::Rollback, StaticVec},
};

impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    /// Appends items until the vector is full; the rest of the source is left
    /// unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            // SAFETY: `take` bounds the count by the spare capacity.
            unsafe { self.push_unchecked(item) };
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] without cloning anything if fewer
    /// than `count` slots are free. If a clone panics, the elements appended
    /// by this call are dropped before unwinding.
    #[inline]
    pub fn emplace_back_many(&mut self, count: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.emplace_back_many_with(count, || value.clone())
    }

    /// Appends `count` values produced by `f`.
    ///
    /// Same capacity check and rollback as
    /// [`emplace_back_many`](StaticVec::emplace_back_many).
    pub fn emplace_back_many_with<F>(&mut self, count: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if count > self.spare_capacity() {
            return Err(Error::CapacityExceeded);
        }
        let mut guard = Rollback::new(self, "emplace_back_many");
        for _ in 0..count {
            // SAFETY: `count` fits in the spare capacity.
            unsafe { guard.push_unchecked(f()) };
        }
        guard.commit();
        Ok(())
    }

    /// Appends `count` values produced by the fallible `f`.
    ///
    /// On the first `Err` the elements appended by this call are dropped and
    /// the error is returned unchanged. A capacity shortfall is reported as
    /// `Error::CapacityExceeded` converted into `E`, before `f` is called.
    pub fn try_emplace_back_many_with<E, F>(&mut self, count: usize, mut f: F) -> Result<(), E>
    where
        E: From<Error>,
        F: FnMut() -> Result<T, E>,
    {
        if count > self.spare_capacity() {
            return Err(Error::CapacityExceeded.into());
        }
        let mut guard = Rollback::new(self, "try_emplace_back_many");
        for _ in 0..count {
            let value = f()?;
            // SAFETY: `count` fits in the spare capacity.
            unsafe { guard.push_unchecked(value) };
        }
        guard.commit();
        Ok(())
    }

    /// Appends every item of `iter` and returns how many were appended.
    ///
    /// If the source yields more items than there are free slots, the
    /// elements appended by this call are dropped and
    /// [`Error::CapacityExceeded`] is returned. When the source reports a
    /// lower size bound that already does not fit, nothing is consumed.
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let mut v: StaticVec<i32, 4> = StaticVec::from_array([1]);
    /// assert_eq!(v.emplace_back_range(2..4), Ok(2));
    /// assert_eq!(v.emplace_back_range(0..5), Err(Error::CapacityExceeded));
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    pub fn emplace_back_range<I>(&mut self, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        if iter.size_hint().0 > self.spare_capacity() {
            return Err(Error::CapacityExceeded);
        }
        let mut guard = Rollback::new(self, "emplace_back_range");
        for item in iter {
            if guard.is_full() {
                return Err(Error::CapacityExceeded);
            }
            // SAFETY: checked above.
            unsafe { guard.push_unchecked(item) };
        }
        Ok(guard.commit())
    }

    /// Appends clones of every element of `src` if they all fit; otherwise
    /// returns [`Error::CapacityExceeded`] and leaves the vector unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::CapacityExceeded);
        }
        let mut guard = Rollback::new(self, "extend_from_slice");
        for item in src {
            // SAFETY: `src` fits in the spare capacity.
            unsafe { guard.push_unchecked(item.clone()) };
        }
        guard.commit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        error::Error,
        vec::{
            tests::{ids, CloneBomb, Tracked},
            StaticVec,
        },
    };
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum BuildError {
        Capacity,
        Element(i32),
    }

    impl From<Error> for BuildError {
        fn from(_: Error) -> Self {
            BuildError::Capacity
        }
    }

    #[test]
    fn test_extend_truncates_without_over_consuming() {
        let mut v: StaticVec<i32, 3> = StaticVec::from_array([1]);
        let mut src = 10..20;
        v.extend(&mut src);
        assert_eq!(v, [1, 10, 11]);
        assert_eq!(src.next(), Some(12));
        v.extend(0..5);
        assert_eq!(v, [1, 10, 11]);
    }

    #[test]
    fn test_extend_from_refs() {
        let mut v: StaticVec<u8, 4> = StaticVec::new();
        v.extend(&[1u8, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_emplace_back_many_capacity_checked_first() {
        let drops = Rc::new(Cell::new(0));
        let proto = Tracked::new(9, &drops);
        let mut v: StaticVec<Tracked, 4> = StaticVec::new();
        v.push(Tracked::new(1, &drops)).unwrap();
        assert_eq!(v.emplace_back_many(4, &proto), Err(Error::CapacityExceeded));
        assert_eq!(ids(&v), [1]);
        assert_eq!(v.emplace_back_many(3, &proto), Ok(()));
        assert_eq!(ids(&v), [1, 9, 9, 9]);
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn test_emplace_back_many_rolls_back_on_panic() {
        let budget = Rc::new(Cell::new(usize::MAX));
        let proto = CloneBomb {
            id: 7,
            budget: Rc::clone(&budget),
        };
        let mut v: StaticVec<CloneBomb, 6> = StaticVec::new();
        v.emplace_back_many(2, &proto).unwrap();
        budget.set(2);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.emplace_back_many(3, &proto)
        }));
        assert!(res.is_err());
        assert_eq!(v.len(), 2);
        // `proto`, `budget` and the two survivors.
        assert_eq!(Rc::strong_count(&budget), 4);
    }

    #[test]
    fn test_try_emplace_back_many_with_rolls_back_on_error() {
        let drops = Rc::new(Cell::new(0));
        let mut v: StaticVec<Tracked, 6> = StaticVec::new();
        v.push(Tracked::new(0, &drops)).unwrap();
        let mut next = 1;
        let res = v.try_emplace_back_many_with(4, || {
            if next == 3 {
                return Err(BuildError::Element(next));
            }
            next += 1;
            Ok(Tracked::new(next - 1, &drops))
        });
        assert_eq!(res, Err(BuildError::Element(3)));
        assert_eq!(ids(&v), [0]);
        assert_eq!(drops.get(), 2);

        assert_eq!(
            v.try_emplace_back_many_with(6, || Ok(Tracked::new(5, &drops))),
            Err(BuildError::Capacity)
        );
        assert_eq!(
            v.try_emplace_back_many_with::<BuildError, _>(2, || Ok(Tracked::new(5, &drops))),
            Ok(())
        );
        assert_eq!(ids(&v), [0, 5, 5]);
    }

    #[test]
    fn test_emplace_back_range_returns_count() {
        let mut v: StaticVec<i32, 5> = StaticVec::new();
        assert_eq!(v.emplace_back_range([1, 2, 3]), Ok(3));
        assert_eq!(v.emplace_back_range(core::iter::empty()), Ok(0));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_emplace_back_range_overflow_rolls_back() {
        let drops = Rc::new(Cell::new(0));
        let mut v: StaticVec<Tracked, 3> = StaticVec::new();
        v.push(Tracked::new(0, &drops)).unwrap();
        // `filter` hides the length so the overflow is found while appending.
        let src = (1..5).filter(|_| true).map(|id| Tracked::new(id, &drops));
        assert_eq!(v.emplace_back_range(src), Err(Error::CapacityExceeded));
        assert_eq!(ids(&v), [0]);
        // Two appended then rolled back, plus the rejected third one.
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_emplace_back_range_rejects_known_overflow_up_front() {
        let mut v: StaticVec<i32, 2> = StaticVec::new();
        let mut src = [1, 2, 3].into_iter();
        assert_eq!(v.emplace_back_range(&mut src), Err(Error::CapacityExceeded));
        assert_eq!(src.len(), 3);
        assert!(v.is_empty());
    }

    #[test]
    fn test_emplace_back_range_panicking_source_rolls_back() {
        let mut v: StaticVec<i32, 8> = StaticVec::from_array([1]);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.emplace_back_range((2..6).map(|x| if x == 4 { panic!("source failed") } else { x }))
        }));
        assert!(res.is_err());
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_extend_from_slice_all_or_nothing() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1]);
        assert_eq!(v.extend_from_slice(&[2, 3, 4, 5]), Err(Error::CapacityExceeded));
        assert_eq!(v, [1]);
        assert_eq!(v.extend_from_slice(&[2, 3]), Ok(()));
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
