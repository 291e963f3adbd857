// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, slot::Slot, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: [const { Slot::uninit() }; N],
        }
    }

    /// Constructs a vector of `count` default values.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`. If `T::default`
    /// panics, the elements built so far are dropped before unwinding.
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let v: StaticVec<i32, 5> = StaticVec::with_len(3).unwrap();
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(StaticVec::<i32, 5>::with_len(6).unwrap_err(), Error::CapacityExceeded);
    /// ```
    pub fn with_len(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut v = Self::new();
        v.emplace_back_many_with(count, T::default)?;
        Ok(v)
    }

    /// Constructs a vector of `count` clones of `value`.
    pub fn from_elem(count: usize, value: &T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.emplace_back_many(count, value)?;
        Ok(v)
    }

    /// Constructs a vector from the elements of `array`, moving each one in.
    ///
    /// `M` may be smaller than the capacity; `M > N` is rejected at compile time.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<&str, 4> = StaticVec::from_array(["a", "b"]);
    /// assert_eq!(v.len(), 2);
    /// ```
    pub fn from_array<const M: usize>(array: [T; M]) -> Self {
        const { assert!(M <= N, "array is longer than the vector capacity") };
        let mut v = Self::new();
        for item in array {
            // SAFETY: at most `M <= N` elements are pushed.
            unsafe { v.push_unchecked(item) };
        }
        v
    }

    /// Constructs a vector from `array`, padded with default values up to
    /// `count` elements.
    ///
    /// If `count <= M` no padding is added. Returns
    /// [`Error::CapacityExceeded`] if `count > N`.
    pub fn from_array_padded<const M: usize>(array: [T; M], count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        if count > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::from_array(array);
        v.emplace_back_many_with(count.saturating_sub(M), T::default)?;
        Ok(v)
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
