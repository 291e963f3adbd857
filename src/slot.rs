// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-element storage cells.
//!
//! A [`Slot<T>`] holds the bytes of exactly one `T` and never initializes or
//! drops them on its own. Whether a slot is live is tracked entirely by its
//! owner (for [`StaticVec`](crate::StaticVec), the logical length): the slot
//! carries no tag bit.
//!
//! For element types without drop glue, [`Slot::destroy`] compiles to nothing,
//! so destroying a whole prefix of slots is free.

// Core imports
use core::mem::{self, MaybeUninit};

/// A possibly-uninitialized storage cell for one `T`.
///
/// `Slot<T>` has the same layout as `T`, so an array `[Slot<T>; N]` whose
/// first `len` cells are live can be viewed as a `[T]` of length `len`.
#[repr(transparent)]
pub struct Slot<T> {
    cell: MaybeUninit<T>,
}

impl<T> Slot<T> {
    /// Returns an empty slot.
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            cell: MaybeUninit::uninit(),
        }
    }

    /// Moves `value` into the slot and returns a reference to it.
    ///
    /// # Safety
    ///
    /// The slot must be empty. Constructing over a live value leaks it.
    #[inline]
    pub unsafe fn construct(&mut self, value: T) -> &mut T {
        self.cell.write(value)
    }

    /// Constructs the value produced by `f` in the slot.
    ///
    /// If `f` panics the slot stays empty.
    ///
    /// # Safety
    ///
    /// The slot must be empty.
    #[inline]
    pub unsafe fn construct_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.cell.write(f())
    }

    /// Constructs the value produced by the fallible `f` in the slot.
    ///
    /// On `Err` the slot stays empty and the error is returned unchanged.
    ///
    /// # Safety
    ///
    /// The slot must be empty.
    #[inline]
    pub unsafe fn try_construct_with<E, F>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = f()?;
        Ok(self.cell.write(value))
    }

    /// Drops the live value in place. The slot becomes empty.
    ///
    /// # Safety
    ///
    /// The slot must be live, and must not be read again until it is
    /// constructed anew.
    #[inline]
    pub unsafe fn destroy(&mut self) {
        if mem::needs_drop::<T>() {
            // SAFETY: the caller guarantees the slot holds a live `T`.
            unsafe { self.cell.assume_init_drop() }
        }
    }

    /// Moves the live value out. The slot becomes empty.
    ///
    /// # Safety
    ///
    /// The slot must be live, and must not be read or destroyed again until
    /// it is constructed anew.
    #[inline]
    pub unsafe fn take(&mut self) -> T {
        // SAFETY: the caller guarantees the slot holds a live `T`, and treats
        // the slot as empty afterwards, so the value is not duplicated.
        unsafe { self.cell.assume_init_read() }
    }

    /// Returns a shared reference to the live value.
    ///
    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn value(&self) -> &T {
        // SAFETY: the caller guarantees the slot holds a live `T`.
        unsafe { self.cell.assume_init_ref() }
    }

    /// Returns a mutable reference to the live value.
    ///
    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn value_mut(&mut self) -> &mut T {
        // SAFETY: the caller guarantees the slot holds a live `T`.
        unsafe { self.cell.assume_init_mut() }
    }

    /// Returns a pointer to the storage, live or not.
    #[inline]
    pub const fn data(&self) -> *const T {
        self.cell.as_ptr()
    }

    /// Returns a mutable pointer to the storage, live or not.
    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.cell.as_mut_ptr()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::uninit()
    }
}
