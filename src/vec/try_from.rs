// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}
