// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a full [`StaticVec`](crate::StaticVec) from a list of elements,
/// inferring both the element type and the capacity.
///
/// `static_vec![]` creates an empty vector whose capacity comes from context.
///
/// ```rust
/// use static_vec::{static_vec, StaticVec};
///
/// let v = static_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// assert!(v.is_full());
///
/// let empty: StaticVec<u8, 4> = static_vec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! static_vec {
    () => {
        $crate::StaticVec::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::StaticVec::from([$($x),+])
    };
}
