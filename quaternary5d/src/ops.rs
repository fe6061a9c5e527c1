//! Ready-made quaternary callbacks for [crate::apply::quaternary5d].

use core::ops::Add;

/// Sums four values, left to right: `((x + y) + z) + w`.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// assert_eq!(add4(&1.0, &2.0, &3.0, &4.0), 10.0);
/// ```
pub fn add4<T: Copy + Add<Output = T>>(x: &T, y: &T, z: &T, w: &T) -> T {
    *x + *y + *z + *w
}
