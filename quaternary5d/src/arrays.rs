//! Nested array aliases and constructors.

use crate::shapes::{IndexPath5D, Shape5D};
use alloc::vec::Vec;
use num_traits::{One, Zero};

pub type Array1D<T> = Vec<T>;
pub type Array2D<T> = Vec<Array1D<T>>;
pub type Array3D<T> = Vec<Array2D<T>>;
pub type Array4D<T> = Vec<Array3D<T>>;
pub type Array5D<T> = Vec<Array4D<T>>;

/// Creates a nested array of `shape` where the leaf at index path `p` is `f(p)`.
///
/// `f` is called once per leaf, in lexicographic ascending order of index paths.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let x: Array5D<usize> = filled5d_by([1, 1, 1, 2, 3], |[.., i3, i4]| 10 * i3 + i4);
/// assert_eq!(x, vec![vec![vec![vec![vec![0, 1, 2], vec![10, 11, 12]]]]]);
/// ```
pub fn filled5d_by<T, F>(shape: Shape5D, mut f: F) -> Array5D<T>
where
    F: FnMut(IndexPath5D) -> T,
{
    let [s0, s1, s2, s3, s4] = shape;
    let mut a0 = Vec::with_capacity(s0);
    for i0 in 0..s0 {
        let mut a1 = Vec::with_capacity(s1);
        for i1 in 0..s1 {
            let mut a2 = Vec::with_capacity(s2);
            for i2 in 0..s2 {
                let mut a3 = Vec::with_capacity(s3);
                for i3 in 0..s3 {
                    let mut a4 = Vec::with_capacity(s4);
                    for i4 in 0..s4 {
                        a4.push(f([i0, i1, i2, i3, i4]));
                    }
                    a3.push(a4);
                }
                a2.push(a3);
            }
            a1.push(a2);
        }
        a0.push(a1);
    }
    a0
}

/// Creates a nested array of `shape` with every leaf set to a clone of `value`.
///
/// Levels beneath a zero extent are empty, so nothing is allocated for them.
pub fn filled5d<T: Clone>(value: T, shape: Shape5D) -> Array5D<T> {
    let mut shape = shape;
    if let Some(dim) = shape.iter().position(|&d| d == 0) {
        shape[dim..].fill(0);
    }
    let [s0, s1, s2, s3, s4] = shape;
    let a3 = alloc::vec![value; s4];
    let a2 = alloc::vec![a3; s3];
    let a1 = alloc::vec![a2; s2];
    let a0 = alloc::vec![a1; s1];
    alloc::vec![a0; s0]
}

/// Creates a nested array of `shape` filled with zeros.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let x: Array5D<f32> = zeros5d([1, 1, 1, 1, 2]);
/// assert_eq!(x, vec![vec![vec![vec![vec![0.0, 0.0]]]]]);
/// ```
pub fn zeros5d<T: Zero + Clone>(shape: Shape5D) -> Array5D<T> {
    filled5d(T::zero(), shape)
}

/// Creates a nested array of `shape` filled with ones.
pub fn ones5d<T: One + Clone>(shape: Shape5D) -> Array5D<T> {
    filled5d(T::one(), shape)
}
