//! # quaternary5d
//!
//! Applies a quaternary callback to the elements of four five-dimensional
//! nested input arrays and assigns the results to the elements of a
//! five-dimensional nested output array.
//!
//! # Nested arrays & shapes
//!
//! *See [shapes] and [arrays] for more information.*
//!
//! A nested array here is just a `Vec` of `Vec`s, five levels deep:
//!
//! | rust type | alias |
//! | --- | --- |
//! | `Vec<T>` | [`arrays::Array1D<T>`] |
//! | `Vec<Vec<T>>` | [`arrays::Array2D<T>`] |
//! | `Vec<Vec<Vec<Vec<Vec<T>>>>>` | [`arrays::Array5D<T>`] |
//!
//! The extent of every level is described by a [`shapes::Shape5D`], which is
//! `[usize; 5]`. The outermost extent comes first.
//!
//! # Applying a callback
//!
//! *See [apply] for more information.*
//!
//! ```rust
//! # use quaternary5d::prelude::*;
//! let shape = [1, 1, 1, 2, 2];
//!
//! let x: Array5D<f64> = ones5d(shape);
//! let y: Array5D<f64> = ones5d(shape);
//! let z: Array5D<f64> = ones5d(shape);
//! let w: Array5D<f64> = ones5d(shape);
//! let mut out: Array5D<f64> = zeros5d(shape);
//!
//! quaternary5d((&x, &y, &z, &w, &mut out), shape, add4);
//!
//! assert_eq!(out, vec![vec![vec![vec![vec![4.0, 4.0], vec![4.0, 4.0]]]]]);
//! ```
//!
//! [apply::quaternary5d] trusts the caller: every container must nest to the
//! declared shape. Use [apply::try_quaternary5d] to check that first.
//!
//! See [feature_flags] for details on feature flags.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod apply;
pub mod arrays;
pub mod error;
pub mod feature_flags;
pub mod ops;
pub mod shapes;

pub use error::Error;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::apply::*;
    pub use crate::arrays::*;
    pub use crate::error::Error;
    pub use crate::ops::*;
    pub use crate::shapes::*;
}
