//! Applies quaternary callbacks across five-dimensional nested arrays.

use crate::{
    arrays::Array4D,
    error::Error,
    feature_flags::SHAPE_ASSERTS,
    shapes::{is_empty, Shape5D},
};

/// Four borrowed input nested arrays followed by the mutably borrowed output.
pub type Quaternary5dArrays<'a, T, U, V, W, X> = (
    &'a [Array4D<T>],
    &'a [Array4D<U>],
    &'a [Array4D<V>],
    &'a [Array4D<W>],
    &'a mut [Array4D<X>],
);

/// Applies `fcn` to the elements of four five-dimensional nested input arrays
/// and assigns the results to the elements of a five-dimensional nested output
/// array.
///
/// For every index path `(i0, i1, i2, i3, i4)` within `shape`:
/// ```text
/// out[i0][i1][i2][i3][i4] = fcn(x[..], y[..], z[..], w[..])
/// ```
/// Index paths are visited in lexicographic ascending order, so `fcn` is called
/// exactly [crate::shapes::num_elements] times. If any dimension of `shape` is
/// zero nothing happens.
///
/// All arrays are assumed to have the same shape. Only the region covered by
/// `shape` is touched, and this panics if any array is shorter than `shape` at
/// some level. See [try_quaternary5d] for a checked version.
///
/// Examples:
/// ```rust
/// # use quaternary5d::prelude::*;
/// let shape = [1, 1, 1, 2, 2];
/// let x: Array5D<f64> = ones5d(shape);
/// let y: Array5D<f64> = ones5d(shape);
/// let z: Array5D<f64> = ones5d(shape);
/// let w: Array5D<f64> = ones5d(shape);
/// let mut out: Array5D<f64> = zeros5d(shape);
/// quaternary5d((&x, &y, &z, &w, &mut out), shape, add4);
/// assert_eq!(out, vec![vec![vec![vec![vec![4.0, 4.0], vec![4.0, 4.0]]]]]);
/// ```
///
/// The element types are independent:
/// ```rust
/// # use quaternary5d::prelude::*;
/// let shape = [1, 1, 1, 1, 2];
/// let mask = filled5d(true, shape);
/// let a = filled5d(3u8, shape);
/// let b = filled5d(-1i64, shape);
/// let label = filled5d("x", shape);
/// let mut out = filled5d(String::new(), shape);
/// quaternary5d((&mask, &a, &b, &label, &mut out), shape, |m, a, b, l| {
///     if *m { format!("{l}={}", *a as i64 + b) } else { String::new() }
/// });
/// assert_eq!(out[0][0][0][0], ["x=2", "x=2"]);
/// ```
pub fn quaternary5d<T, U, V, W, X, F>(
    arrays: Quaternary5dArrays<'_, T, U, V, W, X>,
    shape: Shape5D,
    mut fcn: F,
) where
    F: FnMut(&T, &U, &V, &W) -> X,
{
    log::trace!("quaternary5d: shape={shape:?}");

    if SHAPE_ASSERTS {
        let (x, y, z, w, out) = (arrays.0, arrays.1, arrays.2, arrays.3, &*arrays.4);
        if let Err(err) = validate5d((x, y, z, w, out), shape) {
            panic!("quaternary5d: {err}");
        }
    }

    if is_empty(shape) {
        return;
    }
    let [s0, s1, s2, s3, s4] = shape;
    let (x, y, z, w, out) = arrays;
    for i0 in 0..s0 {
        let (x0, y0, z0, w0, o0) = (&x[i0], &y[i0], &z[i0], &w[i0], &mut out[i0]);
        for i1 in 0..s1 {
            let (x1, y1, z1, w1, o1) = (&x0[i1], &y0[i1], &z0[i1], &w0[i1], &mut o0[i1]);
            for i2 in 0..s2 {
                let (x2, y2, z2, w2, o2) = (&x1[i2], &y1[i2], &z1[i2], &w1[i2], &mut o1[i2]);
                for i3 in 0..s3 {
                    let (x3, y3, z3, w3, o3) =
                        (&x2[i3], &y2[i3], &z2[i3], &w2[i3], &mut o2[i3]);
                    for i4 in 0..s4 {
                        o3[i4] = fcn(&x3[i4], &y3[i4], &z3[i4], &w3[i4]);
                    }
                }
            }
        }
    }
}

/// Checks that all five arrays nest to exactly `shape`, at every level that
/// [quaternary5d] would visit. Levels beneath a zero extent are not inspected.
///
/// The output is only borrowed immutably here.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let x: Array5D<f32> = zeros5d([1, 1, 1, 2, 2]);
/// let short: Array5D<f32> = zeros5d([1, 1, 1, 2, 1]);
/// assert!(validate5d((&x, &x, &x, &x, &x), [1, 1, 1, 2, 2]).is_ok());
/// assert_eq!(
///     validate5d((&x, &x, &short, &x, &x), [1, 1, 1, 2, 2]),
///     Err(Error::ShapeMismatch { array: 2, dim: 4, index: [0, 0, 0, 0], expected: 2, found: 1 }),
/// );
/// ```
pub fn validate5d<T, U, V, W, X>(
    arrays: (
        &[Array4D<T>],
        &[Array4D<U>],
        &[Array4D<V>],
        &[Array4D<W>],
        &[Array4D<X>],
    ),
    shape: Shape5D,
) -> Result<(), Error> {
    let (x, y, z, w, out) = arrays;
    check_conforms(0, x, shape)?;
    check_conforms(1, y, shape)?;
    check_conforms(2, z, shape)?;
    check_conforms(3, w, shape)?;
    check_conforms(4, out, shape)
}

/// Validates the arrays with [validate5d], and then calls [quaternary5d].
///
/// On error the output is left unmodified and `fcn` is never called.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let shape = [2, 1, 1, 1, 1];
/// let x: Array5D<i32> = ones5d(shape);
/// let mut out: Array5D<i32> = zeros5d([1, 1, 1, 1, 1]);
/// let res = try_quaternary5d((&x, &x, &x, &x, &mut out), shape, add4);
/// assert!(matches!(res, Err(Error::ShapeMismatch { array: 4, dim: 0, .. })));
/// assert_eq!(out, zeros5d::<i32>([1, 1, 1, 1, 1]));
/// ```
pub fn try_quaternary5d<T, U, V, W, X, F>(
    arrays: Quaternary5dArrays<'_, T, U, V, W, X>,
    shape: Shape5D,
    fcn: F,
) -> Result<(), Error>
where
    F: FnMut(&T, &U, &V, &W) -> X,
{
    let (x, y, z, w, out) = arrays;
    validate5d((x, y, z, w, &*out), shape)?;
    quaternary5d((x, y, z, w, out), shape, fcn);
    Ok(())
}

fn check_conforms<T>(array: usize, a: &[Array4D<T>], shape: Shape5D) -> Result<(), Error> {
    let [s0, s1, s2, s3, s4] = shape;
    let mismatch = |dim: usize, index: [usize; 4], found: usize| {
        let err = Error::ShapeMismatch {
            array,
            dim,
            index,
            expected: shape[dim],
            found,
        };
        log::debug!("shape validation failed: {err}");
        Err(err)
    };

    if a.len() != s0 {
        return mismatch(0, [0; 4], a.len());
    }
    for (i0, a0) in a.iter().enumerate() {
        if a0.len() != s1 {
            return mismatch(1, [i0, 0, 0, 0], a0.len());
        }
        for (i1, a1) in a0.iter().enumerate() {
            if a1.len() != s2 {
                return mismatch(2, [i0, i1, 0, 0], a1.len());
            }
            for (i2, a2) in a1.iter().enumerate() {
                if a2.len() != s3 {
                    return mismatch(3, [i0, i1, i2, 0], a2.len());
                }
                for (i3, a3) in a2.iter().enumerate() {
                    if a3.len() != s4 {
                        return mismatch(4, [i0, i1, i2, i3], a3.len());
                    }
                }
            }
        }
    }
    Ok(())
}
