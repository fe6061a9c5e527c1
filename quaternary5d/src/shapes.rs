//! Shape descriptors for five-dimensional nested arrays.

use crate::arrays::Array4D;

/// The extent of each of the five nesting levels, outermost first.
pub type Shape5D = [usize; 5];

/// Identifies one leaf across all five nesting levels, outermost first.
pub type IndexPath5D = [usize; 5];

/// The number of leaves described by `shape`, which is also the number of
/// times [crate::apply::quaternary5d] invokes its callback.
///
/// Saturates at `usize::MAX`, which only a nest of zero-sized leaves can
/// exceed. See [checked_num_elements] to detect that.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// assert_eq!(num_elements([1, 1, 1, 2, 2]), 4);
/// assert_eq!(num_elements([3, 0, 1, 2, 2]), 0);
/// ```
pub fn num_elements(shape: Shape5D) -> usize {
    checked_num_elements(shape).unwrap_or(usize::MAX)
}

/// Like [num_elements], but `None` if the count does not fit in a `usize`.
pub fn checked_num_elements(shape: Shape5D) -> Option<usize> {
    if is_empty(shape) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Whether any dimension of `shape` is zero.
pub fn is_empty(shape: Shape5D) -> bool {
    shape.contains(&0)
}

/// Infers the shape of `array` by following the first element at each level.
///
/// Every level beneath an empty one is reported as `0`. Ragged arrays are not
/// detected, use [crate::apply::validate5d] for that.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let x: Array5D<f32> = zeros5d([2, 3, 1, 4, 5]);
/// assert_eq!(shape5d_of(&x), [2, 3, 1, 4, 5]);
/// ```
pub fn shape5d_of<T>(array: &[Array4D<T>]) -> Shape5D {
    let mut shape = [0; 5];
    shape[0] = array.len();
    let Some(a0) = array.first() else {
        return shape;
    };
    shape[1] = a0.len();
    let Some(a1) = a0.first() else {
        return shape;
    };
    shape[2] = a1.len();
    let Some(a2) = a1.first() else {
        return shape;
    };
    shape[3] = a2.len();
    let Some(a3) = a2.first() else {
        return shape;
    };
    shape[4] = a3.len();
    shape
}

/// Iterates every index path of `shape` in lexicographic ascending order,
/// i.e. the outermost index varies slowest. This is the order
/// [crate::apply::quaternary5d] visits leaves in.
///
/// ```rust
/// # use quaternary5d::prelude::*;
/// let paths: Vec<IndexPath5D> = index_paths([1, 1, 1, 1, 2]).collect();
/// assert_eq!(paths, [[0, 0, 0, 0, 0], [0, 0, 0, 0, 1]]);
/// ```
pub fn index_paths(shape: Shape5D) -> IndexPaths {
    IndexPaths {
        shape,
        next: if is_empty(shape) { None } else { Some([0; 5]) },
    }
}

/// Iterator returned by [index_paths].
#[derive(Debug, Clone)]
pub struct IndexPaths {
    shape: Shape5D,
    next: Option<IndexPath5D>,
}

impl Iterator for IndexPaths {
    type Item = IndexPath5D;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut path = current;
        let mut dim = 5;
        self.next = loop {
            if dim == 0 {
                break None;
            }
            dim -= 1;
            path[dim] += 1;
            if path[dim] < self.shape[dim] {
                break Some(path);
            }
            path[dim] = 0;
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(path) = self.next else {
            return (0, Some(0));
        };
        // visited < total, so only the total can overflow
        let Some(total) = checked_num_elements(self.shape) else {
            return (usize::MAX, None);
        };
        let mut visited = 0;
        for (i, d) in self.shape.iter().enumerate() {
            visited = visited * d + path[i];
        }
        let remaining = total - visited;
        (remaining, Some(remaining))
    }
}

/// `len()` panics if the number of index paths does not fit in a `usize`.
impl ExactSizeIterator for IndexPaths {}

impl core::iter::FusedIterator for IndexPaths {}
