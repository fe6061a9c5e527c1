/// Represents the ways a set of nested arrays can fail to conform to a
/// [crate::shapes::Shape5D].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The container at position `array` (`0..=3` are inputs, `4` is the output)
    /// has `found` elements at nesting level `dim` beneath the index path
    /// `index[..dim]`, but the shape declares `expected`.
    ShapeMismatch {
        array: usize,
        dim: usize,
        index: [usize; 4],
        expected: usize,
        found: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ShapeMismatch {
                array,
                dim,
                index,
                expected,
                found,
            } => write!(
                f,
                "array {array} has {found} elements at dimension {dim} (index {:?}), expected {expected}",
                &index[..*dim]
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
