//! Core type definitions for mllib tensors.
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - The [`Scalar`] bound restricting tensors to arithmetic element types

use scirs2_core::numeric::Num;
use smallvec::SmallVec;
use std::fmt;

/// Type alias for tensor axis index.
///
/// Zero-indexed: axis 0 is the slowest-varying dimension.
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use mllib_core::{Rank, Tensor};
///
/// let matrix = Tensor::<f64>::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Tensors up to rank 6 keep their dimensions inline; higher ranks spill to
/// the heap.
pub type Shape = SmallVec<[usize; 6]>;

/// Element types a [`Tensor`](crate::Tensor) may hold.
///
/// Any `Copy` numeric type with additive and multiplicative identities
/// qualifies. All primitive integers and floats implement it through the
/// blanket impl below.
///
/// # Examples
///
/// ```
/// use mllib_core::Scalar;
///
/// fn sum_of<T: Scalar>(values: &[T]) -> T {
///     values.iter().fold(T::zero(), |acc, &v| acc + v)
/// }
///
/// assert_eq!(sum_of(&[1u8, 2, 3]), 6);
/// assert_eq!(sum_of(&[0.5f32, 0.25]), 0.75);
/// ```
pub trait Scalar: Copy + Num + fmt::Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Copy + Num + fmt::Debug + Send + Sync + 'static {}

/// Number of elements described by `shape`, or `None` on `usize` overflow.
///
/// The fold starts at 1, so an empty shape describes a single element and any
/// zero-sized dimension describes none.
pub(crate) fn checked_numel(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_numel() {
        assert_eq!(checked_numel(&[2, 3, 4]), Some(24));
        assert_eq!(checked_numel(&[7]), Some(7));
        assert_eq!(checked_numel(&[]), Some(1));
        assert_eq!(checked_numel(&[3, 0, 5]), Some(0));
    }

    #[test]
    fn test_checked_numel_overflow() {
        assert_eq!(checked_numel(&[usize::MAX, 2]), None);
        // A zero before the overflow point short-circuits the product.
        assert_eq!(checked_numel(&[0, usize::MAX, 2]), Some(0));
    }

    #[test]
    fn test_shape_inline() {
        let shape: Shape = SmallVec::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert!(!shape.spilled());

        let big: Shape = SmallVec::from_slice(&[1, 1, 1, 1, 1, 1, 1]);
        assert!(big.spilled());
    }
}
