//! Error types for tensor operations
//!
//! Every fallible operation in this crate reports a [`TensorError`]. Errors are
//! raised synchronously at the offending call, before any result is allocated
//! or any operand is touched.
//!
//! Each variant belongs to one of two broad categories, exposed through
//! [`TensorError::kind`]:
//!
//! - [`ErrorKind::OutOfRange`]: an index sequence does not address the tensor
//! - [`ErrorKind::InvalidArgument`]: operands or shapes are incompatible
//!
//! # Examples
//!
//! ```
//! use mllib_core::{ErrorKind, Tensor, TensorError};
//!
//! let a = Tensor::<i32>::zeros(&[2, 3]);
//! let b = Tensor::<i32>::zeros(&[3, 2]);
//!
//! match a.add(&b) {
//!     Err(TensorError::ShapeMismatch { lhs, rhs, .. }) => {
//!         assert_eq!(lhs, vec![2, 3]);
//!         assert_eq!(rhs, vec![3, 2]);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//!
//! let err = a.add(&b).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

use thiserror::Error;

/// Result type for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

/// Broad category of a [`TensorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The index sequence cannot address an element of the tensor
    OutOfRange,
    /// An operand or shape argument is unacceptable for the operation
    InvalidArgument,
}

/// Error type for tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// The shape cannot be materialised (its element count overflows `usize`)
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    /// Number of indices differs from the tensor rank
    #[error("Number of indices ({got}) does not match tensor rank ({rank})")]
    DimensionMismatch { rank: usize, got: usize },

    /// A coordinate exceeds its dimension (checked access only)
    #[error("Index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        size: usize,
    },

    /// Operand shapes differ for an element-wise operation
    #[error("Tensor shapes do not match for {operation}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        operation: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// Matrix multiplication operand is not rank 2
    #[error("Matrix multiplication requires 2D tensors, got ranks {lhs} and {rhs}")]
    RankError { lhs: usize, rhs: usize },

    /// Left column count differs from right row count
    #[error("Inner dimensions do not match for matrix multiplication: ({m}×{k1}) × ({k2}×{n})")]
    InnerDimensionMismatch {
        m: usize,
        k1: usize,
        k2: usize,
        n: usize,
    },

    /// Buffer length does not match the element count of the shape
    #[error("Shape {shape:?} requires {expected} elements, but got {got}")]
    LengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },
}

impl TensorError {
    /// Category this error is surfaced as
    pub fn kind(&self) -> ErrorKind {
        match self {
            TensorError::DimensionMismatch { .. } | TensorError::IndexOutOfBounds { .. } => {
                ErrorKind::OutOfRange
            }
            TensorError::InvalidShape { .. }
            | TensorError::ShapeMismatch { .. }
            | TensorError::RankError { .. }
            | TensorError::InnerDimensionMismatch { .. }
            | TensorError::LengthMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Create a shape mismatch error for `operation`
    pub fn shape_mismatch(operation: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        TensorError::ShapeMismatch {
            operation,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        TensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }
}
