//! # Tensor - Trait Implementations
//!
//! ## Implemented Traits
//!
//! - `Index<usize>` / `IndexMut<usize>` (flat buffer access)
//! - `Add` for references
//! - `Default`
//! - `Debug` / `Display`
//! - `IntoIterator` for references

use super::types::Tensor;
use crate::error::TensorResult;
use crate::types::Scalar;
use smallvec::SmallVec;
use std::fmt;

/// Flat access by raw offset, with no shape translation.
///
/// # Panics
///
/// Panics if `index >= self.size()`.
impl<T> std::ops::Index<usize> for Tensor<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Tensor<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// `&a + &b` is [`Tensor::add`]; the shape check makes the output a `Result`.
///
/// ```
/// use mllib_core::Tensor;
///
/// let a = Tensor::full(&[2, 2], 1);
/// let b = Tensor::full(&[2, 2], 2);
/// let c = (&a + &b).unwrap();
/// assert_eq!(c.data(), &[3, 3, 3, 3]);
///
/// assert!((&a + &Tensor::full(&[4], 2)).is_err());
/// ```
impl<'a, T: Scalar> std::ops::Add<&'a Tensor<T>> for &'a Tensor<T> {
    type Output = TensorResult<Tensor<T>>;
    fn add(self, rhs: &'a Tensor<T>) -> Self::Output {
        Tensor::add(self, rhs)
    }
}

/// The empty tensor: rank 0, size 0.
impl<T> Default for Tensor<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            shape: SmallVec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor{:?} [", self.shape())?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
