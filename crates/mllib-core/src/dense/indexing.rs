//! Multi-dimensional indexing
//!
//! Two families of accessors translate a coordinate vector into a flat offset
//! using row-major strides:
//!
//! - [`Tensor::at`] / [`Tensor::at_mut`] validate only the number of indices.
//!   This is the fast path: a coordinate past its dimension produces an offset
//!   into some other element, or a panic when the offset leaves the buffer.
//! - [`Tensor::get`] / [`Tensor::get_mut`] additionally check every coordinate
//!   against its dimension and report [`TensorError::IndexOutOfBounds`].
//!
//! Flat offsets go through `tensor[i]` (see the `Index<usize>` impl).

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};

impl<T> Tensor<T> {
    /// Compute the row-major flat offset of `indices`
    ///
    /// Dimensions are visited from last (fastest-varying) to first, so the
    /// stride of axis `d` is the product of the sizes of all later axes.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] if `indices.len()` is not the
    /// tensor rank. Individual coordinates are not range-checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let t = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(t.flat_index(&[0, 0, 0]).unwrap(), 0);
    /// assert_eq!(t.flat_index(&[1, 2, 3]).unwrap(), 12 + 8 + 3);
    /// assert!(t.flat_index(&[1, 2]).is_err());
    /// ```
    pub fn flat_index(&self, indices: &[usize]) -> TensorResult<usize> {
        if indices.len() != self.shape.len() {
            return Err(TensorError::DimensionMismatch {
                rank: self.shape.len(),
                got: indices.len(),
            });
        }

        let mut flat = 0usize;
        let mut stride = 1usize;
        for (&index, &dim) in indices.iter().zip(self.shape.iter()).rev() {
            flat += index * stride;
            stride *= dim;
        }
        Ok(flat)
    }

    /// Validate every coordinate and return the flat offset
    fn checked_flat_index(&self, indices: &[usize]) -> TensorResult<usize> {
        if indices.len() != self.shape.len() {
            return Err(TensorError::DimensionMismatch {
                rank: self.shape.len(),
                got: indices.len(),
            });
        }
        for (axis, (&index, &size)) in indices.iter().zip(self.shape.iter()).enumerate() {
            if index >= size {
                return Err(TensorError::IndexOutOfBounds { axis, index, size });
            }
        }
        self.flat_index(indices)
    }

    /// Access an element by its coordinates
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] if the number of indices
    /// differs from the tensor rank.
    ///
    /// # Panics
    ///
    /// A coordinate at or past its dimension is a caller contract violation.
    /// It is not reported as an error: the access either lands on another
    /// element or panics when the computed offset leaves the buffer. A very
    /// large coordinate can also overflow the offset arithmetic, which panics
    /// in debug builds and wraps in release builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(*t.at(&[0, 2]).unwrap(), 3);
    /// assert_eq!(*t.at(&[1, 0]).unwrap(), 4);
    /// assert!(t.at(&[0, 1, 2]).is_err());
    /// ```
    pub fn at(&self, indices: &[usize]) -> TensorResult<&T> {
        let flat = self.flat_index(indices)?;
        Ok(&self.data[flat])
    }

    /// Mutably access an element by its coordinates
    ///
    /// Same contract as [`Tensor::at`]. Writing through the returned reference
    /// mutates the tensor in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let mut t = Tensor::<f32>::zeros(&[2, 2]);
    /// *t.at_mut(&[0, 1]).unwrap() = 42.5;
    /// assert_eq!(t.data(), &[0.0, 42.5, 0.0, 0.0]);
    /// ```
    pub fn at_mut(&mut self, indices: &[usize]) -> TensorResult<&mut T> {
        let flat = self.flat_index(indices)?;
        Ok(&mut self.data[flat])
    }

    /// Access an element with every coordinate bounds-checked
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] on a wrong index count and
    /// [`TensorError::IndexOutOfBounds`] on the first coordinate that is not
    /// smaller than its dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::{Tensor, TensorError};
    ///
    /// let t = Tensor::<i32>::zeros(&[2, 3]);
    /// assert_eq!(*t.get(&[1, 2]).unwrap(), 0);
    /// assert_eq!(
    ///     t.get(&[0, 3]).unwrap_err(),
    ///     TensorError::IndexOutOfBounds { axis: 1, index: 3, size: 3 }
    /// );
    /// ```
    pub fn get(&self, indices: &[usize]) -> TensorResult<&T> {
        let flat = self.checked_flat_index(indices)?;
        Ok(&self.data[flat])
    }

    /// Mutably access an element with every coordinate bounds-checked
    ///
    /// Same contract as [`Tensor::get`].
    pub fn get_mut(&mut self, indices: &[usize]) -> TensorResult<&mut T> {
        let flat = self.checked_flat_index(indices)?;
        Ok(&mut self.data[flat])
    }
}
