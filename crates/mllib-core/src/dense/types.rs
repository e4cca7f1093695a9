//! Dense tensor type definition, construction and accessors
//!
//! This module defines the core `Tensor<T>` type. Indexing and arithmetic are
//! organised in separate modules.

use crate::error::{TensorError, TensorResult};
use crate::types::{checked_numel, Rank, Scalar, Shape};
use smallvec::SmallVec;

/// Dense N-dimensional tensor with flat row-major storage
///
/// A `Tensor` exclusively owns its element buffer and its shape. The buffer
/// length always equals the product of the shape entries; both are fixed at
/// construction and only element values change afterwards.
///
/// # Type Parameters
///
/// * `T` - The element type, any [`Scalar`] (integers and floats)
///
/// # Memory Layout
///
/// Elements are stored C-contiguous: the last dimension varies fastest, so
/// element `[i, j]` of a `[rows, cols]` tensor sits at offset `i * cols + j`.
///
/// # Examples
///
/// ```
/// use mllib_core::Tensor;
///
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.size(), 24);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    /// Flat element storage in row-major order
    pub(crate) data: Vec<T>,
    /// Dimension sizes, slowest-varying first
    pub(crate) shape: Shape,
}

impl<T: Scalar> Tensor<T> {
    /// Create an empty tensor: rank 0, no elements.
    ///
    /// Note that this differs from `Tensor::zeros(&[])`, which holds exactly
    /// one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let t = Tensor::<f32>::empty();
    /// assert_eq!(t.size(), 0);
    /// assert_eq!(t.rank(), 0);
    /// ```
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            shape: SmallVec::new(),
        }
    }

    /// Create a zero-filled tensor of the given shape.
    ///
    /// Alias for [`Tensor::zeros`].
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`. Use [`Tensor::try_zeros`]
    /// to handle that case.
    pub fn new(shape: &[usize]) -> Self {
        Self::zeros(shape)
    }

    /// Create a tensor filled with zeros
    ///
    /// A zero anywhere in `shape` yields a tensor with no elements. An empty
    /// `shape` yields a single element.
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[2, 3]);
    /// assert!(tensor.data().iter().all(|&x| x == 0.0));
    ///
    /// assert_eq!(Tensor::<f64>::zeros(&[4, 0, 2]).size(), 0);
    /// assert_eq!(Tensor::<f64>::zeros(&[]).size(), 1);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor filled with ones
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`.
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`. Use [`Tensor::try_full`]
    /// to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 3], 5.0f32);
    /// assert_eq!(tensor.size(), 6);
    /// assert!(tensor.data().iter().all(|&x| x == 5.0));
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        match Self::try_full(shape, value) {
            Ok(tensor) => tensor,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a tensor filled with a specific value
    ///
    /// This is an alias for `from_elem`, named after the NumPy constructor.
    pub fn full(shape: &[usize], value: T) -> Self {
        Self::from_elem(shape, value)
    }

    /// Fallible form of [`Tensor::zeros`]
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the element count overflows
    /// `usize`.
    pub fn try_zeros(shape: &[usize]) -> TensorResult<Self> {
        Self::try_full(shape, T::zero())
    }

    /// Fallible form of [`Tensor::full`]
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the element count overflows
    /// `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// assert!(Tensor::try_full(&[2, 2], 1u8).is_ok());
    /// assert!(Tensor::try_full(&[usize::MAX, 2], 1u8).is_err());
    /// ```
    pub fn try_full(shape: &[usize], value: T) -> TensorResult<Self> {
        let total = checked_numel(shape)
            .ok_or_else(|| TensorError::invalid_shape(shape, "element count overflows usize"))?;
        tracing::trace!(?shape, total, "allocating tensor");
        Ok(Self {
            data: vec![value; total],
            shape: SmallVec::from_slice(shape),
        })
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `data` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::LengthMismatch`] if `data.len()` differs from the
    /// element count of `shape`, or [`TensorError::InvalidShape`] if that count
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert_eq!(*tensor.at(&[1, 0]).unwrap(), 4.0);
    ///
    /// assert!(Tensor::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let expected = checked_numel(shape)
            .ok_or_else(|| TensorError::invalid_shape(shape, "element count overflows usize"))?;
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                shape: shape.to_vec(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: SmallVec::from_slice(shape),
        })
    }
}

impl<T> Tensor<T> {
    /// Get the total number of elements
    ///
    /// This is the length of the flat buffer, O(1).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get the total number of elements
    ///
    /// Alias for [`Tensor::size`].
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the rank (number of dimensions) of this tensor
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.shape(), &[2, 3, 4]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Raw access to the flat buffer
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw access to the flat buffer
    ///
    /// The slice length is fixed, so the size invariant cannot be broken
    /// through it.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the tensor and return its flat buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
