//! Element-wise addition and matrix multiplication
//!
//! Both operations are pure: operands are borrowed immutably and the result
//! is a freshly allocated tensor. Shape checks run before the allocation, so a
//! rejected call has no side effects.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::types::{checked_numel, Scalar};
use smallvec::smallvec;

impl<T: Scalar> Tensor<T> {
    /// Element-wise addition with another tensor of identical shape.
    ///
    /// Computes `C[i, j, ...] = A[i, j, ...] + B[i, j, ...]`. Because both
    /// operands share a shape they share a layout, so the sum runs directly
    /// over the flat buffers.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the number of elements
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the shapes differ in rank or
    /// in any dimension. No broadcasting is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let a = Tensor::full(&[2, 2], 1);
    /// let b = Tensor::full(&[2, 2], 2);
    ///
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(*c.at(&[0, 0]).unwrap(), 3);
    /// assert_eq!(*c.at(&[1, 1]).unwrap(), 3);
    /// ```
    pub fn add(&self, other: &Self) -> TensorResult<Self> {
        if self.shape != other.shape {
            tracing::debug!(
                lhs = ?self.shape(),
                rhs = ?other.shape(),
                "rejecting element-wise add"
            );
            return Err(TensorError::shape_mismatch(
                "addition",
                self.shape(),
                other.shape(),
            ));
        }

        tracing::debug!(shape = ?self.shape(), "element-wise add");

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            shape: self.shape.clone(),
        })
    }

    /// Matrix multiplication with another rank-2 tensor.
    ///
    /// For `A` of shape `[m, k]` and `B` of shape `[k, n]`, returns `C` of
    /// shape `[m, n]` with `C[i, j] = Σ_k A[i, k] * B[k, j]`.
    ///
    /// Accumulation runs row, inner, column: for each `(i, k)` the value
    /// `A[i, k]` is held while sweeping row `k` of `B` into row `i` of `C`.
    /// Both sweeps are contiguous in memory. Each `C[i, j]` therefore adds its
    /// products in increasing `k`, starting from zero, which fixes the
    /// floating-point rounding.
    ///
    /// # Complexity
    ///
    /// O(m × k × n). No blocking or fast multiplication is applied.
    ///
    /// # Errors
    ///
    /// - [`TensorError::RankError`] if either operand is not rank 2
    /// - [`TensorError::InnerDimensionMismatch`] if `A`'s column count differs
    ///   from `B`'s row count
    /// - [`TensorError::InvalidShape`] if the `[m, n]` result has more elements
    ///   than `usize` can count (possible when a zero inner dimension pairs
    ///   with huge outer dimensions)
    ///
    /// # Examples
    ///
    /// ```
    /// use mllib_core::Tensor;
    ///
    /// let a = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = Tensor::<f64>::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
    ///
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.shape(), &[2, 2]);
    /// // [[1*5 + 2*7, 1*6 + 2*8],
    /// //  [3*5 + 4*7, 3*6 + 4*8]]
    /// assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn matmul(&self, other: &Self) -> TensorResult<Self> {
        if self.rank() != 2 || other.rank() != 2 {
            tracing::debug!(
                lhs_rank = self.rank(),
                rhs_rank = other.rank(),
                "rejecting matmul"
            );
            return Err(TensorError::RankError {
                lhs: self.rank(),
                rhs: other.rank(),
            });
        }

        let (m, k1) = (self.shape[0], self.shape[1]);
        let (k2, n) = (other.shape[0], other.shape[1]);

        if k1 != k2 {
            tracing::debug!(m, k1, k2, n, "rejecting matmul");
            return Err(TensorError::InnerDimensionMismatch { m, k1, k2, n });
        }

        let total = checked_numel(&[m, n]).ok_or_else(|| {
            TensorError::invalid_shape(&[m, n], "matmul result element count overflows usize")
        })?;

        tracing::debug!(m, k = k1, n, "matmul");

        let mut out = vec![T::zero(); total];

        // Empty rows or columns leave nothing to accumulate; chunks_exact
        // rejects a zero chunk size.
        if n > 0 && k1 > 0 {
            for (lhs_row, out_row) in self.data.chunks_exact(k1).zip(out.chunks_exact_mut(n)) {
                for (&a, rhs_row) in lhs_row.iter().zip(other.data.chunks_exact(n)) {
                    for (c, &b) in out_row.iter_mut().zip(rhs_row) {
                        *c = *c + a * b;
                    }
                }
            }
        }

        Ok(Self {
            data: out,
            shape: smallvec![m, n],
        })
    }
}
