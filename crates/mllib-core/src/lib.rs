//! # mllib-core
//!
//! Dense N-dimensional tensor for the mllib stack.
//!
//! This crate provides a single container, [`Tensor`], that owns a flat
//! contiguous buffer of elements together with the ordered list of dimension
//! sizes describing it:
//!
//! - **Construction** from a shape, optionally with a fill value
//! - **Flat indexing** straight into the buffer (`tensor[i]`)
//! - **Multi-dimensional indexing** via row-major flattening ([`Tensor::at`])
//! - **Element-wise addition** of equally shaped tensors ([`Tensor::add`])
//! - **Matrix multiplication** of rank-2 tensors ([`Tensor::matmul`])
//!
//! ## Core Principles
//!
//! ### Memory Layout
//!
//! Data is always C-contiguous (row-major): the last dimension varies fastest.
//! The shape is fixed at construction; there is no reshape or view.
//!
//! ### Value Semantics
//!
//! Arithmetic never mutates its operands. `add` and `matmul` return a freshly
//! allocated tensor, and every shape check runs before that allocation.
//!
//! ## Quick Start
//!
//! ```
//! use mllib_core::Tensor;
//!
//! let mut t = Tensor::<f32>::full(&[2, 3], 5.0);
//! assert_eq!(t.size(), 6);
//! assert_eq!(t.shape(), &[2, 3]);
//!
//! *t.at_mut(&[0, 1]).unwrap() = 42.5;
//! assert_eq!(*t.at(&[0, 1]).unwrap(), 42.5);
//! ```
//!
//! ## Arithmetic
//!
//! ```
//! use mllib_core::Tensor;
//!
//! let a = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! let b = Tensor::from_vec(vec![2, 0, 1, 2], &[2, 2]).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.data(), &[3, 2, 4, 6]);
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.data(), &[4, 4, 10, 8]);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TensorResult`]. Each [`TensorError`] maps onto
//! an [`ErrorKind`] distinguishing out-of-range access from invalid arguments:
//!
//! ```
//! use mllib_core::{ErrorKind, Tensor};
//!
//! let t = Tensor::<f32>::zeros(&[2, 2]);
//! let err = t.at(&[0, 1, 2]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! ```
//!
//! ## Features
//!
//! - `subscriber`: enable [`tracing_support::init_tracing`] backed by
//!   `tracing-subscriber`

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod tracing_support;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dense::Tensor;
pub use error::{ErrorKind, TensorError, TensorResult};
pub use types::{Axis, Rank, Scalar, Shape};
