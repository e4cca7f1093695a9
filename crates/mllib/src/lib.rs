//! # mllib - Minimal Dense Tensor Library
//!
//! This is the **meta crate** that re-exports the mllib components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use mllib::prelude::*;
//!
//! let a = Tensor::<f32>::full(&[2, 3], 5.0);
//! assert_eq!(a.size(), 6);
//! assert_eq!(a.shape(), &[2, 3]);
//!
//! let b = Tensor::<f32>::ones(&[3, 2]);
//! let c = a.matmul(&b)?;
//! assert_eq!(c.data(), &[15.0, 15.0, 15.0, 15.0]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor ([`core`])
//!
//! The dense N-dimensional [`core::Tensor`] with row-major indexing,
//! element-wise addition and matrix multiplication.
//!
//! ```
//! use mllib::core::{ErrorKind, Tensor};
//!
//! let t = Tensor::<i32>::zeros(&[2, 2]);
//! assert_eq!(t.at(&[0, 1, 2]).unwrap_err().kind(), ErrorKind::OutOfRange);
//! ```
//!
//! ## Features
//!
//! - `subscriber`: install a `tracing-subscriber` backend through
//!   [`core::tracing_support::init_tracing`]

#![deny(warnings)]

// Re-export component crates
pub use mllib_core as core;

/// Prelude module for convenient imports
pub mod prelude {
    //! Commonly used types and traits
    //!
    //! ```
    //! use mllib::prelude::*;
    //! ```

    pub use crate::core::{ErrorKind, Scalar, Shape, Tensor, TensorError, TensorResult};
}
