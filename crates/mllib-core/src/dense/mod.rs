//! Dense tensor implementation and operations
//!
//! The tensor type lives in [`types`]; operations are split by concern into
//! sibling modules that each add an `impl` block to [`Tensor`].

// Core type definition
pub mod types;

// Operation modules
mod algebra;
mod indexing;

// Trait implementations
pub mod tensor_traits;

pub use types::Tensor;
