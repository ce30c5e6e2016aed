//! # vole-core
//!
//! Boundary primitives for Vole's module-typing layer.
//!
//! This crate provides:
//! - [`DType`] — element data types of the external array framework
//! - [`Array`] — the opaque boundary trait standing in for that framework's
//!   array type until one is composed in
//! - [`Error`] / [`Result`] — the single error type used across the workspace
//!
//! Nothing in here computes: the typing layer only passes array handles
//! around, so the boundary stays as thin as the contracts require.

pub mod array;
pub mod dtype;
pub mod error;

pub use array::Array;
pub use dtype::DType;
pub use error::{Error, Result};
