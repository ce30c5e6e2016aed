//! # vole-nn
//!
//! The module-typing layer for Vole.
//!
//! Neural-network libraries need to ask "is this value shaped like a
//! module?" without forcing every module type to inherit from one base.
//! This crate provides that question in two forms:
//!
//! 1. **Capability traits** — [`ModuleLike`] and [`CallableModule`], the
//!    explicit contracts module types implement directly.
//! 2. **Capability descriptors** — [`MODULE_LIKE`] and
//!    [`CALLABLE_MODULE_LIKE`], immutable member lists checked at runtime
//!    through [`satisfies`] against any candidate exposing the
//!    [`Introspect`] surface, with no declared conformance required.
//!
//! The actual layers, parameter initialization, and array computation all
//! live behind the [`vole_core::Array`] boundary; nothing here computes.

pub mod capability;
pub mod module;

pub use capability::{
    satisfies, Capability, Introspect, Member, MemberKind, CALLABLE_MODULE_LIKE, MODULE_LIKE,
};
pub use module::{ArrayRef, CallableModule, Initializer, ModuleLike, Params, PrngKey, State};
