//! Type universe, hierarchy index, and field-chunk addressing.
//!
//! This module is the type-system half of the override-wrapper core. It provides:
//!
//! - [`TypeUniverse`] - concurrent registry of all loaded types, including the shadow
//!   reimplementations the engine executes in place of unanalyzable standard-library types
//! - [`HierarchyIndex`] - memoized ancestor/inheritor queries over the loaded universe
//! - [`Chunk`] - the canonical `(declaring real type, field name)` identity used to address
//!   field storage consistently across shadow/real type substitution
//!
//! # Shadow Types
//!
//! A shadow type is a hand-written stand-in for a standard-library type (a collection,
//! an optional, a stream, a thread) whose real implementation cannot be executed
//! symbolically. Shadows are loaded into the same universe as real types and carry a
//! back-link to the real type they substitute; [`TypeUniverse::real_of`] follows that
//! link, and all field addressing resolves through it so that a field reached through a
//! shadow and a field reached through the real type land on the same [`Chunk`].
//!
//! # Thread Safety
//!
//! The universe uses lock-free primary storage (`SkipMap`) with concurrent name indices
//! (`DashMap`) and atomic id generation. The hierarchy index memoizes per-type query
//! results with at-least-once compute semantics: two threads racing on the first query
//! for a type may both compute the (immutable) answer, and either result is retained.

mod chunk;
mod hierarchy;
mod universe;

pub use chunk::{Chunk, FieldRef};
pub use hierarchy::HierarchyIndex;
pub use universe::{TypeDef, TypeId, TypeKind, TypeUniverse, ROOT_TYPE_NAME};
