//! Symbolic heap primitives: addresses, objects, values, and finalized snapshots.
//!
//! The heap side of the core is deliberately small. Exploration owns the full symbolic
//! heap; this module provides the pieces the override-wrapper subsystem needs:
//!
//! - [`Address`] / [`AddressAllocator`] - fresh, unique, monotonically non-decreasing
//!   heap addresses, safe under concurrent allocation from exploration workers
//! - [`SymbolicObject`] / [`TypeStorage`] - a reference-typed value: an address plus
//!   the set of candidate types exploration has narrowed it to
//! - [`SymValue`] - the symbolic value family passed through method interception
//! - [`HeapSnapshot`] - an immutable-once-finalized per-state field store implementing
//!   the [`Resolver`](crate::resolver::Resolver) contract for test emission

mod address;
mod object;
mod snapshot;

pub use address::{Address, AddressAllocator};
pub use object::{SymValue, SymbolicObject, TypeStorage};
pub use snapshot::HeapSnapshot;
