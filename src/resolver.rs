//! The resolver boundary between wrappers and the exploration heap.
//!
//! Wrappers never touch the heap directly. At test-emission time they receive a
//! [`Resolver`] capability granting read access to one finalized state's field values
//! and to the concrete-address translation used for naming. The exploration front end
//! supplies its own implementation; [`HeapSnapshot`](crate::heap::HeapSnapshot) is the
//! in-crate implementation used by the emission stage and the test suite.

use std::collections::HashMap;

use crate::{
    heap::Address,
    model::Model,
    types::{Chunk, TypeId},
    Result,
};

/// Read access to a finalized exploration state's heap.
///
/// Implementations must present an immutable snapshot: `value()` materialization runs
/// strictly after exploration of the owning state has concluded and must never observe
/// concurrent mutation.
pub trait Resolver {
    /// Returns the field values recorded at `addr`, restricted to fields reachable
    /// through `ty` (a shadow type or its real counterpart), keyed by canonical chunk.
    ///
    /// An address with no recorded fields yields an empty map; wrappers substitute
    /// documented defaults for absent chunks.
    ///
    /// # Errors
    ///
    /// Returns an error when `ty` cannot be resolved against the loaded universe.
    fn field_values(&self, addr: Address, ty: TypeId) -> Result<HashMap<Chunk, Model>>;

    /// Translates a symbolic address into a stable small integer.
    ///
    /// Used only for display names and debugging output, never for equivalence.
    fn concrete_address_of(&self, addr: Address) -> i64;
}
