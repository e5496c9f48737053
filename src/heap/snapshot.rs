//! Finalized per-state heap snapshots.

use std::{
    collections::HashMap,
    fmt,
    sync::atomic::{AtomicI64, Ordering},
};

use dashmap::DashMap;

use crate::{
    heap::Address,
    model::Model,
    resolver::Resolver,
    types::{Chunk, TypeId},
    Result,
};

/// An immutable-once-finalized store of field values for one exploration state.
///
/// Each exploration state owns its snapshot; materialization reads it strictly after
/// the state has concluded, so no reader ever observes a heap mutated by another
/// state. Populating and reading are both lock-free; the "finalized" discipline is a
/// protocol obligation of the exploration front end, not enforced here.
///
/// Concrete addresses are issued first-come in ascending order, giving stable small
/// integers for display names regardless of the magnitude of symbolic addresses.
///
/// # Examples
///
/// ```rust
/// use symscope::heap::{AddressAllocator, HeapSnapshot};
/// use symscope::model::{Model, PrimitiveModel};
/// use symscope::types::Chunk;
///
/// let allocator = AddressAllocator::new();
/// let snapshot = HeapSnapshot::new();
/// let addr = allocator.next_address();
///
/// snapshot.put_field(
///     addr,
///     Chunk::new("java.lang.ThreadGroup", "name"),
///     Model::Primitive(PrimitiveModel::Str("workers".into())),
/// );
/// ```
pub struct HeapSnapshot {
    fields: DashMap<Address, HashMap<Chunk, Model>>,
    concrete: DashMap<Address, i64>,
    next_concrete: AtomicI64,
}

impl HeapSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: DashMap::new(),
            concrete: DashMap::new(),
            next_concrete: AtomicI64::new(1),
        }
    }

    /// Records the value of one field chunk at `addr`.
    ///
    /// Called by the exploration front end while finalizing a state; a later write to
    /// the same `(addr, chunk)` pair replaces the earlier one.
    pub fn put_field(&self, addr: Address, chunk: Chunk, model: Model) {
        self.fields.entry(addr).or_default().insert(chunk, model);
    }

    /// Returns the number of addresses with recorded fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Resolver for HeapSnapshot {
    fn field_values(&self, addr: Address, _ty: TypeId) -> Result<HashMap<Chunk, Model>> {
        // The snapshot records only wrapped-shadow fields, already keyed by canonical
        // chunk, so the type argument needs no further narrowing here.
        Ok(self
            .fields
            .get(&addr)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn concrete_address_of(&self, addr: Address) -> i64 {
        if addr.is_null() {
            return 0;
        }
        *self
            .concrete
            .entry(addr)
            .or_insert_with(|| self.next_concrete.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for HeapSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeapSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapSnapshot")
            .field("address_count", &self.fields.len())
            .finish()
    }
}
