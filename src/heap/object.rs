//! Symbolic objects and values.

use std::sync::Arc;

use crate::{heap::Address, types::TypeId};

/// The set of candidate types exploration has narrowed a reference down to.
///
/// The least common type is the declared/approximate type used for dispatch and chunk
/// resolution; the possible set tracks the concrete candidates the solver may still
/// choose between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStorage {
    /// The declared or least-common type of the reference.
    pub least_common: TypeId,
    /// All concrete candidate types. Contains at least `least_common`.
    pub possible: Vec<TypeId>,
}

impl TypeStorage {
    /// Creates a storage with a single known type.
    #[must_use]
    pub fn single(ty: TypeId) -> Self {
        Self {
            least_common: ty,
            possible: vec![ty],
        }
    }

    /// Creates a storage with a least-common type and an explicit candidate set.
    #[must_use]
    pub fn new(least_common: TypeId, possible: Vec<TypeId>) -> Self {
        Self {
            least_common,
            possible,
        }
    }
}

/// A reference-typed symbolic value: a heap address plus its type storage.
///
/// The object itself owns no field state; it is a capability to look fields up in the
/// heap that issued the address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolicObject {
    /// The heap address of this object.
    pub addr: Address,
    /// The candidate types of this object.
    pub types: TypeStorage,
}

impl SymbolicObject {
    /// Creates an object with a single known type.
    #[must_use]
    pub fn new(addr: Address, ty: TypeId) -> Self {
        Self {
            addr,
            types: TypeStorage::single(ty),
        }
    }

    /// The declared/least-common type used for dispatch and chunk resolution.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.types.least_common
    }

    /// Returns a copy of this object retyped to `ty` with a single-type storage.
    #[must_use]
    pub fn retyped(&self, ty: TypeId) -> Self {
        Self {
            addr: self.addr,
            types: TypeStorage::single(ty),
        }
    }
}

/// A symbolic value as seen by method interception.
///
/// Primitive payloads are concrete here because interception only ever needs them for
/// branching decisions and constraint emission; fully symbolic primitives stay on the
/// exploration side of the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum SymValue {
    /// The null reference.
    Null,
    /// The absence of a value (void method results).
    Void,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    I32(i32),
    /// A 64-bit integer.
    I64(i64),
    /// A 64-bit float.
    F64(f64),
    /// A string literal.
    Str(Arc<str>),
    /// A reference to a symbolic heap object.
    Ref(SymbolicObject),
}

impl SymValue {
    /// Returns the heap address if this value is a reference.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        match self {
            SymValue::Ref(object) => Some(object.addr),
            _ => None,
        }
    }
}
