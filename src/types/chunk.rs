//! Canonical field-storage identity.
//!
//! A [`Chunk`] names one unit of field storage in the symbolic heap: the pair of the
//! declaring *real* type's name and the field's name. Chunks are the stable addressing
//! scheme that survives shadow substitution - a field read through a shadow type and
//! the same field read through the real type resolve to one chunk, so both paths
//! observe the same heap cell.

use std::{fmt, sync::Arc};

use crate::types::TypeId;

/// Reference to a field as it appears at an access site: the declaring type (which may
/// be a shadow) and the field name. Resolution to a [`Chunk`] goes through
/// [`HierarchyIndex::chunk_for`](crate::types::HierarchyIndex::chunk_for).
#[derive(Clone, Debug)]
pub struct FieldRef {
    /// Declaring type at the access site, possibly a shadow type.
    pub declaring: TypeId,
    /// Field name.
    pub name: Arc<str>,
}

impl FieldRef {
    /// Creates a field reference.
    #[must_use]
    pub fn new(declaring: TypeId, name: impl Into<Arc<str>>) -> Self {
        Self {
            declaring,
            name: name.into(),
        }
    }
}

/// The canonical `(declaring real type name, field name)` storage identity.
///
/// Two fields with the same name declared at the same real ancestor resolve to the
/// same chunk even when one access path goes through a shadow substitution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chunk {
    declaring: Arc<str>,
    field: Arc<str>,
}

impl Chunk {
    /// Creates a chunk from a real declaring type name and a field name.
    #[must_use]
    pub fn new(declaring: impl Into<Arc<str>>, field: impl Into<Arc<str>>) -> Self {
        Self {
            declaring: declaring.into(),
            field: field.into(),
        }
    }

    /// The real declaring type's fully-qualified name.
    #[must_use]
    pub fn declaring(&self) -> &str {
        &self.declaring
    }

    /// The field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.declaring, self.field)
    }
}
