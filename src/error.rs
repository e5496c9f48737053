use thiserror::Error;

use crate::types::TypeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all failure modes of the override-wrapper and model-assembly core:
/// type-universe lookups, hierarchy queries, chunk resolution, and construction-plan
/// assembly. Each variant provides specific context about the failure mode to enable
/// appropriate error handling.
///
/// # Error Categories
///
/// ## Consistency Errors
/// - [`Error::UnknownType`] - Hierarchy or universe query for a type that was never loaded
/// - [`Error::UnknownTypeName`] - Name-based lookup for a type that was never loaded
/// - [`Error::FieldResolution`] - Field declaring type is not an ancestor of the object's real type
/// - [`Error::ModelType`] - A model had the wrong shape, or an instantiation call's return
///   type is not assignable to the declared target
///
/// These indicate a broken mapping between shadow and real types. They are fatal to the
/// exploration state that triggered them and must never be silently downgraded; a corrupted
/// construction plan would otherwise leak into generated tests.
///
/// ## Contract Violations
/// - [`Error::UnsupportedOperation`] - A construction path that is not defined for the
///   wrapped type was requested (e.g., a modification call sequence for a stream)
#[derive(Error, Debug)]
pub enum Error {
    /// A hierarchy or universe query was made for a type id that was never loaded.
    ///
    /// The associated [`TypeId`] identifies which type was not found.
    #[error("Type is not present in the loaded universe - {0}")]
    UnknownType(TypeId),

    /// A name-based lookup was made for a type name that was never loaded.
    #[error("Type name is not present in the loaded universe - {0}")]
    UnknownTypeName(String),

    /// A field's declaring type could not be placed in the ancestor chain of the
    /// object's real type.
    ///
    /// This occurs during chunk resolution when the declaring type of a field (after
    /// shadow-to-real substitution) is not a genuine ancestor of the real type of the
    /// object being addressed. It indicates an inconsistent shadow/real type mapping.
    #[error("Field '{field}' declared on '{declaring}' is not reachable from '{object}'")]
    FieldResolution {
        /// The field name whose chunk could not be resolved
        field: String,
        /// The declaring type, after resolution to its real counterpart
        declaring: String,
        /// The real type of the object being addressed
        object: String,
    },

    /// A model had an unexpected shape, or a construction plan failed validation.
    ///
    /// Raised when a heap chunk holds a value of the wrong model kind (e.g., an iterator's
    /// enclosing-collection chunk holding a primitive), or when an instantiation call's
    /// declared return type is not assignable to the plan's target class.
    #[error("{0}")]
    ModelType(String),

    /// A construction path that is not defined for the wrapped type was requested.
    ///
    /// This is a programming-contract violation, not a recoverable runtime condition.
    /// For example, streams support only full reconstruction and define no modification
    /// call sequence.
    #[error("Operation is not supported for this wrapper - {0}")]
    UnsupportedOperation(String),
}
