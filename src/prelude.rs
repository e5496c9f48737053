//! # symscope Prelude
//!
//! Convenient single import for the types most call sites need: the exploration front
//! end wiring dispatch, and the emission stage materializing plans.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all symscope operations
pub use crate::Error;

/// The result type used throughout symscope
pub use crate::Result;

// ================================================================================================
// Type System
// ================================================================================================

/// The loaded type universe and hierarchy queries
pub use crate::types::{
    Chunk, FieldRef, HierarchyIndex, TypeDef, TypeId, TypeKind, TypeUniverse, ROOT_TYPE_NAME,
};

// ================================================================================================
// Heap
// ================================================================================================

/// Symbolic addresses, objects, and finalized snapshots
pub use crate::heap::{
    Address, AddressAllocator, HeapSnapshot, SymValue, SymbolicObject, TypeStorage,
};

/// The read-only heap boundary wrappers observe
pub use crate::resolver::Resolver;

// ================================================================================================
// Construction Plans
// ================================================================================================

/// The construction-plan value language
pub use crate::model::{
    ArrayModel, AssembleModel, ClassId, ExecutableCall, ExecutableId, LambdaModel, Model,
    PrimitiveModel,
};

/// Run-scoped display-name issuance
pub use crate::model::ModelNamer;

// ================================================================================================
// Wrappers
// ================================================================================================

/// The override handlers, their interception contract, and registration
pub use crate::wrappers::{
    EmitContext, InvokeResult, IteratorKind, ListKind, MethodRef, OptionalKind, OverrideRegistry,
    PathConstraint, StreamKind, Wrapper,
};
