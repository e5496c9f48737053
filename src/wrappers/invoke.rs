//! Interception types for overridden method calls.
//!
//! When exploration reaches a method call on a wrapped receiver, the wrapper may
//! replace default symbolic execution of the shadow body with its own semantics. The
//! contract mirrors the rest of the engine's branching model:
//!
//! - `None` from [`Wrapper::override_invoke`](crate::wrappers::Wrapper::override_invoke)
//!   means "no special handling" - the caller falls through to default symbolic
//!   execution of the shadow method body.
//! - A non-empty list fully replaces execution; each [`InvokeResult`] represents one
//!   branch and implicitly forks a successor exploration state carrying its extra
//!   constraints.

use std::sync::Arc;

use crate::{
    heap::{Address, SymValue},
    types::TypeId,
};

/// Reference to the method being intercepted: the declaring type at the call site and
/// the method name.
#[derive(Clone, Debug)]
pub struct MethodRef {
    /// Declaring type at the call site (usually the wrapper's shadow type).
    pub declaring: TypeId,
    /// Method name.
    pub name: Arc<str>,
}

impl MethodRef {
    /// Creates a method reference.
    #[must_use]
    pub fn new(declaring: TypeId, name: impl Into<Arc<str>>) -> Self {
        Self {
            declaring,
            name: name.into(),
        }
    }
}

/// A hard path constraint emitted as a side effect of interception.
///
/// Constraints are handed back to the exploration front end, which owns the path
/// condition; this subsystem never judges feasibility. The only constraint the wrapper
/// family emits is generic-type propagation: the shadow's own bytecode cannot express
/// that an element's declared type is bound to a type parameter of its container, so
/// the container families emit it here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathConstraint {
    /// Binds the declared type of the value at `value` to type parameter
    /// `parameter_index` of the container at `owner`.
    GenericTypeBound {
        /// Address of the element value.
        value: Address,
        /// Address of the owning generic container.
        owner: Address,
        /// Index of the container's type parameter.
        parameter_index: usize,
    },
}

/// One branch outcome of an intercepted call.
#[derive(Clone, Debug)]
pub enum InvokeResult {
    /// The call completes normally with `value`.
    Success {
        /// The produced symbolic value ([`SymValue::Void`] for void methods).
        value: SymValue,
        /// Extra hard constraints for the successor state.
        constraints: Vec<PathConstraint>,
    },
    /// The call completes exceptionally with `value` as the thrown object.
    Exception {
        /// The thrown symbolic value.
        value: SymValue,
        /// Extra hard constraints for the successor state.
        constraints: Vec<PathConstraint>,
    },
}

impl InvokeResult {
    /// A normal completion with no extra constraints.
    #[must_use]
    pub fn success(value: SymValue) -> Self {
        Self::Success {
            value,
            constraints: Vec::new(),
        }
    }

    /// A normal completion carrying extra hard constraints.
    #[must_use]
    pub fn success_with(value: SymValue, constraints: Vec<PathConstraint>) -> Self {
        Self::Success { value, constraints }
    }

    /// The produced or thrown value.
    #[must_use]
    pub fn value(&self) -> &SymValue {
        match self {
            InvokeResult::Success { value, .. } | InvokeResult::Exception { value, .. } => value,
        }
    }

    /// The extra constraints carried by this branch.
    #[must_use]
    pub fn constraints(&self) -> &[PathConstraint] {
        match self {
            InvokeResult::Success { constraints, .. }
            | InvokeResult::Exception { constraints, .. } => constraints,
        }
    }
}
