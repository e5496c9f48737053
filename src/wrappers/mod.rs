//! Per-type overrides for unanalyzable standard-library types.
//!
//! Standard-library collections, optionals, streams, threads and security managers
//! cannot be executed symbolically in their real form (native methods, unpredictable
//! internal representations). The engine substitutes hand-written shadow
//! reimplementations for them and routes two operations through the [`Wrapper`] bound
//! to each real type:
//!
//! - [`Wrapper::override_invoke`] - intercepts a method call on a wrapped receiver
//!   with alternative symbolic semantics, or declines (`None`) so the caller falls
//!   through to default symbolic execution of the shadow body
//! - [`Wrapper::value`] - converts a finalized symbolic object into an
//!   [`AssembleModel`]: a construction plan that reproduces an observably equivalent
//!   real object in generated test code
//!
//! # Design
//!
//! The wrapper family is a closed sum type dispatched by exhaustive matching. Adding
//! an override for another standard-library type is a compile-time-checked addition to
//! the variant set, not a new dynamic subclass.
//!
//! # Determinism
//!
//! Both operations are deterministic functions of the receiver, the method, the
//! arguments and the current heap state: no randomness, no I/O, no mutable cross-state
//! references.

mod collections;
mod invoke;
mod iterator;
mod optional;
mod registry;
mod security;
mod stream;
mod thread;

pub use invoke::{InvokeResult, MethodRef, PathConstraint};
pub use registry::OverrideRegistry;

use std::sync::Arc;

use strum::Display;

use crate::{
    heap::{SymValue, SymbolicObject},
    model::{AssembleModel, ExecutableId, Model, ModelNamer},
    resolver::Resolver,
    types::{Chunk, FieldRef, HierarchyIndex, TypeDef},
    Error, Result,
};

/// Fully-qualified names of the shadow reimplementations the engine loads.
pub mod shadows {
    /// Shadow for `java.util.ArrayList` and the list interfaces it substitutes.
    pub const ARRAY_LIST: &str = "symscope.overrides.ShadowArrayList";
    /// Shadow for `java.util.LinkedList`.
    pub const LINKED_LIST: &str = "symscope.overrides.ShadowLinkedList";
    /// Shadow for `java.util.ArrayDeque` and the queue types it substitutes.
    pub const ARRAY_DEQUE: &str = "symscope.overrides.ShadowArrayDeque";
    /// Shadow for the `java.util.Set` family.
    pub const HASH_SET: &str = "symscope.overrides.ShadowHashSet";
    /// Shadow for the `java.util.Map` family.
    pub const HASH_MAP: &str = "symscope.overrides.ShadowHashMap";
    /// Shadow for `java.util.Optional`.
    pub const OPTIONAL: &str = "symscope.overrides.ShadowOptional";
    /// Shadow for `java.util.OptionalInt`.
    pub const OPTIONAL_INT: &str = "symscope.overrides.ShadowOptionalInt";
    /// Shadow for `java.util.OptionalLong`.
    pub const OPTIONAL_LONG: &str = "symscope.overrides.ShadowOptionalLong";
    /// Shadow for `java.util.OptionalDouble`.
    pub const OPTIONAL_DOUBLE: &str = "symscope.overrides.ShadowOptionalDouble";
    /// Shadow for `java.util.stream.Stream`.
    pub const STREAM: &str = "symscope.overrides.ShadowStream";
    /// Shadow for `java.util.stream.IntStream`.
    pub const INT_STREAM: &str = "symscope.overrides.ShadowIntStream";
    /// Shadow for `java.util.stream.LongStream`.
    pub const LONG_STREAM: &str = "symscope.overrides.ShadowLongStream";
    /// Shadow for `java.util.stream.DoubleStream`.
    pub const DOUBLE_STREAM: &str = "symscope.overrides.ShadowDoubleStream";
    /// Shadow for `java.util.Iterator`.
    pub const ITERATOR: &str = "symscope.overrides.ShadowIterator";
    /// Shadow for `java.util.ListIterator`.
    pub const LIST_ITERATOR: &str = "symscope.overrides.ShadowListIterator";
    /// Shadow for a deque's descending iterator.
    pub const DESCENDING_ITERATOR: &str = "symscope.overrides.ShadowDescendingIterator";
    /// Shadow for `java.lang.Thread`.
    pub const THREAD: &str = "symscope.overrides.ShadowThread";
    /// Shadow for `java.lang.ThreadGroup`.
    pub const THREAD_GROUP: &str = "symscope.overrides.ShadowThreadGroup";
    /// Shadow for `java.lang.SecurityManager`.
    pub const SECURITY_MANAGER: &str = "symscope.overrides.ShadowSecurityManager";
}

/// Field names declared on the shadow reimplementations.
pub mod fields {
    /// Backing element array of list/set shadows.
    pub const ELEMENT_DATA: &str = "elementData";
    /// Backing key array of the map shadow.
    pub const KEYS: &str = "keys";
    /// Backing value array of the map shadow.
    pub const VALUES: &str = "values";
    /// Presence flag of the optional shadows.
    pub const IS_PRESENT: &str = "isPresent";
    /// Payload of the optional shadows.
    pub const VALUE: &str = "value";
    /// Backing element array of the stream shadows.
    pub const ELEMENTS: &str = "elements";
    /// Enclosing-collection back-reference of the iterator shadows.
    pub const ORIGIN: &str = "origin";
    /// Target runnable of the thread shadow.
    pub const TARGET: &str = "target";
    /// Group name of the thread-group shadow.
    pub const NAME: &str = "name";
}

/// Pseudo-method names the shadows call to hand generic-type information back to the
/// engine. The shadow bodies declare them; only interception gives them meaning.
pub mod pseudo {
    /// Binds a single-parameter container's element type (lists, sets, streams,
    /// iterators).
    pub const SET_EQUAL_GENERIC_TYPE: &str = "setEqualGenericType";
    /// Binds both type parameters of an associative container (maps).
    pub const SET_EQUAL_GENERIC_TYPES: &str = "setEqualGenericTypes";
    /// Binds an optional's payload type and returns the payload.
    pub const EQ_GENERIC_TYPE: &str = "eqGenericType";
}

/// Which concrete list class a list wrapper reconstructs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ListKind {
    /// `java.util.ArrayList`, also substituted for `List`/`AbstractList`.
    ArrayList,
    /// `java.util.LinkedList`, also substituted for `AbstractSequentialList`.
    LinkedList,
    /// `java.util.ArrayDeque`, also substituted for the concurrent queue types.
    ArrayDeque,
}

impl ListKind {
    pub(crate) fn shadow_name(self) -> &'static str {
        match self {
            ListKind::ArrayList => shadows::ARRAY_LIST,
            ListKind::LinkedList => shadows::LINKED_LIST,
            ListKind::ArrayDeque => shadows::ARRAY_DEQUE,
        }
    }

    pub(crate) fn target_class(self) -> &'static str {
        match self {
            ListKind::ArrayList => "java.util.ArrayList",
            ListKind::LinkedList => "java.util.LinkedList",
            ListKind::ArrayDeque => "java.util.ArrayDeque",
        }
    }
}

/// Which optional flavor an optional wrapper reconstructs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum OptionalKind {
    /// `java.util.Optional`.
    Object,
    /// `java.util.OptionalInt`.
    Int,
    /// `java.util.OptionalLong`.
    Long,
    /// `java.util.OptionalDouble`.
    Double,
}

impl OptionalKind {
    pub(crate) fn shadow_name(self) -> &'static str {
        match self {
            OptionalKind::Object => shadows::OPTIONAL,
            OptionalKind::Int => shadows::OPTIONAL_INT,
            OptionalKind::Long => shadows::OPTIONAL_LONG,
            OptionalKind::Double => shadows::OPTIONAL_DOUBLE,
        }
    }

    pub(crate) fn target_class(self) -> &'static str {
        match self {
            OptionalKind::Object => "java.util.Optional",
            OptionalKind::Int => "java.util.OptionalInt",
            OptionalKind::Long => "java.util.OptionalLong",
            OptionalKind::Double => "java.util.OptionalDouble",
        }
    }

    pub(crate) fn payload_class(self) -> &'static str {
        match self {
            OptionalKind::Object => "java.lang.Object",
            OptionalKind::Int => "int",
            OptionalKind::Long => "long",
            OptionalKind::Double => "double",
        }
    }

    pub(crate) fn base_name(self) -> &'static str {
        match self {
            OptionalKind::Object => "optional",
            OptionalKind::Int => "optionalInt",
            OptionalKind::Long => "optionalLong",
            OptionalKind::Double => "optionalDouble",
        }
    }
}

/// Which stream flavor a stream wrapper reconstructs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum StreamKind {
    /// `java.util.stream.Stream`.
    Object,
    /// `java.util.stream.IntStream`.
    Int,
    /// `java.util.stream.LongStream`.
    Long,
    /// `java.util.stream.DoubleStream`.
    Double,
}

impl StreamKind {
    pub(crate) fn shadow_name(self) -> &'static str {
        match self {
            StreamKind::Object => shadows::STREAM,
            StreamKind::Int => shadows::INT_STREAM,
            StreamKind::Long => shadows::LONG_STREAM,
            StreamKind::Double => shadows::DOUBLE_STREAM,
        }
    }

    pub(crate) fn target_class(self) -> &'static str {
        match self {
            StreamKind::Object => "java.util.stream.Stream",
            StreamKind::Int => "java.util.stream.IntStream",
            StreamKind::Long => "java.util.stream.LongStream",
            StreamKind::Double => "java.util.stream.DoubleStream",
        }
    }

    pub(crate) fn array_class(self) -> &'static str {
        match self {
            StreamKind::Object => "java.lang.Object[]",
            StreamKind::Int => "int[]",
            StreamKind::Long => "long[]",
            StreamKind::Double => "double[]",
        }
    }

    pub(crate) fn base_name(self) -> &'static str {
        match self {
            StreamKind::Object => "stream",
            StreamKind::Int => "intStream",
            StreamKind::Long => "longStream",
            StreamKind::Double => "doubleStream",
        }
    }
}

/// Which accessor an iterator wrapper delegates to on its enclosing collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum IteratorKind {
    /// `Iterable.iterator()`.
    Iterator,
    /// `List.listIterator()`.
    ListIterator,
    /// `Deque.descendingIterator()`.
    Descending,
}

impl IteratorKind {
    pub(crate) fn shadow_name(self) -> &'static str {
        match self {
            IteratorKind::Iterator => shadows::ITERATOR,
            IteratorKind::ListIterator => shadows::LIST_ITERATOR,
            IteratorKind::Descending => shadows::DESCENDING_ITERATOR,
        }
    }

    pub(crate) fn accessor(self) -> &'static str {
        match self {
            IteratorKind::Iterator => "iterator",
            IteratorKind::ListIterator => "listIterator",
            IteratorKind::Descending => "descendingIterator",
        }
    }

    pub(crate) fn accessor_declaring(self) -> &'static str {
        match self {
            IteratorKind::Iterator => "java.lang.Iterable",
            IteratorKind::ListIterator => "java.util.List",
            IteratorKind::Descending => "java.util.Deque",
        }
    }

    pub(crate) fn target_class(self) -> &'static str {
        match self {
            IteratorKind::Iterator | IteratorKind::Descending => "java.util.Iterator",
            IteratorKind::ListIterator => "java.util.ListIterator",
        }
    }

    pub(crate) fn base_name(self) -> &'static str {
        match self {
            IteratorKind::Iterator => "iterator",
            IteratorKind::ListIterator => "listIterator",
            IteratorKind::Descending => "descendingIterator",
        }
    }
}

/// Context handed to [`Wrapper::value`] at test-emission time.
///
/// Bundles the collaborators materialization needs: read access to the finalized
/// state's heap, the hierarchy index for chunk resolution, and the run-scoped display
/// namer. Constructed once per emission pass and shared by all `value()` calls in it.
pub struct EmitContext<'a> {
    /// Read access to the finalized state's field values and concrete addresses.
    pub resolver: &'a dyn Resolver,
    /// Hierarchy queries and chunk resolution.
    pub hierarchy: &'a HierarchyIndex,
    /// Run-scoped display-name issuance.
    pub namer: &'a ModelNamer,
}

impl<'a> EmitContext<'a> {
    /// Creates an emission context.
    #[must_use]
    pub fn new(
        resolver: &'a dyn Resolver,
        hierarchy: &'a HierarchyIndex,
        namer: &'a ModelNamer,
    ) -> Self {
        Self {
            resolver,
            hierarchy,
            namer,
        }
    }

    pub(crate) fn shadow(&self, name: &str) -> Result<Arc<TypeDef>> {
        self.hierarchy.universe().by_name(name)
    }

    pub(crate) fn chunk(&self, shadow: &TypeDef, field: &str) -> Result<Chunk> {
        self.hierarchy
            .chunk_for(shadow.id, &FieldRef::new(shadow.id, field))
    }

    /// Reads one shadow field of `object`, if recorded in the snapshot.
    pub(crate) fn field_model(
        &self,
        object: &SymbolicObject,
        shadow: &TypeDef,
        field: &str,
    ) -> Result<Option<Model>> {
        let chunk = self.chunk(shadow, field)?;
        let mut values = self.resolver.field_values(object.addr, shadow.id)?;
        Ok(values.remove(&chunk))
    }
}

/// The override handler bound to one real standard-library type.
///
/// Exactly one wrapper handles a given receiver type; registration is exact-type (no
/// subtype matching) through the [`OverrideRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrapper {
    /// Lists, deques and the queue types substituted by the list shadows.
    List(ListKind),
    /// The set family.
    Set,
    /// The map family.
    Map,
    /// The optional family.
    Optional(OptionalKind),
    /// The stream family.
    Stream(StreamKind),
    /// The iterator family.
    Iter(IteratorKind),
    /// `java.lang.Thread`.
    Thread,
    /// `java.lang.ThreadGroup`.
    ThreadGroup,
    /// `java.lang.SecurityManager`.
    SecurityManager,
}

impl Wrapper {
    /// Intercepts a method call on a wrapped receiver.
    ///
    /// Returns `None` to fall through to default symbolic execution of the shadow
    /// method body; returns a non-empty list to fully replace execution, one element
    /// per branch. The only interceptions the family defines are the generic-type
    /// propagation pseudo-methods; every ordinary method falls through.
    #[must_use]
    pub fn override_invoke(
        &self,
        object: &SymbolicObject,
        method: &MethodRef,
        args: &[SymValue],
    ) -> Option<Vec<InvokeResult>> {
        match self {
            Wrapper::List(_) | Wrapper::Set | Wrapper::Stream(_) | Wrapper::Iter(_) => {
                collections::storage_invoke(object, method, args)
            }
            Wrapper::Map => collections::associative_invoke(object, method, args),
            Wrapper::Optional(_) => optional::invoke(object, method, args),
            Wrapper::Thread | Wrapper::ThreadGroup | Wrapper::SecurityManager => None,
        }
    }

    /// Materializes a finalized symbolic object into a construction plan.
    ///
    /// The plan's execution against the real standard-library type produces an object
    /// observably equivalent to `object` under the real type's public contract. Each
    /// call draws a fresh display name; callers needing stable identity per address
    /// must memoize the result themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelType`] when a shadow field holds a value of the wrong
    /// model shape, and propagates consistency errors from chunk resolution.
    pub fn value(&self, ctx: &EmitContext<'_>, object: &SymbolicObject) -> Result<AssembleModel> {
        match self {
            Wrapper::List(kind) => collections::list_value(ctx, object, *kind),
            Wrapper::Set => collections::set_value(ctx, object),
            Wrapper::Map => collections::map_value(ctx, object),
            Wrapper::Optional(kind) => optional::value(ctx, object, *kind),
            Wrapper::Stream(kind) => stream::value(ctx, object, *kind),
            Wrapper::Iter(kind) => iterator::value(ctx, object, *kind),
            Wrapper::Thread => thread::thread_value(ctx, object),
            Wrapper::ThreadGroup => thread::thread_group_value(ctx, object),
            Wrapper::SecurityManager => security::value(ctx, object),
        }
    }

    /// The mutating method used in this wrapper's modification calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for wrappers that support only full
    /// reconstruction (optionals, streams, iterators, threads, security managers):
    /// requesting a modification path for them is a programming-contract violation.
    pub fn modification_executable(&self) -> Result<ExecutableId> {
        match self {
            Wrapper::List(_) => Ok(collections::collection_add()),
            Wrapper::Set => Ok(collections::set_add()),
            Wrapper::Map => Ok(collections::map_put()),
            other => Err(Error::UnsupportedOperation(format!(
                "no modification method is defined for {other:?}"
            ))),
        }
    }
}
