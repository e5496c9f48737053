//! Exact-type wrapper registration and lookup.

use std::collections::HashMap;

use crate::{
    types::{TypeId, TypeUniverse},
    wrappers::{shadows, IteratorKind, ListKind, OptionalKind, StreamKind, Wrapper},
};

/// The binding from receiver types to their override handlers.
///
/// Lookup is exact-type: a subclass of a wrapped type is not wrapped unless it is
/// registered itself. Substitution decisions happen at load time, when the engine
/// rewrites allocations of wrapped types to their shadows; by the time a receiver
/// reaches dispatch its type is one of the registered ids or none.
///
/// # Examples
///
/// ```rust
/// use symscope::types::TypeUniverse;
/// use symscope::wrappers::{OverrideRegistry, Wrapper};
///
/// let universe = TypeUniverse::new();
/// universe.load_class("java.lang.Thread", None, vec![], &["target"])?;
///
/// let registry = OverrideRegistry::standard(&universe);
/// let thread = universe.by_name("java.lang.Thread")?;
/// assert_eq!(registry.lookup(thread.id), Some(Wrapper::Thread));
/// # Ok::<(), symscope::Error>(())
/// ```
pub struct OverrideRegistry {
    table: HashMap<TypeId, Wrapper>,
}

impl OverrideRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Builds the standard binding over whatever wrapped types the universe has
    /// loaded.
    ///
    /// Each entry binds both the real type and its shadow, since receivers may carry
    /// either after substitution. Names absent from the universe are skipped; a
    /// universe loaded without streams simply gets no stream wrappers.
    #[must_use]
    pub fn standard(universe: &TypeUniverse) -> Self {
        let mut registry = Self::new();
        for (name, wrapper) in STANDARD_BINDINGS {
            if let Ok(def) = universe.by_name(name) {
                registry.register(def.id, *wrapper);
            }
        }
        registry
    }

    /// Binds `ty` to `wrapper`, replacing any previous binding.
    pub fn register(&mut self, ty: TypeId, wrapper: Wrapper) {
        self.table.insert(ty, wrapper);
    }

    /// Returns the wrapper bound to exactly `ty`, if any.
    #[must_use]
    pub fn lookup(&self, ty: TypeId) -> Option<Wrapper> {
        self.table.get(&ty).copied()
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideRegistry")
            .field("binding_count", &self.table.len())
            .finish()
    }
}

/// The full wrapped-type table, real classes and their shadows alike.
static STANDARD_BINDINGS: &[(&str, Wrapper)] = &[
    // Lists.
    ("java.util.List", Wrapper::List(ListKind::ArrayList)),
    ("java.util.AbstractList", Wrapper::List(ListKind::ArrayList)),
    ("java.util.ArrayList", Wrapper::List(ListKind::ArrayList)),
    (
        "java.util.concurrent.CopyOnWriteArrayList",
        Wrapper::List(ListKind::ArrayList),
    ),
    (shadows::ARRAY_LIST, Wrapper::List(ListKind::ArrayList)),
    (
        "java.util.AbstractSequentialList",
        Wrapper::List(ListKind::LinkedList),
    ),
    ("java.util.LinkedList", Wrapper::List(ListKind::LinkedList)),
    (shadows::LINKED_LIST, Wrapper::List(ListKind::LinkedList)),
    // Deques and queues.
    ("java.util.Queue", Wrapper::List(ListKind::ArrayDeque)),
    ("java.util.Deque", Wrapper::List(ListKind::ArrayDeque)),
    ("java.util.ArrayDeque", Wrapper::List(ListKind::ArrayDeque)),
    (
        "java.util.concurrent.ConcurrentLinkedQueue",
        Wrapper::List(ListKind::ArrayDeque),
    ),
    (
        "java.util.concurrent.ConcurrentLinkedDeque",
        Wrapper::List(ListKind::ArrayDeque),
    ),
    (
        "java.util.concurrent.LinkedBlockingQueue",
        Wrapper::List(ListKind::ArrayDeque),
    ),
    (
        "java.util.concurrent.LinkedBlockingDeque",
        Wrapper::List(ListKind::ArrayDeque),
    ),
    (shadows::ARRAY_DEQUE, Wrapper::List(ListKind::ArrayDeque)),
    // Sets.
    ("java.util.Set", Wrapper::Set),
    ("java.util.AbstractSet", Wrapper::Set),
    ("java.util.HashSet", Wrapper::Set),
    ("java.util.LinkedHashSet", Wrapper::Set),
    (shadows::HASH_SET, Wrapper::Set),
    // Maps.
    ("java.util.Map", Wrapper::Map),
    ("java.util.AbstractMap", Wrapper::Map),
    ("java.util.HashMap", Wrapper::Map),
    ("java.util.LinkedHashMap", Wrapper::Map),
    ("java.util.concurrent.ConcurrentHashMap", Wrapper::Map),
    (shadows::HASH_MAP, Wrapper::Map),
    // Optionals.
    ("java.util.Optional", Wrapper::Optional(OptionalKind::Object)),
    (shadows::OPTIONAL, Wrapper::Optional(OptionalKind::Object)),
    ("java.util.OptionalInt", Wrapper::Optional(OptionalKind::Int)),
    (shadows::OPTIONAL_INT, Wrapper::Optional(OptionalKind::Int)),
    ("java.util.OptionalLong", Wrapper::Optional(OptionalKind::Long)),
    (shadows::OPTIONAL_LONG, Wrapper::Optional(OptionalKind::Long)),
    (
        "java.util.OptionalDouble",
        Wrapper::Optional(OptionalKind::Double),
    ),
    (shadows::OPTIONAL_DOUBLE, Wrapper::Optional(OptionalKind::Double)),
    // Streams.
    (
        "java.util.stream.BaseStream",
        Wrapper::Stream(StreamKind::Object),
    ),
    ("java.util.stream.Stream", Wrapper::Stream(StreamKind::Object)),
    (shadows::STREAM, Wrapper::Stream(StreamKind::Object)),
    ("java.util.stream.IntStream", Wrapper::Stream(StreamKind::Int)),
    (shadows::INT_STREAM, Wrapper::Stream(StreamKind::Int)),
    ("java.util.stream.LongStream", Wrapper::Stream(StreamKind::Long)),
    (shadows::LONG_STREAM, Wrapper::Stream(StreamKind::Long)),
    (
        "java.util.stream.DoubleStream",
        Wrapper::Stream(StreamKind::Double),
    ),
    (shadows::DOUBLE_STREAM, Wrapper::Stream(StreamKind::Double)),
    // Iterators.
    ("java.util.Iterator", Wrapper::Iter(IteratorKind::Iterator)),
    (shadows::ITERATOR, Wrapper::Iter(IteratorKind::Iterator)),
    (
        "java.util.ListIterator",
        Wrapper::Iter(IteratorKind::ListIterator),
    ),
    (shadows::LIST_ITERATOR, Wrapper::Iter(IteratorKind::ListIterator)),
    (
        shadows::DESCENDING_ITERATOR,
        Wrapper::Iter(IteratorKind::Descending),
    ),
    // Threads and security.
    ("java.lang.Thread", Wrapper::Thread),
    (shadows::THREAD, Wrapper::Thread),
    ("java.lang.ThreadGroup", Wrapper::ThreadGroup),
    (shadows::THREAD_GROUP, Wrapper::ThreadGroup),
    ("java.lang.SecurityManager", Wrapper::SecurityManager),
    (shadows::SECURITY_MANAGER, Wrapper::SecurityManager),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixture_universe;

    #[test]
    fn test_standard_bindings_cover_loaded_types() {
        let fixture = fixture_universe();
        let registry = OverrideRegistry::standard(&fixture.universe);

        assert_eq!(
            registry.lookup(fixture.array_list),
            Some(Wrapper::List(ListKind::ArrayList))
        );
        assert_eq!(
            registry.lookup(fixture.shadow_array_list),
            Some(Wrapper::List(ListKind::ArrayList))
        );
        assert_eq!(
            registry.lookup(fixture.linked_list),
            Some(Wrapper::List(ListKind::LinkedList))
        );
        assert_eq!(registry.lookup(fixture.thread), Some(Wrapper::Thread));
    }

    #[test]
    fn test_lookup_is_exact_not_subtype() {
        let fixture = fixture_universe();
        let custom = fixture
            .universe
            .load_class(
                "com.example.CustomList",
                Some(fixture.array_list),
                vec![],
                &[],
            )
            .unwrap();

        let registry = OverrideRegistry::standard(&fixture.universe);
        assert_eq!(registry.lookup(custom), None);
    }

    #[test]
    fn test_concurrent_collection_types_are_bound() {
        let fixture = fixture_universe();
        let u = &fixture.universe;

        let cow_list = u
            .load_class("java.util.concurrent.CopyOnWriteArrayList", None, vec![], &[])
            .unwrap();
        let blocking_queue = u
            .load_class("java.util.concurrent.LinkedBlockingQueue", None, vec![], &[])
            .unwrap();
        let blocking_deque = u
            .load_class("java.util.concurrent.LinkedBlockingDeque", None, vec![], &[])
            .unwrap();
        let concurrent_map = u
            .load_class("java.util.concurrent.ConcurrentHashMap", None, vec![], &[])
            .unwrap();
        let base_stream = u
            .load_interface("java.util.stream.BaseStream", vec![])
            .unwrap();

        let registry = OverrideRegistry::standard(u);
        assert_eq!(
            registry.lookup(cow_list),
            Some(Wrapper::List(ListKind::ArrayList))
        );
        assert_eq!(
            registry.lookup(blocking_queue),
            Some(Wrapper::List(ListKind::ArrayDeque))
        );
        assert_eq!(
            registry.lookup(blocking_deque),
            Some(Wrapper::List(ListKind::ArrayDeque))
        );
        assert_eq!(registry.lookup(concurrent_map), Some(Wrapper::Map));
        assert_eq!(
            registry.lookup(base_stream),
            Some(Wrapper::Stream(StreamKind::Object))
        );
    }

    #[test]
    fn test_unloaded_names_are_skipped() {
        let universe = crate::types::TypeUniverse::new();
        let registry = OverrideRegistry::standard(&universe);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_replaces() {
        let fixture = fixture_universe();
        let mut registry = OverrideRegistry::new();
        registry.register(fixture.array_list, Wrapper::Set);
        registry.register(fixture.array_list, Wrapper::Map);
        assert_eq!(registry.lookup(fixture.array_list), Some(Wrapper::Map));
        assert_eq!(registry.len(), 1);
    }
}
