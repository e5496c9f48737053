//! Shared test fixtures.

use std::sync::Arc;

use crate::{
    types::{HierarchyIndex, TypeId, TypeUniverse},
    wrappers::shadows,
};

/// A universe loaded with the standard-library slice the wrapper suite exercises,
/// shadows included, plus a hierarchy index over it.
pub(crate) struct Fixture {
    pub universe: Arc<TypeUniverse>,
    pub hierarchy: HierarchyIndex,
    pub iterable: TypeId,
    pub collection: TypeId,
    pub list: TypeId,
    pub array_list: TypeId,
    pub linked_list: TypeId,
    pub thread: TypeId,
    pub shadow_array_list: TypeId,
}

impl Fixture {
    pub fn root(&self) -> TypeId {
        self.universe.root()
    }
}

/// Loads the fixture universe. Panics on loader errors; a fixture that cannot load is
/// a broken test environment, not a test outcome.
pub(crate) fn fixture_universe() -> Fixture {
    let universe = Arc::new(TypeUniverse::new());
    let u = &universe;

    let load = |r: crate::Result<TypeId>| r.expect("fixture type must load");

    // Interfaces.
    let iterable = load(u.load_interface("java.lang.Iterable", vec![]));
    let collection = load(u.load_interface("java.util.Collection", vec![iterable]));
    let list = load(u.load_interface("java.util.List", vec![collection]));
    let set = load(u.load_interface("java.util.Set", vec![collection]));
    let map = load(u.load_interface("java.util.Map", vec![]));
    let queue = load(u.load_interface("java.util.Queue", vec![collection]));
    let deque = load(u.load_interface("java.util.Deque", vec![queue]));
    let iterator = load(u.load_interface("java.util.Iterator", vec![]));
    let list_iterator = load(u.load_interface("java.util.ListIterator", vec![iterator]));
    let stream = load(u.load_interface("java.util.stream.Stream", vec![]));
    let int_stream = load(u.load_interface("java.util.stream.IntStream", vec![]));
    let long_stream = load(u.load_interface("java.util.stream.LongStream", vec![]));
    let double_stream = load(u.load_interface("java.util.stream.DoubleStream", vec![]));

    // Real classes.
    let array_list = load(u.load_class("java.util.ArrayList", None, vec![list], &[]));
    let linked_list = load(u.load_class("java.util.LinkedList", None, vec![list, deque], &[]));
    let array_deque = load(u.load_class("java.util.ArrayDeque", None, vec![deque], &[]));
    let hash_set = load(u.load_class("java.util.HashSet", None, vec![set], &[]));
    let hash_map = load(u.load_class("java.util.HashMap", None, vec![map], &[]));
    let optional = load(u.load_class("java.util.Optional", None, vec![], &[]));
    let optional_int = load(u.load_class("java.util.OptionalInt", None, vec![], &[]));
    let optional_long = load(u.load_class("java.util.OptionalLong", None, vec![], &[]));
    let optional_double = load(u.load_class("java.util.OptionalDouble", None, vec![], &[]));
    let thread = load(u.load_class("java.lang.Thread", None, vec![], &["target", "name"]));
    let thread_group = load(u.load_class("java.lang.ThreadGroup", None, vec![], &["name"]));
    let security_manager = load(u.load_class("java.lang.SecurityManager", None, vec![], &[]));

    // Shadows.
    let shadow_array_list = load(u.load_shadow(
        shadows::ARRAY_LIST,
        array_list,
        None,
        &["elementData"],
    ));
    load(u.load_shadow(shadows::LINKED_LIST, linked_list, None, &["elementData"]));
    load(u.load_shadow(shadows::ARRAY_DEQUE, array_deque, None, &["elementData"]));
    load(u.load_shadow(shadows::HASH_SET, hash_set, None, &["elementData"]));
    load(u.load_shadow(shadows::HASH_MAP, hash_map, None, &["keys", "values"]));
    load(u.load_shadow(shadows::OPTIONAL, optional, None, &["isPresent", "value"]));
    load(u.load_shadow(shadows::OPTIONAL_INT, optional_int, None, &["isPresent", "value"]));
    load(u.load_shadow(
        shadows::OPTIONAL_LONG,
        optional_long,
        None,
        &["isPresent", "value"],
    ));
    load(u.load_shadow(
        shadows::OPTIONAL_DOUBLE,
        optional_double,
        None,
        &["isPresent", "value"],
    ));
    load(u.load_shadow(shadows::STREAM, stream, None, &["elements"]));
    load(u.load_shadow(shadows::INT_STREAM, int_stream, None, &["elements"]));
    load(u.load_shadow(shadows::LONG_STREAM, long_stream, None, &["elements"]));
    load(u.load_shadow(shadows::DOUBLE_STREAM, double_stream, None, &["elements"]));
    load(u.load_shadow(shadows::ITERATOR, iterator, None, &["origin"]));
    load(u.load_shadow(shadows::LIST_ITERATOR, list_iterator, None, &["origin"]));
    load(u.load_shadow(shadows::DESCENDING_ITERATOR, iterator, None, &["origin"]));
    load(u.load_shadow(shadows::THREAD, thread, None, &["target", "name"]));
    load(u.load_shadow(shadows::THREAD_GROUP, thread_group, None, &["name"]));
    load(u.load_shadow(shadows::SECURITY_MANAGER, security_manager, None, &[]));

    let hierarchy = HierarchyIndex::new(universe.clone());
    Fixture {
        universe,
        hierarchy,
        iterable,
        collection,
        list,
        array_list,
        linked_list,
        thread,
        shadow_array_list,
    }
}
