//! Shared setup for the integration suite: a universe loaded with the wrapped
//! standard-library slice, its shadows, and fresh per-test emission state.

use std::sync::Arc;

use symscope::heap::{AddressAllocator, HeapSnapshot};
use symscope::model::ModelNamer;
use symscope::types::{HierarchyIndex, TypeId, TypeUniverse};
use symscope::wrappers::shadows;

pub struct World {
    pub universe: Arc<TypeUniverse>,
    pub hierarchy: HierarchyIndex,
    pub snapshot: HeapSnapshot,
    pub allocator: AddressAllocator,
    pub namer: ModelNamer,
}

impl World {
    pub fn type_id(&self, name: &str) -> TypeId {
        self.universe.by_name(name).expect("type must be loaded").id
    }
}

pub fn world() -> World {
    let universe = Arc::new(TypeUniverse::new());
    let u = &universe;

    let iterable = u.load_interface("java.lang.Iterable", vec![]).unwrap();
    let collection = u
        .load_interface("java.util.Collection", vec![iterable])
        .unwrap();
    let list = u.load_interface("java.util.List", vec![collection]).unwrap();
    let set = u.load_interface("java.util.Set", vec![collection]).unwrap();
    let map = u.load_interface("java.util.Map", vec![]).unwrap();
    let queue = u.load_interface("java.util.Queue", vec![collection]).unwrap();
    let deque = u.load_interface("java.util.Deque", vec![queue]).unwrap();
    let iterator = u.load_interface("java.util.Iterator", vec![]).unwrap();
    let list_iterator = u
        .load_interface("java.util.ListIterator", vec![iterator])
        .unwrap();
    let stream = u.load_interface("java.util.stream.Stream", vec![]).unwrap();
    let int_stream = u
        .load_interface("java.util.stream.IntStream", vec![])
        .unwrap();

    let array_list = u
        .load_class("java.util.ArrayList", None, vec![list], &[])
        .unwrap();
    let linked_list = u
        .load_class("java.util.LinkedList", None, vec![list, deque], &[])
        .unwrap();
    let array_deque = u
        .load_class("java.util.ArrayDeque", None, vec![deque], &[])
        .unwrap();
    let hash_set = u.load_class("java.util.HashSet", None, vec![set], &[]).unwrap();
    let hash_map = u.load_class("java.util.HashMap", None, vec![map], &[]).unwrap();
    let optional = u.load_class("java.util.Optional", None, vec![], &[]).unwrap();
    let optional_int = u
        .load_class("java.util.OptionalInt", None, vec![], &[])
        .unwrap();
    let thread = u
        .load_class("java.lang.Thread", None, vec![], &["target", "name"])
        .unwrap();
    let thread_group = u
        .load_class("java.lang.ThreadGroup", None, vec![], &["name"])
        .unwrap();
    let security_manager = u
        .load_class("java.lang.SecurityManager", None, vec![], &[])
        .unwrap();

    u.load_shadow(shadows::ARRAY_LIST, array_list, None, &["elementData"])
        .unwrap();
    u.load_shadow(shadows::LINKED_LIST, linked_list, None, &["elementData"])
        .unwrap();
    u.load_shadow(shadows::ARRAY_DEQUE, array_deque, None, &["elementData"])
        .unwrap();
    u.load_shadow(shadows::HASH_SET, hash_set, None, &["elementData"])
        .unwrap();
    u.load_shadow(shadows::HASH_MAP, hash_map, None, &["keys", "values"])
        .unwrap();
    u.load_shadow(shadows::OPTIONAL, optional, None, &["isPresent", "value"])
        .unwrap();
    u.load_shadow(
        shadows::OPTIONAL_INT,
        optional_int,
        None,
        &["isPresent", "value"],
    )
    .unwrap();
    u.load_shadow(shadows::STREAM, stream, None, &["elements"]).unwrap();
    u.load_shadow(shadows::INT_STREAM, int_stream, None, &["elements"])
        .unwrap();
    u.load_shadow(shadows::ITERATOR, iterator, None, &["origin"])
        .unwrap();
    u.load_shadow(shadows::LIST_ITERATOR, list_iterator, None, &["origin"])
        .unwrap();
    u.load_shadow(shadows::DESCENDING_ITERATOR, iterator, None, &["origin"])
        .unwrap();
    u.load_shadow(shadows::THREAD, thread, None, &["target", "name"])
        .unwrap();
    u.load_shadow(shadows::THREAD_GROUP, thread_group, None, &["name"])
        .unwrap();
    u.load_shadow(shadows::SECURITY_MANAGER, security_manager, None, &[])
        .unwrap();

    let hierarchy = HierarchyIndex::new(universe.clone());
    World {
        universe,
        hierarchy,
        snapshot: HeapSnapshot::new(),
        allocator: AddressAllocator::new(),
        namer: ModelNamer::new(),
    }
}
