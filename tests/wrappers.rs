//! End-to-end materialization behavior of the wrapper family.

mod common;

use symscope::heap::{SymValue, SymbolicObject};
use symscope::model::{
    ArrayModel, ClassId, ExecutableId, LambdaModel, Model, PrimitiveModel,
};
use symscope::types::Chunk;
use symscope::wrappers::{
    shadows, EmitContext, ListKind, MethodRef, OptionalKind, OverrideRegistry, StreamKind,
    Wrapper, IteratorKind,
};
use symscope::Error;

fn ints(values: &[i32]) -> Model {
    Model::Array(ArrayModel::of_elements(
        ClassId::new("java.lang.Object[]"),
        values
            .iter()
            .map(|v| Model::Primitive(PrimitiveModel::Int(*v)))
            .collect(),
    ))
}

#[test]
fn list_materializes_as_constructor_plus_add_chain() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let object = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::ARRAY_LIST),
    );
    world.snapshot.put_field(
        object.addr,
        Chunk::new("java.util.ArrayList", "elementData"),
        ints(&[7, 8, 9]),
    );

    let plan = Wrapper::List(ListKind::ArrayList).value(&ctx, &object).unwrap();

    assert_eq!(plan.class_id().name(), "java.util.ArrayList");
    assert_eq!(plan.name(), "arrayList");
    assert!(matches!(
        plan.instantiation().executable,
        ExecutableId::Constructor { ref params, .. } if params.is_empty()
    ));
    assert_eq!(plan.modifications().len(), 3);
    for (i, call) in plan.modifications().iter().enumerate() {
        assert_eq!(call.executable.name(), "add");
        assert_eq!(
            call.args,
            vec![Model::Primitive(PrimitiveModel::Int(7 + i as i32))]
        );
    }
}

#[test]
fn untouched_list_materializes_empty() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let object = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::LINKED_LIST),
    );
    let plan = Wrapper::List(ListKind::LinkedList).value(&ctx, &object).unwrap();

    assert_eq!(plan.class_id().name(), "java.util.LinkedList");
    assert!(plan.modifications().is_empty());
}

#[test]
fn map_pairs_keys_and_values_with_null_padding() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let object = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::HASH_MAP),
    );
    world.snapshot.put_field(
        object.addr,
        Chunk::new("java.util.HashMap", "keys"),
        ints(&[1, 2]),
    );
    world.snapshot.put_field(
        object.addr,
        Chunk::new("java.util.HashMap", "values"),
        ints(&[10]),
    );

    let plan = Wrapper::Map.value(&ctx, &object).unwrap();
    assert_eq!(plan.modifications().len(), 2);
    assert_eq!(plan.modifications()[0].executable.name(), "put");
    assert_eq!(
        plan.modifications()[0].args,
        vec![
            Model::Primitive(PrimitiveModel::Int(1)),
            Model::Primitive(PrimitiveModel::Int(10)),
        ]
    );
    // The second key has no recorded value and maps to null.
    assert!(matches!(plan.modifications()[1].args[1], Model::Null(_)));
}

#[test]
fn optional_round_trips_presence() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let present = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::OPTIONAL),
    );
    world.snapshot.put_field(
        present.addr,
        Chunk::new("java.util.Optional", "isPresent"),
        Model::Primitive(PrimitiveModel::Bool(true)),
    );
    world.snapshot.put_field(
        present.addr,
        Chunk::new("java.util.Optional", "value"),
        Model::Primitive(PrimitiveModel::Int(42)),
    );

    let plan = Wrapper::Optional(OptionalKind::Object)
        .value(&ctx, &present)
        .unwrap();
    assert_eq!(plan.instantiation().executable.name(), "of");
    assert_eq!(
        plan.instantiation().args,
        vec![Model::Primitive(PrimitiveModel::Int(42))]
    );
    assert!(plan.modifications().is_empty());

    let absent = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::OPTIONAL),
    );
    let plan = Wrapper::Optional(OptionalKind::Object)
        .value(&ctx, &absent)
        .unwrap();
    assert_eq!(plan.instantiation().executable.name(), "empty");
    assert!(plan.instantiation().args.is_empty());
}

#[test]
fn present_optional_without_payload_is_an_error() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let object = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::OPTIONAL_INT),
    );
    world.snapshot.put_field(
        object.addr,
        Chunk::new("java.util.OptionalInt", "isPresent"),
        Model::Primitive(PrimitiveModel::Bool(true)),
    );

    let err = Wrapper::Optional(OptionalKind::Int)
        .value(&ctx, &object)
        .unwrap_err();
    assert!(matches!(err, Error::ModelType(_)));
}

#[test]
fn stream_emptiness_boundary() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    // Zero-length element array: empty(), not of(new Object[0]).
    let empty = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::STREAM),
    );
    world.snapshot.put_field(
        empty.addr,
        Chunk::new("java.util.stream.Stream", "elements"),
        ints(&[]),
    );
    let plan = Wrapper::Stream(StreamKind::Object).value(&ctx, &empty).unwrap();
    assert_eq!(plan.instantiation().executable.name(), "empty");

    let full = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::STREAM),
    );
    world.snapshot.put_field(
        full.addr,
        Chunk::new("java.util.stream.Stream", "elements"),
        ints(&[3, 4]),
    );
    let plan = Wrapper::Stream(StreamKind::Object).value(&ctx, &full).unwrap();
    assert_eq!(plan.instantiation().executable.name(), "of");
    let array = plan.instantiation().args[0].as_array().unwrap();
    assert_eq!(array.length, 2);
}

#[test]
fn iterator_delegates_to_origin_plan() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    // Materialize the enclosing list first.
    let list = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::ARRAY_LIST),
    );
    world.snapshot.put_field(
        list.addr,
        Chunk::new("java.util.ArrayList", "elementData"),
        ints(&[1]),
    );
    let list_plan = Wrapper::List(ListKind::ArrayList).value(&ctx, &list).unwrap();

    let iter = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::ITERATOR),
    );
    world.snapshot.put_field(
        iter.addr,
        Chunk::new("java.util.Iterator", "origin"),
        Model::Assemble(std::sync::Arc::new(list_plan.clone())),
    );

    let plan = Wrapper::Iter(IteratorKind::Iterator).value(&ctx, &iter).unwrap();
    assert_eq!(plan.class_id().name(), "java.util.Iterator");
    assert_eq!(plan.instantiation().executable.name(), "iterator");
    let receiver = plan.instantiation().instance.as_ref().unwrap();
    assert_eq!(
        receiver.as_assemble().unwrap().name(),
        list_plan.name()
    );
}

#[test]
fn iterator_without_origin_is_an_error() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let iter = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::ITERATOR),
    );
    let err = Wrapper::Iter(IteratorKind::Iterator)
        .value(&ctx, &iter)
        .unwrap_err();
    assert!(matches!(err, Error::ModelType(_)));
}

#[test]
fn thread_reconstructs_from_target_runnable() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let with_target = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::THREAD),
    );
    world.snapshot.put_field(
        with_target.addr,
        Chunk::new("java.lang.Thread", "target"),
        Model::Lambda(LambdaModel {
            class_id: ClassId::new("java.lang.Runnable"),
            name: "r1".into(),
        }),
    );
    let plan = Wrapper::Thread.value(&ctx, &with_target).unwrap();
    assert!(matches!(
        plan.instantiation().executable,
        ExecutableId::Constructor { ref params, .. }
            if params == &[ClassId::new("java.lang.Runnable")]
    ));

    let bare = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::THREAD),
    );
    let plan = Wrapper::Thread.value(&ctx, &bare).unwrap();
    assert!(matches!(
        plan.instantiation().executable,
        ExecutableId::Constructor { ref params, .. } if params.is_empty()
    ));
}

#[test]
fn thread_group_defaults_to_null_name() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let group = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::THREAD_GROUP),
    );
    let plan = Wrapper::ThreadGroup.value(&ctx, &group).unwrap();

    // The real type has no no-arg constructor; the name argument is always passed.
    assert_eq!(plan.instantiation().args.len(), 1);
    assert!(matches!(plan.instantiation().args[0], Model::Null(_)));
}

#[test]
fn display_names_are_unique_per_run() {
    let world = common::world();
    let ctx = EmitContext::new(&world.snapshot, &world.hierarchy, &world.namer);

    let object = SymbolicObject::new(
        world.allocator.next_address(),
        world.type_id(shadows::ARRAY_LIST),
    );
    let first = Wrapper::List(ListKind::ArrayList).value(&ctx, &object).unwrap();
    let second = Wrapper::List(ListKind::ArrayList).value(&ctx, &object).unwrap();

    assert_eq!(first.name(), "arrayList");
    assert_eq!(second.name(), "arrayList2");
    // Identity apart from the name: same address, same plan shape.
    assert_eq!(first.addr(), second.addr());
    assert_eq!(first.instantiation(), second.instantiation());
}

#[test]
fn ordinary_methods_fall_through_interception() {
    let world = common::world();
    let shadow = world.type_id(shadows::ARRAY_LIST);
    let object = SymbolicObject::new(world.allocator.next_address(), shadow);

    for name in ["add", "size", "toString", "hashCode"] {
        let method = MethodRef::new(shadow, name);
        assert!(
            Wrapper::List(ListKind::ArrayList)
                .override_invoke(&object, &method, &[SymValue::I32(0)])
                .is_none(),
            "{name} must fall through to the shadow body"
        );
    }

    let method = MethodRef::new(shadow, "setEqualGenericType");
    assert!(Wrapper::List(ListKind::ArrayList)
        .override_invoke(&object, &method, &[SymValue::Null])
        .is_some());
}

#[test]
fn stream_wrapper_has_no_modification_path() {
    let err = Wrapper::Stream(StreamKind::Int)
        .modification_executable()
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation(_)));

    let add = Wrapper::List(ListKind::ArrayDeque).modification_executable().unwrap();
    assert_eq!(add.name(), "add");
}

#[test]
fn registry_binds_reals_and_shadows() {
    let world = common::world();
    let registry = OverrideRegistry::standard(&world.universe);

    assert_eq!(
        registry.lookup(world.type_id("java.util.ArrayList")),
        Some(Wrapper::List(ListKind::ArrayList))
    );
    assert_eq!(
        registry.lookup(world.type_id(shadows::ARRAY_LIST)),
        Some(Wrapper::List(ListKind::ArrayList))
    );
    assert_eq!(
        registry.lookup(world.type_id(shadows::DESCENDING_ITERATOR)),
        Some(Wrapper::Iter(IteratorKind::Descending))
    );
    assert_eq!(registry.lookup(world.universe.root()), None);
}
