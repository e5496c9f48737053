//! Overrides for the list, set, map and deque families.
//!
//! Collections materialize as a no-argument constructor call followed by one mutating
//! call per element: `add` for linear collections, `put` for maps. Element order in
//! the modification chain follows the backing array's index order, so iteration order
//! of the reconstructed collection matches the symbolic one.

use crate::{
    heap::{SymValue, SymbolicObject},
    model::{AssembleModel, ClassId, ExecutableCall, ExecutableId, Model},
    types::ROOT_TYPE_NAME,
    wrappers::{fields, pseudo, EmitContext, InvokeResult, ListKind, MethodRef, PathConstraint},
    Error, Result,
};

/// Intercepts the single-parameter generic-type pseudo-method shared by lists, sets,
/// streams and iterators. Everything else falls through.
pub(super) fn storage_invoke(
    object: &SymbolicObject,
    method: &MethodRef,
    args: &[SymValue],
) -> Option<Vec<InvokeResult>> {
    if &*method.name != pseudo::SET_EQUAL_GENERIC_TYPE || args.len() != 1 {
        return None;
    }

    Some(vec![InvokeResult::success_with(
        SymValue::Void,
        bind_parameter(object, &args[0], 0).into_iter().collect(),
    )])
}

/// Intercepts the two-parameter generic-type pseudo-method of maps.
pub(super) fn associative_invoke(
    object: &SymbolicObject,
    method: &MethodRef,
    args: &[SymValue],
) -> Option<Vec<InvokeResult>> {
    if &*method.name != pseudo::SET_EQUAL_GENERIC_TYPES || args.len() != 2 {
        return None;
    }

    let mut constraints = Vec::new();
    constraints.extend(bind_parameter(object, &args[0], 0));
    constraints.extend(bind_parameter(object, &args[1], 1));
    Some(vec![InvokeResult::success_with(SymValue::Void, constraints)])
}

/// Binds one type parameter of `owner` to the declared type of `value`, when `value`
/// is a reference. Null and primitive arguments carry no type information to bind.
fn bind_parameter(
    owner: &SymbolicObject,
    value: &SymValue,
    parameter_index: usize,
) -> Option<PathConstraint> {
    value.address().map(|addr| PathConstraint::GenericTypeBound {
        value: addr,
        owner: owner.addr,
        parameter_index,
    })
}

/// `Collection.add(Object): boolean`, the mutator of the list modification chain.
pub(super) fn collection_add() -> ExecutableId {
    ExecutableId::method(
        ClassId::new("java.util.Collection"),
        "add",
        vec![ClassId::new(ROOT_TYPE_NAME)],
        ClassId::new("boolean"),
    )
}

/// `Set.add(Object): boolean`.
pub(super) fn set_add() -> ExecutableId {
    ExecutableId::method(
        ClassId::new("java.util.Set"),
        "add",
        vec![ClassId::new(ROOT_TYPE_NAME)],
        ClassId::new("boolean"),
    )
}

/// `Map.put(Object, Object): Object`.
pub(super) fn map_put() -> ExecutableId {
    ExecutableId::method(
        ClassId::new("java.util.Map"),
        "put",
        vec![ClassId::new(ROOT_TYPE_NAME), ClassId::new(ROOT_TYPE_NAME)],
        ClassId::new(ROOT_TYPE_NAME),
    )
}

pub(super) fn list_value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    kind: ListKind,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(kind.shadow_name())?;
    let stored = ctx.field_model(object, &shadow, fields::ELEMENT_DATA)?;
    let elements = array_elements(stored, fields::ELEMENT_DATA)?;

    linear_value(
        ctx,
        object,
        ClassId::new(kind.target_class()),
        collection_add(),
        elements,
    )
}

pub(super) fn set_value(ctx: &EmitContext<'_>, object: &SymbolicObject) -> Result<AssembleModel> {
    let shadow = ctx.shadow(super::shadows::HASH_SET)?;
    let stored = ctx.field_model(object, &shadow, fields::ELEMENT_DATA)?;
    let elements = array_elements(stored, fields::ELEMENT_DATA)?;

    linear_value(
        ctx,
        object,
        ClassId::new("java.util.HashSet"),
        set_add(),
        elements,
    )
}

pub(super) fn map_value(ctx: &EmitContext<'_>, object: &SymbolicObject) -> Result<AssembleModel> {
    let shadow = ctx.shadow(super::shadows::HASH_MAP)?;
    let keys = array_elements(ctx.field_model(object, &shadow, fields::KEYS)?, fields::KEYS)?;
    let values = array_elements(
        ctx.field_model(object, &shadow, fields::VALUES)?,
        fields::VALUES,
    )?;

    let target = ClassId::new("java.util.HashMap");
    let instantiation =
        ExecutableCall::static_call(ExecutableId::constructor(target.clone(), vec![]), vec![]);

    // Keys and values are parallel arrays; a value array shorter than the key array
    // means the remaining entries map to null.
    let put = map_put();
    let null = Model::Null(ClassId::new(ROOT_TYPE_NAME));
    let modifications: Vec<ExecutableCall> = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let value = values.get(i).cloned().unwrap_or_else(|| null.clone());
            ExecutableCall::static_call(put.clone(), vec![key, value])
        })
        .collect();

    plan(ctx, object, target, instantiation, modifications)
}

/// Shared no-arg-constructor-plus-mutator-chain shape of lists and sets.
fn linear_value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    target: ClassId,
    mutator: ExecutableId,
    elements: Vec<Model>,
) -> Result<AssembleModel> {
    let instantiation =
        ExecutableCall::static_call(ExecutableId::constructor(target.clone(), vec![]), vec![]);
    let modifications: Vec<ExecutableCall> = elements
        .into_iter()
        .map(|element| ExecutableCall::static_call(mutator.clone(), vec![element]))
        .collect();

    plan(ctx, object, target, instantiation, modifications)
}

/// Finalizes a plan: concrete address, display name, validation.
pub(super) fn plan(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    target: ClassId,
    instantiation: ExecutableCall,
    modifications: Vec<ExecutableCall>,
) -> Result<AssembleModel> {
    let base = base_name(&target);
    plan_named(ctx, object, target, &base, instantiation, modifications)
}

/// Like [`plan`], with an explicit display-name base instead of the decapitalized
/// simple class name.
pub(super) fn plan_named(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    target: ClassId,
    base: &str,
    instantiation: ExecutableCall,
    modifications: Vec<ExecutableCall>,
) -> Result<AssembleModel> {
    let addr = ctx.resolver.concrete_address_of(object.addr);
    let name = ctx.namer.next(base);
    AssembleModel::with_modifications(addr, target, name, instantiation, modifications)
}

/// Decapitalized simple class name, the display-name base for collection plans.
pub(super) fn base_name(class: &ClassId) -> String {
    let simple = class.simple_name();
    let mut chars = simple.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => simple.to_string(),
    }
}

/// Flattens a recorded backing-array field into element models in index order.
///
/// An absent or null field means the collection never left its empty state.
pub(super) fn array_elements(stored: Option<Model>, field: &str) -> Result<Vec<Model>> {
    match stored {
        None | Some(Model::Null(_)) => Ok(Vec::new()),
        Some(Model::Array(array)) => {
            Ok((0..array.length).map(|i| array.element(i).clone()).collect())
        }
        Some(other) => Err(Error::ModelType(format!(
            "backing field '{field}' holds a non-array model: {other:?}"
        ))),
    }
}
