//! Overrides for the iterator family.
//!
//! An iterator has no standalone construction in the real library; it is obtained from
//! its enclosing collection. The plan therefore delegates: the instantiation call
//! invokes the appropriate accessor (`iterator()`, `listIterator()`,
//! `descendingIterator()`) on the already-materialized plan of the origin collection.

use crate::{
    heap::SymbolicObject,
    model::{AssembleModel, ClassId, ExecutableCall, ExecutableId},
    wrappers::{collections, fields, EmitContext, IteratorKind},
    Error, Result,
};

pub(super) fn value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    kind: IteratorKind,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(kind.shadow_name())?;
    let target = ClassId::new(kind.target_class());

    let origin = ctx
        .field_model(object, &shadow, fields::ORIGIN)?
        .ok_or_else(|| {
            Error::ModelType(format!(
                "iterator at {} has no recorded origin collection",
                object.addr
            ))
        })?;

    // The origin must already be a construction plan; a raw or primitive model here
    // means the collection wrapper never ran for it.
    if origin.as_assemble().is_none() {
        return Err(Error::ModelType(format!(
            "iterator origin holds a non-plan model: {origin:?}"
        )));
    }

    let accessor = ExecutableId::method(
        ClassId::new(kind.accessor_declaring()),
        kind.accessor(),
        vec![],
        target.clone(),
    );
    let instantiation = ExecutableCall::on_instance(origin, accessor, vec![]);

    collections::plan_named(
        ctx,
        object,
        target,
        kind.base_name(),
        instantiation,
        Vec::new(),
    )
}
