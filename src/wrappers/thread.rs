//! Overrides for `java.lang.Thread` and `java.lang.ThreadGroup`.

use crate::{
    heap::SymbolicObject,
    model::{AssembleModel, ClassId, ExecutableCall, ExecutableId, Model},
    wrappers::{collections, fields, EmitContext},
    Result,
};

/// Threads reconstruct from their target runnable.
///
/// A recorded lambda target yields `new Thread(target)`; any other target shape
/// (absent, null, or an exploration-internal model) degrades to the no-argument
/// constructor, which is the most a generated test can faithfully reproduce.
pub(super) fn thread_value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(super::shadows::THREAD)?;
    let target = ClassId::new("java.lang.Thread");

    let instantiation = match ctx.field_model(object, &shadow, fields::TARGET)? {
        Some(runnable @ Model::Lambda(_)) => ExecutableCall::static_call(
            ExecutableId::constructor(
                target.clone(),
                vec![ClassId::new("java.lang.Runnable")],
            ),
            vec![runnable],
        ),
        _ => ExecutableCall::static_call(
            ExecutableId::constructor(target.clone(), vec![]),
            vec![],
        ),
    };

    collections::plan(ctx, object, target, instantiation, Vec::new())
}

/// Thread groups reconstruct from their name.
///
/// The real type has no no-argument constructor, so an absent name is passed as a
/// null string literal rather than dropped.
pub(super) fn thread_group_value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(super::shadows::THREAD_GROUP)?;
    let target = ClassId::new("java.lang.ThreadGroup");
    let string = ClassId::new("java.lang.String");

    let name = ctx
        .field_model(object, &shadow, fields::NAME)?
        .unwrap_or_else(|| Model::Null(string.clone()));

    let instantiation = ExecutableCall::static_call(
        ExecutableId::constructor(target.clone(), vec![string]),
        vec![name],
    );

    collections::plan(ctx, object, target, instantiation, Vec::new())
}
