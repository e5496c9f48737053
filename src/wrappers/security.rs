//! Override for `java.lang.SecurityManager`.
//!
//! Security managers carry no reconstructable state the generated test could observe;
//! the plan is always the bare no-argument constructor.

use crate::{
    heap::SymbolicObject,
    model::{AssembleModel, ClassId, ExecutableCall, ExecutableId},
    wrappers::{collections, EmitContext},
    Result,
};

pub(super) fn value(ctx: &EmitContext<'_>, object: &SymbolicObject) -> Result<AssembleModel> {
    let target = ClassId::new("java.lang.SecurityManager");
    let instantiation =
        ExecutableCall::static_call(ExecutableId::constructor(target.clone(), vec![]), vec![]);
    collections::plan(ctx, object, target, instantiation, Vec::new())
}
