//! Overrides for the optional family.
//!
//! Optionals materialize as a single static-factory call: `of(payload)` when the
//! presence flag is set, `empty()` otherwise. There is no modification chain; an
//! optional is immutable in the real library and the plan mirrors that.

use crate::{
    heap::{SymValue, SymbolicObject},
    model::{AssembleModel, ClassId, ExecutableCall, ExecutableId, Model, PrimitiveModel},
    wrappers::{collections, fields, pseudo, EmitContext, InvokeResult, MethodRef, OptionalKind},
    Error, Result,
};

/// Intercepts the payload-typing pseudo-method.
///
/// `eqGenericType(x)` returns its argument and binds the optional's type parameter to
/// the argument's declared type. The shadow body stores the returned value into its
/// payload field, so interception here is what makes the stored payload carry the
/// container-bound type.
pub(super) fn invoke(
    object: &SymbolicObject,
    method: &MethodRef,
    args: &[SymValue],
) -> Option<Vec<InvokeResult>> {
    if &*method.name != pseudo::EQ_GENERIC_TYPE || args.len() != 1 {
        return None;
    }

    let constraints = args[0]
        .address()
        .map(|addr| {
            vec![super::PathConstraint::GenericTypeBound {
                value: addr,
                owner: object.addr,
                parameter_index: 0,
            }]
        })
        .unwrap_or_default();

    Some(vec![InvokeResult::success_with(args[0].clone(), constraints)])
}

pub(super) fn value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    kind: OptionalKind,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(kind.shadow_name())?;
    let target = ClassId::new(kind.target_class());

    let present = match ctx.field_model(object, &shadow, fields::IS_PRESENT)? {
        None => false,
        Some(Model::Primitive(PrimitiveModel::Bool(b))) => b,
        Some(other) => {
            return Err(Error::ModelType(format!(
                "optional presence flag holds a non-boolean model: {other:?}"
            )))
        }
    };

    let factory = if present {
        let payload = ctx
            .field_model(object, &shadow, fields::VALUE)?
            .ok_or_else(|| {
                Error::ModelType(format!(
                    "present {target} has no recorded payload value"
                ))
            })?;
        ExecutableCall::static_call(
            ExecutableId::method(
                target.clone(),
                "of",
                vec![ClassId::new(kind.payload_class())],
                target.clone(),
            ),
            vec![payload],
        )
    } else {
        ExecutableCall::static_call(
            ExecutableId::method(target.clone(), "empty", vec![], target.clone()),
            vec![],
        )
    };

    collections::plan_named(ctx, object, target, kind.base_name(), factory, Vec::new())
}
