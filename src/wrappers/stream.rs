//! Overrides for the stream family.
//!
//! A finalized stream materializes from its consumed element array: `of(array)` when
//! elements were recorded, `empty()` otherwise. Intermediate pipeline stages are gone
//! by emission time; only the terminal contents matter for equivalence.

use crate::{
    heap::SymbolicObject,
    model::{ArrayModel, AssembleModel, ClassId, ExecutableCall, ExecutableId, Model},
    wrappers::{collections, fields, EmitContext, StreamKind},
    Result,
};

pub(super) fn value(
    ctx: &EmitContext<'_>,
    object: &SymbolicObject,
    kind: StreamKind,
) -> Result<AssembleModel> {
    let shadow = ctx.shadow(kind.shadow_name())?;
    let target = ClassId::new(kind.target_class());

    let stored = ctx.field_model(object, &shadow, fields::ELEMENTS)?;
    let elements = collections::array_elements(stored, fields::ELEMENTS)?;

    // A zero-length element array and an absent one both mean the empty stream;
    // `of()` with an empty varargs array is observably identical but noisier.
    let factory = if elements.is_empty() {
        ExecutableCall::static_call(
            ExecutableId::method(target.clone(), "empty", vec![], target.clone()),
            vec![],
        )
    } else {
        let array_class = ClassId::new(kind.array_class());
        ExecutableCall::static_call(
            ExecutableId::method(
                target.clone(),
                "of",
                vec![array_class.clone()],
                target.clone(),
            ),
            vec![Model::Array(ArrayModel::of_elements(array_class, elements))],
        )
    };

    collections::plan_named(ctx, object, target, kind.base_name(), factory, Vec::new())
}
