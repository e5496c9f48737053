//! Construction-plan data types for test emission.
//!
//! At test-emission time every symbolic object that must appear as a concrete value in
//! a generated test is lowered into an [`AssembleModel`]: one instantiation call (a
//! constructor or a static factory) followed by an ordered sequence of modification
//! calls. The printing stage (out of scope for this crate) turns those calls into
//! source statements.
//!
//! Everything here is pure data plus construction-time validation; no behavior, no
//! heap access. Wrappers produce these models, the emission stage consumes them.

mod assemble;
mod naming;

pub use assemble::{
    ArrayModel, AssembleModel, ClassId, ExecutableCall, ExecutableId, LambdaModel, Model,
    PrimitiveModel,
};
pub use naming::ModelNamer;
