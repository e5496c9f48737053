//! The deferred construction plan and its value language.

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{types::ROOT_TYPE_NAME, Error, Result};

/// Identity of a real type as it appears in generated source code.
///
/// Distinct from [`TypeId`](crate::types::TypeId): a `ClassId` needs no loaded
/// universe behind it, it is simply the name the printing stage will emit. Cloning is
/// cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(Arc<str>);

impl ClassId {
    /// Creates a class id from a fully-qualified name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The fully-qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The simple (unqualified) name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Returns `true` if this is the universal root class.
    #[must_use]
    pub fn is_root(&self) -> bool {
        &*self.0 == ROOT_TYPE_NAME
    }

    /// Name-level assignability check used by plan validation.
    ///
    /// The wrapper family always produces exact matches; the only widening accepted
    /// here is assignment to the universal root. Deeper subtype reasoning belongs to
    /// the loaded type universe, not to the printing boundary.
    #[must_use]
    pub fn is_assignable_to(&self, target: &ClassId) -> bool {
        self == target || target.is_root()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A concrete primitive value in the model language.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveModel {
    /// A boolean literal.
    Bool(bool),
    /// A 32-bit integer literal.
    Int(i32),
    /// A 64-bit integer literal.
    Long(i64),
    /// A 64-bit float literal.
    Double(f64),
    /// A string literal.
    Str(Arc<str>),
}

/// An array value: declared array class, length, sparse element stores, and the
/// constant model used for unset indices.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayModel {
    /// The array class, e.g. `java.lang.Object[]`.
    pub class_id: ClassId,
    /// Number of elements.
    pub length: usize,
    /// The fill model for indices absent from `stores`.
    pub const_model: Box<Model>,
    /// Explicitly stored elements by index.
    pub stores: BTreeMap<usize, Model>,
}

impl ArrayModel {
    /// Creates an array model whose elements are exactly `elements`, with a null
    /// object fill for the (empty) remainder.
    #[must_use]
    pub fn of_elements(class_id: ClassId, elements: Vec<Model>) -> Self {
        let length = elements.len();
        Self {
            class_id,
            length,
            const_model: Box::new(Model::Null(ClassId::new(ROOT_TYPE_NAME))),
            stores: elements.into_iter().enumerate().collect(),
        }
    }

    /// The element at `index`: the explicit store if present, the fill otherwise.
    #[must_use]
    pub fn element(&self, index: usize) -> &Model {
        self.stores.get(&index).unwrap_or(&self.const_model)
    }
}

/// A reference to a lambda or method-reference value captured during exploration.
///
/// Carried opaquely: the printing stage knows how to lower it, this subsystem only
/// needs its presence (e.g. a thread's target runnable).
#[derive(Clone, Debug, PartialEq)]
pub struct LambdaModel {
    /// The functional interface the lambda implements.
    pub class_id: ClassId,
    /// A printable identifier for the captured lambda.
    pub name: Arc<str>,
}

/// A value in the construction-plan language.
#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    /// The null reference of the given class.
    Null(ClassId),
    /// A concrete primitive.
    Primitive(PrimitiveModel),
    /// An array value.
    Array(ArrayModel),
    /// A lambda or method reference.
    Lambda(LambdaModel),
    /// A nested construction plan.
    Assemble(Arc<AssembleModel>),
}

impl Model {
    /// Returns the nested construction plan if this model is one.
    #[must_use]
    pub fn as_assemble(&self) -> Option<&Arc<AssembleModel>> {
        match self {
            Model::Assemble(model) => Some(model),
            _ => None,
        }
    }

    /// Returns the array model if this model is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayModel> {
        match self {
            Model::Array(array) => Some(array),
            _ => None,
        }
    }
}

/// Identity of a callable used in a construction plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutableId {
    /// A constructor of `class_id`.
    Constructor {
        /// The constructed class.
        class_id: ClassId,
        /// Parameter classes, in order.
        params: Vec<ClassId>,
    },
    /// A named method on `class_id`. Static when the enclosing call carries no
    /// instance, an instance method otherwise.
    Method {
        /// The declaring class.
        class_id: ClassId,
        /// Method name.
        name: Arc<str>,
        /// Parameter classes, in order.
        params: Vec<ClassId>,
        /// Declared return class.
        returns: ClassId,
    },
}

impl ExecutableId {
    /// A constructor id.
    #[must_use]
    pub fn constructor(class_id: ClassId, params: Vec<ClassId>) -> Self {
        Self::Constructor { class_id, params }
    }

    /// A method id.
    #[must_use]
    pub fn method(
        class_id: ClassId,
        name: impl Into<Arc<str>>,
        params: Vec<ClassId>,
        returns: ClassId,
    ) -> Self {
        Self::Method {
            class_id,
            name: name.into(),
            params,
            returns,
        }
    }

    /// The class constructed or returned by this executable.
    #[must_use]
    pub fn returns(&self) -> &ClassId {
        match self {
            ExecutableId::Constructor { class_id, .. } => class_id,
            ExecutableId::Method { returns, .. } => returns,
        }
    }

    /// The declaring class.
    #[must_use]
    pub fn declaring(&self) -> &ClassId {
        match self {
            ExecutableId::Constructor { class_id, .. } | ExecutableId::Method { class_id, .. } => {
                class_id
            }
        }
    }

    /// The method name, or `<init>` for constructors.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ExecutableId::Constructor { .. } => "<init>",
            ExecutableId::Method { name, .. } => name,
        }
    }
}

impl fmt::Display for ExecutableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.declaring(), self.name())
    }
}

/// One call in a construction plan: an optional receiver model, the executable, and
/// ordered argument models. `instance` is `None` for constructors and static
/// factories.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableCall {
    /// Receiver model for instance methods, `None` for constructors/statics.
    pub instance: Option<Model>,
    /// The callable.
    pub executable: ExecutableId,
    /// Argument models, in call order.
    pub args: Vec<Model>,
}

impl ExecutableCall {
    /// A constructor or static-factory call (no receiver).
    #[must_use]
    pub fn static_call(executable: ExecutableId, args: Vec<Model>) -> Self {
        Self {
            instance: None,
            executable,
            args,
        }
    }

    /// An instance-method call on `instance`.
    #[must_use]
    pub fn on_instance(instance: Model, executable: ExecutableId, args: Vec<Model>) -> Self {
        Self {
            instance: Some(instance),
            executable,
            args,
        }
    }
}

/// A deferred construction plan: reproduces one concrete value in generated code.
///
/// Executing the instantiation call and then the modification calls, in order, against
/// the real standard-library type yields an object observably equivalent to the
/// symbolic object this plan was derived from. Plans are immutable once built and are
/// owned by the test-emission stage.
///
/// # Validation
///
/// Construction fails with [`Error::ModelType`] when the instantiation call's declared
/// return type is not assignable to the target class. Modification order is preserved
/// verbatim; no reordering is ever assumed to be safe.
#[derive(Clone, Debug, PartialEq)]
pub struct AssembleModel {
    addr: i64,
    class_id: ClassId,
    name: String,
    instantiation: ExecutableCall,
    modifications: Vec<ExecutableCall>,
}

impl AssembleModel {
    /// Creates a plan with no modification calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelType`] if the instantiation call's return type is not
    /// assignable to `class_id`.
    pub fn new(
        addr: i64,
        class_id: ClassId,
        name: String,
        instantiation: ExecutableCall,
    ) -> Result<Self> {
        Self::with_modifications(addr, class_id, name, instantiation, Vec::new())
    }

    /// Creates a plan with an ordered modification sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelType`] if the instantiation call's return type is not
    /// assignable to `class_id`.
    pub fn with_modifications(
        addr: i64,
        class_id: ClassId,
        name: String,
        instantiation: ExecutableCall,
        modifications: Vec<ExecutableCall>,
    ) -> Result<Self> {
        let produced = instantiation.executable.returns();
        if !produced.is_assignable_to(&class_id) {
            return Err(Error::ModelType(format!(
                "instantiation call produces '{produced}' which is not assignable to '{class_id}'"
            )));
        }

        Ok(Self {
            addr,
            class_id,
            name,
            instantiation,
            modifications,
        })
    }

    /// The concrete address this plan was materialized for (naming/debugging only).
    #[must_use]
    pub fn addr(&self) -> i64 {
        self.addr
    }

    /// The target real class this plan constructs.
    #[must_use]
    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    /// The source-level display name assigned to this plan.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instantiation call.
    #[must_use]
    pub fn instantiation(&self) -> &ExecutableCall {
        &self.instantiation
    }

    /// The modification calls, in application order.
    #[must_use]
    pub fn modifications(&self) -> &[ExecutableCall] {
        &self.modifications
    }
}

impl fmt::Display for AssembleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} (+{} modifications)",
            self.class_id,
            self.name,
            self.instantiation.executable,
            self.modifications.len()
        )
    }
}
