//! Central type registry for the symbolic engine.
//!
//! The [`TypeUniverse`] holds every type the engine has loaded: classes and interfaces
//! from the analyzed program, the standard-library types they reference, and the shadow
//! reimplementations the engine substitutes for the standard-library types it cannot
//! execute symbolically.
//!
//! # Registry Architecture
//!
//! - **Id-based lookup**: primary index, lock-free ordered map keyed by interned [`TypeId`]
//! - **Name-based lookup**: secondary concurrent index from fully-qualified name
//! - **Shadow resolution**: every shadow definition carries a back-link to its real type
//!
//! # Thread Safety
//!
//! Loading uses atomic id generation and lock-free insertion, so the universe may be
//! populated concurrently during engine start-up. After start-up it is read-mostly:
//! exploration workers only perform lookups.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

use crossbeam_skiplist::SkipMap;
use dashmap::{mapref::entry::Entry, DashMap};
use strum::Display;

use crate::{Error, Result};

/// Fully-qualified name of the universal root type.
///
/// Every class ultimately inherits from the root; interfaces do not link back to it
/// through a superclass edge, which is why inheritor queries special-case it.
pub const ROOT_TYPE_NAME: &str = "java.lang.Object";

/// Opaque interned identity of a loaded type.
///
/// Ids are issued in load order and are unique for the lifetime of one engine run.
/// They carry no meaning beyond identity and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    /// Returns the raw interned index.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type:{}", self.0)
    }
}

/// Classification of a loaded type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum TypeKind {
    /// A concrete or abstract class, with a superclass chain up to the root.
    Class,
    /// An interface, with zero or more super-interfaces and no superclass link.
    Interface,
}

/// One loaded type definition.
///
/// Definitions are immutable once loaded; the universe hands them out as `Arc<TypeDef>`
/// so hierarchy computation can retain them without copying.
#[derive(Debug)]
pub struct TypeDef {
    /// Interned identity of this type.
    pub id: TypeId,
    /// Fully-qualified name, e.g. `java.util.ArrayList`.
    pub name: Arc<str>,
    /// Class or interface.
    pub kind: TypeKind,
    /// Direct superclass. `None` for the root type and for interfaces.
    pub superclass: Option<TypeId>,
    /// Directly implemented interfaces (for classes) or direct super-interfaces
    /// (for interfaces).
    pub interfaces: Vec<TypeId>,
    /// Names of fields declared directly on this type.
    pub fields: Vec<Arc<str>>,
    /// For a shadow type, the real standard-library type it stands in for.
    /// `None` for real types.
    pub real: Option<TypeId>,
}

impl TypeDef {
    /// Returns `true` if this definition is a shadow reimplementation of a real type.
    #[must_use]
    pub fn is_shadow(&self) -> bool {
        self.real.is_some()
    }

    /// Returns `true` if this definition is an interface.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Returns `true` if this type declares a field with the given name.
    #[must_use]
    pub fn declares_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| &**f == name)
    }
}

/// Concurrent registry of all loaded types.
///
/// The universe is created with the root type already installed and is populated via
/// [`load_class`](Self::load_class), [`load_interface`](Self::load_interface) and
/// [`load_shadow`](Self::load_shadow) during engine start-up. Loads are idempotent per
/// name: re-loading an already present name returns the existing id unchanged.
///
/// # Examples
///
/// ```rust
/// use symscope::types::{TypeUniverse, ROOT_TYPE_NAME};
///
/// let universe = TypeUniverse::new();
/// let iterable = universe.load_interface("java.lang.Iterable", vec![])?;
/// let collection = universe.load_interface("java.util.Collection", vec![iterable])?;
/// let list = universe.load_class("java.util.AbstractList", None, vec![collection], &[])?;
///
/// assert_eq!(universe.get(list)?.superclass, Some(universe.root()));
/// assert_eq!(&*universe.by_name(ROOT_TYPE_NAME)?.name, ROOT_TYPE_NAME);
/// # Ok::<(), symscope::Error>(())
/// ```
pub struct TypeUniverse {
    types: SkipMap<u32, Arc<TypeDef>>,
    by_name: DashMap<String, TypeId>,
    next_id: AtomicU32,
    root: TypeId,
}

impl TypeUniverse {
    /// Creates a universe with the root type pre-installed.
    #[must_use]
    pub fn new() -> Self {
        let universe = Self {
            types: SkipMap::new(),
            by_name: DashMap::new(),
            next_id: AtomicU32::new(0),
            root: TypeId(0),
        };

        let root_id = universe.issue_id();
        universe.install(TypeDef {
            id: root_id,
            name: Arc::from(ROOT_TYPE_NAME),
            kind: TypeKind::Class,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            real: None,
        });

        universe
    }

    /// Returns the id of the universal root type.
    #[must_use]
    pub fn root(&self) -> TypeId {
        self.root
    }

    /// Loads a class type.
    ///
    /// A `None` superclass links the class directly under the root. All referenced
    /// supertypes must already be loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if the superclass or any interface id is not
    /// present in the universe.
    pub fn load_class(
        &self,
        name: &str,
        superclass: Option<TypeId>,
        interfaces: Vec<TypeId>,
        fields: &[&str],
    ) -> Result<TypeId> {
        self.load(name, TypeKind::Class, superclass, interfaces, fields, None)
    }

    /// Loads an interface type with the given direct super-interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if any super-interface id is not present.
    pub fn load_interface(&self, name: &str, super_interfaces: Vec<TypeId>) -> Result<TypeId> {
        self.load(name, TypeKind::Interface, None, super_interfaces, &[], None)
    }

    /// Loads a shadow class standing in for the real type `real`.
    ///
    /// The shadow participates in the class hierarchy like any other class; its
    /// distinguishing feature is the back-link consulted by
    /// [`real_of`](Self::real_of) during field-chunk resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if `real` or the superclass id is not present,
    /// or [`Error::ModelType`] if `real` is itself a shadow.
    pub fn load_shadow(
        &self,
        name: &str,
        real: TypeId,
        superclass: Option<TypeId>,
        fields: &[&str],
    ) -> Result<TypeId> {
        let real_def = self.get(real)?;
        if real_def.is_shadow() {
            return Err(Error::ModelType(format!(
                "shadow '{name}' cannot stand in for another shadow '{}'",
                real_def.name
            )));
        }

        self.load(name, TypeKind::Class, superclass, Vec::new(), fields, Some(real))
    }

    /// Looks up a type definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if the id was never issued by this universe.
    pub fn get(&self, id: TypeId) -> Result<Arc<TypeDef>> {
        self.types
            .get(&id.0)
            .map(|entry| entry.value().clone())
            .ok_or(Error::UnknownType(id))
    }

    /// Looks up a type definition by fully-qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTypeName`] if no type with that name was loaded.
    pub fn by_name(&self, name: &str) -> Result<Arc<TypeDef>> {
        let id = self
            .by_name
            .get(name)
            .map(|entry| *entry.value())
            .ok_or_else(|| Error::UnknownTypeName(name.to_string()))?;

        self.get(id)
    }

    /// Resolves a type to its real counterpart.
    ///
    /// For a shadow type this follows the back-link recorded at load time; for a real
    /// type it is the identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if the id is not present.
    pub fn real_of(&self, id: TypeId) -> Result<TypeId> {
        let def = self.get(id)?;
        Ok(def.real.unwrap_or(def.id))
    }

    /// Returns `true` if the id is present in the universe.
    #[must_use]
    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id.0)
    }

    /// Returns the number of loaded types, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only the root type is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Returns the ids of all loaded types in load order.
    #[must_use]
    pub fn ids(&self) -> Vec<TypeId> {
        self.types.iter().map(|entry| TypeId(*entry.key())).collect()
    }

    fn load(
        &self,
        name: &str,
        kind: TypeKind,
        superclass: Option<TypeId>,
        interfaces: Vec<TypeId>,
        fields: &[&str],
        real: Option<TypeId>,
    ) -> Result<TypeId> {
        // The name entry is the reservation point: holding the vacant entry keeps a
        // concurrent same-name load from issuing a second id for this name.
        match self.by_name.entry(name.to_string()) {
            Entry::Occupied(existing) => Ok(*existing.get()),
            Entry::Vacant(vacant) => {
                let superclass = match kind {
                    TypeKind::Class => {
                        let parent = superclass.unwrap_or(self.root);
                        if !self.contains(parent) {
                            return Err(Error::UnknownType(parent));
                        }
                        Some(parent)
                    }
                    TypeKind::Interface => None,
                };

                for interface in &interfaces {
                    if !self.contains(*interface) {
                        return Err(Error::UnknownType(*interface));
                    }
                }

                let id = self.issue_id();
                self.types.insert(
                    id.0,
                    Arc::new(TypeDef {
                        id,
                        name: Arc::from(name),
                        kind,
                        superclass,
                        interfaces,
                        fields: fields.iter().map(|f| Arc::from(*f)).collect(),
                        real,
                    }),
                );
                vacant.insert(id);

                Ok(id)
            }
        }
    }

    fn issue_id(&self) -> TypeId {
        TypeId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn install(&self, def: TypeDef) {
        let id = def.id;
        self.by_name.insert(def.name.to_string(), id);
        self.types.insert(id.0, Arc::new(def));
    }
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeUniverse")
            .field("type_count", &self.len())
            .finish()
    }
}
