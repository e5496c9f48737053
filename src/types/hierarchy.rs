//! Memoized ancestor/inheritor queries over the loaded type universe.
//!
//! Exploration consults the hierarchy constantly: every field access, every virtual
//! dispatch, and every chunk resolution needs the ancestor chain of some type. The
//! [`HierarchyIndex`] computes each answer once per type and caches it; the answers are
//! immutable once computed, so a benign race where two threads compute the same chain
//! is harmless and either result may be retained.

use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    types::{Chunk, FieldRef, TypeId, TypeUniverse},
    Error, Result,
};

/// Ancestor and inheritor queries with per-type memoization.
///
/// # Query Semantics
///
/// - [`ancestors_of`](Self::ancestors_of): self first, then increasingly distant
///   ancestors. For a class: the superclass chain up to the root, with each class's
///   directly implemented interfaces' super-interface chains appended. For an
///   interface: self followed by its super-interfaces, transitively.
/// - [`inheritors_of`](Self::inheritors_of): farthest descendant first, self last.
///   For the root type: every loaded type (interfaces carry no superclass link back
///   through the root, so the closure cannot be recovered by chain walking). For an
///   interface: sub-interfaces plus all implementing classes. For a class: all
///   subclasses including self.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use symscope::types::{HierarchyIndex, TypeUniverse};
///
/// let universe = Arc::new(TypeUniverse::new());
/// let collection = universe.load_interface("java.util.Collection", vec![])?;
/// let list = universe.load_interface("java.util.List", vec![collection])?;
/// let array_list = universe.load_class("java.util.ArrayList", None, vec![list], &[])?;
///
/// let hierarchy = HierarchyIndex::new(universe.clone());
/// let ancestors = hierarchy.ancestors_of(array_list)?;
/// assert_eq!(ancestors[0], array_list);
/// assert!(ancestors.contains(&collection));
/// # Ok::<(), symscope::Error>(())
/// ```
pub struct HierarchyIndex {
    universe: Arc<TypeUniverse>,
    ancestors: DashMap<TypeId, Arc<[TypeId]>>,
    inheritors: DashMap<TypeId, Arc<[TypeId]>>,
}

impl HierarchyIndex {
    /// Creates an index over the given universe with empty caches.
    #[must_use]
    pub fn new(universe: Arc<TypeUniverse>) -> Self {
        Self {
            universe,
            ancestors: DashMap::new(),
            inheritors: DashMap::new(),
        }
    }

    /// Returns the universe this index answers queries for.
    #[must_use]
    pub fn universe(&self) -> &Arc<TypeUniverse> {
        &self.universe
    }

    /// Returns the ancestors of `ty`, self first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if `ty` is not present in the universe.
    pub fn ancestors_of(&self, ty: TypeId) -> Result<Arc<[TypeId]>> {
        if let Some(cached) = self.ancestors.get(&ty) {
            return Ok(cached.clone());
        }

        let computed = self.compute_ancestors(ty)?;
        // Two threads may race here; both computed the same immutable chain.
        let retained = self.ancestors.entry(ty).or_insert(computed);
        Ok(retained.clone())
    }

    /// Returns the inheritors of `ty`, farthest descendant first, self last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if `ty` is not present in the universe.
    pub fn inheritors_of(&self, ty: TypeId) -> Result<Arc<[TypeId]>> {
        if let Some(cached) = self.inheritors.get(&ty) {
            return Ok(cached.clone());
        }

        let computed = self.compute_inheritors(ty)?;
        let retained = self.inheritors.entry(ty).or_insert(computed);
        Ok(retained.clone())
    }

    /// Resolves the canonical storage chunk for a field access on an object of the
    /// given type.
    ///
    /// The field's declaring type is resolved to its real counterpart (shadow types
    /// resolve through their back-link), and that real declaring type must be an
    /// ancestor of the real counterpart of `object_type`. The resulting [`Chunk`] is
    /// keyed by the real declaring type's name, so the same field reached through a
    /// shadow substitution and through the real type addresses the same storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldResolution`] when the declaring type is not an ancestor
    /// of the object's real type. This indicates a broken shadow/real mapping and is
    /// fatal to the exploration state; it must never be silently ignored.
    pub fn chunk_for(&self, object_type: TypeId, field: &FieldRef) -> Result<Chunk> {
        let real_declaring = self.universe.real_of(field.declaring)?;
        let real_object = self.universe.real_of(object_type)?;

        if !self.ancestors_of(real_object)?.contains(&real_declaring) {
            let declaring = self.universe.get(real_declaring)?;
            let object = self.universe.get(real_object)?;
            return Err(Error::FieldResolution {
                field: field.name.to_string(),
                declaring: declaring.name.to_string(),
                object: object.name.to_string(),
            });
        }

        let declaring = self.universe.get(real_declaring)?;
        Ok(Chunk::new(declaring.name.clone(), field.name.clone()))
    }

    fn compute_ancestors(&self, ty: TypeId) -> Result<Arc<[TypeId]>> {
        let def = self.universe.get(ty)?;
        let mut chain = Vec::new();

        if def.is_interface() {
            push_interface_chain(&self.universe, ty, &mut chain)?;
        } else {
            // Class chain first: self up to the root.
            let mut classes = Vec::new();
            let mut cursor = Some(ty);
            while let Some(current) = cursor {
                let current_def = self.universe.get(current)?;
                classes.push(current);
                cursor = current_def.superclass;
            }
            chain.extend_from_slice(&classes);

            // Then each class's directly implemented interfaces, expanded transitively.
            for class in classes {
                let class_def = self.universe.get(class)?;
                for interface in &class_def.interfaces {
                    push_interface_chain(&self.universe, *interface, &mut chain)?;
                }
            }
        }

        dedup_preserving_order(&mut chain);
        Ok(chain.into())
    }

    fn compute_inheritors(&self, ty: TypeId) -> Result<Arc<[TypeId]>> {
        let def = self.universe.get(ty)?;

        let mut descendants: Vec<TypeId> = Vec::new();
        for candidate in self.universe.ids() {
            if candidate == ty {
                continue;
            }
            let is_inheritor = if ty == self.universe.root() {
                // Interfaces do not reach the root through ancestor chains, but the
                // root's inheritor closure is defined as the whole loaded universe.
                true
            } else {
                self.ancestors_of(candidate)?.contains(&ty)
            };
            if is_inheritor {
                descendants.push(candidate);
            }
        }

        // Farthest descendant first; ancestor-chain length is a stable depth proxy.
        let mut keyed: Vec<(usize, TypeId)> = Vec::with_capacity(descendants.len());
        for descendant in descendants {
            keyed.push((self.ancestors_of(descendant)?.len(), descendant));
        }
        keyed.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut result: Vec<TypeId> = keyed.into_iter().map(|(_, id)| id).collect();
        result.push(def.id);
        Ok(result.into())
    }
}

impl std::fmt::Debug for HierarchyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchyIndex")
            .field("cached_ancestors", &self.ancestors.len())
            .field("cached_inheritors", &self.inheritors.len())
            .finish()
    }
}

/// Appends `interface` and its super-interfaces, transitively, in preorder.
fn push_interface_chain(
    universe: &TypeUniverse,
    interface: TypeId,
    out: &mut Vec<TypeId>,
) -> Result<()> {
    let def = universe.get(interface)?;
    out.push(interface);
    for parent in &def.interfaces {
        push_interface_chain(universe, *parent, out)?;
    }
    Ok(())
}

fn dedup_preserving_order(chain: &mut Vec<TypeId>) {
    let mut seen = std::collections::HashSet::with_capacity(chain.len());
    chain.retain(|id| seen.insert(*id));
}
