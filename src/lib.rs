// Copyright 2025 symscope contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
#![deny(unsafe_code)]

//! # symscope
//!
//! The override-wrapper and model-assembly subsystem of a symbolic-execution test
//! generator for JVM bytecode. Standard-library types that cannot be executed
//! symbolically (collections, optionals, streams, threads) are substituted with shadow
//! reimplementations; this crate owns the per-type override handlers that intercept
//! calls on those shadows during exploration and, once a path concludes, convert the
//! finalized symbolic objects into deferred construction plans a test printer can
//! lower to source code.
//!
//! ## Architecture
//!
//! - [`types`] - the loaded type universe, memoized hierarchy queries, and canonical
//!   field-chunk resolution across shadow substitution
//! - [`heap`] - symbolic addresses, objects, and finalized per-state heap snapshots
//! - [`model`] - the construction-plan language ([`model::AssembleModel`]) and
//!   display-name issuance
//! - [`wrappers`] - the override handlers themselves, their interception contract,
//!   and the exact-type registry binding receiver types to handlers
//! - [`resolver`] - the read-only boundary through which wrappers observe a finalized
//!   heap
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use symscope::prelude::*;
//!
//! // Load the types the analyzed program touches, shadows included.
//! let universe = Arc::new(TypeUniverse::new());
//! let thread = universe.load_class("java.lang.Thread", None, vec![], &["target"])?;
//! universe.load_shadow("symscope.overrides.ShadowThread", thread, None, &["target"])?;
//!
//! // Bind override handlers and look one up at dispatch time.
//! let registry = OverrideRegistry::standard(&universe);
//! assert_eq!(registry.lookup(thread), Some(Wrapper::Thread));
//!
//! // Materialize a finalized object into a construction plan.
//! let hierarchy = HierarchyIndex::new(universe.clone());
//! let snapshot = HeapSnapshot::new();
//! let namer = ModelNamer::new();
//! let ctx = EmitContext::new(&snapshot, &hierarchy, &namer);
//!
//! let allocator = AddressAllocator::new();
//! let object = SymbolicObject::new(allocator.next_address(), thread);
//! let plan = Wrapper::Thread.value(&ctx, &object)?;
//! assert_eq!(plan.class_id().name(), "java.lang.Thread");
//! # Ok::<(), symscope::Error>(())
//! ```

pub(crate) mod error;

pub mod heap;
pub mod model;
pub mod prelude;
pub mod resolver;
pub mod types;
pub mod wrappers;

#[cfg(test)]
pub(crate) mod test;

pub use error::Error;

/// Result type alias for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
