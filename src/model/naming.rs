//! Display-name issuance for construction plans.

use std::fmt;

use dashmap::DashMap;

/// Issues distinct source-level display names per base name.
///
/// The first request for a base yields the bare base (`stream`), later requests get a
/// numeric suffix (`stream2`, `stream3`, ...). Counters are run-scoped state threaded
/// explicitly through the emission stage, never a process global, so unit tests and
/// parallel runs stay isolated and reproducible.
///
/// Names are *not* a pure function of an object's address: materializing the same
/// object twice yields two differently named plans. Callers that need stable identity
/// across call sites must memoize plan results per address themselves.
///
/// # Examples
///
/// ```rust
/// use symscope::model::ModelNamer;
///
/// let namer = ModelNamer::new();
/// assert_eq!(namer.next("stream"), "stream");
/// assert_eq!(namer.next("stream"), "stream2");
/// assert_eq!(namer.next("list"), "list");
/// ```
#[derive(Default)]
pub struct ModelNamer {
    counters: DashMap<String, u64>,
}

impl ModelNamer {
    /// Creates a namer with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next name for `base`.
    #[must_use]
    pub fn next(&self, base: &str) -> String {
        let mut entry = self.counters.entry(base.to_string()).or_insert(0);
        *entry += 1;
        let issued = *entry;
        drop(entry);

        if issued == 1 {
            base.to_string()
        } else {
            format!("{base}{issued}")
        }
    }
}

impl fmt::Debug for ModelNamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelNamer")
            .field("base_count", &self.counters.len())
            .finish()
    }
}
