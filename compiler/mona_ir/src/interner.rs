//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked to
//! `'static`; the interner lives for the whole annotation round, so the
//! leak is bounded by the source being processed.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

struct InternInner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

impl InternInner {
    fn with_empty() -> Self {
        let mut inner = InternInner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Pre-intern empty string at index 0 so Name::EMPTY resolves.
        let empty: &'static str = "";
        inner.map.insert(empty, 0);
        inner.strings.push(empty);
        inner
    }
}

/// String interner with O(1) lookup and equality comparison.
///
/// # Thread Safety
/// Uses an `RwLock` so a `SharedInterner` can be handed to the host
/// toolchain's pass pipeline without further synchronization.
pub struct StringInterner {
    inner: RwLock<InternInner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        StringInterner {
            inner: RwLock::new(InternInner::with_empty()),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same content twice returns the same name.
    pub fn intern(&self, s: &str) -> Name {
        {
            let inner = self.inner.read();
            if let Some(&idx) = inner.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut inner = self.inner.write();
        // Re-check under the write lock; another caller may have won.
        if let Some(&idx) = inner.map.get(s) {
            return Name::from_raw(idx);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(inner.strings.len())
            .unwrap_or_else(|_| panic!("interner capacity exceeded: {} strings", inner.strings.len()));
        inner.map.insert(leaked, idx);
        inner.strings.push(leaked);
        Name::from_raw(idx)
    }

    /// Resolve a name back to its string content.
    ///
    /// # Panics
    /// Panics if the name was produced by a different interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let inner = self.inner.read();
        inner.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap-clone handle to a shared `StringInterner`.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a fresh interner behind a shared handle.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
