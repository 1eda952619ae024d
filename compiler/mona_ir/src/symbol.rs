//! Symbol table: declared elements indexed by qualified name.

use rustc_hash::FxHashMap;

use crate::{Name, TypeElement};

/// Index of a `TypeElement` in the symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct ElementId(u32);

impl ElementId {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the element table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// All declared types visible to one annotation round.
///
/// Built by the front end, read-only during analysis. Lookup by qualified
/// name is how the analyzer resolves a wrapper's inner monad.
#[derive(Default)]
pub struct SymbolTable {
    elements: Vec<TypeElement>,
    by_qualified: FxHashMap<Name, ElementId>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, returning its id.
    ///
    /// A later insert with the same qualified name shadows the earlier one
    /// in lookups; the earlier element stays addressable by id.
    pub fn insert(&mut self, element: TypeElement) -> ElementId {
        let id = ElementId(
            u32::try_from(self.elements.len())
                .unwrap_or_else(|_| panic!("symbol table capacity exceeded")),
        );
        self.by_qualified.insert(element.qualified, id);
        self.elements.push(element);
        id
    }

    /// Get an element by id.
    ///
    /// # Panics
    /// Panics if the id came from a different table.
    pub fn element(&self, id: ElementId) -> &TypeElement {
        &self.elements[id.index()]
    }

    /// Look up a declaration by its qualified name.
    pub fn lookup_qualified(&self, qualified: Name) -> Option<ElementId> {
        self.by_qualified.get(&qualified).copied()
    }

    /// Number of declarations in the table.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &TypeElement)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementId(i as u32), e))
    }
}
