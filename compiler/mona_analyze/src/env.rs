//! The analysis environment: type-system queries plus the diagnostic and
//! registration side channels, threaded explicitly through the pass.

use mona_diagnostic::{Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use mona_ir::{
    AnnotationReader, ElementId, Name, SharedInterner, StringInterner, SymbolTable, Ty, TypeElement,
};

use crate::{GeneratedRegistry, WRAPPER_MARKER};

/// Injected collaborator for one annotation round.
///
/// Read-only type-system queries over the materialized symbol table, plus
/// the two append-only side channels: the diagnostic queue and the
/// generated-declaration registry. Never ambient; every pass receives it
/// by reference.
pub struct Environment<'a> {
    symbols: &'a SymbolTable,
    interner: &'a SharedInterner,
    diagnostics: DiagnosticQueue,
    generated: GeneratedRegistry,
    /// Erasure of the wrapper marker interface, resolved once at startup.
    wrapper_marker: Ty,
}

impl<'a> Environment<'a> {
    /// Create an environment for one annotation round.
    ///
    /// Resolves the wrapper marker's erasure eagerly; the marker is a fixed
    /// well-known interface, so this never fails.
    pub fn new(symbols: &'a SymbolTable, interner: &'a SharedInterner) -> Self {
        let marker = interner.intern(WRAPPER_MARKER);
        Environment {
            symbols,
            interner,
            diagnostics: DiagnosticQueue::new(),
            generated: GeneratedRegistry::new(),
            wrapper_marker: Ty::declared(marker),
        }
    }

    /// Replace the default diagnostic queue (custom limits for testing).
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticQueue) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The type with all generic type arguments stripped.
    pub fn erase(&self, ty: &Ty) -> Ty {
        ty.erasure()
    }

    /// Type-identity comparison (callers erase first when they want
    /// parameterization-independent identity).
    pub fn is_same_type(&self, a: &Ty, b: &Ty) -> bool {
        a == b
    }

    /// Symbol-table lookup by qualified name.
    pub fn lookup_qualified(&self, qualified: Name) -> Option<ElementId> {
        self.symbols.lookup_qualified(qualified)
    }

    /// Get a declaration by id. The returned reference borrows the symbol
    /// table, not the environment.
    pub fn element(&self, id: ElementId) -> &'a TypeElement {
        self.symbols.element(id)
    }

    /// Resolve a name to its string content.
    pub fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// The interner backing this round's names.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Erasure of the wrapper marker interface.
    pub fn wrapper_marker(&self) -> &Ty {
        &self.wrapper_marker
    }

    /// Report an error against a declaration, with proof it was recorded.
    pub fn report_error(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        self.diagnostics.emit_error(diagnostic)
    }

    /// Register a declaration as a generation target for the emitter.
    pub fn register_generated(&mut self, element: ElementId, annotation: AnnotationReader) {
        self.generated.register(element, annotation);
    }

    /// The diagnostic queue (read-only access for callers' policy checks).
    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// The generated-declaration registry.
    pub fn generated(&self) -> &GeneratedRegistry {
        &self.generated
    }

    /// Tear down into the side channels the caller owns afterwards.
    pub fn finish(self) -> (DiagnosticQueue, GeneratedRegistry) {
        (self.diagnostics, self.generated)
    }
}
