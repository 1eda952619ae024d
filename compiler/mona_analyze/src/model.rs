//! Validated analysis results: `MonadType`, `MonadicSpec`, and the
//! generated-declaration registry.

use mona_ir::{AnnotationReader, ElementId, Ty};

/// The resolved inner monad of a wrapper declaration.
///
/// Owned exclusively by the `MonadicSpec` that wraps it; never mutated
/// after construction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MonadType {
    /// The resolved generic element. Its arity is exactly the host
    /// declaration's arity plus one.
    pub element: ElementId,
    /// The concrete parameterized type as written on the wrapper interface,
    /// e.g. `Either<L, T>`.
    pub applied: Ty,
}

impl MonadType {
    /// Pair a resolved element with its declared application.
    pub fn new(element: ElementId, applied: Ty) -> Self {
        MonadType { element, applied }
    }
}

/// The validated unit handed to the generator.
///
/// Constructed only for declarations that passed every analyzer check.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MonadicSpec {
    /// The host wrapper declaration.
    pub host: ElementId,
    /// Its resolved inner monad.
    pub monad: MonadType,
    /// The original annotation payload (naming template etc.).
    pub annotation: AnnotationReader,
}

impl MonadicSpec {
    /// Create a spec for a fully validated declaration.
    pub fn new(host: ElementId, monad: MonadType, annotation: AnnotationReader) -> Self {
        MonadicSpec {
            host,
            monad,
            annotation,
        }
    }
}

/// Tracks declarations for which companion source will be emitted.
///
/// The emitter reads this after the pipeline has run; the analyzer only
/// appends to it.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct GeneratedRegistry {
    targets: Vec<(ElementId, AnnotationReader)>,
}

impl GeneratedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration as a generation target.
    pub fn register(&mut self, element: ElementId, annotation: AnnotationReader) {
        self.targets.push((element, annotation));
    }

    /// All registered targets, in registration order.
    pub fn targets(&self) -> &[(ElementId, AnnotationReader)] {
        &self.targets
    }

    /// Whether the declaration has been registered.
    pub fn contains(&self, element: ElementId) -> bool {
        self.targets.iter().any(|(e, _)| *e == element)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets have been registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
