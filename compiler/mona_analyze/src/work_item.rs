//! Work items: one annotated declaration queued for analysis.

use mona_ir::{AnnotationReader, ElementId};

/// One `@MonadicFor`-annotated declaration awaiting analysis.
///
/// Created by the collector, consumed exactly once by the analyzer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WorkItem {
    /// The annotated declaration.
    pub element: ElementId,
    /// Raw annotation payload, carried through to the generator.
    pub annotation: AnnotationReader,
}

impl WorkItem {
    /// Create a work item for an annotated declaration.
    pub fn new(element: ElementId, annotation: AnnotationReader) -> Self {
        WorkItem {
            element,
            annotation,
        }
    }
}
