//! `@MonadicFor` annotation payload.

use crate::Span;

/// Configuration values declared on a `@MonadicFor` annotation.
///
/// Carried through analysis untouched; the generator reads the naming
/// template when it names the companion class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotationReader {
    /// Location of the annotation itself.
    pub span: Span,
    /// Prepended to the host class name when naming the companion.
    pub prefix: String,
    /// Appended to the host class name when naming the companion.
    pub suffix: String,
}

impl AnnotationReader {
    /// Payload with default naming (`Box` generates `BoxFor`).
    pub fn new(span: Span) -> Self {
        AnnotationReader {
            span,
            prefix: String::new(),
            suffix: "For".to_owned(),
        }
    }

    /// Override the companion-name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the companion-name suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Name of the generated companion class for the given host class name.
    pub fn companion_name(&self, base: &str) -> String {
        format!("{}{base}{}", self.prefix, self.suffix)
    }
}

impl Default for AnnotationReader {
    fn default() -> Self {
        Self::new(Span::DUMMY)
    }
}
