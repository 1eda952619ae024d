//! Diagnostic types: severity, labels, and the diagnostic builder.

use std::fmt;

use mona_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with all context needed for a useful message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Labeled spans showing where the problem is.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Suggestion for how to fix.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Diagnostic::error(code, message)
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a help suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `@MonadicFor` was placed on an interface declaration.
pub fn cannot_apply_to_interface(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(
        ErrorCode::E1001,
        format!("@MonadicFor cannot be applied to interfaces: `{name}`"),
    )
    .with_label(Label::primary(span, "annotated interface declared here"))
    .with_help("apply @MonadicFor to a class implementing MonadicForWrapper")
}

/// The wrapper marker was raw or parameterized with a non-class argument.
pub fn wrapper_needs_class_argument(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(
        ErrorCode::E1002,
        format!("MonadicForWrapper must be parameterized with a class type: `{name}`"),
    )
    .with_label(Label::primary(span, "wrapper interface declared here"))
    .with_help("declare the wrapped monad explicitly, e.g. `MonadicForWrapper<Either<L, T>>`")
}

/// The wrapper argument could not be resolved, or its arity is wrong.
pub fn argument_not_monadic(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(
        ErrorCode::E1003,
        format!("MonadicForWrapper argument is not monadic: `{name}`"),
    )
    .with_label(Label::primary(span, "wrapper interface declared here"))
    .with_note("the wrapped type needs exactly one more type parameter than the wrapper class")
}
