//! Companion-source generation for the Mona annotation processor.
//!
//! Consumes the validated `MonadicSpec`s the analyzer produced and emits,
//! per host declaration, one companion class implementing map/flatMap-style
//! desugaring for for-comprehension syntax over the wrapper type.
//!
//! # Architecture
//!
//! ```text
//! Vec<MonadicSpec>
//!        ↓
//!   CodegenContext   (indent-aware source writer)
//!        ↓
//!    companion       (emit one companion class per spec)
//!        ↓
//!   CodegenResult    (generated files + any errors)
//! ```
//!
//! Generation is pure assembly from the validated model; no inference
//! happens here.

pub mod companion;
mod context;

pub use companion::{generate, generate_all};
pub use context::CodegenContext;

/// One generated companion source file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GeneratedFile {
    /// Simple name of the generated class.
    pub class_name: String,
    /// Package the file belongs to (`None` for the default package).
    pub package: Option<String>,
    /// Full source text.
    pub code: String,
}

/// Result of code generation over a spec sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodegenResult {
    /// Generated files, in spec order.
    pub files: Vec<GeneratedFile>,
    /// Errors encountered during generation.
    pub errors: Vec<CodegenError>,
    /// Whether every spec generated cleanly.
    pub success: bool,
}

impl CodegenResult {
    /// Check if generation failed for any spec.
    pub fn has_errors(&self) -> bool {
        !self.success || !self.errors.is_empty()
    }
}

/// A code generation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// The companion's qualified name already names a declaration.
    #[error("generated companion `{name}` collides with an existing declaration")]
    NameCollision { name: String },
}
