//! Mona IR - the model the annotation processor operates on.
//!
//! This crate contains the core data structures shared by every Mona pass:
//! - Spans for source locations
//! - Names for interned identifiers (qualified and simple)
//! - The element/type model handed over by the host toolchain's front end
//!   (`TypeElement`, `Ty`, `SymbolTable`)
//! - The `@MonadicFor` annotation payload (`AnnotationReader`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: declarations live in a table, referenced by
//!   `ElementId(u32)` indices
//! - Every type is Clone + Eq + Hash so pass results can be compared and
//!   memoized by the host toolchain

mod annotation;
mod element;
mod interner;
mod name;
mod span;
mod symbol;

pub use annotation::AnnotationReader;
pub use element::{ElementKind, Primitive, Ty, TypeElement};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use symbol::{ElementId, SymbolTable};
