//! Monadic wrapper analysis for the Mona annotation processor.
//!
//! This crate is the core of the pipeline. Given the work items collected
//! from `@MonadicFor`-annotated declarations, it infers which concrete
//! monad each wrapper class wraps, validates the wrapper's shape, and
//! produces the validated `MonadicSpec`s the generator consumes.
//!
//! # Pipeline Position
//!
//! ```text
//! Collector → **Analyzer** → Generator → Emitter
//! ```
//!
//! A wrapper class declares its monad by implementing the wrapper marker
//! interface with one concrete type argument:
//!
//! ```text
//! @MonadicFor
//! class EitherFor<L> implements MonadicForWrapper<Either<L, T>> { ... }
//! ```
//!
//! The analyzer accepts the declaration only when the argument resolves to
//! a declared type whose arity is exactly the host's arity plus one; the
//! extra slot is the bound value comprehension desugaring threads through
//! map/flatMap.

mod analyze;
mod env;
mod model;
mod work_item;

pub use analyze::{analyze, WRAPPER_MARKER};
pub use env::Environment;
pub use model::{GeneratedRegistry, MonadType, MonadicSpec};
pub use work_item::WorkItem;
