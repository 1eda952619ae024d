//! The analyzer pass: wrapper-shape validation and monad inference.
//!
//! Per work item:
//! 1. Reject interfaces outright (E1001).
//! 2. Scan the declaration's directly implemented interfaces in declaration
//!    order, comparing each erasure against the wrapper marker's erasure.
//! 3. A marker match must carry exactly one class-like type argument
//!    (E1002 otherwise) that resolves to a declared element with host
//!    arity + 1 type parameters (E1003 otherwise). Shape failures skip the
//!    candidate; the scan continues.
//! 4. The first structurally complete match wins. A declaration with no
//!    marker interface at all is dropped silently: the annotation may
//!    legitimately feed other generators.
//!
//! The pass never aborts. Diagnostics accumulate in the environment, and
//! whatever specs validated are handed to the generator in input order.

use mona_diagnostic::{
    argument_not_monadic, cannot_apply_to_interface, wrapper_needs_class_argument, ErrorGuaranteed,
};
use mona_ir::{Ty, TypeElement};

use crate::{Environment, MonadType, MonadicSpec, WorkItem};

/// Qualified name of the wrapper marker interface.
pub const WRAPPER_MARKER: &str = "mona.comprehension.MonadicForWrapper";

/// Outcome of inspecting one implemented interface.
enum Candidate {
    /// Structurally complete match: the wrapper's inner monad.
    Matched(MonadType),
    /// Marker matched but the shape is wrong; diagnostic already reported.
    /// The scan continues with the next interface.
    Shape(ErrorGuaranteed),
    /// Not the wrapper marker at all.
    NoMatch,
}

/// Analyze collected work items, yielding validated monadic specs.
///
/// Diagnostics for rejected items accumulate in `env`; output order follows
/// input order. Whether accumulated errors fail the build is the caller's
/// policy (`env.diagnostics().has_errors()`).
#[tracing::instrument(level = "debug", skip_all, fields(items = work_items.len()))]
pub fn analyze(work_items: Vec<WorkItem>, env: &mut Environment<'_>) -> Vec<MonadicSpec> {
    let mut specs = Vec::with_capacity(work_items.len());
    for item in work_items {
        if let Some(spec) = analyze_item(item, env) {
            specs.push(spec);
        }
    }
    tracing::debug!(specs = specs.len(), "analysis complete");
    specs
}

/// Validate one work item; `None` means rejected or no marker present.
fn analyze_item(item: WorkItem, env: &mut Environment<'_>) -> Option<MonadicSpec> {
    let host = env.element(item.element);

    if !host.is_class() {
        let name = env.name_str(host.qualified);
        env.report_error(cannot_apply_to_interface(host.span, name));
        return None;
    }

    // First match in declaration order wins; later matching interfaces are
    // deliberately ignored rather than diagnosed as ambiguous.
    let mut found = None;
    for interface in &host.interfaces {
        match inspect_candidate(host, interface, env) {
            Candidate::Matched(monad) => {
                found = Some(monad);
                break;
            }
            // Shape failures were already reported; try the next interface.
            Candidate::Shape(_guarantee) => {}
            Candidate::NoMatch => {}
        }
    }

    let monad = found?;
    tracing::debug!(
        host = env.name_str(host.qualified),
        monad = %monad.applied.display(env.interner()),
        "wrapper validated"
    );
    env.register_generated(item.element, item.annotation.clone());
    Some(MonadicSpec::new(item.element, monad, item.annotation))
}

/// Inspect one directly implemented interface of `host`.
fn inspect_candidate(host: &TypeElement, candidate: &Ty, env: &mut Environment<'_>) -> Candidate {
    let erasure = env.erase(candidate);
    if !env.is_same_type(&erasure, env.wrapper_marker()) {
        return Candidate::NoMatch;
    }

    // Marker matched: it must name the wrapped monad as a single concrete
    // class-like argument. A raw marker or a variable/primitive/array
    // argument is a shape error, not a disqualification of the whole item.
    let args = candidate.args();
    if args.len() != 1 || !args[0].is_class_like() {
        let host_name = env.name_str(host.qualified);
        let guarantee = env.report_error(wrapper_needs_class_argument(host.span, host_name));
        return Candidate::Shape(guarantee);
    }

    let monad_ty = &args[0];
    let erased = env.erase(monad_ty);
    let resolved = erased.qualified().and_then(|q| env.lookup_qualified(q));

    match resolved {
        Some(element) if env.element(element).arity() == host.arity() + 1 => {
            Candidate::Matched(MonadType::new(element, monad_ty.clone()))
        }
        _ => {
            tracing::trace!(
                host = env.name_str(host.qualified),
                "candidate argument failed monad-shape check"
            );
            let shown = monad_ty.display(env.interner());
            let guarantee = env.report_error(argument_not_monadic(host.span, &shown));
            Candidate::Shape(guarantee)
        }
    }
}
