//! Companion-class emission.
//!
//! For a validated wrapper declaration, emits one companion class exposing
//! the for-comprehension surface: a static entry point, a flatMap-backed
//! bind step, a map-backed let step, a filter step, and a terminal yield.
//! The extra type slot of the inner monad (host arity + 1) is the bound
//! value threaded through the chain.

use mona_analyze::MonadicSpec;
use mona_ir::{StringInterner, SymbolTable, TypeElement};

use crate::{CodegenContext, CodegenError, CodegenResult, GeneratedFile};

/// Candidate names for the bound-value type slots, tried in order.
const SLOT_CANDIDATES: [&str; 8] = ["A", "B", "C", "D", "T", "U", "V", "W"];

/// Generate companion files for every spec, aggregating errors.
///
/// Never aborts: a failing spec contributes an error, the rest still
/// generate. File order follows spec order.
pub fn generate_all(
    specs: &[MonadicSpec],
    symbols: &SymbolTable,
    interner: &StringInterner,
) -> CodegenResult {
    let mut result = CodegenResult::default();
    for spec in specs {
        match generate(spec, symbols, interner) {
            Ok(file) => result.files.push(file),
            Err(err) => result.errors.push(err),
        }
    }
    result.success = result.errors.is_empty();
    result
}

/// Generate the companion source for one validated spec.
pub fn generate(
    spec: &MonadicSpec,
    symbols: &SymbolTable,
    interner: &StringInterner,
) -> Result<GeneratedFile, CodegenError> {
    let host = symbols.element(spec.host);
    let monad = symbols.element(spec.monad.element);

    let host_name = interner.lookup(host.name);
    let class_name = spec.annotation.companion_name(host_name);
    let package = host.package(interner);

    let qualified = match &package {
        Some(pkg) => format!("{pkg}.{class_name}"),
        None => class_name.clone(),
    };
    if symbols.lookup_qualified(interner.intern(&qualified)).is_some() {
        return Err(CodegenError::NameCollision { name: qualified });
    }

    let mut ctx = CodegenContext::new(interner);
    emit_class(&mut ctx, host, monad, host_name, &class_name, package.as_deref());

    Ok(GeneratedFile {
        class_name,
        package,
        code: ctx.finish(),
    })
}

fn emit_class(
    ctx: &mut CodegenContext<'_>,
    host: &TypeElement,
    monad: &TypeElement,
    host_name: &str,
    class_name: &str,
    package: Option<&str>,
) {
    let host_params: Vec<&str> = host
        .type_params
        .iter()
        .map(|p| ctx.resolve_name(*p))
        .collect();
    let (slot, next_slot) = pick_slot_names(&host_params);
    let monad_name = ctx.resolve_name(monad.qualified).to_owned();

    // `Box<L>` wrapping `Either<L, T>` renders as `Either<L, A>` with the
    // extra slot substituted for the bound value.
    let monad_of = |value: &str| -> String {
        let mut args: Vec<&str> = host_params.clone();
        args.push(value);
        format!("{monad_name}<{}>", args.join(", "))
    };
    let class_of = |value: &str| -> String {
        let mut args: Vec<&str> = host_params.clone();
        args.push(value);
        format!("{class_name}<{}>", args.join(", "))
    };
    let generics_with = |value: &str| -> String {
        let mut args: Vec<&str> = host_params.clone();
        args.push(value);
        format!("<{}>", args.join(", "))
    };

    ctx.writeln("// Generated by mona. Do not edit.");
    if let Some(pkg) = package {
        ctx.writeln(&format!("package {pkg};"));
    }
    ctx.newline();
    ctx.writeln("/**");
    ctx.writeln(&format!(
        " * For-comprehension support for {{@link {host_name}}}."
    ));
    ctx.writeln(" */");
    ctx.writeln(&format!(
        "public final class {class_name}{} {{",
        generics_with(&slot)
    ));
    ctx.indent();

    ctx.writeln(&format!("private final {} value;", monad_of(&slot)));
    ctx.newline();
    ctx.writeln(&format!("private {class_name}({} value) {{", monad_of(&slot)));
    ctx.indent();
    ctx.writeln("this.value = value;");
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();

    // Entry point.
    ctx.writeln("/** Start a comprehension from an initial monadic value. */");
    ctx.writeln(&format!(
        "public static {} {} forComp({} starting) {{",
        generics_with(&slot),
        class_of(&slot),
        monad_of(&slot)
    ));
    ctx.indent();
    ctx.writeln(&format!("return new {class_name}<>(starting);"));
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();

    // Bind step: desugars to flatMap.
    ctx.writeln("/** Bind the next monadic step. Desugars to flatMap. */");
    ctx.writeln(&format!(
        "public <{next_slot}> {} forComp(java.util.function.Function<? super {slot}, ? extends {}> step) {{",
        class_of(&next_slot),
        monad_of(&next_slot)
    ));
    ctx.indent();
    ctx.writeln(&format!("return new {class_name}<>(value.flatMap(step));"));
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();

    // Let step: desugars to map.
    ctx.writeln("/** Introduce a derived value. Desugars to map. */");
    ctx.writeln(&format!(
        "public <{next_slot}> {} letComp(java.util.function.Function<? super {slot}, ? extends {next_slot}> step) {{",
        class_of(&next_slot)
    ));
    ctx.indent();
    ctx.writeln(&format!("return new {class_name}<>(value.map(step));"));
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();

    // Guard step.
    ctx.writeln("/** Keep only values matching the predicate. */");
    ctx.writeln(&format!(
        "public {} filter(java.util.function.Predicate<? super {slot}> predicate) {{",
        class_of(&slot)
    ));
    ctx.indent();
    ctx.writeln(&format!("return new {class_name}<>(value.filter(predicate));"));
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();

    // Terminal.
    ctx.writeln("/** Finish the comprehension, yielding the underlying monadic value. */");
    ctx.writeln(&format!("public {} yield() {{", monad_of(&slot)));
    ctx.indent();
    ctx.writeln("return value;");
    ctx.dedent();
    ctx.writeln("}");

    ctx.dedent();
    ctx.writeln("}");
}

/// Pick two fresh type-variable names that do not collide with the host's
/// own type parameters.
fn pick_slot_names(host_params: &[&str]) -> (String, String) {
    let mut fresh = SLOT_CANDIDATES
        .iter()
        .filter(|c| !host_params.contains(*c))
        .map(|c| (*c).to_owned());
    // Eight candidates against at most a handful of host parameters; the
    // fallback suffixes keep this total for pathological declarations.
    let first = fresh
        .next()
        .unwrap_or_else(|| format!("A{}", host_params.len()));
    let second = fresh
        .next()
        .unwrap_or_else(|| format!("B{}", host_params.len()));
    (first, second)
}

#[cfg(test)]
mod tests;
