use pretty_assertions::assert_eq;

use mona_analyze::{MonadType, MonadicSpec};
use mona_ir::{
    AnnotationReader, ElementId, ElementKind, Span, StringInterner, SymbolTable, Ty, TypeElement,
};

use super::*;

struct Fixture {
    interner: StringInterner,
    symbols: SymbolTable,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            symbols: SymbolTable::new(),
        }
    }

    fn class(&mut self, qualified: &str, type_params: &[&str]) -> ElementId {
        let simple = qualified.rsplit('.').next().unwrap_or(qualified);
        self.symbols.insert(TypeElement {
            name: self.interner.intern(simple),
            qualified: self.interner.intern(qualified),
            kind: ElementKind::Class,
            type_params: type_params.iter().map(|p| self.interner.intern(p)).collect(),
            interfaces: Vec::new(),
            span: Span::DUMMY,
        })
    }

    fn spec(&self, host: ElementId, monad: ElementId) -> MonadicSpec {
        let monad_element = self.symbols.element(monad);
        let applied = Ty::declared(monad_element.qualified);
        MonadicSpec::new(
            host,
            MonadType::new(monad, applied),
            AnnotationReader::new(Span::DUMMY),
        )
    }
}

#[test]
fn generates_companion_with_comprehension_surface() {
    let mut f = Fixture::new();
    let either = f.class("com.example.Either", &["L", "R"]);
    let host = f.class("com.example.Box", &["L"]);

    let file = generate(&f.spec(host, either), &f.symbols, &f.interner)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(file.class_name, "BoxFor");
    assert_eq!(file.package.as_deref(), Some("com.example"));
    assert!(file.code.contains("package com.example;"));
    assert!(file.code.contains("public final class BoxFor<L, A> {"));
    assert!(file.code.contains("private final com.example.Either<L, A> value;"));
    assert!(file.code.contains("value.flatMap(step)"));
    assert!(file.code.contains("value.map(step)"));
    assert!(file.code.contains("value.filter(predicate)"));
    assert!(file.code.contains("public com.example.Either<L, A> yield() {"));
}

#[test]
fn arity_zero_host_uses_single_slot() {
    let mut f = Fixture::new();
    let maybe = f.class("m.Maybe", &["A"]);
    let host = f.class("m.Box", &[]);

    let file = generate(&f.spec(host, maybe), &f.symbols, &f.interner)
        .unwrap_or_else(|e| panic!("{e}"));

    assert!(file.code.contains("public final class BoxFor<A> {"));
    assert!(file.code.contains("public static <A> BoxFor<A> forComp(m.Maybe<A> starting) {"));
}

#[test]
fn slot_name_avoids_host_parameters() {
    let mut f = Fixture::new();
    let monad = f.class("m.State", &["A", "B"]);
    let host = f.class("m.Box", &["A"]);

    let file = generate(&f.spec(host, monad), &f.symbols, &f.interner)
        .unwrap_or_else(|e| panic!("{e}"));

    // Host already uses `A`, so the bound-value slot moves to `B` and the
    // mapped slot to `C`.
    assert!(file.code.contains("public final class BoxFor<A, B> {"));
    assert!(file.code.contains("public <C> BoxFor<A, C> letComp"));
}

#[test]
fn annotation_naming_template_is_honored() {
    let mut f = Fixture::new();
    let maybe = f.class("m.Maybe", &["A"]);
    let host = f.class("m.Box", &[]);
    let mut spec = f.spec(host, maybe);
    spec.annotation = AnnotationReader::new(Span::DUMMY)
        .with_prefix("Gen")
        .with_suffix("Comp");

    let file = generate(&spec, &f.symbols, &f.interner).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(file.class_name, "GenBoxComp");
    assert!(file.code.contains("public final class GenBoxComp<A> {"));
}

#[test]
fn default_package_omits_package_line() {
    let mut f = Fixture::new();
    let maybe = f.class("Maybe", &["A"]);
    let host = f.class("Box", &[]);

    let file = generate(&f.spec(host, maybe), &f.symbols, &f.interner)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(file.package, None);
    assert!(!file.code.contains("package "));
}

#[test]
fn collision_with_existing_declaration_is_an_error() {
    let mut f = Fixture::new();
    let maybe = f.class("m.Maybe", &["A"]);
    let host = f.class("m.Box", &[]);
    f.class("m.BoxFor", &[]);

    let err = generate(&f.spec(host, maybe), &f.symbols, &f.interner);
    assert_eq!(
        err,
        Err(CodegenError::NameCollision {
            name: "m.BoxFor".to_owned()
        })
    );
}

#[test]
fn generate_all_aggregates_and_preserves_order() {
    let mut f = Fixture::new();
    let maybe = f.class("m.Maybe", &["A"]);
    let first = f.class("m.First", &[]);
    let clash = f.class("m.Clash", &[]);
    f.class("m.ClashFor", &[]);
    let last = f.class("m.Last", &[]);

    let specs = vec![
        f.spec(first, maybe),
        f.spec(clash, maybe),
        f.spec(last, maybe),
    ];
    let result = generate_all(&specs, &f.symbols, &f.interner);

    assert!(result.has_errors());
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    let names: Vec<&str> = result
        .files
        .iter()
        .map(|file| file.class_name.as_str())
        .collect();
    assert_eq!(names, vec!["FirstFor", "LastFor"]);
}
