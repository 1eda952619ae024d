//! Property-based tests for the analyzer.
//!
//! These generate random symbol tables and verify:
//! 1. Idempotence: analyzing the same input twice (fresh environments)
//!    yields identical spec sequences
//! 2. Output never exceeds input, and preserves input order
//! 3. Every accepted spec satisfies the arity invariant
//!    (monad arity = host arity + 1)

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use smallvec::SmallVec;

use mona_analyze::{analyze, Environment, MonadicSpec, WorkItem, WRAPPER_MARKER};
use mona_ir::{
    AnnotationReader, ElementId, ElementKind, SharedInterner, Span, SymbolTable, Ty, TypeElement,
};

/// The shapes a generated host declaration can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HostShape {
    /// Arity-1 class implementing the marker with `Either<L, T>` (valid).
    ValidEither,
    /// Arity-0 class implementing the marker with `Maybe<T>` (valid).
    ValidMaybe,
    /// Class implementing the raw, unparameterized marker.
    RawMarker,
    /// Class whose marker argument is a type variable.
    VarArgument,
    /// Arity-1 class whose marker argument `List<T>` has arity 1, not 2.
    WrongArity,
    /// Class implementing no marker interface at all.
    NoMarker,
    /// An interface rather than a class.
    Interface,
}

impl HostShape {
    fn is_valid(self) -> bool {
        matches!(self, HostShape::ValidEither | HostShape::ValidMaybe)
    }
}

fn host_shape_strategy() -> impl Strategy<Value = HostShape> {
    prop_oneof![
        Just(HostShape::ValidEither),
        Just(HostShape::ValidMaybe),
        Just(HostShape::RawMarker),
        Just(HostShape::VarArgument),
        Just(HostShape::WrongArity),
        Just(HostShape::NoMarker),
        Just(HostShape::Interface),
    ]
}

struct Universe {
    interner: SharedInterner,
    symbols: SymbolTable,
    items: Vec<WorkItem>,
}

fn declare(
    interner: &SharedInterner,
    symbols: &mut SymbolTable,
    qualified: &str,
    kind: ElementKind,
    type_params: &[&str],
    interfaces: Vec<Ty>,
) -> ElementId {
    let simple = qualified.rsplit('.').next().unwrap();
    let params: SmallVec<[_; 4]> = type_params.iter().map(|p| interner.intern(p)).collect();
    symbols.insert(TypeElement {
        name: interner.intern(simple),
        qualified: interner.intern(qualified),
        kind,
        type_params: params,
        interfaces,
        span: Span::DUMMY,
    })
}

/// Build a symbol table and work-item list from generated host shapes.
fn build_universe(shapes: &[HostShape]) -> Universe {
    let interner = SharedInterner::new();
    let mut symbols = SymbolTable::new();

    declare(&interner, &mut symbols, "m.Either", ElementKind::Class, &["L", "R"], vec![]);
    declare(&interner, &mut symbols, "m.Maybe", ElementKind::Class, &["A"], vec![]);
    declare(&interner, &mut symbols, "m.List", ElementKind::Class, &["E"], vec![]);

    let marker = interner.intern(WRAPPER_MARKER);
    let wrapper = |arg: Option<Ty>| Ty::Declared {
        qualified: marker,
        args: arg.into_iter().collect(),
    };
    let var = |name: &str| Ty::Var(interner.intern(name));

    let mut items = Vec::with_capacity(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        let qualified = format!("hosts.H{i}");
        let (kind, params, interfaces): (_, &[&str], Vec<Ty>) = match shape {
            HostShape::ValidEither => (
                ElementKind::Class,
                &["L"],
                vec![wrapper(Some(Ty::parameterized(
                    interner.intern("m.Either"),
                    vec![var("L"), var("T")],
                )))],
            ),
            HostShape::ValidMaybe => (
                ElementKind::Class,
                &[],
                vec![wrapper(Some(Ty::parameterized(
                    interner.intern("m.Maybe"),
                    vec![var("T")],
                )))],
            ),
            HostShape::RawMarker => (ElementKind::Class, &["T"], vec![wrapper(None)]),
            HostShape::VarArgument => {
                (ElementKind::Class, &["T"], vec![wrapper(Some(var("T")))])
            }
            HostShape::WrongArity => (
                ElementKind::Class,
                &["T"],
                vec![wrapper(Some(Ty::parameterized(
                    interner.intern("m.List"),
                    vec![var("T")],
                )))],
            ),
            HostShape::NoMarker => (
                ElementKind::Class,
                &["T"],
                vec![Ty::declared(interner.intern("java.io.Serializable"))],
            ),
            HostShape::Interface => (ElementKind::Interface, &["T"], vec![]),
        };
        let id = declare(&interner, &mut symbols, &qualified, kind, params, interfaces);
        items.push(WorkItem::new(id, AnnotationReader::new(Span::DUMMY)));
    }

    Universe {
        interner,
        symbols,
        items,
    }
}

fn run(universe: &Universe) -> Vec<MonadicSpec> {
    let mut env = Environment::new(&universe.symbols, &universe.interner);
    analyze(universe.items.clone(), &mut env)
}

proptest! {
    #[test]
    fn analysis_is_idempotent(shapes in prop::collection::vec(host_shape_strategy(), 0..24)) {
        let universe = build_universe(&shapes);
        let first = run(&universe);
        let second = run(&universe);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_matches_valid_inputs_in_order(
        shapes in prop::collection::vec(host_shape_strategy(), 0..24),
    ) {
        let universe = build_universe(&shapes);
        let specs = run(&universe);

        prop_assert!(specs.len() <= universe.items.len());

        let expected: Vec<ElementId> = universe
            .items
            .iter()
            .zip(&shapes)
            .filter(|(_, shape)| shape.is_valid())
            .map(|(item, _)| item.element)
            .collect();
        let actual: Vec<ElementId> = specs.iter().map(|s| s.host).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn accepted_specs_satisfy_arity_invariant(
        shapes in prop::collection::vec(host_shape_strategy(), 0..24),
    ) {
        let universe = build_universe(&shapes);
        for spec in run(&universe) {
            let host_arity = universe.symbols.element(spec.host).arity();
            let monad_arity = universe.symbols.element(spec.monad.element).arity();
            prop_assert_eq!(monad_arity, host_arity + 1);
        }
    }
}
