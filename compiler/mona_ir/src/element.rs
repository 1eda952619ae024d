//! Element and type model.
//!
//! The host toolchain's front end materializes annotated declarations into
//! this model before any Mona pass runs. `TypeElement` describes one
//! declared type; `Ty` describes a type reference as written in source.
//!
//! Erasure drops all type arguments from a declared reference, so two
//! references to the same declaration compare equal regardless of how they
//! are parameterized. This is how the analyzer recognizes the wrapper
//! marker interface.

use smallvec::SmallVec;

use crate::{Name, Span, StringInterner};

/// Kind of a declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElementKind {
    Class,
    Interface,
}

/// Primitive types of the host language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Int,
    Long,
    Double,
    Boolean,
    Char,
}

impl Primitive {
    /// Source-level spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Double => "double",
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
        }
    }
}

/// A type reference as written in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    /// Reference to a declared class or interface, possibly parameterized.
    /// `args` is empty for a raw reference.
    Declared { qualified: Name, args: Vec<Ty> },
    /// A type variable (`T`, `A`, ...).
    Var(Name),
    /// A primitive type.
    Primitive(Primitive),
    /// An array type.
    Array(Box<Ty>),
}

impl Ty {
    /// Shorthand for an unparameterized declared reference.
    pub fn declared(qualified: Name) -> Self {
        Ty::Declared {
            qualified,
            args: Vec::new(),
        }
    }

    /// Shorthand for a parameterized declared reference.
    pub fn parameterized(qualified: Name, args: impl Into<Vec<Ty>>) -> Self {
        Ty::Declared {
            qualified,
            args: args.into(),
        }
    }

    /// The type with all type arguments stripped.
    ///
    /// Only declared references carry arguments; every other variant erases
    /// to itself.
    pub fn erasure(&self) -> Ty {
        match self {
            Ty::Declared { qualified, .. } => Ty::declared(*qualified),
            other => other.clone(),
        }
    }

    /// Whether this reference denotes a declared (class-like) type, as
    /// opposed to a variable, primitive, or array.
    pub const fn is_class_like(&self) -> bool {
        matches!(self, Ty::Declared { .. })
    }

    /// Type arguments of a declared reference; empty for everything else.
    pub fn args(&self) -> &[Ty] {
        match self {
            Ty::Declared { args, .. } => args,
            _ => &[],
        }
    }

    /// Qualified name of a declared reference.
    pub fn qualified(&self) -> Option<Name> {
        match self {
            Ty::Declared { qualified, .. } => Some(*qualified),
            _ => None,
        }
    }

    /// Render for diagnostics and generated-source headers.
    pub fn display(&self, interner: &StringInterner) -> String {
        match self {
            Ty::Declared { qualified, args } => {
                let base = interner.lookup(*qualified);
                if args.is_empty() {
                    base.to_owned()
                } else {
                    let rendered: Vec<String> =
                        args.iter().map(|a| a.display(interner)).collect();
                    format!("{base}<{}>", rendered.join(", "))
                }
            }
            Ty::Var(name) => interner.lookup(*name).to_owned(),
            Ty::Primitive(p) => p.as_str().to_owned(),
            Ty::Array(inner) => format!("{}[]", inner.display(interner)),
        }
    }
}

/// One declared type handed over by the front end.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeElement {
    /// Simple name (`Box`).
    pub name: Name,
    /// Dotted qualified name (`com.example.Box`).
    pub qualified: Name,
    /// Class or interface.
    pub kind: ElementKind,
    /// Declared type parameters, in declaration order.
    pub type_params: SmallVec<[Name; 4]>,
    /// Directly implemented interfaces, in declaration order.
    ///
    /// Inherited interfaces are not included; the analyzer's structural
    /// scope is one level deep.
    pub interfaces: Vec<Ty>,
    /// Location of the declaration.
    pub span: Span,
}

impl TypeElement {
    /// Number of declared type parameters.
    pub fn arity(&self) -> usize {
        self.type_params.len()
    }

    /// Whether this declaration is a class.
    pub fn is_class(&self) -> bool {
        self.kind == ElementKind::Class
    }

    /// Package portion of the qualified name, if any.
    pub fn package(&self, interner: &StringInterner) -> Option<String> {
        let qualified = interner.lookup(self.qualified);
        qualified.rsplit_once('.').map(|(pkg, _)| pkg.to_owned())
    }
}
