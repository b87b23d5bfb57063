//! # View Module
//!
//! The narrow interface between the generator and a host front-end. A host
//! exposes its syntax tree through [`TypeView`] and accepts the synthesized
//! method through [`MethodInjector`]; the generator never sees the host's own
//! node types beyond the opaque `Expr` and `Ty` parameters.

use crate::synth::GeneratedMethod;

/// Tag written into [`Provenance::Generated`] by this generator.
pub const GENERATOR: &str = "enum_lookup";

/// The kind of declaration an annotation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Enum,
    Struct,
    Trait,
    /// Not a type declaration at all (a function, a field, a module, ...).
    Other,
}

/// Who authored a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    User,
    /// Synthesized by the named generator.
    Generated { by: String },
}

impl Provenance {
    pub fn generated() -> Self {
        Provenance::Generated {
            by: GENERATOR.to_string(),
        }
    }

    pub fn is_ours(&self) -> bool {
        matches!(self, Provenance::Generated { by } if by == GENERATOR)
    }
}

/// A data member of the target type.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a, T> {
    pub name: &'a str,
    pub ty: &'a T,
}

/// A method of the target type. `params` excludes any receiver.
#[derive(Debug, Clone)]
pub struct MethodView<'a> {
    pub name: &'a str,
    pub params: usize,
    pub provenance: Provenance,
}

/// A direct member of the target type, in declaration order.
#[derive(Debug, Clone)]
pub enum MemberView<'a, T> {
    Field(FieldView<'a, T>),
    Method(MethodView<'a>),
}

impl<T> MemberView<'_, T> {
    pub fn name(&self) -> &str {
        match self {
            MemberView::Field(field) => field.name,
            MemberView::Method(method) => method.name,
        }
    }
}

/// One enum constant and the arguments passed to its constructor.
#[derive(Debug, Clone, Copy)]
pub struct ConstantView<'a, E> {
    pub name: &'a str,
    pub args: &'a [E],
}

/// Read-only projection of an annotated declaration.
pub trait TypeView {
    /// The host's expression node, used as a match value.
    type Expr: Clone;
    /// The host's type node, used as the lookup key type.
    type Ty: Clone;

    fn name(&self) -> &str;

    fn kind(&self) -> DeclKind;

    /// Fields and methods, in declaration order.
    fn members(&self) -> Vec<MemberView<'_, Self::Ty>>;

    /// Declared constants, in declaration order. Empty for non-enum kinds.
    fn constants(&self) -> Vec<ConstantView<'_, Self::Expr>>;

    /// Whether two methods may share a name when their parameter lists differ.
    ///
    /// When `false`, any member with the generated name is a conflict regardless
    /// of its parameters.
    fn supports_overloading(&self) -> bool {
        true
    }
}

/// Attaches a synthesized method to the target type.
pub trait MethodInjector: TypeView {
    fn inject(&mut self, method: GeneratedMethod<Self::Expr, Self::Ty>);
}
