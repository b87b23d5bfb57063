//! # Synth Module
//!
//! Assembles the generated lookup method from a resolved field and a dispatch
//! table. Pure construction: every input has been validated by the time this
//! stage runs.

use crate::config::GeneratorConfig;
use crate::field::ResolvedField;
use crate::table::{Fallback, LookupTable};
use crate::view::Provenance;

/// Name of the generated method.
pub const METHOD_NAME: &str = "lookup";

/// The single parameter of the generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<T> {
    pub name: String,
    pub ty: T,
}

/// Return type of the generated method: the enclosing enum, or an optional
/// enum when the fallback is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnType {
    pub type_name: String,
    pub nullable: bool,
}

/// A synthesized lookup method, ready to be attached to its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod<E, T> {
    pub name: &'static str,
    pub public: bool,
    /// Associated with the type rather than with a value of it.
    pub is_static: bool,
    pub param: Parameter<T>,
    pub return_type: ReturnType,
    /// For each entry: if the parameter equals the match value, return the
    /// constant; otherwise return the table's fallback.
    pub body: LookupTable<E>,
    pub must_use: bool,
    pub provenance: Provenance,
}

impl<E, T> GeneratedMethod<E, T> {
    pub fn fallback(&self) -> Fallback<'_> {
        self.body.fallback()
    }
}

/// Builds the `lookup` method of `type_name`.
pub fn synthesize<E, T>(
    type_name: &str,
    field: ResolvedField<T>,
    table: LookupTable<E>,
    config: &GeneratorConfig,
) -> GeneratedMethod<E, T> {
    let nullable = table.default.is_none();

    GeneratedMethod {
        name: METHOD_NAME,
        public: true,
        is_static: true,
        param: Parameter {
            name: config.strip_prefix(&field.name),
            ty: field.ty,
        },
        return_type: ReturnType {
            type_name: type_name.to_string(),
            nullable,
        },
        body: table,
        must_use: config.must_use,
        provenance: Provenance::generated(),
    }
}
