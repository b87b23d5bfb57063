//! # enum-lookup-core
//!
//! Generates a static `lookup` method that maps a value back to the enum
//! constant whose designated constructor argument equals it.
//!
//! The algorithm does not depend on any particular syntax tree. A host
//! front-end implements [`TypeView`] and [`MethodInjector`] over its own nodes,
//! supplies a [`DiagnosticSink`], and calls [`LookupHandler::handle`] once per
//! annotation occurrence.
//!
//! ```rust,ignore
//! let handler = LookupHandler::new(GeneratorConfig::from_env()?);
//! let values = AnnotationValues::new("value").ordinal(0).default_value("Test2");
//! let mut diagnostics = Diagnostics::new();
//!
//! match handler.handle(&values, &mut host_enum, &mut diagnostics) {
//!     Outcome::Generated => { /* host_enum now carries the method */ }
//!     _ => { /* see diagnostics */ }
//! }
//! ```

pub mod attribute;
pub mod config;
pub mod conflict;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod handler;
pub mod shape;
pub mod synth;
pub mod table;
pub mod view;

pub use attribute::{AnnotationValues, LookupRequest};
pub use config::GeneratorConfig;
pub use conflict::MemberExistence;
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, LogSink};
pub use error::{ConfigError, LookupError, LookupWarning};
pub use field::ResolvedField;
pub use handler::{LookupHandler, Outcome};
pub use synth::{GeneratedMethod, METHOD_NAME, Parameter, ReturnType};
pub use table::{Fallback, LookupTable, MatchEntry};
pub use view::{
    ConstantView, DeclKind, FieldView, GENERATOR, MemberView, MethodInjector, MethodView,
    Provenance, TypeView,
};
