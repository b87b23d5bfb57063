//! # enum-lookup
//!
//! Reverse lookup for enums that carry constructor-supplied data: given a
//! value, find the constant whose designated constructor argument equals it.
//!
//! ```rust,ignore
//! use enum_lookup::lookup_enum;
//!
//! lookup_enum! {
//!     #[lookup(field = "code", constructor_argument_ordinal = 0)]
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Status {
//!         Ok(200, "OK"),
//!         NotFound(404, "Not Found");
//!
//!         pub code: u16,
//!         pub reason: &'static str,
//!     }
//! }
//!
//! assert_eq!(Status::lookup(404), Some(Status::NotFound));
//! assert_eq!(Status::NotFound.reason(), "Not Found");
//! assert_eq!(Status::lookup(500), None);
//! ```
//!
//! The generator itself is host-agnostic and re-exported here for other
//! front-ends that want to drive it over their own syntax trees.

pub use enum_lookup_macro::lookup_enum;

pub use enum_lookup_core::{
    AnnotationValues, ConfigError, Diagnostic, DiagnosticSink, Diagnostics, GeneratedMethod,
    GeneratorConfig, LogSink, LookupError, LookupHandler, LookupTable, LookupWarning,
    MethodInjector, Outcome, TypeView,
};

/// The full generator API, for hosts implementing [`TypeView`].
pub mod generator {
    pub use enum_lookup_core::*;
}
