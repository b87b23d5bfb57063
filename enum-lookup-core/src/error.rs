//! # Error Module
//!
//! Errors abort generation for a single annotation occurrence. Warnings leave
//! compilation running and either skip generation or degrade it.

use thiserror::Error;

/// A failure that aborts generation for one annotation occurrence.
///
/// Nothing is injected into the target type once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A mandatory attribute was not written explicitly on the annotation.
    #[error("'{attribute}' attribute is mandatory")]
    MissingAttribute { attribute: &'static str },

    /// The annotation is attached to something other than an enum.
    #[error("`lookup` is only supported on an enum type, `{type_name}` is not one")]
    UnsupportedTarget { type_name: String },

    /// The `field` attribute names no direct field of the target type.
    #[error("'{field}' field not found in `{type_name}`, required for lookup")]
    FieldNotFound { field: String, type_name: String },

    /// A constant supplies fewer constructor arguments than the ordinal requires.
    #[error(
        "constant `{constant}` has {arity} constructor argument(s), \
         argument #{ordinal} is required for lookup"
    )]
    MissingConstructorArgument {
        constant: String,
        ordinal: usize,
        arity: usize,
    },
}

/// A non-fatal condition reported while handling an annotation occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupWarning {
    #[error("Not generating {method}(): A method with that name already exists")]
    MethodConflict { method: &'static str },

    #[error("No enum values detected in `{type_name}`, lookup() will always return the default value")]
    EmptyEnum { type_name: String },

    /// The configured default does not name a constant, so the fallback is empty.
    #[error("default value `{constant}` is not a constant of `{type_name}`, lookup() falls back to an empty value")]
    UnknownDefault { constant: String, type_name: String },
}

/// Invalid generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid boolean `{value}` for `{key}` (expected true/false, yes/no or 1/0)")]
    InvalidBool { key: &'static str, value: String },
}
