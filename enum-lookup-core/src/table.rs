//! # Table Module
//!
//! Builds the dispatch table of a lookup method from the target's constants.
//!
//! Rows keep declaration order and are never deduplicated. When two constants
//! share a match value the first declared one wins, since dispatch tests rows
//! in order and stops at the first equal value.

use crate::attribute::LookupRequest;
use crate::diagnostics::DiagnosticSink;
use crate::error::{LookupError, LookupWarning};
use crate::view::TypeView;

/// One row of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry<E> {
    pub match_value: E,
    pub constant: String,
}

/// What a lookup returns when no row matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback<'a> {
    Constant(&'a str),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<E> {
    pub entries: Vec<MatchEntry<E>>,
    /// Always names a constant of the target type when set.
    pub default: Option<String>,
}

impl<E> LookupTable<E> {
    pub fn fallback(&self) -> Fallback<'_> {
        match &self.default {
            Some(name) => Fallback::Constant(name),
            None => Fallback::Empty,
        }
    }

    /// Evaluates the dispatch for an input described by `matches`.
    ///
    /// Returns the constant the generated method would return, or `None` for
    /// the empty fallback.
    pub fn resolve<F>(&self, mut matches: F) -> Option<&str>
    where
        F: FnMut(&E) -> bool,
    {
        self.entries
            .iter()
            .find(|entry| matches(&entry.match_value))
            .map(|entry| entry.constant.as_str())
            .or(self.default.as_deref())
    }
}

/// Builds the table for `request` over the constants of `target`.
///
/// Warns when the type has no constants, and when the configured default names
/// no constant (the fallback then stays empty).
pub fn build<V, S>(
    target: &V,
    request: &LookupRequest,
    sink: &mut S,
) -> Result<LookupTable<V::Expr>, LookupError>
where
    V: TypeView + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let constants = target.constants();
    let ordinal = request.argument_ordinal;

    if constants.is_empty() {
        sink.warning(&LookupWarning::EmptyEnum {
            type_name: target.name().to_string(),
        });
    }

    let mut entries = Vec::with_capacity(constants.len());
    let mut default = None;

    for constant in &constants {
        let match_value =
            constant
                .args
                .get(ordinal)
                .ok_or_else(|| LookupError::MissingConstructorArgument {
                    constant: constant.name.to_string(),
                    ordinal,
                    arity: constant.args.len(),
                })?;

        if request.default_constant.as_deref() == Some(constant.name) {
            default = Some(constant.name.to_string());
        }

        log::trace!("{}: argument #{ordinal} -> {}", target.name(), constant.name);
        entries.push(MatchEntry {
            match_value: match_value.clone(),
            constant: constant.name.to_string(),
        });
    }

    if let Some(name) = &request.default_constant {
        if default.is_none() {
            sink.warning(&LookupWarning::UnknownDefault {
                constant: name.clone(),
                type_name: target.name().to_string(),
            });
        }
    }

    Ok(LookupTable { entries, default })
}
