//! # Diagnostics Module
//!
//! The generator never talks to a compiler's reporting machinery directly. Every
//! stage receives a [`DiagnosticSink`] and the host decides how entries are shown.

use crate::error::{LookupError, LookupWarning};

/// Receives the errors and warnings raised while handling one annotation occurrence.
pub trait DiagnosticSink {
    fn error(&mut self, error: &LookupError);
    fn warning(&mut self, warning: &LookupWarning);
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Error(LookupError),
    Warning(LookupWarning),
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &LookupError> {
        self.entries.iter().filter_map(|entry| match entry {
            Diagnostic::Error(error) => Some(error),
            Diagnostic::Warning(_) => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LookupWarning> {
        self.entries.iter().filter_map(|entry| match entry {
            Diagnostic::Warning(warning) => Some(warning),
            Diagnostic::Error(_) => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for Diagnostics {
    fn error(&mut self, error: &LookupError) {
        self.entries.push(Diagnostic::Error(error.clone()));
    }

    fn warning(&mut self, warning: &LookupWarning) {
        self.entries.push(Diagnostic::Warning(warning.clone()));
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn error(&mut self, error: &LookupError) {
        log::error!("{error}");
    }

    fn warning(&mut self, warning: &LookupWarning) {
        log::warn!("{warning}");
    }
}
