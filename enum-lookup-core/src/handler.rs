//! # Handler Module
//!
//! Runs the generation pipeline for one annotation occurrence:
//! attributes, target shape, existing members, field, table, synthesis,
//! injection. Each occurrence is handled in a single pass; failures are
//! reported to the sink and never escape to the caller.

use crate::attribute::{self, AnnotationValues};
use crate::config::GeneratorConfig;
use crate::conflict::{self, MemberExistence};
use crate::diagnostics::DiagnosticSink;
use crate::error::{LookupError, LookupWarning};
use crate::field;
use crate::shape;
use crate::synth::{self, METHOD_NAME};
use crate::table;
use crate::view::MethodInjector;

/// How handling one annotation occurrence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new `lookup` method was injected.
    Generated,
    /// A previous run already generated the method; nothing changed.
    AlreadyGenerated,
    /// A user-written member has the name; it was left alone and a warning raised.
    Conflict,
    /// An error was reported and nothing was injected.
    Aborted,
}

/// Generates `lookup` methods. Holds no per-occurrence state, so one handler
/// can serve every occurrence of a compilation.
#[derive(Debug, Clone, Default)]
pub struct LookupHandler {
    config: GeneratorConfig,
}

impl LookupHandler {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Handles one annotation occurrence attached to `target`.
    pub fn handle<H, S>(&self, values: &AnnotationValues, target: &mut H, sink: &mut S) -> Outcome
    where
        H: MethodInjector + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        match self.generate(values, target, sink) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("lookup generation for `{}` aborted: {err}", target.name());
                sink.error(&err);
                Outcome::Aborted
            }
        }
    }

    fn generate<H, S>(
        &self,
        values: &AnnotationValues,
        target: &mut H,
        sink: &mut S,
    ) -> Result<Outcome, LookupError>
    where
        H: MethodInjector + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let request = attribute::validate(values, self.config.require_ordinal)?;
        shape::check_target(&*target)?;

        match conflict::probe(&*target, METHOD_NAME, 0) {
            MemberExistence::NotExists => {}
            MemberExistence::ExistsByGenerator => {
                log::debug!("`{}::{METHOD_NAME}` already generated, skipping", target.name());
                return Ok(Outcome::AlreadyGenerated);
            }
            MemberExistence::ExistsByUser => {
                sink.warning(&LookupWarning::MethodConflict {
                    method: METHOD_NAME,
                });
                return Ok(Outcome::Conflict);
            }
        }

        let key = field::resolve(&*target, &request.field_name)?;
        let table = table::build(&*target, &request, sink)?;
        let method = synth::synthesize(target.name(), key, table, &self.config);

        log::debug!(
            "generated `{}::{METHOD_NAME}` with {} case(s)",
            target.name(),
            method.body.entries.len()
        );
        target.inject(method);
        Ok(Outcome::Generated)
    }
}
