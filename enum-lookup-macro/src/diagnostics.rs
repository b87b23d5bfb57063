//! # Diagnostics Module
//!
//! Turns generator diagnostics into tokens. Errors become `compile_error!`
//! invocations; warnings use a deprecated item, which is the only way a
//! function-like macro can raise a warning on stable Rust.

use enum_lookup_core::{DiagnosticSink, LookupError, LookupWarning};
use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

/// Collects diagnostics for one expansion, spanned on the annotation or the
/// type name depending on what they are about.
pub struct SpanSink {
    annotation: Span,
    type_name: Span,
    errors: Option<syn::Error>,
    warnings: Vec<TokenStream>,
}

impl SpanSink {
    pub fn new(annotation: Span, type_name: Span) -> Self {
        Self {
            annotation,
            type_name,
            errors: None,
            warnings: Vec::new(),
        }
    }

    pub fn push_error(&mut self, err: syn::Error) {
        match self.errors.as_mut() {
            Some(errors) => errors.combine(err),
            None => self.errors = Some(err),
        }
    }

    pub fn into_tokens(self) -> TokenStream {
        let warnings = self.warnings;
        let errors = self.errors.map(|err| err.to_compile_error());
        quote! {
            #(#warnings)*
            #errors
        }
    }
}

impl DiagnosticSink for SpanSink {
    fn error(&mut self, error: &LookupError) {
        let span = match error {
            LookupError::FieldNotFound { .. } | LookupError::MissingConstructorArgument { .. } => {
                self.type_name
            }
            LookupError::MissingAttribute { .. } | LookupError::UnsupportedTarget { .. } => {
                self.annotation
            }
        };
        self.push_error(syn::Error::new(span, error.to_string()));
    }

    fn warning(&mut self, warning: &LookupWarning) {
        let span = match warning {
            LookupWarning::EmptyEnum { .. } => self.type_name,
            LookupWarning::MethodConflict { .. } | LookupWarning::UnknownDefault { .. } => {
                self.annotation
            }
        };
        self.warnings.push(warning_tokens(span, &warning.to_string()));
    }
}

fn warning_tokens(span: Span, message: &str) -> TokenStream {
    let name = Ident::new("enum_lookup_warning", span);
    quote_spanned! {span=>
        const _: () = {
            #[deprecated(note = #message)]
            #[allow(non_upper_case_globals)]
            const #name: () = ();
            #name
        };
    }
}
