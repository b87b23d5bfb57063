use enum_lookup_core::{GeneratorConfig, LookupHandler};
use proc_macro2::TokenStream;
use quote::quote;

use crate::diagnostics::SpanSink;
use crate::parse::LookupEnum;
use crate::render::render;

/// Expands `lookup_enum!` with configuration read from the environment.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: LookupEnum = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match GeneratorConfig::from_env() {
        Ok(config) => expand_with(input, &LookupHandler::new(config)),
        Err(err) => {
            let mut sink = SpanSink::new(input.annotation_span(), input.ident.span());
            sink.push_error(syn::Error::new(input.ident.span(), err.to_string()));
            let rendered = render(&input);
            let diagnostics = sink.into_tokens();
            quote! { #rendered #diagnostics }
        }
    }
}

pub fn expand_with(mut input: LookupEnum, handler: &LookupHandler) -> TokenStream {
    let mut sink = SpanSink::new(input.annotation_span(), input.ident.span());
    let values = input
        .annotation
        .as_ref()
        .map(|annotation| annotation.values.clone())
        .unwrap_or_default();

    let outcome = handler.handle(&values, &mut input, &mut sink);
    log::debug!("lookup_enum!({}): {outcome:?}", input.name);

    let rendered = render(&input);
    let diagnostics = sink.into_tokens();
    quote! {
        #rendered
        #diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(tokens: TokenStream) -> String {
        expand_tokens(tokens, GeneratorConfig::default()).to_string()
    }

    fn expand_tokens(tokens: TokenStream, config: GeneratorConfig) -> TokenStream {
        let input: LookupEnum = syn::parse2(tokens).unwrap();
        expand_with(input, &LookupHandler::new(config))
    }

    fn with_prefixes(prefixes: &[&str]) -> GeneratorConfig {
        GeneratorConfig {
            field_prefixes: prefixes.iter().map(|prefix| prefix.to_string()).collect(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn generates_dispatch_with_default() {
        let out = expand_str(quote! {
            #[lookup(field = "value", constructor_argument_ordinal = 0, default_value = "Test2")]
            enum LookupTest { Test1(11), Test2(22); value: i32 }
        });

        assert!(out.contains("pub fn lookup (value : i32) -> LookupTest"));
        assert!(out.contains("if value == 11 { return LookupTest :: Test1 ; }"));
        assert!(out.contains("must_use"));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn nullable_without_default() {
        let out = expand_str(quote! {
            #[lookup(field = "value", constructor_argument_ordinal = 0)]
            enum LookupTest { Test1(11), Test2(22); value: i32 }
        });

        assert!(out.contains(":: core :: option :: Option < LookupTest >"));
        assert!(out.contains(":: core :: option :: Option :: None"));
    }

    #[test]
    fn missing_annotation_is_an_error() {
        let out = expand_str(quote! {
            enum LookupTest { Test1(11); value: i32 }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("attribute is mandatory"));
        assert!(!out.contains("fn lookup"));
        assert!(out.contains("enum LookupTest"));
    }

    #[test]
    fn struct_target_is_rejected() {
        let out = expand_str(quote! {
            #[lookup(field = "value", constructor_argument_ordinal = 0)]
            struct LookupTest { value: i32 }
        });

        assert!(out.contains("only supported on an enum type"));
        assert!(out.contains("struct LookupTest"));
        assert!(!out.contains("fn lookup"));
    }

    #[test]
    fn empty_enum_warns_and_allows_the_unused_key() {
        let out = expand_str(quote! {
            #[lookup(field = "value", constructor_argument_ordinal = 0)]
            enum Nothing { ; value: i32 }
        });

        assert!(out.contains("No enum values detected"));
        assert!(out.contains("unused_variables"));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn user_lookup_is_kept_and_warned_about() {
        let out = expand_str(quote! {
            #[lookup(field = "value", constructor_argument_ordinal = 0)]
            enum Code {
                Ok(200);
                value: u16,
                fn lookup() -> &'static str { "mine" }
            }
        });

        assert_eq!(out.matches("fn lookup").count(), 1);
        assert!(out.contains("\"mine\""));
        assert!(out.contains("A method with that name already exists"));
    }

    #[test]
    fn stripped_prefix_is_snake_cased() {
        let out = expand_tokens(
            quote! {
                #[lookup(field = "mStatusCode", constructor_argument_ordinal = 0)]
                enum Code { Ok(200); mStatusCode: u16 }
            },
            with_prefixes(&["m"]),
        )
        .to_string();

        assert!(out.contains("pub fn lookup (status_code : u16)"));
        assert!(out.contains("if status_code == 200"));
    }

    #[test]
    fn keyword_left_after_stripping_still_parses() {
        let out = expand_tokens(
            quote! {
                #[lookup(field = "mType", constructor_argument_ordinal = 0)]
                enum Kind { A(1); mType: i32 }
            },
            with_prefixes(&["m"]),
        );

        syn::parse2::<syn::File>(out.clone()).expect("generated code is valid Rust");
        let out = out.to_string();
        assert!(out.contains("pub fn lookup (type_ : i32)"));
        assert!(out.contains("if type_ == 1"));
    }

    #[test]
    fn must_use_can_be_disabled() {
        let config = GeneratorConfig {
            must_use: false,
            ..GeneratorConfig::default()
        };
        let out = expand_tokens(
            quote! {
                #[lookup(field = "value", constructor_argument_ordinal = 0)]
                enum LookupTest { Test1(11); value: i32 }
            },
            config,
        )
        .to_string();

        assert!(out.contains("fn lookup"));
        assert!(!out.contains("must_use"));
    }
}
