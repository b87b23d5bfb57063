//! # Render Module
//!
//! Emits the Rust items for a [`LookupEnum`]: the type itself, one accessor per
//! field, the user's methods, and any method injected by the generator.

use enum_lookup_core::{DeclKind, Fallback, GeneratedMethod};
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Expr, Ident, Type};

use crate::parse::{ConstantDecl, FieldDecl, LookupEnum};

pub fn render(input: &LookupEnum) -> TokenStream {
    let LookupEnum {
        attrs, vis, ident, ..
    } = input;

    let declaration = match input.kind {
        DeclKind::Enum => {
            let variants = input.constants.iter().map(|constant| {
                let attrs = &constant.attrs;
                let ident = &constant.ident;
                quote! { #(#attrs)* #ident }
            });
            quote! {
                #(#attrs)*
                #vis enum #ident {
                    #(#variants),*
                }
            }
        }
        _ => {
            let fields = input.fields().map(|field| {
                let FieldDecl {
                    attrs, vis, ident, ty, ..
                } = field;
                quote! { #(#attrs)* #vis #ident: #ty }
            });
            quote! {
                #(#attrs)*
                #vis struct #ident {
                    #(#fields),*
                }
            }
        }
    };

    let accessors: Vec<TokenStream> = match input.kind {
        DeclKind::Enum => input
            .fields()
            .enumerate()
            .map(|(index, field)| accessor(field, index, &input.constants))
            .collect(),
        _ => Vec::new(),
    };
    let methods = input.methods().map(|method| &method.item);
    let generated = input.generated.iter().map(lookup_method);

    quote! {
        #declaration

        impl #ident {
            #(#accessors)*
            #(#methods)*
            #(#generated)*
        }
    }
}

// Field values live in the constants' constructor arguments, so a field reads
// as a match over the constants.
fn accessor(field: &FieldDecl, index: usize, constants: &[ConstantDecl]) -> TokenStream {
    let FieldDecl {
        attrs, vis, ident, ty, ..
    } = field;

    let arms = constants.iter().filter_map(|constant| {
        let value = constant.args.get(index)?;
        let variant = &constant.ident;
        Some(quote! { Self::#variant => #value, })
    });

    quote! {
        #(#attrs)*
        #vis fn #ident(&self) -> #ty {
            match *self {
                #(#arms)*
            }
        }
    }
}

fn lookup_method(method: &GeneratedMethod<Expr, Type>) -> TokenStream {
    let name = format_ident!("{}", method.name);
    let param = param_ident(&method.param.name);
    let param_ty = relax_static_str(&method.param.ty);
    let enum_ty = format_ident!("{}", method.return_type.type_name);

    let vis = method.public.then(|| quote! { pub });
    let receiver = (!method.is_static).then(|| quote! { &self, });
    let must_use = method.must_use.then(|| quote! { #[must_use] });
    let allow_unused = method
        .body
        .entries
        .is_empty()
        .then(|| quote! { #[allow(unused_variables)] });

    let wrap = |result: TokenStream| {
        if method.return_type.nullable {
            quote! { ::core::option::Option::Some(#result) }
        } else {
            result
        }
    };

    let cases = method.body.entries.iter().map(|entry| {
        let value = &entry.match_value;
        let constant = format_ident!("{}", entry.constant);
        let result = wrap(quote! { #enum_ty::#constant });
        quote! {
            if #param == #value {
                return #result;
            }
        }
    });

    let fallback = match method.fallback() {
        Fallback::Constant(constant) => {
            let constant = format_ident!("{}", constant);
            quote! { #enum_ty::#constant }
        }
        Fallback::Empty => quote! { ::core::option::Option::None },
    };

    let return_ty = if method.return_type.nullable {
        quote! { ::core::option::Option<#enum_ty> }
    } else {
        quote! { #enum_ty }
    };

    quote! {
        #must_use
        #allow_unused
        #vis fn #name(#receiver #param: #param_ty) -> #return_ty {
            #(#cases)*
            #fallback
        }
    }
}

/// Snake-cased parameter name. A name that is a keyword, like `type` left over
/// from `mType`, gets a trailing underscore.
fn param_ident(name: &str) -> Ident {
    let snake = name.to_snake_case();
    if snake.is_empty() {
        return format_ident!("key");
    }
    match syn::parse_str::<Ident>(&snake) {
        Ok(ident) => ident,
        Err(_) => format_ident!("{}_", snake),
    }
}

/// `&'static str` keys are taken as `&str` so callers can pass borrowed input.
fn relax_static_str(ty: &Type) -> Type {
    if let Type::Reference(reference) = ty {
        let is_static = reference
            .lifetime
            .as_ref()
            .is_some_and(|lifetime| lifetime.ident == "static");
        let is_str = matches!(&*reference.elem, Type::Path(path) if path.path.is_ident("str"));
        if is_static && is_str {
            let mut relaxed = reference.clone();
            relaxed.lifetime = None;
            return Type::Reference(relaxed);
        }
    }
    ty.clone()
}
