//! # Parse Module
//!
//! Parses the declaration accepted by `lookup_enum!`: an enum whose constants
//! pass constructor arguments, followed by the fields those arguments fill and
//! any methods of the type.
//!
//! ```text
//! #[lookup(field = "value", constructor_argument_ordinal = 0)]
//! pub enum Code {
//!     Ok(200),
//!     NotFound(404);
//!
//!     value: u16,
//! }
//! ```

use enum_lookup_core::attribute::{ATTR_DEFAULT, ATTR_FIELD, ATTR_ORDINAL};
use enum_lookup_core::{AnnotationValues, DeclKind, GeneratedMethod};
use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Attribute, Expr, FnArg, Ident, ImplItem, ImplItemFn, LitInt, LitStr, Meta, Token, Type,
    Visibility, braced, parenthesized, token,
};

/// Path of the annotation carrying the lookup attributes.
pub const ANNOTATION: &str = "lookup";

/// Marks a method produced by an earlier expansion.
pub const GENERATED_MARKER: &str = "lookup_generated";

pub struct ConstantDecl {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub name: String,
    pub args: Vec<Expr>,
}

pub struct FieldDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
}

pub struct MethodDecl {
    /// The method with the generated marker already stripped.
    pub item: ImplItemFn,
    pub name: String,
    /// Parameters excluding the receiver.
    pub params: usize,
    pub generated: bool,
}

pub enum MemberDecl {
    Field(FieldDecl),
    Method(MethodDecl),
}

/// The annotation occurrence: where it was written and what it says.
pub struct Annotation {
    pub span: Span,
    pub values: AnnotationValues,
}

/// A declaration passed to `lookup_enum!`.
pub struct LookupEnum {
    pub attrs: Vec<Attribute>,
    pub annotation: Option<Annotation>,
    pub vis: Visibility,
    pub kind: DeclKind,
    pub ident: Ident,
    pub name: String,
    pub constants: Vec<ConstantDecl>,
    pub members: Vec<MemberDecl>,
    /// Methods injected by the generator during this expansion.
    pub generated: Vec<GeneratedMethod<Expr, Type>>,
}

impl LookupEnum {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::Field(field) => Some(field),
            MemberDecl::Method(_) => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            MemberDecl::Method(method) => Some(method),
            MemberDecl::Field(_) => None,
        })
    }

    pub fn annotation_span(&self) -> Span {
        self.annotation
            .as_ref()
            .map_or_else(|| self.ident.span(), |annotation| annotation.span)
    }

    /// Every constant must supply one argument per field.
    fn check_arity(&self) -> syn::Result<()> {
        let expected = self.fields().count();
        let mut errors: Option<syn::Error> = None;

        for constant in &self.constants {
            if constant.args.len() == expected {
                continue;
            }
            let err = syn::Error::new(
                constant.ident.span(),
                format!(
                    "`{}` passes {} constructor argument(s) but `{}` declares {} field(s)",
                    constant.name,
                    constant.args.len(),
                    self.name,
                    expected
                ),
            );
            match errors.as_mut() {
                Some(errors) => errors.combine(err),
                None => errors = Some(err),
            }
        }

        errors.map_or(Ok(()), Err)
    }
}

impl Parse for LookupEnum {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = input.call(Attribute::parse_outer)?;
        let annotation = take_annotation(&mut attrs)?;
        let vis: Visibility = input.parse()?;

        let lookahead = input.lookahead1();
        let kind = if lookahead.peek(Token![enum]) {
            input.parse::<Token![enum]>()?;
            DeclKind::Enum
        } else if lookahead.peek(Token![struct]) {
            input.parse::<Token![struct]>()?;
            DeclKind::Struct
        } else {
            return Err(lookahead.error());
        };

        let ident: Ident = input.parse()?;
        let content;
        braced!(content in input);

        let constants = if kind == DeclKind::Enum {
            parse_constants(&content)?
        } else {
            Vec::new()
        };

        let mut members = Vec::new();
        while !content.is_empty() {
            members.push(parse_member(&content)?);
        }

        let parsed = Self {
            attrs,
            annotation,
            vis,
            kind,
            name: ident.to_string(),
            ident,
            constants,
            members,
            generated: Vec::new(),
        };
        if parsed.kind == DeclKind::Enum {
            parsed.check_arity()?;
        }
        Ok(parsed)
    }
}

/// Removes the `#[lookup(...)]` annotation from `attrs` and reads its values.
fn take_annotation(attrs: &mut Vec<Attribute>) -> syn::Result<Option<Annotation>> {
    let mut found: Vec<Attribute> = Vec::new();
    attrs.retain(|attr| {
        if attr.path().is_ident(ANNOTATION) {
            found.push(attr.clone());
            false
        } else {
            true
        }
    });

    let mut found = found.into_iter();
    let Some(attr) = found.next() else {
        return Ok(None);
    };
    if let Some(duplicate) = found.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            "`lookup` may only be applied once",
        ));
    }

    Ok(Some(Annotation {
        span: attr.span(),
        values: annotation_values(&attr)?,
    }))
}

/// Reads the attributes written on the annotation. Absent attributes stay `None`.
pub fn annotation_values(attr: &Attribute) -> syn::Result<AnnotationValues> {
    let mut values = AnnotationValues::default();
    if let Meta::Path(_) = attr.meta {
        return Ok(values);
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident(ATTR_FIELD) {
            let value: LitStr = meta.value()?.parse()?;
            values.field = Some(value.value());
        } else if meta.path.is_ident(ATTR_ORDINAL) {
            let value: LitInt = meta.value()?.parse()?;
            values.constructor_argument_ordinal = Some(value.base10_parse::<usize>()?);
        } else if meta.path.is_ident(ATTR_DEFAULT) {
            let value: LitStr = meta.value()?.parse()?;
            values.default_value = Some(value.value());
        } else {
            return Err(meta.error(format!(
                "unsupported lookup attribute, expected `{ATTR_FIELD}`, `{ATTR_ORDINAL}` or `{ATTR_DEFAULT}`"
            )));
        }
        Ok(())
    })?;

    Ok(values)
}

// `Name(arg, ...)` entries separated by commas, closed by `;` or the end of the body.
fn parse_constants(content: ParseStream) -> syn::Result<Vec<ConstantDecl>> {
    let mut constants = Vec::new();

    while !content.is_empty() && !content.peek(Token![;]) {
        let attrs = content.call(Attribute::parse_outer)?;
        let ident: Ident = content.parse()?;
        let args = if content.peek(token::Paren) {
            let inner;
            parenthesized!(inner in content);
            Punctuated::<Expr, Token![,]>::parse_terminated(&inner)?
                .into_iter()
                .collect()
        } else {
            Vec::new()
        };

        constants.push(ConstantDecl {
            attrs,
            name: ident.to_string(),
            ident,
            args,
        });

        if content.peek(Token![,]) {
            content.parse::<Token![,]>()?;
        } else {
            break;
        }
    }

    if content.peek(Token![;]) {
        content.parse::<Token![;]>()?;
    }
    Ok(constants)
}

fn parse_member(content: ParseStream) -> syn::Result<MemberDecl> {
    let fork = content.fork();
    fork.call(Attribute::parse_outer)?;
    fork.parse::<Visibility>()?;

    let is_method = fork.peek(Token![fn])
        || fork.peek(Token![const])
        || fork.peek(Token![async])
        || fork.peek(Token![unsafe]);

    if is_method {
        return match content.parse::<ImplItem>()? {
            ImplItem::Fn(item) => Ok(MemberDecl::Method(method_decl(item))),
            other => Err(syn::Error::new_spanned(
                other,
                "only fields and methods may follow the constants",
            )),
        };
    }

    let attrs = content.call(Attribute::parse_outer)?;
    let vis: Visibility = content.parse()?;
    let ident: Ident = content.parse()?;
    content.parse::<Token![:]>()?;
    let ty: Type = content.parse()?;

    if content.peek(Token![,]) {
        content.parse::<Token![,]>()?;
    } else if content.peek(Token![;]) {
        content.parse::<Token![;]>()?;
    } else if !content.is_empty() {
        return Err(content.error("expected `,` or `;` after field"));
    }

    Ok(MemberDecl::Field(FieldDecl {
        attrs,
        vis,
        name: ident.to_string(),
        ident,
        ty,
    }))
}

fn method_decl(mut item: ImplItemFn) -> MethodDecl {
    let before = item.attrs.len();
    item.attrs.retain(|attr| !attr.path().is_ident(GENERATED_MARKER));
    let generated = item.attrs.len() != before;

    let params = item
        .sig
        .inputs
        .iter()
        .filter(|arg| matches!(arg, FnArg::Typed(_)))
        .count();

    MethodDecl {
        name: item.sig.ident.to_string(),
        params,
        generated,
        item,
    }
}
