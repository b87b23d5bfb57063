//! Resolves the field whose declared type becomes the lookup key type.

use crate::error::LookupError;
use crate::view::{MemberView, TypeView};

/// A field located by [`resolve`], detached from the host view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField<T> {
    pub name: String,
    pub ty: T,
}

/// Returns the first direct field named `field_name`, in declaration order.
pub fn resolve<V: TypeView + ?Sized>(
    target: &V,
    field_name: &str,
) -> Result<ResolvedField<V::Ty>, LookupError> {
    target
        .members()
        .into_iter()
        .find_map(|member| match member {
            MemberView::Field(field) if field.name == field_name => Some(ResolvedField {
                name: field.name.to_string(),
                ty: field.ty.clone(),
            }),
            _ => None,
        })
        .ok_or_else(|| LookupError::FieldNotFound {
            field: field_name.to_string(),
            type_name: target.name().to_string(),
        })
}
