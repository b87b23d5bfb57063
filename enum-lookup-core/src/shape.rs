//! Target shape check: the annotation must sit on an enum declaration.

use crate::error::LookupError;
use crate::view::{DeclKind, TypeView};

pub fn check_target<V: TypeView + ?Sized>(target: &V) -> Result<(), LookupError> {
    match target.kind() {
        DeclKind::Enum => Ok(()),
        _ => Err(LookupError::UnsupportedTarget {
            type_name: target.name().to_string(),
        }),
    }
}
