//! # Conflict Module
//!
//! Classifies whether the target type already has a member with the name the
//! generator is about to use, and who wrote it.

use crate::view::{MemberView, TypeView};

/// Existence of a member with the generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberExistence {
    NotExists,
    /// A previous run of this generator produced it.
    ExistsByGenerator,
    ExistsByUser,
}

/// Looks for a member named `name`.
///
/// A method carrying this generator's provenance tag always counts as ours,
/// whatever its parameters. A user-written method only counts when it takes
/// `params` parameters, unless the host has no overloading; then any member of
/// that name clashes, fields included.
pub fn probe<V: TypeView + ?Sized>(target: &V, name: &str, params: usize) -> MemberExistence {
    let overloading = target.supports_overloading();
    let mut existence = MemberExistence::NotExists;

    for member in target.members() {
        if member.name() != name {
            continue;
        }
        match member {
            MemberView::Method(method) if method.provenance.is_ours() => {
                return MemberExistence::ExistsByGenerator;
            }
            MemberView::Method(method) if !overloading || method.params == params => {
                existence = MemberExistence::ExistsByUser;
            }
            MemberView::Field(_) if !overloading => existence = MemberExistence::ExistsByUser,
            _ => {}
        }
    }

    existence
}
