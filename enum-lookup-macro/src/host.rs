//! Exposes a parsed [`LookupEnum`] to the generator.

use enum_lookup_core::{
    ConstantView, DeclKind, FieldView, GeneratedMethod, MemberView, MethodInjector, MethodView,
    Provenance, TypeView,
};
use syn::{Expr, Type};

use crate::parse::{LookupEnum, MemberDecl};

impl TypeView for LookupEnum {
    type Expr = Expr;
    type Ty = Type;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn members(&self) -> Vec<MemberView<'_, Type>> {
        let declared = self.members.iter().map(|member| match member {
            MemberDecl::Field(field) => MemberView::Field(FieldView {
                name: &field.name,
                ty: &field.ty,
            }),
            MemberDecl::Method(method) => MemberView::Method(MethodView {
                name: &method.name,
                params: method.params,
                provenance: if method.generated {
                    Provenance::generated()
                } else {
                    Provenance::User
                },
            }),
        });

        let injected = self.generated.iter().map(|method| {
            MemberView::Method(MethodView {
                name: method.name,
                params: 1,
                provenance: method.provenance.clone(),
            })
        });

        declared.chain(injected).collect()
    }

    fn constants(&self) -> Vec<ConstantView<'_, Expr>> {
        self.constants
            .iter()
            .map(|constant| ConstantView {
                name: &constant.name,
                args: &constant.args,
            })
            .collect()
    }

    // Inherent methods of one type cannot share a name, and every field
    // becomes an accessor method.
    fn supports_overloading(&self) -> bool {
        false
    }
}

impl MethodInjector for LookupEnum {
    fn inject(&mut self, method: GeneratedMethod<Expr, Type>) {
        self.generated.push(method);
    }
}
