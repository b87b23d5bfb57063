//! A minimal in-memory host used by the integration tests.

#![allow(dead_code)]

use enum_lookup_core::{
    ConstantView, DeclKind, FieldView, GeneratedMethod, MemberView, MethodInjector, MethodView,
    Provenance, TypeView,
};

pub enum Member {
    Field { name: String, ty: String },
    Method { name: String, params: usize, provenance: Provenance },
}

pub struct Constant {
    pub name: String,
    pub args: Vec<i64>,
}

pub struct FakeType {
    pub name: String,
    pub kind: DeclKind,
    pub overloading: bool,
    pub members: Vec<Member>,
    pub constants: Vec<Constant>,
    pub injected: Vec<GeneratedMethod<i64, String>>,
}

impl FakeType {
    pub fn enumeration(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: DeclKind::Enum,
            overloading: true,
            members: Vec::new(),
            constants: Vec::new(),
            injected: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: DeclKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn without_overloading(mut self) -> Self {
        self.overloading = false;
        self
    }

    pub fn constant(mut self, name: &str, args: &[i64]) -> Self {
        self.constants.push(Constant {
            name: name.to_string(),
            args: args.to_vec(),
        });
        self
    }

    pub fn field(mut self, name: &str, ty: &str) -> Self {
        self.members.push(Member::Field {
            name: name.to_string(),
            ty: ty.to_string(),
        });
        self
    }

    pub fn user_method(mut self, name: &str, params: usize) -> Self {
        self.members.push(Member::Method {
            name: name.to_string(),
            params,
            provenance: Provenance::User,
        });
        self
    }

    pub fn methods_named(&self, name: &str) -> usize {
        self.members
            .iter()
            .filter(|member| matches!(member, Member::Method { name: n, .. } if n == name))
            .count()
    }

    /// Evaluates the injected `lookup` for `input`.
    pub fn call_lookup(&self, input: i64) -> Option<&str> {
        let method = self.injected.last().expect("no lookup injected");
        method.body.resolve(|value| *value == input)
    }
}

impl TypeView for FakeType {
    type Expr = i64;
    type Ty = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn members(&self) -> Vec<MemberView<'_, String>> {
        self.members
            .iter()
            .map(|member| match member {
                Member::Field { name, ty } => MemberView::Field(FieldView { name, ty }),
                Member::Method {
                    name,
                    params,
                    provenance,
                } => MemberView::Method(MethodView {
                    name,
                    params: *params,
                    provenance: provenance.clone(),
                }),
            })
            .collect()
    }

    fn constants(&self) -> Vec<ConstantView<'_, i64>> {
        self.constants
            .iter()
            .map(|constant| ConstantView {
                name: &constant.name,
                args: &constant.args,
            })
            .collect()
    }

    fn supports_overloading(&self) -> bool {
        self.overloading
    }
}

impl MethodInjector for FakeType {
    fn inject(&mut self, method: GeneratedMethod<i64, String>) {
        self.members.push(Member::Method {
            name: method.name.to_string(),
            params: 1,
            provenance: method.provenance.clone(),
        });
        self.injected.push(method);
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
