//! Drives the re-exported generator through a host other than the macro.

use enum_lookup::generator::{
    ConstantView, DeclKind, FieldView, MemberView, MethodView, Provenance,
};
use enum_lookup::{
    AnnotationValues, GeneratedMethod, LogSink, LookupHandler, MethodInjector, Outcome, TypeView,
};

struct Colors {
    constants: Vec<(&'static str, Vec<&'static str>)>,
    generated: Option<GeneratedMethod<&'static str, &'static str>>,
}

impl TypeView for Colors {
    type Expr = &'static str;
    type Ty = &'static str;

    fn name(&self) -> &str {
        "Color"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Enum
    }

    fn members(&self) -> Vec<MemberView<'_, &'static str>> {
        let mut members = vec![MemberView::Field(FieldView {
            name: "hex",
            ty: &"String",
        })];
        if let Some(method) = &self.generated {
            members.push(MemberView::Method(MethodView {
                name: method.name,
                params: 1,
                provenance: Provenance::generated(),
            }));
        }
        members
    }

    fn constants(&self) -> Vec<ConstantView<'_, &'static str>> {
        self.constants
            .iter()
            .map(|(name, args)| ConstantView { name, args })
            .collect()
    }
}

impl MethodInjector for Colors {
    fn inject(&mut self, method: GeneratedMethod<&'static str, &'static str>) {
        self.generated = Some(method);
    }
}

#[test]
fn test_log_sink_host() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut colors = Colors {
        constants: vec![("RED", vec!["#f00"]), ("GREEN", vec!["#0f0"])],
        generated: None,
    };
    let handler = LookupHandler::default();
    let values = AnnotationValues::new("hex").ordinal(0).default_value("RED");

    assert_eq!(handler.handle(&values, &mut colors, &mut LogSink), Outcome::Generated);
    assert_eq!(handler.handle(&values, &mut colors, &mut LogSink), Outcome::AlreadyGenerated);

    let method = colors.generated.as_ref().unwrap();
    assert_eq!(method.param.ty, "String");
    assert_eq!(method.body.resolve(|hex| *hex == "#0f0"), Some("GREEN"));
    assert_eq!(method.body.resolve(|hex| *hex == "#00f"), Some("RED"));
}
