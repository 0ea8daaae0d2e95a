//! Reflection requirement resolution over a small declaration table, with
//! settings coming from a parsed config file.

use std::path::Path;

use rclower::binding::VarBinding;
use rclower::decl::{
    AnnotationMirror, AnnotationValue, DeclTable, DeclarationKind, PackageDeclaration, PackageElement, TypeDeclaration,
    TypeElement, TypeKind, interface_types, super_type,
};
use rclower::reflection::{
    REFLECTION_SUPPORT, ReflectionLevel, needs_reflection, needs_reflection_for_declaration,
    needs_reflection_for_package_declaration, reflection_support_level,
};
use rclower::types::{ClassName, TypeRef};
use rclower::TranslationConfig;

const PKG: &str = "com.example.app";

fn support(level: &str) -> AnnotationMirror {
    let level_type = REFLECTION_SUPPORT.nested("Level");
    AnnotationMirror::new(REFLECTION_SUPPORT.clone()).with_value(
        "value",
        TypeRef::Declared(level_type.clone()),
        AnnotationValue::EnumConstant(VarBinding::enum_constant(level_type, level)),
    )
}

fn config(text: &str) -> TranslationConfig {
    TranslationConfig::from_toml_str(text, Path::new("rclower.toml")).expect("valid config")
}

struct Fixture {
    table: DeclTable,
    service: TypeDeclaration,
    handler: TypeDeclaration,
    lambda: TypeDeclaration,
    model: TypeDeclaration,
}

/// ```text
/// @ReflectionSupport(NATIVE_ONLY) class Service implements Runnable {
///     class Handler { }           // inherits NATIVE_ONLY
///     Runnable r = () -> {};      // synthesized lambda type
/// }
/// @ReflectionSupport(FULL) enum Model implements Comparable { }
/// ```
fn fixture() -> Fixture {
    let mut table = DeclTable::new();
    let runnable = TypeRef::declared("java.lang", "Runnable");
    let comparable = TypeRef::declared("java.lang", "Comparable");

    let service_name = ClassName::new(PKG, "Service");
    let mut service = TypeElement::new(service_name.clone(), TypeKind::Class);
    service.superclass = Some(TypeRef::object());
    service.interfaces.push(runnable.clone());
    service.annotations.push(support("NATIVE_ONLY"));
    let service_id = table.add(service);

    let handler_id = table.add_nested(service_id, TypeElement::new(service_name.nested("Handler"), TypeKind::Class));
    let lambda_id = table.add_nested(service_id, TypeElement::new(service_name.nested("$Lambda$1"), TypeKind::Lambda));

    let mut model = TypeElement::new(ClassName::new(PKG, "Model"), TypeKind::Enum);
    model.superclass = Some(TypeRef::declared("java.lang", "Enum"));
    model.annotations.push(support("FULL"));
    let model_id = table.add(model);

    Fixture {
        table,
        service: TypeDeclaration {
            element: service_id,
            kind: DeclarationKind::Class { superclass: Some(TypeRef::object()), interfaces: vec![runnable] },
        },
        handler: TypeDeclaration {
            element: handler_id,
            kind: DeclarationKind::Class { superclass: None, interfaces: vec![] },
        },
        lambda: TypeDeclaration {
            element: lambda_id,
            kind: DeclarationKind::Class { superclass: None, interfaces: vec![] },
        },
        model: TypeDeclaration { element: model_id, kind: DeclarationKind::Enum { interfaces: vec![comparable] } },
    }
}

#[test]
fn test_declarations_without_stripping() {
    let f = fixture();
    let keep = config("");
    assert!(needs_reflection_for_declaration(&f.service, &f.table, &keep));
    assert!(needs_reflection_for_declaration(&f.handler, &f.table, &keep));
    assert!(needs_reflection_for_declaration(&f.model, &f.table, &keep));
    assert!(!needs_reflection_for_declaration(&f.lambda, &f.table, &keep));
}

#[test]
fn test_declarations_with_stripping() {
    let f = fixture();
    let strip = config("strip_reflection = true");
    assert!(!needs_reflection_for_declaration(&f.service, &f.table, &strip));
    assert!(!needs_reflection_for_declaration(&f.handler, &f.table, &strip));
    assert!(needs_reflection_for_declaration(&f.model, &f.table, &strip));
    assert!(!needs_reflection_for_declaration(&f.lambda, &f.table, &strip));
}

#[test]
fn test_element_and_declaration_queries_agree() {
    let f = fixture();
    for cfg in [config(""), config("strip_reflection = true")] {
        for decl in [&f.service, &f.handler, &f.lambda, &f.model] {
            assert_eq!(
                needs_reflection(&f.table, decl.element, &cfg),
                needs_reflection_for_declaration(decl, &f.table, &cfg),
            );
        }
    }
}

#[test]
fn test_handler_inherits_level_from_enclosing_type() {
    let f = fixture();
    let chain: Vec<_> = f.table.enclosing_chain(f.handler.element).collect();
    assert_eq!(chain, vec![f.handler.element, f.service.element]);
    let declared = f.table.get(f.handler.element).annotation(&REFLECTION_SUPPORT);
    assert_eq!(reflection_support_level(declared), None);
    let inherited = f.table.get(f.service.element).annotation(&REFLECTION_SUPPORT);
    assert_eq!(reflection_support_level(inherited), Some(ReflectionLevel::NativeOnly));
}

#[test]
fn test_package_declarations() {
    let strip = config("strip_reflection = true");
    let mut annotated = PackageElement::new(PKG);
    annotated.annotations.push(support("FULL"));
    let annotated = PackageDeclaration { element: annotated };
    let plain = PackageDeclaration { element: PackageElement::new(PKG) };

    assert!(needs_reflection_for_package_declaration(&annotated, &strip));
    assert!(!needs_reflection_for_package_declaration(&plain, &strip));
    assert!(needs_reflection_for_package_declaration(&plain, &config("")));
}

// ===== Type hierarchy queries =====

#[test]
fn test_super_types_and_interfaces() {
    let f = fixture();
    assert_eq!(super_type(&f.service, &f.table), Some(TypeRef::object()));
    assert_eq!(super_type(&f.model, &f.table), Some(TypeRef::declared("java.lang", "Enum")));
    assert_eq!(super_type(&f.handler, &f.table), None);

    assert_eq!(interface_types(&f.service, &f.table), vec![TypeRef::declared("java.lang", "Runnable")]);
    assert_eq!(interface_types(&f.model, &f.table), vec![TypeRef::declared("java.lang", "Comparable")]);
    assert!(interface_types(&f.handler, &f.table).is_empty());
}
