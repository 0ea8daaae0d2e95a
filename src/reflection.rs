//! Reflection requirement resolution: decides whether reflective metadata is
//! emitted for a type or package.

use std::sync::LazyLock;

use crate::config::TranslationConfig;
use crate::decl::{AnnotationMirror, AnnotationValue, DeclTable, PackageDeclaration, PackageElement, TypeDeclaration, TypeElementId};
use crate::types::ClassName;

/// The source annotation that declares a reflection-support level.
pub static REFLECTION_SUPPORT: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("com.google.j2objc.annotations", "ReflectionSupport"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionLevel {
    /// Always emit metadata.
    Full,
    /// Emit metadata unless the translation strips reflection.
    NativeOnly,
}

impl ReflectionLevel {
    pub fn from_constant_name(name: &str) -> Option<Self> {
        match name {
            "FULL" => Some(ReflectionLevel::Full),
            "NATIVE_ONLY" => Some(ReflectionLevel::NativeOnly),
            _ => None,
        }
    }

    fn needs_reflection(self, config: &TranslationConfig) -> bool {
        match self {
            ReflectionLevel::Full => true,
            ReflectionLevel::NativeOnly => !config.strip_reflection,
        }
    }
}

/// Level declared by a `ReflectionSupport` annotation. A missing or
/// unrecognized `value` counts as no declaration at all.
pub fn reflection_support_level(annotation: Option<&AnnotationMirror>) -> Option<ReflectionLevel> {
    match annotation?.value("value")? {
        AnnotationValue::EnumConstant(constant) => ReflectionLevel::from_constant_name(&constant.name),
        _ => None,
    }
}

/// Whether reflective metadata must be emitted for the type `id`.
///
/// Synthesized lambda types never need it. Otherwise the nearest declared
/// level on the type or any enclosing type wins; with none, metadata is
/// emitted unless reflection is stripped.
pub fn needs_reflection(table: &DeclTable, id: TypeElementId, config: &TranslationConfig) -> bool {
    if table.get(id).is_lambda() {
        return false;
    }
    for scope in table.enclosing_chain(id) {
        let element = table.get(scope);
        if let Some(level) = reflection_support_level(element.annotation(&REFLECTION_SUPPORT)) {
            tracing::debug!(
                ty = %table.get(id).name,
                declared_on = %element.name,
                ?level,
                "reflection level resolved from annotation"
            );
            return level.needs_reflection(config);
        }
    }
    !config.strip_reflection
}

pub fn needs_reflection_for_package(package: &PackageElement, config: &TranslationConfig) -> bool {
    match reflection_support_level(package.annotation(&REFLECTION_SUPPORT)) {
        Some(level) => level.needs_reflection(config),
        None => !config.strip_reflection,
    }
}

pub fn needs_reflection_for_declaration(decl: &TypeDeclaration, table: &DeclTable, config: &TranslationConfig) -> bool {
    needs_reflection(table, decl.element, config)
}

pub fn needs_reflection_for_package_declaration(decl: &PackageDeclaration, config: &TranslationConfig) -> bool {
    needs_reflection_for_package(&decl.element, config)
}
