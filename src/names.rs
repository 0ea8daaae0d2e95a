use crate::types::ClassName;

/// Prefix of the generated factory function that re-creates an annotation.
pub const ANNOTATION_FACTORY_PREFIX: &str = "create_";

/// Naming service for target-language identifiers.
pub trait NameTable {
    /// Deterministic, globally unique target name for a declared type.
    fn full_name(&self, ty: &ClassName) -> String;

    fn annotation_factory_name(&self, annotation_type: &ClassName) -> String {
        format!("{ANNOTATION_FACTORY_PREFIX}{}", self.full_name(annotation_type))
    }
}

/// Camel-cases each package segment and joins nested type names with `_`:
/// `com.example.Outer.Inner` becomes `ComExampleOuter_Inner`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseNameTable;

impl NameTable for CamelCaseNameTable {
    fn full_name(&self, ty: &ClassName) -> String {
        let mut out: String = ty.package.split('.').filter(|s| !s.is_empty()).map(capitalize).collect();
        out.push_str(&ty.names.join("_"));
        out
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
