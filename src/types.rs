use std::fmt;

/// Fully-qualified name of a declared type. Nested types keep one entry per
/// nesting level in `names`, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct ClassName {
    pub package: String,
    pub names: Vec<String>,
}

impl ClassName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self { package: package.into(), names: vec![name.into()] }
    }

    /// A type nested directly inside `self`.
    pub fn nested(&self, name: impl Into<String>) -> Self {
        let mut names = self.names.clone();
        names.push(name.into());
        Self { package: self.package.clone(), names }
    }

    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or("")
    }

    /// Dotted source-level name, e.g. `com.example.Outer.Inner`.
    pub fn qualified(&self) -> String {
        let mut out = self.package.clone();
        for name in &self.names {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(name);
        }
        out
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TypeRef {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
    Declared(ClassName),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn declared(package: &str, name: &str) -> Self {
        TypeRef::Declared(ClassName::new(package, name))
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    pub fn string() -> Self {
        TypeRef::declared("java.lang", "String")
    }

    pub fn object() -> Self {
        TypeRef::declared("java.lang", "Object")
    }

    pub fn class() -> Self {
        TypeRef::declared("java.lang", "Class")
    }

    /// Element type of an array type; `None` for everything else.
    pub fn component_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(inner) => Some(&**inner),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Boolean => write!(f, "boolean"),
            TypeRef::Char => write!(f, "char"),
            TypeRef::Byte => write!(f, "byte"),
            TypeRef::Short => write!(f, "short"),
            TypeRef::Int => write!(f, "int"),
            TypeRef::Long => write!(f, "long"),
            TypeRef::Float => write!(f, "float"),
            TypeRef::Double => write!(f, "double"),
            TypeRef::Void => write!(f, "void"),
            TypeRef::Declared(name) => write!(f, "{}", name.simple_name()),
            TypeRef::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}
