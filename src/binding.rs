//! Resolved-binding view consumed by the analyses.
//!
//! The resolver that runs before this pass attaches these to name, field
//! and invocation nodes. Nothing in this crate derives them.

use crate::types::{ClassName, TypeRef};

/// Selector of the runtime's `autorelease` message.
pub const AUTORELEASE_METHOD: &str = "autorelease";

/// Storage facts about a resolved variable, field or enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct VarBinding {
    pub name: String,
    pub ty: TypeRef,
    /// Declaring type for fields and enum constants, `None` for locals.
    pub declaring_type: Option<ClassName>,
    pub is_field: bool,
    pub is_volatile: bool,
    pub is_weak: bool,
}

impl VarBinding {
    pub fn local(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            declaring_type: None,
            is_field: false,
            is_volatile: false,
            is_weak: false,
        }
    }

    pub fn field(name: impl Into<String>, ty: TypeRef, declaring_type: ClassName) -> Self {
        Self {
            name: name.into(),
            ty,
            declaring_type: Some(declaring_type),
            is_field: true,
            is_volatile: false,
            is_weak: false,
        }
    }

    /// An enum constant is a static field of its own enum type.
    pub fn enum_constant(enum_type: ClassName, name: impl Into<String>) -> Self {
        Self::field(name, TypeRef::Declared(enum_type.clone()), enum_type)
    }

    pub fn volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    pub fn weak(mut self) -> Self {
        self.is_weak = true;
        self
    }
}

/// Target of a method invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    pub name: String,
    pub declaring_type: Option<ClassName>,
    pub return_type: TypeRef,
    /// Set when the method is a native runtime message rather than a
    /// translated source method.
    pub selector: Option<String>,
}

impl MethodBinding {
    pub fn source(name: impl Into<String>, declaring_type: ClassName, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type: Some(declaring_type),
            return_type,
            selector: None,
        }
    }

    pub fn native(selector: impl Into<String>, return_type: TypeRef) -> Self {
        let selector = selector.into();
        Self {
            name: selector.clone(),
            declaring_type: None,
            return_type,
            selector: Some(selector),
        }
    }

    pub fn is_autorelease(&self) -> bool {
        self.selector.as_deref() == Some(AUTORELEASE_METHOD)
    }
}

/// Target of a plain function invocation in the lowered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionElement {
    pub name: String,
    pub return_type: TypeRef,
    pub declaring_type: Option<ClassName>,
    pub param_types: Vec<TypeRef>,
}

impl FunctionElement {
    pub fn new(name: impl Into<String>, return_type: TypeRef, declaring_type: Option<ClassName>) -> Self {
        Self {
            name: name.into(),
            return_type,
            declaring_type,
            param_types: Vec::new(),
        }
    }

    pub fn add_parameter(&mut self, ty: TypeRef) {
        self.param_types.push(ty);
    }
}
