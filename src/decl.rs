//! Declaration-level binding view: type and package elements, their
//! annotations, and the declaration nodes that refer to them.

use crate::binding::VarBinding;
use crate::tree::Number;
use crate::types::{ClassName, TypeRef};

/// Index of a [`TypeElement`] inside a [`DeclTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeElementId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
    /// Synthesized for a lambda or closure body.
    Lambda,
}

#[derive(Debug, Clone)]
pub struct TypeElement {
    pub name: ClassName,
    pub kind: TypeKind,
    /// Lexically enclosing type, `None` for top-level types.
    pub declaring: Option<TypeElementId>,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub annotations: Vec<AnnotationMirror>,
}

impl TypeElement {
    pub fn new(name: ClassName, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            declaring: None,
            superclass: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn is_lambda(&self) -> bool {
        self.kind == TypeKind::Lambda
    }

    pub fn annotation(&self, annotation_type: &ClassName) -> Option<&AnnotationMirror> {
        find_annotation(&self.annotations, annotation_type)
    }
}

#[derive(Debug, Clone)]
pub struct PackageElement {
    pub name: String,
    pub annotations: Vec<AnnotationMirror>,
}

impl PackageElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), annotations: Vec::new() }
    }

    pub fn annotation(&self, annotation_type: &ClassName) -> Option<&AnnotationMirror> {
        find_annotation(&self.annotations, annotation_type)
    }
}

fn find_annotation<'a>(annotations: &'a [AnnotationMirror], annotation_type: &ClassName) -> Option<&'a AnnotationMirror> {
    annotations.iter().find(|a| &a.annotation_type == annotation_type)
}

/// Arena of resolved type elements for one translation unit.
#[derive(Debug, Clone, Default)]
pub struct DeclTable {
    types: Vec<TypeElement>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: TypeElement) -> TypeElementId {
        let id = TypeElementId(self.types.len() as u32);
        self.types.push(element);
        id
    }

    /// Add `element` nested directly inside `outer`.
    pub fn add_nested(&mut self, outer: TypeElementId, mut element: TypeElement) -> TypeElementId {
        element.declaring = Some(outer);
        self.add(element)
    }

    pub fn get(&self, id: TypeElementId) -> &TypeElement {
        &self.types[id.0 as usize]
    }

    pub fn declaring(&self, id: TypeElementId) -> Option<TypeElementId> {
        self.get(id).declaring
    }

    /// `id` followed by each enclosing type, innermost first.
    pub fn enclosing_chain(&self, id: TypeElementId) -> impl Iterator<Item = TypeElementId> + '_ {
        std::iter::successors(Some(id), move |&cur| self.declaring(cur))
    }
}

/// An annotation instance as resolved at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMirror {
    pub annotation_type: ClassName,
    pub values: Vec<MemberValuePair>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberValuePair {
    /// Accessor method name of the annotation member.
    pub name: String,
    /// Declared return type of the accessor.
    pub ty: TypeRef,
    pub value: AnnotationValue,
}

impl AnnotationMirror {
    pub fn new(annotation_type: ClassName) -> Self {
        Self { annotation_type, values: Vec::new() }
    }

    pub fn with_value(mut self, name: impl Into<String>, ty: TypeRef, value: AnnotationValue) -> Self {
        self.values.push(MemberValuePair { name: name.into(), ty, value });
        self
    }

    /// Explicitly written value of the member called `name`.
    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// Member-value pairs ordered by member name.
    pub fn sorted_member_value_pairs(&self) -> Vec<&MemberValuePair> {
        let mut pairs: Vec<_> = self.values.iter().collect();
        pairs.sort_by(|a, b| a.name.cmp(&b.name));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    Null,
    EnumConstant(VarBinding),
    Type(TypeRef),
    Annotation(AnnotationMirror),
    Array(Vec<AnnotationValue>),
    Constant(Constant),
}

impl AnnotationValue {
    pub fn string(value: impl Into<String>) -> Self {
        AnnotationValue::Constant(Constant::String(value.into()))
    }

    pub fn int(value: i32) -> Self {
        AnnotationValue::Constant(Constant::Number(Number::Int(value)))
    }

    pub fn boolean(value: bool) -> Self {
        AnnotationValue::Constant(Constant::Boolean(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Boolean(bool),
    Char(char),
    Number(Number),
    String(String),
}

/// Shape of a type declaration as written in source.
#[derive(Debug, Clone)]
pub enum DeclarationKind {
    Class {
        superclass: Option<TypeRef>,
        interfaces: Vec<TypeRef>,
    },
    Enum {
        interfaces: Vec<TypeRef>,
    },
    Annotation,
}

#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub element: TypeElementId,
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone)]
pub struct PackageDeclaration {
    pub element: PackageElement,
}

/// Super type of a declaration. Class declarations answer from their own
/// `extends` clause; the others fall back to the resolved element.
pub fn super_type(decl: &TypeDeclaration, table: &DeclTable) -> Option<TypeRef> {
    match &decl.kind {
        DeclarationKind::Class { superclass, .. } => superclass.clone(),
        DeclarationKind::Enum { .. } | DeclarationKind::Annotation => table.get(decl.element).superclass.clone(),
    }
}

/// Directly implemented interfaces, in declaration order.
pub fn interface_types(decl: &TypeDeclaration, table: &DeclTable) -> Vec<TypeRef> {
    match &decl.kind {
        DeclarationKind::Class { interfaces, .. } | DeclarationKind::Enum { interfaces } => interfaces.clone(),
        DeclarationKind::Annotation => table.get(decl.element).interfaces.clone(),
    }
}
