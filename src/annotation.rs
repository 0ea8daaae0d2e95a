//! Reifies compile-time annotation values as expression trees that rebuild
//! the same value at run time.
//!
//! An annotation becomes a call to its generated factory function,
//! `create_<FullName>(...)`, with one argument per member in member-name
//! order. Member values are rebuilt recursively: enum constants as names,
//! classes as type literals, arrays as array creations, nested annotations
//! as nested factory calls.

use crate::binding::FunctionElement;
use crate::decl::{AnnotationMirror, AnnotationValue, Constant};
use crate::names::NameTable;
use crate::tree::{ExprId, ExprTree, Number};
use crate::types::TypeRef;

pub fn create_annotation(tree: &mut ExprTree, names: &impl NameTable, annotation: &AnnotationMirror) -> ExprId {
    let annotation_type = TypeRef::Declared(annotation.annotation_type.clone());
    let factory = names.annotation_factory_name(&annotation.annotation_type);
    tracing::trace!(%factory, members = annotation.values.len(), "reifying annotation");

    let mut function = FunctionElement::new(factory, annotation_type, Some(annotation.annotation_type.clone()));
    let mut args = Vec::with_capacity(annotation.values.len());
    for pair in annotation.sorted_member_value_pairs() {
        function.add_parameter(pair.ty.clone());
        args.push(create_annotation_value(tree, names, &pair.ty, &pair.value));
    }
    tree.function_call(function, args)
}

/// Rebuild a single member value declared with type `ty`.
pub fn create_annotation_value(tree: &mut ExprTree, names: &impl NameTable, ty: &TypeRef, value: &AnnotationValue) -> ExprId {
    match value {
        AnnotationValue::Null => tree.null(),
        AnnotationValue::EnumConstant(constant) => tree.name(constant.clone()),
        AnnotationValue::Type(referenced) => tree.type_literal(referenced.clone()),
        AnnotationValue::Annotation(nested) => create_annotation(tree, names, nested),
        AnnotationValue::Array(elements) => {
            let component = ty
                .component_type()
                .unwrap_or_else(|| panic!("array annotation value declared with non-array type {ty}"));
            let generated = elements
                .iter()
                .map(|elem| create_annotation_value(tree, names, component, elem))
                .collect();
            create_object_array(tree, generated, ty.clone())
        }
        AnnotationValue::Constant(constant) => new_literal(tree, constant),
    }
}

/// `new T[0]` for no elements, `new T[] { ... }` otherwise.
pub fn create_object_array(tree: &mut ExprTree, elements: Vec<ExprId>, array_type: TypeRef) -> ExprId {
    if elements.is_empty() {
        let zero = tree.number(Number::Int(0));
        return tree.array_creation(array_type, vec![zero], None);
    }
    let initializer = tree.array_initializer(array_type.clone(), elements);
    tree.array_creation(array_type, Vec::new(), Some(initializer))
}

fn new_literal(tree: &mut ExprTree, constant: &Constant) -> ExprId {
    match constant {
        Constant::Boolean(b) => tree.boolean(*b),
        Constant::Char(c) => tree.character(*c),
        Constant::Number(n) => tree.number(*n),
        Constant::String(s) => tree.string(s.clone()),
    }
}
