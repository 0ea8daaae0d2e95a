//! Arena-backed expression tree with parent links.
//!
//! Every node lives in the [`ExprTree`] arena and is addressed by an
//! [`ExprId`]. Ownership is explicit: a node is owned by exactly one slot of
//! its parent (or by the caller when it has no parent). Parent links are for
//! navigation only. Builders adopt their children, and adopting a node that
//! already has a parent is a programming error.

pub mod expr;

pub use expr::{AssignOp, Expr, ExprId, InfixOp, Number, PostfixOp, PrefixOp, Slot};

use crate::binding::{FunctionElement, MethodBinding, VarBinding};
use crate::types::TypeRef;
use crate::visit::{Visitor, walk_expr};

#[derive(Debug, Clone)]
struct Node {
    expr: Expr,
    parent: Option<ExprId>,
}

#[derive(Debug, Clone, Default)]
pub struct ExprTree {
    nodes: Vec<Node>,
}

impl ExprTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ExprId) -> &Expr {
        &self.nodes[id.index()].expr
    }

    pub(crate) fn get_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.nodes[id.index()].expr
    }

    pub fn parent(&self, id: ExprId) -> Option<ExprId> {
        self.nodes[id.index()].parent
    }

    pub fn is_attached(&self, id: ExprId) -> bool {
        self.parent(id).is_some()
    }

    pub fn children(&self, id: ExprId) -> Vec<ExprId> {
        self.get(id).children()
    }

    /// Allocate `expr` and adopt every child it references.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.nodes.len() as u32);
        let children = expr.children();
        self.nodes.push(Node { expr, parent: None });
        for child in children {
            self.adopt(id, child);
        }
        id
    }

    fn adopt(&mut self, parent: ExprId, child: ExprId) {
        let node = &mut self.nodes[child.index()];
        assert!(
            node.parent.is_none(),
            "node {child} is already owned by {}; detach it before re-attaching",
            node.parent.map(|p| p.to_string()).unwrap_or_default()
        );
        node.parent = Some(parent);
    }

    /// Remove `id` from its parent's slot and hand ownership to the caller.
    /// A root node is returned unchanged.
    pub fn detach(&mut self, id: ExprId) -> ExprId {
        if let Some(parent) = self.nodes[id.index()].parent.take() {
            let removed = self.get_mut(parent).vacate_child(id);
            assert!(removed, "parent link of {id} points at {parent}, which does not hold it");
        }
        id
    }

    /// Put the detached node `new` into the slot currently holding `old`.
    /// `old` ends up detached and owned by the caller.
    ///
    /// Panics if `old` is a root: there is no slot to put `new` into.
    pub fn replace(&mut self, old: ExprId, new: ExprId) {
        let Some(parent) = self.parent(old) else {
            panic!("cannot replace root node {old}; it has no parent slot");
        };
        let replaced = self.get_mut(parent).replace_child(old, new);
        assert!(replaced, "parent link of {old} points at {parent}, which does not hold it");
        self.nodes[old.index()].parent = None;
        self.adopt(parent, new);
    }

    /// Re-attach a detached node into the first vacant single-child slot of
    /// `parent`.
    pub fn fill(&mut self, parent: ExprId, child: ExprId) {
        let filled = self.get_mut(parent).fill_vacancy(child);
        assert!(filled, "{} {parent} has no vacant slot", self.get(parent).kind_name());
        self.adopt(parent, child);
    }

    /// Strip any number of enclosing parenthesized wrappers.
    pub fn trim_parentheses(&self, mut id: ExprId) -> ExprId {
        while let Expr::Parenthesized { expr: Some(inner) } = self.get(id) {
            id = *inner;
        }
        id
    }

    /// The storage location an expression denotes, if it is a variable.
    /// Array elements and computed values have none.
    pub fn variable_binding(&self, id: ExprId) -> Option<&VarBinding> {
        match self.get(self.trim_parentheses(id)) {
            Expr::SimpleName { binding, .. }
            | Expr::QualifiedName { binding, .. }
            | Expr::FieldAccess { binding, .. }
            | Expr::SuperFieldAccess { binding, .. } => binding.as_ref(),
            _ => None,
        }
    }

    pub fn has_retained_result(&self, id: ExprId) -> bool {
        match self.get(id) {
            Expr::ArrayCreation { retained_result, .. }
            | Expr::ClassInstanceCreation { retained_result, .. }
            | Expr::FunctionInvocation { retained_result, .. } => *retained_result,
            _ => false,
        }
    }

    /// Set the retained-result marker. Returns false for kinds that cannot
    /// carry one.
    pub(crate) fn mark_retained(&mut self, id: ExprId) -> bool {
        match self.get_mut(id) {
            Expr::ArrayCreation { retained_result, .. }
            | Expr::ClassInstanceCreation { retained_result, .. }
            | Expr::FunctionInvocation { retained_result, .. } => {
                *retained_result = true;
                true
            }
            _ => false,
        }
    }

    /// Check that every child reachable from `root` points back at the
    /// parent that holds it.
    pub fn verify_links(&self, root: ExprId) -> Result<(), String> {
        let mut checker = LinkChecker { errors: Vec::new() };
        checker.visit_expr(self, root);
        if checker.errors.is_empty() {
            Ok(())
        } else {
            Err(checker.errors.join("; "))
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn boolean(&mut self, value: bool) -> ExprId {
        self.alloc(Expr::BooleanLiteral(value))
    }

    pub fn character(&mut self, value: char) -> ExprId {
        self.alloc(Expr::CharacterLiteral(value))
    }

    pub fn number(&mut self, value: Number) -> ExprId {
        self.alloc(Expr::NumberLiteral(value))
    }

    pub fn int(&mut self, value: i32) -> ExprId {
        self.number(Number::Int(value))
    }

    pub fn string(&mut self, value: impl Into<String>) -> ExprId {
        self.alloc(Expr::StringLiteral(value.into()))
    }

    pub fn null(&mut self) -> ExprId {
        self.alloc(Expr::NullLiteral)
    }

    pub fn type_literal(&mut self, ty: TypeRef) -> ExprId {
        self.alloc(Expr::TypeLiteral(ty))
    }

    pub fn this(&mut self) -> ExprId {
        self.alloc(Expr::This)
    }

    pub fn name(&mut self, binding: VarBinding) -> ExprId {
        self.alloc(Expr::SimpleName { name: binding.name.clone(), binding: Some(binding) })
    }

    /// A name the resolver bound to something other than a variable
    /// (a type or package segment).
    pub fn unbound_name(&mut self, name: impl Into<String>) -> ExprId {
        self.alloc(Expr::SimpleName { name: name.into(), binding: None })
    }

    pub fn qualified_name(&mut self, qualifier: ExprId, binding: VarBinding) -> ExprId {
        self.alloc(Expr::QualifiedName {
            qualifier: Some(qualifier),
            name: binding.name.clone(),
            binding: Some(binding),
        })
    }

    pub fn field_access(&mut self, target: ExprId, binding: VarBinding) -> ExprId {
        self.alloc(Expr::FieldAccess {
            target: Some(target),
            name: binding.name.clone(),
            binding: Some(binding),
        })
    }

    pub fn super_field_access(&mut self, binding: VarBinding) -> ExprId {
        self.alloc(Expr::SuperFieldAccess { name: binding.name.clone(), binding: Some(binding) })
    }

    pub fn array_access(&mut self, array: ExprId, index: ExprId) -> ExprId {
        self.alloc(Expr::ArrayAccess { array: Some(array), index: Some(index) })
    }

    pub fn array_creation(&mut self, ty: TypeRef, dimensions: Vec<ExprId>, initializer: Option<ExprId>) -> ExprId {
        self.alloc(Expr::ArrayCreation { ty, dimensions, initializer, retained_result: false })
    }

    pub fn array_initializer(&mut self, ty: TypeRef, elements: Vec<ExprId>) -> ExprId {
        self.alloc(Expr::ArrayInitializer { ty, elements })
    }

    pub fn new_instance(&mut self, ty: TypeRef, args: Vec<ExprId>) -> ExprId {
        self.alloc(Expr::ClassInstanceCreation { ty, args, retained_result: false })
    }

    pub fn cast(&mut self, ty: TypeRef, expr: ExprId) -> ExprId {
        self.alloc(Expr::Cast { ty, expr: Some(expr) })
    }

    pub fn paren(&mut self, expr: ExprId) -> ExprId {
        self.alloc(Expr::Parenthesized { expr: Some(expr) })
    }

    pub fn conditional(&mut self, condition: ExprId, then_expr: ExprId, else_expr: ExprId) -> ExprId {
        self.alloc(Expr::Conditional {
            condition: Some(condition),
            then_expr: Some(then_expr),
            else_expr: Some(else_expr),
        })
    }

    pub fn infix(&mut self, op: InfixOp, operands: Vec<ExprId>) -> ExprId {
        debug_assert!(operands.len() >= 2, "infix chain needs at least two operands");
        self.alloc(Expr::Infix { op, operands })
    }

    pub fn prefix(&mut self, op: PrefixOp, operand: ExprId) -> ExprId {
        self.alloc(Expr::Prefix { op, operand: Some(operand) })
    }

    pub fn postfix(&mut self, op: PostfixOp, operand: ExprId) -> ExprId {
        self.alloc(Expr::Postfix { op, operand: Some(operand) })
    }

    pub fn method_call(&mut self, receiver: Option<ExprId>, method: MethodBinding, args: Vec<ExprId>) -> ExprId {
        self.alloc(Expr::MethodInvocation { receiver, method, args })
    }

    pub fn function_call(&mut self, function: FunctionElement, args: Vec<ExprId>) -> ExprId {
        self.alloc(Expr::FunctionInvocation { function, args, retained_result: false })
    }

    pub fn assign(&mut self, op: AssignOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.alloc(Expr::Assignment { op, lhs: Some(lhs), rhs: Some(rhs) })
    }
}

struct LinkChecker {
    errors: Vec<String>,
}

impl Visitor for LinkChecker {
    fn visit_expr(&mut self, tree: &ExprTree, id: ExprId) {
        for child in tree.children(id) {
            if tree.parent(child) != Some(id) {
                self.errors.push(format!(
                    "{child} is held by {id} but its parent link is {:?}",
                    tree.parent(child)
                ));
            }
        }
        walk_expr(self, tree, id);
    }
}
