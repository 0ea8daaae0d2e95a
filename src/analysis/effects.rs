use crate::tree::{Expr, ExprId, ExprTree, Slot};

/// Whether evaluating `id` might have an observable side effect.
///
/// Conservative: `false` means the expression is provably pure and may be
/// pruned from the tree. Anything not understood here answers `true`.
pub fn has_side_effect(tree: &ExprTree, id: ExprId) -> bool {
    // Every read of a volatile location is observable.
    if tree.variable_binding(id).is_some_and(|var| var.is_volatile) {
        return true;
    }
    match tree.get(id) {
        Expr::BooleanLiteral(_)
        | Expr::CharacterLiteral(_)
        | Expr::NullLiteral
        | Expr::NumberLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::SimpleName { .. }
        | Expr::QualifiedName { .. }
        | Expr::This
        | Expr::SuperFieldAccess { .. } => false,

        Expr::Cast { expr, .. } | Expr::Parenthesized { expr } => slot_has_side_effect(tree, id, *expr),
        Expr::FieldAccess { target, .. } => slot_has_side_effect(tree, id, *target),
        Expr::Conditional { condition, then_expr, else_expr } => {
            slot_has_side_effect(tree, id, *condition)
                || slot_has_side_effect(tree, id, *then_expr)
                || slot_has_side_effect(tree, id, *else_expr)
        }
        Expr::Infix { operands, .. } => operands.iter().any(|&op| has_side_effect(tree, op)),
        Expr::Prefix { op, operand } => {
            op.is_increment_or_decrement() || slot_has_side_effect(tree, id, *operand)
        }

        Expr::TypeLiteral(_)
        | Expr::ArrayAccess { .. }
        | Expr::ArrayCreation { .. }
        | Expr::ArrayInitializer { .. }
        | Expr::ClassInstanceCreation { .. }
        | Expr::Postfix { .. }
        | Expr::MethodInvocation { .. }
        | Expr::FunctionInvocation { .. }
        | Expr::Assignment { .. } => true,
    }
}

fn slot_has_side_effect(tree: &ExprTree, parent: ExprId, slot: Slot) -> bool {
    match slot {
        Some(child) => has_side_effect(tree, child),
        None => panic!(
            "{} {parent} has a vacated child slot; re-attach before analyzing",
            tree.get(parent).kind_name()
        ),
    }
}
