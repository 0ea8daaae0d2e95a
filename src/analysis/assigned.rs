use crate::tree::{Expr, ExprId, ExprTree, PrefixOp};

/// Whether `id` is written to by its context: the operand of an increment,
/// decrement or address-of, or the left-hand side of an assignment.
///
/// Parentheses are transparent for the operator contexts only. An
/// assignment must hold `id` itself as its lhs, so in `(x) = y` the wrapper
/// is assigned and `x` is not.
pub fn is_assigned(tree: &ExprTree, id: ExprId) -> bool {
    let mut parent = tree.parent(id);
    while let Some(p) = parent {
        if !matches!(tree.get(p), Expr::Parenthesized { .. }) {
            break;
        }
        parent = tree.parent(p);
    }
    let Some(parent) = parent else {
        return false;
    };

    match tree.get(parent) {
        Expr::Postfix { .. } => true,
        Expr::Prefix { op, .. } => op.is_increment_or_decrement() || *op == PrefixOp::AddressOf,
        Expr::Assignment { lhs, .. } => *lhs == Some(id),
        _ => false,
    }
}
