use crate::config::RetainedFunctions;
use crate::tree::{Expr, ExprId, ExprTree};

/// Try to hand off an extra, unbalanced retain from `node` itself instead of
/// wrapping it in an explicit retain call.
///
/// On `Some(result)`, `result` carries one uncompensated retain and has been
/// detached from the tree; the caller owns it and must place it where a
/// pre-retained value is expected. For creations and retained-result
/// functions `result` is `node`, now marked. For `receiver.autorelease()`,
/// `result` is the receiver and the invocation is left behind with a vacated
/// receiver slot, to be replaced by the caller.
///
/// On `None` the tree is untouched.
pub fn retain_result(tree: &mut ExprTree, node: ExprId, retained_functions: &RetainedFunctions) -> Option<ExprId> {
    match tree.get(node) {
        Expr::ArrayCreation { .. } | Expr::ClassInstanceCreation { .. } => Some(mark_and_detach(tree, node)),
        Expr::FunctionInvocation { function, .. } => {
            if retained_functions.contains(&function.name) {
                Some(mark_and_detach(tree, node))
            } else {
                None
            }
        }
        Expr::MethodInvocation { receiver: Some(receiver), method, .. } if method.is_autorelease() => {
            let receiver = *receiver;
            tracing::debug!(invocation = %node, %receiver, "eliding autorelease, receiver keeps its retain");
            Some(tree.detach(receiver))
        }
        _ => None,
    }
}

fn mark_and_detach(tree: &mut ExprTree, node: ExprId) -> ExprId {
    let marked = tree.mark_retained(node);
    debug_assert!(marked);
    tracing::debug!(%node, kind = tree.get(node).kind_name(), "transferring retained result");
    tree.detach(node)
}
