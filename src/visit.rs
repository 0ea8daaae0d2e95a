//! Read-only traversal over an [`ExprTree`].
//!
//! Implement [`Visitor`] and override `visit_expr`; call [`walk_expr`] from
//! the override to keep descending, or omit it to prune the subtree.
//!
//! ```rust
//! use rclower::tree::{Expr, ExprId, ExprTree};
//! use rclower::visit::{Visitor, walk_expr};
//!
//! struct StringCollector {
//!     values: Vec<String>,
//! }
//!
//! impl Visitor for StringCollector {
//!     fn visit_expr(&mut self, tree: &ExprTree, id: ExprId) {
//!         if let Expr::StringLiteral(s) = tree.get(id) {
//!             self.values.push(s.clone());
//!         }
//!         walk_expr(self, tree, id);
//!     }
//! }
//! ```

use crate::tree::{ExprId, ExprTree};

pub trait Visitor: Sized {
    fn visit_expr(&mut self, tree: &ExprTree, id: ExprId) {
        walk_expr(self, tree, id);
    }
}

/// Visit every child of `id` in source order.
pub fn walk_expr<V: Visitor>(v: &mut V, tree: &ExprTree, id: ExprId) {
    for child in tree.get(id).children() {
        v.visit_expr(tree, child);
    }
}
