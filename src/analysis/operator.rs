use crate::config::TranslationConfig;
use crate::tree::{Expr, ExprId, ExprTree};

/// Storage qualifier for the helper that a compound assignment on `lhs` is
/// lowered to.
///
/// `"Array"` for array elements. Otherwise `"Volatile"` for volatile storage
/// followed by `"Strong"` for retaining storage (non-weak fields, or any
/// non-weak variable under ARC). The empty string selects the plain helper
/// used for locals and weak fields.
///
/// Panics if `lhs` is neither a variable nor an array access.
pub fn operator_function_modifier(tree: &ExprTree, lhs: ExprId, config: &TranslationConfig) -> String {
    let Some(var) = tree.variable_binding(lhs) else {
        let trimmed = tree.trim_parentheses(lhs);
        assert!(
            matches!(tree.get(trimmed), Expr::ArrayAccess { .. }),
            "{} {lhs} cannot be resolved to a variable or array access",
            tree.get(trimmed).kind_name()
        );
        return "Array".to_string();
    };
    let mut modifier = String::new();
    if var.is_volatile {
        modifier.push_str("Volatile");
    }
    if !var.is_weak && (var.is_field || config.use_arc) {
        modifier.push_str("Strong");
    }
    modifier
}
