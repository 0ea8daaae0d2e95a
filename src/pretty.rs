use crate::tree::{Expr, ExprId, ExprTree, Slot};
use crate::types::TypeRef;

/// Render the subtree rooted at `id` in source-like syntax, for logs and
/// test expectations. Nodes carrying a retained result are prefixed with
/// `/*retained*/`; vacated slots print as `<vacant>`.
pub fn render(tree: &ExprTree, id: ExprId) -> String {
    let mut pp = PrettyPrinter { tree, buf: String::new() };
    pp.emit_expr(id);
    pp.buf
}

struct PrettyPrinter<'a> {
    tree: &'a ExprTree,
    buf: String,
}

impl PrettyPrinter<'_> {
    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn emit_slot(&mut self, slot: Slot) {
        match slot {
            Some(id) => self.emit_expr(id),
            None => self.write("<vacant>"),
        }
    }

    fn emit_list(&mut self, items: &[ExprId], sep: &str) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            self.emit_expr(item);
        }
    }

    fn emit_expr(&mut self, id: ExprId) {
        let tree = self.tree;
        if tree.has_retained_result(id) {
            self.write("/*retained*/ ");
        }
        match tree.get(id) {
            Expr::BooleanLiteral(b) => self.write(if *b { "true" } else { "false" }),
            Expr::CharacterLiteral(c) => {
                self.write("'");
                self.write(&escape_char(*c, '\''));
                self.write("'");
            }
            Expr::NumberLiteral(n) => self.write(&n.to_string()),
            Expr::StringLiteral(s) => {
                self.write("\"");
                self.write(&escape_string(s));
                self.write("\"");
            }
            Expr::NullLiteral => self.write("null"),
            Expr::TypeLiteral(ty) => {
                self.write(&ty.to_string());
                self.write(".class");
            }
            Expr::SimpleName { name, .. } => self.write(name),
            Expr::QualifiedName { qualifier, name, .. } => {
                self.emit_slot(*qualifier);
                self.write(".");
                self.write(name);
            }
            Expr::This => self.write("this"),
            Expr::FieldAccess { target, name, .. } => {
                self.emit_slot(*target);
                self.write(".");
                self.write(name);
            }
            Expr::SuperFieldAccess { name, .. } => {
                self.write("super.");
                self.write(name);
            }
            Expr::ArrayAccess { array, index } => {
                self.emit_slot(*array);
                self.write("[");
                self.emit_slot(*index);
                self.write("]");
            }
            Expr::ArrayCreation { ty, dimensions, initializer, .. } => {
                let (element, depth) = array_element(ty);
                self.write("new ");
                self.write(&element.to_string());
                for &dim in dimensions {
                    self.write("[");
                    self.emit_expr(dim);
                    self.write("]");
                }
                for _ in dimensions.len()..depth {
                    self.write("[]");
                }
                if let Some(init) = initializer {
                    self.write(" ");
                    self.emit_expr(*init);
                }
            }
            Expr::ArrayInitializer { elements, .. } => {
                self.write("{");
                self.emit_list(elements, ", ");
                self.write("}");
            }
            Expr::ClassInstanceCreation { ty, args, .. } => {
                self.write("new ");
                self.write(&ty.to_string());
                self.write("(");
                self.emit_list(args, ", ");
                self.write(")");
            }
            Expr::Cast { ty, expr } => {
                self.write("(");
                self.write(&ty.to_string());
                self.write(") ");
                self.emit_slot(*expr);
            }
            Expr::Parenthesized { expr } => {
                self.write("(");
                self.emit_slot(*expr);
                self.write(")");
            }
            Expr::Conditional { condition, then_expr, else_expr } => {
                self.emit_slot(*condition);
                self.write(" ? ");
                self.emit_slot(*then_expr);
                self.write(" : ");
                self.emit_slot(*else_expr);
            }
            Expr::Infix { op, operands } => {
                let sep = format!(" {} ", op.as_str());
                self.emit_list(operands, &sep);
            }
            Expr::Prefix { op, operand } => {
                self.write(op.as_str());
                self.emit_slot(*operand);
            }
            Expr::Postfix { op, operand } => {
                self.emit_slot(*operand);
                self.write(op.as_str());
            }
            Expr::MethodInvocation { receiver, method, args } => {
                if let Some(receiver) = receiver {
                    self.emit_expr(*receiver);
                    self.write(".");
                }
                self.write(&method.name);
                self.write("(");
                self.emit_list(args, ", ");
                self.write(")");
            }
            Expr::FunctionInvocation { function, args, .. } => {
                self.write(&function.name);
                self.write("(");
                self.emit_list(args, ", ");
                self.write(")");
            }
            Expr::Assignment { op, lhs, rhs } => {
                self.emit_slot(*lhs);
                self.write(" ");
                self.write(op.as_str());
                self.write(" ");
                self.emit_slot(*rhs);
            }
        }
    }
}

/// Innermost element type and number of array dimensions.
fn array_element(ty: &TypeRef) -> (&TypeRef, usize) {
    let mut element = ty;
    let mut depth = 0;
    while let Some(inner) = element.component_type() {
        element = inner;
        depth += 1;
    }
    (element, depth)
}

fn escape_char(c: char, quote: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if c == quote => format!("\\{c}"),
        c => c.to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.chars().map(|c| escape_char(c, '"')).collect()
}
