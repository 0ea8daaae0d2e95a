use std::fmt;

use crate::binding::{FunctionElement, MethodBinding, VarBinding};
use crate::types::TypeRef;

/// Index of a node in an [`ExprTree`](super::ExprTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub(crate) u32);

impl ExprId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single-child position. `None` is either an absent optional child
/// (receiver, initializer) or a slot vacated by `ExprTree::detach`.
pub type Slot = Option<ExprId>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BooleanLiteral(bool),
    CharacterLiteral(char),
    NumberLiteral(Number),
    StringLiteral(String),
    NullLiteral,
    TypeLiteral(TypeRef),
    SimpleName {
        name: String,
        binding: Option<VarBinding>,
    },
    QualifiedName {
        qualifier: Slot,
        name: String,
        binding: Option<VarBinding>,
    },
    This,
    FieldAccess {
        target: Slot,
        name: String,
        binding: Option<VarBinding>,
    },
    SuperFieldAccess {
        name: String,
        binding: Option<VarBinding>,
    },
    ArrayAccess {
        array: Slot,
        index: Slot,
    },
    ArrayCreation {
        ty: TypeRef,
        dimensions: Vec<ExprId>,
        initializer: Slot,
        retained_result: bool,
    },
    ArrayInitializer {
        ty: TypeRef,
        elements: Vec<ExprId>,
    },
    ClassInstanceCreation {
        ty: TypeRef,
        args: Vec<ExprId>,
        retained_result: bool,
    },
    Cast {
        ty: TypeRef,
        expr: Slot,
    },
    Parenthesized {
        expr: Slot,
    },
    Conditional {
        condition: Slot,
        then_expr: Slot,
        else_expr: Slot,
    },
    /// Operator chain `a op b op c ...` with at least two operands.
    Infix {
        op: InfixOp,
        operands: Vec<ExprId>,
    },
    Prefix {
        op: PrefixOp,
        operand: Slot,
    },
    Postfix {
        op: PostfixOp,
        operand: Slot,
    },
    MethodInvocation {
        receiver: Slot,
        method: MethodBinding,
        args: Vec<ExprId>,
    },
    FunctionInvocation {
        function: FunctionElement,
        args: Vec<ExprId>,
        retained_result: bool,
    },
    Assignment {
        op: AssignOp,
        lhs: Slot,
        rhs: Slot,
    },
}

impl Expr {
    /// Children in source order, skipping vacant slots.
    pub fn children(&self) -> Vec<ExprId> {
        let mut out = Vec::new();
        match self {
            Expr::BooleanLiteral(_)
            | Expr::CharacterLiteral(_)
            | Expr::NumberLiteral(_)
            | Expr::StringLiteral(_)
            | Expr::NullLiteral
            | Expr::TypeLiteral(_)
            | Expr::SimpleName { .. }
            | Expr::This
            | Expr::SuperFieldAccess { .. } => {}

            Expr::QualifiedName { qualifier: slot, .. }
            | Expr::FieldAccess { target: slot, .. }
            | Expr::Cast { expr: slot, .. }
            | Expr::Parenthesized { expr: slot }
            | Expr::Prefix { operand: slot, .. }
            | Expr::Postfix { operand: slot, .. } => out.extend(*slot),

            Expr::ArrayAccess { array, index } => {
                out.extend(*array);
                out.extend(*index);
            }
            Expr::ArrayCreation { dimensions, initializer, .. } => {
                out.extend(dimensions.iter().copied());
                out.extend(*initializer);
            }
            Expr::ArrayInitializer { elements: list, .. }
            | Expr::ClassInstanceCreation { args: list, .. }
            | Expr::Infix { operands: list, .. }
            | Expr::FunctionInvocation { args: list, .. } => out.extend(list.iter().copied()),
            Expr::Conditional { condition, then_expr, else_expr } => {
                out.extend(*condition);
                out.extend(*then_expr);
                out.extend(*else_expr);
            }
            Expr::MethodInvocation { receiver, args, .. } => {
                out.extend(*receiver);
                out.extend(args.iter().copied());
            }
            Expr::Assignment { lhs, rhs, .. } => {
                out.extend(*lhs);
                out.extend(*rhs);
            }
        }
        out
    }

    fn slots_mut(&mut self) -> Vec<&mut Slot> {
        match self {
            Expr::QualifiedName { qualifier: slot, .. }
            | Expr::FieldAccess { target: slot, .. }
            | Expr::Cast { expr: slot, .. }
            | Expr::Parenthesized { expr: slot }
            | Expr::Prefix { operand: slot, .. }
            | Expr::Postfix { operand: slot, .. }
            | Expr::ArrayCreation { initializer: slot, .. }
            | Expr::MethodInvocation { receiver: slot, .. } => vec![slot],
            Expr::ArrayAccess { array, index } => vec![array, index],
            Expr::Conditional { condition, then_expr, else_expr } => vec![condition, then_expr, else_expr],
            Expr::Assignment { lhs, rhs, .. } => vec![lhs, rhs],
            _ => Vec::new(),
        }
    }

    fn lists_mut(&mut self) -> Option<&mut Vec<ExprId>> {
        match self {
            Expr::ArrayCreation { dimensions: list, .. }
            | Expr::ArrayInitializer { elements: list, .. }
            | Expr::ClassInstanceCreation { args: list, .. }
            | Expr::Infix { operands: list, .. }
            | Expr::MethodInvocation { args: list, .. }
            | Expr::FunctionInvocation { args: list, .. } => Some(list),
            _ => None,
        }
    }

    /// Remove `child` from whichever slot or list holds it.
    pub(crate) fn vacate_child(&mut self, child: ExprId) -> bool {
        for slot in self.slots_mut() {
            if *slot == Some(child) {
                *slot = None;
                return true;
            }
        }
        if let Some(list) = self.lists_mut() {
            if let Some(pos) = list.iter().position(|&c| c == child) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Put `new` wherever `old` currently sits.
    pub(crate) fn replace_child(&mut self, old: ExprId, new: ExprId) -> bool {
        for slot in self.slots_mut() {
            if *slot == Some(old) {
                *slot = Some(new);
                return true;
            }
        }
        if let Some(list) = self.lists_mut() {
            if let Some(entry) = list.iter_mut().find(|c| **c == old) {
                *entry = new;
                return true;
            }
        }
        false
    }

    /// Fill the first vacant single-child slot with `child`.
    pub(crate) fn fill_vacancy(&mut self, child: ExprId) -> bool {
        match self.slots_mut().into_iter().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(child);
                true
            }
            None => false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::BooleanLiteral(_) => "boolean literal",
            Expr::CharacterLiteral(_) => "character literal",
            Expr::NumberLiteral(_) => "number literal",
            Expr::StringLiteral(_) => "string literal",
            Expr::NullLiteral => "null literal",
            Expr::TypeLiteral(_) => "type literal",
            Expr::SimpleName { .. } => "simple name",
            Expr::QualifiedName { .. } => "qualified name",
            Expr::This => "this",
            Expr::FieldAccess { .. } => "field access",
            Expr::SuperFieldAccess { .. } => "super field access",
            Expr::ArrayAccess { .. } => "array access",
            Expr::ArrayCreation { .. } => "array creation",
            Expr::ArrayInitializer { .. } => "array initializer",
            Expr::ClassInstanceCreation { .. } => "class instance creation",
            Expr::Cast { .. } => "cast",
            Expr::Parenthesized { .. } => "parenthesized expression",
            Expr::Conditional { .. } => "conditional expression",
            Expr::Infix { .. } => "infix expression",
            Expr::Prefix { .. } => "prefix expression",
            Expr::Postfix { .. } => "postfix expression",
            Expr::MethodInvocation { .. } => "method invocation",
            Expr::FunctionInvocation { .. } => "function invocation",
            Expr::Assignment { .. } => "assignment",
        }
    }
}

/// Numeric literal payload, one case per source numeric type.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    pub fn ty(self) -> TypeRef {
        match self {
            Number::Byte(_) => TypeRef::Byte,
            Number::Short(_) => TypeRef::Short,
            Number::Int(_) => TypeRef::Int,
            Number::Long(_) => TypeRef::Long,
            Number::Float(_) => TypeRef::Float,
            Number::Double(_) => TypeRef::Double,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(n) => write!(f, "{n}"),
            Number::Short(n) => write!(f, "{n}"),
            Number::Int(n) => write!(f, "{n}"),
            Number::Long(n) => write!(f, "{n}L"),
            Number::Float(n) => write!(f, "{n:?}f"),
            Number::Double(n) => write!(f, "{n:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Times,
    Divide,
    Remainder,
    Plus,
    Minus,
    LeftShift,
    RightShiftSigned,
    RightShiftUnsigned,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    BitAnd,
    BitXor,
    BitOr,
    ConditionalAnd,
    ConditionalOr,
}

impl InfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Times => "*",
            InfixOp::Divide => "/",
            InfixOp::Remainder => "%",
            InfixOp::Plus => "+",
            InfixOp::Minus => "-",
            InfixOp::LeftShift => "<<",
            InfixOp::RightShiftSigned => ">>",
            InfixOp::RightShiftUnsigned => ">>>",
            InfixOp::Less => "<",
            InfixOp::Greater => ">",
            InfixOp::LessEquals => "<=",
            InfixOp::GreaterEquals => ">=",
            InfixOp::Equals => "==",
            InfixOp::NotEquals => "!=",
            InfixOp::BitAnd => "&",
            InfixOp::BitXor => "^",
            InfixOp::BitOr => "|",
            InfixOp::ConditionalAnd => "&&",
            InfixOp::ConditionalOr => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    Increment,
    Decrement,
    Plus,
    Minus,
    Complement,
    Not,
    /// Only produced by lowering passes; has no source spelling.
    AddressOf,
    Dereference,
}

impl PrefixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Increment => "++",
            PrefixOp::Decrement => "--",
            PrefixOp::Plus => "+",
            PrefixOp::Minus => "-",
            PrefixOp::Complement => "~",
            PrefixOp::Not => "!",
            PrefixOp::AddressOf => "&",
            PrefixOp::Dereference => "*",
        }
    }

    pub fn is_increment_or_decrement(self) -> bool {
        matches!(self, PrefixOp::Increment | PrefixOp::Decrement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PostfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Increment => "++",
            PostfixOp::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    RemainderAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    LeftShiftAssign,
    RightShiftSignedAssign,
    RightShiftUnsignedAssign,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::PlusAssign => "+=",
            AssignOp::MinusAssign => "-=",
            AssignOp::TimesAssign => "*=",
            AssignOp::DivideAssign => "/=",
            AssignOp::RemainderAssign => "%=",
            AssignOp::BitAndAssign => "&=",
            AssignOp::BitOrAssign => "|=",
            AssignOp::BitXorAssign => "^=",
            AssignOp::LeftShiftAssign => "<<=",
            AssignOp::RightShiftSignedAssign => ">>=",
            AssignOp::RightShiftUnsignedAssign => ">>>=",
        }
    }

    pub fn is_compound(self) -> bool {
        self != AssignOp::Assign
    }
}
