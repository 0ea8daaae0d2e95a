//! Side-effect and assignment-context analysis over trees shaped like the
//! expressions a lowering pass actually meets.

use rclower::binding::{FunctionElement, MethodBinding, VarBinding};
use rclower::pretty::render;
use rclower::tree::{AssignOp, InfixOp, PostfixOp, PrefixOp};
use rclower::types::{ClassName, TypeRef};
use rclower::{ExprId, ExprTree, has_side_effect, is_assigned};

fn point() -> ClassName {
    ClassName::new("com.example.geom", "Point")
}

fn local(tree: &mut ExprTree, name: &str) -> ExprId {
    tree.name(VarBinding::local(name, TypeRef::Int))
}

// ===== Pruning candidates =====

#[test]
fn test_arithmetic_over_locals_and_fields_can_be_pruned() {
    // (a + this.x) * -b
    let mut tree = ExprTree::new();
    let a = local(&mut tree, "a");
    let this = tree.this();
    let x = tree.field_access(this, VarBinding::field("x", TypeRef::Int, point()));
    let sum = tree.infix(InfixOp::Plus, vec![a, x]);
    let paren = tree.paren(sum);
    let b = local(&mut tree, "b");
    let neg = tree.prefix(PrefixOp::Minus, b);
    let product = tree.infix(InfixOp::Times, vec![paren, neg]);

    assert_eq!(render(&tree, product), "(a + this.x) * -b");
    assert!(!has_side_effect(&tree, product));
}

#[test]
fn test_conditional_with_pure_arms() {
    let mut tree = ExprTree::new();
    let flag = tree.name(VarBinding::local("flag", TypeRef::Boolean));
    let one = tree.int(1);
    let s = tree.string("fallback");
    let cast = tree.cast(TypeRef::object(), s);
    let cond = tree.conditional(flag, one, cast);
    assert!(!has_side_effect(&tree, cond));
}

#[test]
fn test_buried_call_taints_the_whole_expression() {
    // a + (flag ? p.length() : 0)
    let mut tree = ExprTree::new();
    let a = local(&mut tree, "a");
    let flag = tree.name(VarBinding::local("flag", TypeRef::Boolean));
    let p = tree.name(VarBinding::local("p", TypeRef::Declared(point())));
    let len = tree.method_call(Some(p), MethodBinding::source("length", point(), TypeRef::Int), vec![]);
    let zero = tree.int(0);
    let cond = tree.conditional(flag, len, zero);
    let paren = tree.paren(cond);
    let sum = tree.infix(InfixOp::Plus, vec![a, paren]);

    assert_eq!(render(&tree, sum), "a + (flag ? p.length() : 0)");
    assert!(has_side_effect(&tree, sum));
    assert!(!has_side_effect(&tree, a));
    assert!(!has_side_effect(&tree, flag));
}

#[test]
fn test_volatile_reads_are_never_pruned() {
    let mut tree = ExprTree::new();
    let state = VarBinding::field("state", TypeRef::Int, point()).volatile();
    let this = tree.this();
    let access = tree.field_access(this, state.clone());
    let bare = tree.name(state);
    let one = tree.int(1);
    let cmp = tree.infix(InfixOp::Equals, vec![bare, one]);

    assert!(has_side_effect(&tree, access));
    assert!(has_side_effect(&tree, cmp));
}

#[test]
fn test_allocations_and_element_reads_count_as_effects() {
    let mut tree = ExprTree::new();
    let creation = tree.new_instance(TypeRef::Declared(point()), vec![]);
    let arr = tree.name(VarBinding::local("arr", TypeRef::array_of(TypeRef::Int)));
    let i = local(&mut tree, "i");
    let elem = tree.array_access(arr, i);
    let lit = tree.type_literal(TypeRef::Declared(point()));
    let call = tree.function_call(FunctionElement::new("JreLoadStatic", TypeRef::object(), None), vec![]);

    for id in [creation, elem, lit, call] {
        assert!(has_side_effect(&tree, id), "{} should count as an effect", render(&tree, id));
    }
}

// ===== Assignment context =====

#[test]
fn test_assignment_targets_in_a_statement_list() {
    // i++; total += i; p = (q);
    let mut tree = ExprTree::new();
    let i = local(&mut tree, "i");
    let inc = tree.postfix(PostfixOp::Increment, i);

    let total = local(&mut tree, "total");
    let i2 = local(&mut tree, "i");
    let add = tree.assign(AssignOp::PlusAssign, total, i2);

    let p = local(&mut tree, "p");
    let q = local(&mut tree, "q");
    let paren_q = tree.paren(q);
    let copy = tree.assign(AssignOp::Assign, p, paren_q);

    assert!(is_assigned(&tree, i));
    assert!(is_assigned(&tree, total));
    assert!(!is_assigned(&tree, i2));
    assert!(is_assigned(&tree, p));
    assert!(!is_assigned(&tree, q));
    assert!(!is_assigned(&tree, paren_q));

    for stmt in [inc, add, copy] {
        assert!(has_side_effect(&tree, stmt));
        assert!(!is_assigned(&tree, stmt));
    }
}

#[test]
fn test_address_of_and_prefix_decrement() {
    let mut tree = ExprTree::new();
    let a = local(&mut tree, "a");
    let addr = tree.prefix(PrefixOp::AddressOf, a);
    let b = local(&mut tree, "b");
    let dec = tree.prefix(PrefixOp::Decrement, b);
    let c = local(&mut tree, "c");
    let not = tree.prefix(PrefixOp::Not, c);

    assert!(is_assigned(&tree, a));
    assert!(is_assigned(&tree, b));
    assert!(!is_assigned(&tree, c));
    assert!(!has_side_effect(&tree, addr));
    assert!(has_side_effect(&tree, dec));
    assert!(!has_side_effect(&tree, not));
}

#[test]
fn test_analysis_follows_tree_edits() {
    // x = y, then swap y for a call and move y into a postfix.
    let mut tree = ExprTree::new();
    let x = local(&mut tree, "x");
    let y = local(&mut tree, "y");
    let assign = tree.assign(AssignOp::Assign, x, y);

    let call = tree.function_call(FunctionElement::new("next", TypeRef::Int, None), vec![]);
    tree.replace(y, call);
    assert!(!tree.is_attached(y));
    assert!(!is_assigned(&tree, y));

    let inc = tree.postfix(PostfixOp::Increment, y);
    assert!(is_assigned(&tree, y));
    assert_eq!(render(&tree, assign), "x = next()");
    assert_eq!(render(&tree, inc), "y++");
    assert!(tree.verify_links(assign).is_ok());
}
