//! Expression analyses for lowering a garbage-collected object language to
//! manually reference-counted target code.
//!
//! The [`tree`] module holds the arena expression tree the passes inspect.
//! [`analysis`] answers the per-expression questions (side effects,
//! assignment context, retained results, compound-assignment helpers),
//! [`reflection`] decides when reflective metadata is kept, and
//! [`annotation`] rebuilds compile-time annotation values as expressions.

pub mod analysis;
pub mod annotation;
pub mod binding;
pub mod config;
pub mod decl;
pub mod diagnostics;
pub mod names;
pub mod pretty;
pub mod reflection;
pub mod tree;
pub mod types;
pub mod visit;

pub use analysis::{has_side_effect, is_assigned, operator_function_modifier, retain_result};
pub use config::{RetainedFunctions, TranslationConfig};
pub use diagnostics::PassError;
pub use tree::{Expr, ExprId, ExprTree};
