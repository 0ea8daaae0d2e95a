//! Expression-local judgments the lowering passes ask for when generating
//! manually reference-counted code.
//!
//! - [`has_side_effect`]: may this expression be pruned?
//! - [`is_assigned`]: is this expression written to by its context?
//! - [`retain_result`]: can this expression hand off a retain it already holds?
//! - [`operator_function_modifier`]: which storage-qualified helper does a
//!   compound assignment on this location need?
//!
//! All of these are synchronous and only read the tree, except
//! `retain_result`, which detaches a node on success.

mod assigned;
mod effects;
mod operator;
mod ownership;

pub use assigned::is_assigned;
pub use effects::has_side_effect;
pub use operator::operator_function_modifier;
pub use ownership::retain_result;
