//! Export
//!
//! Renders a fitted tree as a boolean expression or as predicate source code.
pub mod expression;
pub mod predicate;

pub use expression::to_expression;
pub use predicate::{to_predicate, write_predicate};
