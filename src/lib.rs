//! ID3 decision trees over labeled categorical records.
//!
//! A tree is induced by recursively splitting on the attribute with the
//! highest information gain. A fitted tree classifies new records and
//! renders itself as a boolean expression, as predicate source code or
//! as an indented text outline.
mod node;

// Modules
pub mod classifier;
pub mod config;
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod export;
pub mod metric;
pub mod record;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::DecisionTreeClassifier;
pub use config::{PredicateOptions, TreeConfig};
pub use errors::Id3Error;
pub use node::{Branch, Node};
pub use record::{Dataset, Record};
pub use tree::Tree;
