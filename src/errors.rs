//! Errors
//!
//! Custom error types used throughout the `id3_tree` crate.
use thiserror::Error;

/// Errors that can occur while loading data, fitting or querying a tree.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// A record does not carry a value for the attribute a split needs.
    #[error("Record has no value for attribute {0}.")]
    MissingAttribute(String),
    /// No records were supplied, so no tree can be induced.
    #[error("Cannot fit a decision tree on an empty dataset.")]
    EmptyDataset,
    /// A record's attribute names differ from the dataset schema.
    #[error("Record {0} does not match the dataset schema, expected attributes {1} but found {2}.")]
    SchemaMismatch(usize, String, String),
    /// The same attribute name appears more than once in the schema.
    #[error("Attribute {0} appears more than once in the schema.")]
    DuplicateAttribute(String),
    /// A stored tree breaks the node invariants.
    #[error("Invalid tree: {0}")]
    InvalidTree(String),
    /// An attribute value is the empty string.
    #[error("Empty value for attribute {column} in row {row}.")]
    EmptyValue { row: usize, column: String },
    /// The input has no header row, or a header without attribute columns.
    #[error("Input has no header row with a label column followed by attribute columns.")]
    EmptyHeader,
    /// A boolean expression can only be rendered from a split node.
    #[error("Boolean expressions can only be rendered from a split node, a leaf was provided.")]
    LeafExpression,
    /// The model was used before being fitted.
    #[error("The decision tree has not been fitted yet.")]
    NotFitted,
    /// Unable to write model or generated code to a file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read a model or dataset.
    #[error("Unable to read from file: {0}")]
    UnableToRead(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}
