use crate::config::PredicateOptions;
use crate::errors::Id3Error;
use crate::node::{outcome_text, Node};
use std::fs;
use std::path::Path;

/// Render the tree as a Python function returning `'Yes'` or `'No'`.
///
/// Each split becomes an `if` on its first branch and an `elif` for every
/// other branch, in branch order. A value matching no branch falls
/// through the chain.
pub fn to_predicate(node: &Node, options: &PredicateOptions) -> String {
    let mut r = format!("def {}({}):\n", options.function_name, options.argument_name);
    write_conditions(node, options, 1, &mut r);
    r
}

/// Render the predicate and write it to `path`.
pub fn write_predicate<P: AsRef<Path>>(node: &Node, options: &PredicateOptions, path: P) -> Result<(), Id3Error> {
    fs::write(path, to_predicate(node, options)).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
}

fn write_conditions(node: &Node, options: &PredicateOptions, indent_level: usize, r: &mut String) {
    let indent = " ".repeat(options.indent_width * indent_level);
    match node {
        Node::Leaf { outcome } => {
            *r += format!("{}return '{}'\n", indent, outcome_text(*outcome)).as_str();
        }
        Node::Split { criterion, children } => {
            for (i, branch) in children.iter().enumerate() {
                let keyword = if i == 0 { "if" } else { "elif" };
                *r += format!(
                    "{}{} {}['{}'] == '{}':\n",
                    indent,
                    keyword,
                    options.argument_name,
                    quote(criterion),
                    quote(&branch.label)
                )
                .as_str();
                write_conditions(&branch.node, options, indent_level + 1, r);
            }
        }
    }
}

/// Escape text for a single-quoted string literal.
fn quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
