use super::tree::Tree;
use crate::errors::Id3Error;
use crate::node::Node;
use crate::record::Record;
use rayon::prelude::*;

/// Classify `record` by walking down from `node`.
///
/// A value with no matching branch was never seen during training and is
/// classified negative. A record missing the attribute of a split on its
/// path is an error.
pub fn classify(node: &Node, record: &Record) -> Result<bool, Id3Error> {
    let mut node = node;
    loop {
        match node {
            Node::Leaf { outcome } => return Ok(*outcome),
            Node::Split { criterion, .. } => {
                let value = record.get_attribute(criterion)?;
                match node.get_child(value) {
                    Some(child) => node = child,
                    None => return Ok(false),
                }
            }
        }
    }
}

impl Tree {
    /// Classify a single record.
    pub fn classify(&self, record: &Record) -> Result<bool, Id3Error> {
        classify(&self.root, record)
    }

    /// Classify every record, optionally on the rayon pool.
    ///
    /// * `records` - Records to classify.
    /// * `parallel` - Classify in parallel.
    pub fn predict(&self, records: &[Record], parallel: bool) -> Result<Vec<bool>, Id3Error> {
        if parallel {
            records.par_iter().map(|r| self.classify(r)).collect()
        } else {
            records.iter().map(|r| self.classify(r)).collect()
        }
    }
}
