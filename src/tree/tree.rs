use crate::constants::DISPLAY_INDENT;
use crate::errors::Id3Error;
use crate::node::{Branch, Node};
use crate::record::{Dataset, Record};
use crate::splitter::{partition_records, Splitter};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A decision tree induced with ID3.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
pub struct Tree {
    pub root: Node,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Wrap an existing root node, computing its statistics.
    pub fn from_root(root: Node) -> Self {
        Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            root,
        }
    }

    /// Check the node invariants of a deserialized tree and recompute its statistics.
    pub fn from_stored(tree: Tree) -> Result<Self, Id3Error> {
        tree.root.validate()?;
        Ok(Tree::from_root(tree.root))
    }

    /// Induce a tree from every record of `dataset`, scoring attributes in schema order.
    pub fn fit_dataset<T: Splitter>(dataset: &Dataset, splitter: &T) -> Result<Option<Self>, Id3Error> {
        let records: Vec<&Record> = dataset.records().iter().collect();
        Self::fit(&records, dataset.schema(), splitter)
    }

    /// Induce a tree from `records`.
    ///
    /// Returns `None` when there are no records. Every attribute in
    /// `candidates` stays available at every depth.
    ///
    /// * `records` - Training records.
    /// * `candidates` - Attribute names in the order they are scored.
    /// * `splitter` - Strategy choosing the split attribute of each node.
    pub fn fit<T: Splitter>(
        records: &[&Record],
        candidates: &[String],
        splitter: &T,
    ) -> Result<Option<Self>, Id3Error> {
        if records.is_empty() {
            return Ok(None);
        }
        let root = build_node(records, candidates, splitter, 0)?;
        let tree = Tree::from_root(root);
        info!(
            "Fitted decision tree on {} records: depth {}, {} leaves, {} splits.",
            records.len(),
            tree.depth,
            tree.n_leaves,
            tree.root.n_splits()
        );
        Ok(Some(tree))
    }
}

fn build_node<T: Splitter>(
    records: &[&Record],
    candidates: &[String],
    splitter: &T,
    depth: usize,
) -> Result<Node, Id3Error> {
    debug_assert!(!records.is_empty());
    let first = records[0].label;
    if records.iter().all(|r| r.label == first) {
        return Ok(Node::leaf(first));
    }

    let split = match splitter.best_split(records, candidates)? {
        Some(split) => split,
        None => {
            warn!(
                "No attribute separates {} records with conflicting labels at depth {}, using the majority label.",
                records.len(),
                depth
            );
            return Ok(majority_leaf(records));
        }
    };
    debug!(
        "Splitting {} records on {} with gain {:.6} at depth {}.",
        records.len(),
        split.attribute,
        split.gain,
        depth
    );

    let groups = partition_records(records, &split.attribute)?;
    if groups.len() < 2 {
        warn!(
            "Attribute {} takes a single value over {} records at depth {}, using the majority label.",
            split.attribute,
            records.len(),
            depth
        );
        return Ok(majority_leaf(records));
    }

    let mut children = Vec::with_capacity(groups.len());
    for (value, group) in groups {
        let child = build_node(&group, candidates, splitter, depth + 1)?;
        children.push(Branch::new(value, child));
    }
    Ok(Node::Split {
        criterion: split.attribute,
        children,
    })
}

/// Leaf with the most common label, negative on a tie.
fn majority_leaf(records: &[&Record]) -> Node {
    let positive = records.iter().filter(|r| r.label).count();
    Node::leaf(positive * 2 > records.len())
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // (text preceding the node on its line, node, nesting level)
        let mut print_buffer: Vec<(String, &Node, usize)> = vec![(String::new(), &self.root, 0)];
        let mut r = String::new();
        while let Some((prefix, node, level)) = print_buffer.pop() {
            let indent = DISPLAY_INDENT.repeat(level);
            r += format!("{}{}{}\n", prefix, indent, node).as_str();
            for branch in node.children().iter().rev() {
                print_buffer.push((format!("{}|- {} -> ", indent, branch.label), &branch.node, level + 1));
            }
        }
        write!(f, "{}", r)
    }
}
