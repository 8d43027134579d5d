use crate::constants::{NEGATIVE_OUTCOME, POSITIVE_OUTCOME};
use crate::errors::Id3Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of an induced decision tree.
///
/// Children are owned by their parent, so a tree is always finite and
/// acyclic. A split only has branches for attribute values observed in
/// the records it was built from.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
pub enum Node {
    /// Terminal node carrying the classification.
    Leaf { outcome: bool },
    /// Internal node branching on the value of `criterion`.
    Split { criterion: String, children: Vec<Branch> },
}

/// An outgoing edge of a split: the attribute value and the subtree it leads to.
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
pub struct Branch {
    pub label: String,
    pub node: Node,
}

impl Branch {
    pub fn new(label: impl Into<String>, node: Node) -> Self {
        Branch {
            label: label.into(),
            node,
        }
    }
}

/// Text used for an outcome by the renderers.
pub fn outcome_text(outcome: bool) -> &'static str {
    if outcome {
        POSITIVE_OUTCOME
    } else {
        NEGATIVE_OUTCOME
    }
}

impl Node {
    pub fn leaf(outcome: bool) -> Self {
        Node::Leaf { outcome }
    }

    /// Create a split node from `(value, child)` pairs, kept in the given order.
    ///
    /// Branch labels must be distinct and there must be at least one branch.
    pub fn split<I, S>(criterion: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        let children: Vec<Branch> = children.into_iter().map(|(l, n)| Branch::new(l, n)).collect();
        debug_assert!(!children.is_empty(), "a split needs at least one branch");
        debug_assert!(
            children
                .iter()
                .enumerate()
                .all(|(i, b)| children[..i].iter().all(|o| o.label != b.label)),
            "branch labels of a split must be distinct"
        );
        Node::Split {
            criterion: criterion.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn outcome(&self) -> Option<bool> {
        match self {
            Node::Leaf { outcome } => Some(*outcome),
            Node::Split { .. } => None,
        }
    }

    pub fn criterion(&self) -> Option<&str> {
        match self {
            Node::Leaf { .. } => None,
            Node::Split { criterion, .. } => Some(criterion.as_str()),
        }
    }

    pub fn children(&self) -> &[Branch] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Split { children, .. } => children,
        }
    }

    /// Get the child reached by `value`, if that value was seen during training.
    pub fn get_child(&self, value: &str) -> Option<&Node> {
        self.children().iter().find(|b| b.label == value).map(|b| &b.node)
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|b| b.node.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { children, .. } => children.iter().map(|b| b.node.n_leaves()).sum(),
        }
    }

    /// Check every split has at least one branch and distinct branch labels.
    pub fn validate(&self) -> Result<(), Id3Error> {
        if let Node::Split { criterion, children } = self {
            if children.is_empty() {
                return Err(Id3Error::InvalidTree(format!("split on {} has no branches", criterion)));
            }
            for (i, branch) in children.iter().enumerate() {
                if children[..i].iter().any(|b| b.label == branch.label) {
                    return Err(Id3Error::InvalidTree(format!(
                        "split on {} has more than one branch labelled {}",
                        criterion, branch.label
                    )));
                }
                branch.node.validate()?;
            }
        }
        Ok(())
    }

    pub fn n_splits(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { children, .. } => 1 + children.iter().map(|b| b.node.n_splits()).sum::<usize>(),
        }
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf { outcome } => write!(f, "Leaf: edible = {}", outcome_text(*outcome)),
            Node::Split { criterion, .. } => write!(f, "Node: Criterion = {}", criterion),
        }
    }
}
