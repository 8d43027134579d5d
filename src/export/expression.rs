use crate::errors::Id3Error;
use crate::node::Node;

/// Render the positive region of a split as a disjunction of clauses.
///
/// A positive leaf under `criterion = value` contributes
/// `(criterion = value)`, a nested split contributes
/// `(criterion=value AND ( \n  <nested clauses>)`, and negative leaves
/// contribute nothing. Clauses are joined with ` OR `.
///
/// Returns `Id3Error::LeafExpression` if `node` is a leaf.
pub fn to_expression(node: &Node) -> Result<String, Id3Error> {
    let (criterion, children) = match node {
        Node::Leaf { .. } => return Err(Id3Error::LeafExpression),
        Node::Split { criterion, children } => (criterion, children),
    };
    let mut conditions = Vec::new();
    for branch in children {
        match &branch.node {
            Node::Leaf { outcome: true } => conditions.push(format!("({} = {})", criterion, branch.label)),
            Node::Leaf { outcome: false } => {}
            child @ Node::Split { .. } => conditions.push(format!(
                "({}={} AND ( \n  {})",
                criterion,
                branch.label,
                to_expression(child)?
            )),
        }
    }
    Ok(conditions.join(" OR "))
}
