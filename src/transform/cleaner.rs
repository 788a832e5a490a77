//! Defines the id and score cleaners.
use crate::tree::Node;


/// Clear the id of every node.
pub fn strip_ids(mut node: Node) -> Node {
    node.set_id(None);

    if let Node::Branch(ref mut branch) = node {
        branch.children = std::mem::take(&mut branch.children)
            .into_iter()
            .map(strip_ids)
            .collect();
    }

    node
}


/// Clear the score and the score distributions of every branch.
/// Leaves keep theirs.
pub fn strip_scores(node: Node) -> Node {
    match node {
        Node::Leaf(leaf) => Node::Leaf(leaf),
        Node::Branch(mut branch) => {
            branch.score = None;
            branch.score_distributions = None;
            branch.children = branch.children
                .into_iter()
                .map(strip_scores)
                .collect();
            Node::Branch(branch)
        },
    }
}
