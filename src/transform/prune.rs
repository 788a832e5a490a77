//! Defines the pruner: a branch whose children are leaves
//! that all predict the same thing is replaced by one leaf.
use crate::tree::{
    BranchNode,
    LeafNode,
    Node,
    ScoreDistributionManager,
};


/// Prune the subtree rooted at `node`.
/// 
/// Children are pruned first, so uniform subtrees of any depth
/// collapse in a single call.
/// A branch collapses when all of its children are leaves
/// with equal scores and equal score distributions.
/// The new leaf keeps the branch's id, predicate and extensions,
/// sums the record counts and sums the distributions class-wise.
/// 
/// Pruning is idempotent.
pub fn prune(node: Node, distributions: &ScoreDistributionManager) -> Node {
    match node {
        Node::Leaf(leaf) => Node::Leaf(leaf),
        Node::Branch(mut branch) => {
            branch.children = branch.children
                .into_iter()
                .map(|child| prune(child, distributions))
                .collect();

            match collapse(&branch, distributions) {
                Some(leaf) => Node::Leaf(leaf),
                None => Node::Branch(branch),
            }
        },
    }
}


fn collapse(branch: &BranchNode, distributions: &ScoreDistributionManager)
    -> Option<LeafNode>
{
    let leaves = branch.children
        .iter()
        .map(|child| match child {
            Node::Leaf(leaf) => Some(leaf),
            Node::Branch(_) => None,
        })
        .collect::<Option<Vec<_>>>()?;

    let (first, rest) = leaves.split_first()?;

    let uniform = rest.iter()
        .all(|leaf| {
            leaf.score == first.score
                && leaf.score_distributions == first.score_distributions
        });
    if !uniform {
        return None;
    }


    let record_count = leaves.iter()
        .map(|leaf| leaf.record_count)
        .sum::<Option<f64>>();

    let score_distributions = match first.score_distributions {
        Some(_) => {
            let all = leaves.iter()
                .filter_map(|leaf| leaf.score_distributions.as_ref());
            distributions.merge(all)
        },
        None => None,
    };


    Some(LeafNode {
        id: branch.id,
        predicate: branch.predicate.clone(),
        score: first.score.clone(),
        record_count,
        score_distributions,
        extensions: branch.extensions.clone(),
    })
}
