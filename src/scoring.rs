//! Defines `Scorer`, which walks an encoded tree for one input row.
//! Children are tried in order and the first whose predicate holds
//! is entered; a branch without a matching child yields no score.
use crate::schema::Value;
use crate::tree::{Node, LeafNode};

use std::collections::HashMap;


/// An input row: field name to value.
pub type Row = HashMap<String, Value>;


/// Implementing this trait allows you to score a row
/// against an encoded tree.
pub trait Scorer {
    /// Returns the leaf the row ends up in, if any.
    fn leaf<'a>(&'a self, row: &Row) -> Option<&'a LeafNode>;


    /// Returns the predicted value for the row, if any.
    #[inline]
    fn score<'a>(&'a self, row: &Row) -> Option<&'a Value> {
        self.leaf(row).map(|leaf| &leaf.score)
    }
}


impl Scorer for LeafNode {
    #[inline]
    fn leaf<'a>(&'a self, _row: &Row) -> Option<&'a LeafNode> {
        Some(self)
    }
}


impl Scorer for Node {
    fn leaf<'a>(&'a self, row: &Row) -> Option<&'a LeafNode> {
        match self {
            Node::Leaf(ref leaf) => Some(leaf),
            Node::Branch(ref branch) => {
                branch.children
                    .iter()
                    .find(|child| child.predicate().evaluate(row))
                    .and_then(|child| child.leaf(row))
            },
        }
    }
}
