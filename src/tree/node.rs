//! Defines the inner representation 
//! of an encoded decision tree.
use serde::{Serialize, Deserialize};

use crate::common::utils;
use crate::schema::Value;
use super::predicate::Predicate;
use super::score_distribution::ScoreDistribution;

use std::sync::Arc;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has children.
    Branch(BranchNode),


    /// A node that has no child.
    Leaf(LeafNode),
}


/// A `key = value` annotation attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Extension name.
    pub name: String,
    /// Canonical text form of the value.
    pub value: String,
}


/// Represents the branch nodes of a decision tree.
/// An encoded `BranchNode` has two children;
/// flattening may leave it with more.
/// Children are tried in order and the first one whose predicate holds
/// is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    /// Position of the node in the array tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    /// Guard of this node.
    pub predicate: Arc<Predicate>,
    /// The node's own fitted value (regression only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
    /// Score distribution of this node, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_distributions: Option<Arc<[ScoreDistribution]>>,
    /// Extensions; empty unless extension injection attached some.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extensions: Vec<Extension>,
    /// Children in evaluation order.
    pub children: Vec<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(crate) fn from_raw(
        id: usize,
        predicate: Arc<Predicate>,
        score: Option<Value>,
        left: Node,
        right: Node,
    ) -> Self
    {
        Self {
            id: Some(id),
            predicate,
            score,
            score_distributions: None,
            extensions: Vec::new(),
            children: vec![left, right],
        }
    }
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    /// Position of the node in the array tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    /// Guard of this node.
    pub predicate: Arc<Predicate>,
    /// Predicted value: the winning class or the regression value.
    pub score: Value,
    /// Total number of training records (classification only).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "utils::serialize_narrow_opt",
        default
    )]
    pub record_count: Option<f64>,
    /// Per-class record counts (classification only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_distributions: Option<Arc<[ScoreDistribution]>>,
    /// Extensions; empty unless extension injection attached some.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extensions: Vec<Extension>,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts `score`.
    #[inline]
    pub(crate) fn from_raw(id: usize, predicate: Arc<Predicate>, score: Value)
        -> Self
    {
        Self {
            id: Some(id),
            predicate,
            score,
            record_count: None,
            score_distributions: None,
            extensions: Vec::new(),
        }
    }
}


impl Node {
    /// Returns the id of this node.
    #[inline]
    pub fn id(&self) -> Option<usize> {
        match self {
            Node::Branch(b) => b.id,
            Node::Leaf(l) => l.id,
        }
    }


    /// Set the id of this node.
    #[inline]
    pub fn set_id(&mut self, id: Option<usize>) {
        match self {
            Node::Branch(b) => b.id = id,
            Node::Leaf(l) => l.id = id,
        }
    }


    /// Returns the guard of this node.
    #[inline]
    pub fn predicate(&self) -> &Arc<Predicate> {
        match self {
            Node::Branch(b) => &b.predicate,
            Node::Leaf(l) => &l.predicate,
        }
    }


    /// Replace the guard of this node.
    #[inline]
    pub fn set_predicate(&mut self, predicate: Arc<Predicate>) {
        match self {
            Node::Branch(b) => b.predicate = predicate,
            Node::Leaf(l) => l.predicate = predicate,
        }
    }


    /// Returns the score of this node, if any.
    #[inline]
    pub fn score(&self) -> Option<&Value> {
        match self {
            Node::Branch(b) => b.score.as_ref(),
            Node::Leaf(l) => Some(&l.score),
        }
    }


    /// Returns the score distributions of this node, if any.
    #[inline]
    pub fn score_distributions(&self) -> Option<&Arc<[ScoreDistribution]>> {
        match self {
            Node::Branch(b) => b.score_distributions.as_ref(),
            Node::Leaf(l) => l.score_distributions.as_ref(),
        }
    }


    /// Returns the extensions of this node.
    #[inline]
    pub fn extensions(&self) -> &[Extension] {
        match self {
            Node::Branch(b) => &b.extensions[..],
            Node::Leaf(l) => &l.extensions[..],
        }
    }


    /// Returns the extensions of this node.
    #[inline]
    pub fn extensions_mut(&mut self) -> &mut Vec<Extension> {
        match self {
            Node::Branch(b) => &mut b.extensions,
            Node::Leaf(l) => &mut l.extensions,
        }
    }


    /// Returns the children of this node.
    #[inline]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Branch(b) => &b.children[..],
            Node::Leaf(_) => &[],
        }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Call `f` on every node of this subtree, parents first.
    pub fn for_each<F>(&self, f: &mut F)
        where F: FnMut(&Node),
    {
        f(self);
        for child in self.children() {
            child.for_each(f);
        }
    }


    /// Returns the number of nodes in this subtree.
    pub fn n_nodes(&self) -> usize {
        let mut count = 0;
        self.for_each(&mut |_| count += 1);
        count
    }


    /// Returns the number of leaves in this subtree.
    pub fn n_leaves(&self) -> usize {
        let mut count = 0;
        self.for_each(&mut |node| if node.is_leaf() { count += 1; });
        count
    }


    /// Returns the depth of this subtree. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let label = match b.id {
                    Some(i) => format!("#{i}"),
                    None => String::from("?"),
                };
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{label}\" ];\n")
                ];

                let mut next_id = id + 1;
                for child in b.children.iter() {
                    let child_id = next_id;
                    let (mut c_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut c_info);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{p}\" ];\n",
                        p = escape(&child.predicate().to_string()),
                    );
                    info.push(edge);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = escape(&l.score.to_string()),
                );

                (vec![info], id + 1)
            }
        }
    }
}


#[inline]
fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}
