//! Defines `ArrayTree`, the parallel-array encoding
//! of a fitted binary decision tree.
use serde::{Serialize, Deserialize};


/// Child index that marks a leaf.
pub const TREE_LEAF: i64 = -1;


/// Split feature index that marks a leaf.
pub const TREE_UNDEFINED: i64 = -2;


/// A fitted binary tree stored as parallel arrays.
/// Node `i` is a leaf iff `feature[i] < 0`.
/// `values` is a flat row-major buffer with one row per node:
/// one column for regression, one column per class for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    values: Vec<f64>,
}


impl ArrayTree {
    /// Construct a new `ArrayTree` from its buffers.
    /// The buffers are validated when the tree is encoded.
    #[inline]
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        values: Vec<f64>,
    ) -> Self
    {
        Self { children_left, children_right, feature, threshold, values, }
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }


    /// Returns `true` if node `index` is a leaf.
    #[inline]
    pub fn is_leaf(&self, index: usize) -> bool {
        self.feature[index] < 0
    }


    /// Left child indices.
    #[inline]
    pub fn children_left(&self) -> &[i64] {
        &self.children_left[..]
    }


    /// Right child indices.
    #[inline]
    pub fn children_right(&self) -> &[i64] {
        &self.children_right[..]
    }


    /// Split feature indices.
    #[inline]
    pub fn feature(&self) -> &[i64] {
        &self.feature[..]
    }


    /// Split thresholds.
    #[inline]
    pub fn threshold(&self) -> &[f64] {
        &self.threshold[..]
    }


    /// Flat node value buffer.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    #[cfg(test)]
    pub(crate) fn children_left_mut(&mut self) -> &mut Vec<i64> {
        &mut self.children_left
    }


    #[cfg(test)]
    pub(crate) fn children_right_mut(&mut self) -> &mut Vec<i64> {
        &mut self.children_right
    }
}
