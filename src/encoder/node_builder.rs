//! Defines the node builder, which turns one index of an array tree
//! into a `Node` and recurses into its children.
use crate::error::{ConversionError, Result};
use crate::model::MiningFunction;
use crate::schema::{Label, Schema, Value};
use crate::tree::{
    ArrayTree,
    BranchNode,
    CategoryManager,
    Node,
    Predicate,
    PredicateManager,
    ScoreDistributionManager,
};
use super::{leaf, split};

use std::sync::Arc;


/// Everything one tree's recursion needs, borrowed for its duration.
/// The array tree must have passed `checker::array_tree`.
pub(crate) struct NodeBuilder<'a> {
    pub(crate) tree: &'a ArrayTree,
    pub(crate) schema: &'a Schema,
    pub(crate) mining_function: MiningFunction,
    pub(crate) numeric: bool,
    pub(crate) predicates: &'a PredicateManager,
    pub(crate) distributions: &'a ScoreDistributionManager,
}


impl<'a> NodeBuilder<'a> {
    /// Build the subtree rooted at `index`, guarded by `predicate`.
    pub(crate) fn build(
        &self,
        index: usize,
        predicate: Arc<Predicate>,
        categories: &CategoryManager,
    ) -> Result<Node>
    {
        if self.tree.is_leaf(index) {
            return self.build_leaf(index, predicate);
        }


        let feature_index = self.tree.feature()[index] as usize;
        let feature = self.schema.feature(feature_index)
            .ok_or_else(|| ConversionError::MalformedArrayTree(format!(
                "node {index} splits on unknown feature {feature_index}"
            )))?;

        let threshold = self.tree.threshold()[index];


        let split = split::synthesize(
            feature,
            threshold,
            self.numeric,
            categories,
            self.predicates,
        )?;


        let left_index = self.tree.children_left()[index] as usize;
        let right_index = self.tree.children_right()[index] as usize;

        let left = self.build(left_index, split.left, &split.left_categories)?;
        let right = self.build(right_index, split.right, &split.right_categories)?;


        let score = match self.mining_function {
            MiningFunction::Classification => None,
            MiningFunction::Regression => {
                Some(Value::Double(self.tree.values()[index]))
            },
            other => {
                return Err(ConversionError::UnsupportedMiningFunction(other));
            },
        };

        let branch = BranchNode::from_raw(index, predicate, score, left, right);
        Ok(Node::Branch(branch))
    }


    fn build_leaf(&self, index: usize, predicate: Arc<Predicate>)
        -> Result<Node>
    {
        let values = self.tree.values();

        let leaf = match (self.mining_function, self.schema.label()) {
            (MiningFunction::Classification, Label::Categorical(label)) => {
                leaf::classification_leaf(
                    index,
                    predicate,
                    values,
                    self.tree.n_nodes(),
                    label,
                    self.distributions,
                )?
            },
            (MiningFunction::Regression, _) => {
                leaf::regression_leaf(index, predicate, values)
            },
            (MiningFunction::Classification, Label::Continuous(_)) => {
                return Err(ConversionError::InvalidLabel(
                    "classification requires a categorical label".into()
                ));
            },
            (other, _) => {
                return Err(ConversionError::UnsupportedMiningFunction(other));
            },
        };

        Ok(Node::Leaf(leaf))
    }
}
