//! Defines `TreeModel`, the encoded form of a single tree.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::scoring::{Row, Scorer};
use crate::tree::{Node, LeafNode};
use super::mining_schema::{MiningFunction, MiningSchema};
use super::output::Output;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// How many children a branch may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitCharacteristic {
    /// Every branch has exactly two children.
    BinarySplit,
    /// Branches may have any number of children.
    MultiSplit,
}


/// The importance of one feature for one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    /// Feature name.
    pub name: String,
    /// Importance.
    pub importance: f64,
}


/// An encoded decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeModel {
    /// Classification or regression.
    pub mining_function: MiningFunction,
    /// The fields the tree reads and predicts.
    pub mining_schema: MiningSchema,
    /// How many children a branch may have.
    pub split_characteristic: SplitCharacteristic,
    /// The root node; its predicate is `True`.
    pub root: Node,
    /// Feature importances, in schema order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub feature_importances: Vec<FeatureImportance>,
    /// Auxiliary outputs.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<Output>,
}


impl TreeModel {
    /// Construct a new binary-split `TreeModel`.
    #[inline]
    pub fn new(
        mining_function: MiningFunction,
        mining_schema: MiningSchema,
        root: Node,
    ) -> Self
    {
        Self {
            mining_function,
            mining_schema,
            split_characteristic: SplitCharacteristic::BinarySplit,
            root,
            feature_importances: Vec::new(),
            output: None,
        }
    }


    /// Returns the model with its root node rewritten by `f`.
    #[inline]
    pub fn map_root<F>(self, f: F) -> Self
        where F: FnOnce(Node) -> Node,
    {
        let Self { root, .. } = self;
        Self { root: f(root), ..self }
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Serialize the model to pretty-printed JSON.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Scorer for TreeModel {
    #[inline]
    fn leaf<'a>(&'a self, row: &Row) -> Option<&'a LeafNode> {
        if !self.root.predicate().evaluate(row) {
            return None;
        }
        self.root.leaf(row)
    }
}
