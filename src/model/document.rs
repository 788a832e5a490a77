//! Defines `Model`, the document the transform pipeline runs over.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use super::tree_model::TreeModel;
use super::mining_model::MiningModel;


/// A single tree or an ensemble of trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Model {
    /// A single tree.
    Tree(TreeModel),


    /// An ensemble of trees.
    Mining(MiningModel),
}


impl Model {
    /// Returns the model with every tree rewritten by `f`.
    #[inline]
    pub fn map_trees<F>(self, mut f: F) -> Self
        where F: FnMut(TreeModel) -> TreeModel,
    {
        match self {
            Model::Tree(tree) => Model::Tree(f(tree)),
            Model::Mining(mining) => Model::Mining(mining.map_trees(f)),
        }
    }


    /// Returns every tree of the model in order.
    #[inline]
    pub fn trees(&self) -> Vec<&TreeModel> {
        match self {
            Model::Tree(tree) => vec![tree],
            Model::Mining(mining) => mining.segmentation.segments
                .iter()
                .map(|segment| &segment.model)
                .collect(),
        }
    }


    /// Returns the single tree, if this is one.
    #[inline]
    pub fn as_tree(&self) -> Option<&TreeModel> {
        match self {
            Model::Tree(tree) => Some(tree),
            Model::Mining(_) => None,
        }
    }


    /// Returns the ensemble, if this is one.
    #[inline]
    pub fn as_mining(&self) -> Option<&MiningModel> {
        match self {
            Model::Tree(_) => None,
            Model::Mining(mining) => Some(mining),
        }
    }


    /// Serialize the model to pretty-printed JSON.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
