//! Defines `MiningModel`, an ensemble of tree models
//! combined through a segmentation.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::schema::Label;
use super::mining_schema::{MiningFunction, MiningSchema};
use super::tree_model::TreeModel;
use super::output::Output;


/// How the segment predictions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultipleModelMethod {
    /// Most frequent prediction.
    MajorityVote,
    /// Most frequent prediction, weighted by segment weight.
    WeightedMajorityVote,
    /// Mean of the predictions.
    Average,
    /// Weighted mean of the predictions.
    WeightedAverage,
    /// Sum of the predictions.
    Sum,
}


/// One member model of an ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment id. Required for per-segment winner ids.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Segment weight.
    pub weight: f64,
    /// The member tree.
    pub model: TreeModel,
}


impl Segment {
    /// Construct a segment without id.
    #[inline]
    pub fn new(model: TreeModel) -> Self {
        Self { id: None, weight: 1.0, model }
    }


    /// Set the segment id.
    #[inline]
    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }


    /// Set the segment weight.
    #[inline]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}


/// The member models of an ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// How the segment predictions are combined.
    pub multiple_model_method: MultipleModelMethod,
    /// Member models in order.
    pub segments: Vec<Segment>,
}


impl Segmentation {
    /// Construct a segmentation whose segments are numbered `"1"..="n"`.
    pub fn numbered<I>(multiple_model_method: MultipleModelMethod, trees: I)
        -> Self
        where I: IntoIterator<Item = TreeModel>,
    {
        let segments = trees.into_iter()
            .enumerate()
            .map(|(i, tree)| Segment::new(tree).id((i + 1).to_string()))
            .collect();
        Self { multiple_model_method, segments }
    }
}


/// An ensemble of tree models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningModel {
    /// Classification or regression.
    pub mining_function: MiningFunction,
    /// The fields the ensemble reads and predicts.
    pub mining_schema: MiningSchema,
    /// The member models.
    pub segmentation: Segmentation,
    /// Auxiliary outputs.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<Output>,
}


impl MiningModel {
    /// Construct a new `MiningModel` predicting `label`.
    #[inline]
    pub fn new(
        mining_function: MiningFunction,
        label: &Label,
        segmentation: Segmentation,
    ) -> Self
    {
        Self {
            mining_function,
            mining_schema: MiningSchema::from_label(label),
            segmentation,
            output: None,
        }
    }


    /// Returns the model with every member tree rewritten by `f`.
    pub fn map_trees<F>(mut self, mut f: F) -> Self
        where F: FnMut(TreeModel) -> TreeModel,
    {
        self.segmentation.segments = self.segmentation.segments
            .into_iter()
            .map(|segment| Segment { model: f(segment.model), ..segment })
            .collect();
        self
    }


    /// Serialize the model to pretty-printed JSON.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
