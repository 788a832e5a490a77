//! Defines the mining function of a model
//! and the mining schema derived from its label.
use serde::{Serialize, Deserialize};

use crate::schema::Label;


/// The PMML mining functions.
/// Only `Classification` and `Regression` can be encoded as trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiningFunction {
    /// Association rules.
    AssociationRules,
    /// Sequences.
    Sequences,
    /// Classification.
    Classification,
    /// Regression.
    Regression,
    /// Clustering.
    Clustering,
    /// Time series.
    TimeSeries,
    /// Mixed.
    Mixed,
}


/// Usage of a mining field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldUsage {
    /// The field is an input.
    Active,
    /// The field is the prediction target.
    Target,
}


/// A field referenced by a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningField {
    /// Field name.
    pub name: String,
    /// How the model uses the field.
    pub usage_type: FieldUsage,
}


/// The fields a model reads and predicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningSchema {
    /// The mining fields.
    pub fields: Vec<MiningField>,
}


impl MiningSchema {
    /// Returns the mining schema of a model predicting `label`.
    /// Anonymous labels yield an empty schema.
    #[inline]
    pub fn from_label(label: &Label) -> Self {
        let fields = label.name()
            .map(|name| MiningField {
                name: name.to_string(),
                usage_type: FieldUsage::Target,
            })
            .into_iter()
            .collect();
        Self { fields }
    }


    /// Returns the target field name, if any.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.fields.iter()
            .find(|f| f.usage_type == FieldUsage::Target)
            .map(|f| f.name.as_str())
    }
}
