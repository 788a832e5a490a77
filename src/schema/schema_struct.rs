//! Defines `Schema`, the ordered list of features
//! an array tree's split indices refer to.
use serde::{Serialize, Deserialize};

use super::{
    feature::Feature,
    label::Label,
    value::DataType,
};


/// An ordered feature list plus a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    label: Label,
    features: Vec<Feature>,
}


impl Schema {
    /// Construct a new `Schema`.
    #[inline]
    pub fn new<L: Into<Label>>(label: L, features: Vec<Feature>) -> Self {
        Self { label: label.into(), features }
    }


    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }


    /// Returns the features.
    #[inline]
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature at `index`.
    #[inline]
    pub fn feature(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }


    /// Returns the number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }


    /// Returns a schema whose label is detached from the output name.
    /// Ensemble members are encoded against this schema.
    #[inline]
    pub fn to_anonymous(&self) -> Self {
        Self {
            label: self.label.to_anonymous(),
            features: self.features.clone(),
        }
    }


    /// Returns the schema a single tree is encoded against.
    /// Binary features are kept,
    /// threshold features are kept unless `numeric` is set,
    /// everything else is read as a continuous `data_type` feature.
    pub fn to_tree_model_schema(&self, data_type: DataType, numeric: bool)
        -> Self
    {
        self.to_transformed(|feature| match feature {
            Feature::Binary(_) => feature.clone(),
            Feature::Threshold(_) if !numeric => feature.clone(),
            _ => Feature::Continuous(feature.to_continuous(data_type)),
        })
    }


    /// Returns the schema that feature importances are keyed against.
    /// Continuous features are read as doubles.
    pub fn to_feature_importance_schema(&self, numeric: bool) -> Self {
        self.to_tree_model_schema(DataType::Double, numeric)
    }


    #[inline]
    fn to_transformed<F>(&self, f: F) -> Self
        where F: Fn(&Feature) -> Feature,
    {
        let features = self.features.iter()
            .map(f)
            .collect();
        Self { label: self.label.clone(), features }
    }
}
