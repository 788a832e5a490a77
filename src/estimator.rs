//! Defines the traits through which the encoder reads
//! a fitted estimator, plus plain implementations of them.
use serde::{Serialize, Deserialize};

use crate::encoder::TreeOptions;
use crate::schema::DataType;
use crate::tree::ArrayTree;


/// A fitted estimator with conversion options.
pub trait Estimator {
    /// Returns the conversion options.
    fn options(&self) -> &TreeOptions;


    /// Returns the data type the estimator reads continuous features as.
    #[inline]
    fn data_type(&self) -> DataType {
        DataType::Float
    }
}


/// An estimator backed by a single array tree.
pub trait HasTree {
    /// Returns the fitted tree.
    fn tree(&self) -> &ArrayTree;


    /// Returns one importance per schema feature, if the estimator has them.
    #[inline]
    fn feature_importances(&self) -> Option<&[f64]> {
        None
    }
}


/// An estimator made of member tree estimators.
pub trait HasEstimatorEnsemble: Estimator {
    /// Type of the members.
    type Member: Estimator + HasTree + Sync;


    /// Returns the members in order.
    fn estimators(&self) -> &[Self::Member];
}


/// A fitted decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEstimator {
    tree: ArrayTree,
    options: TreeOptions,
    data_type: DataType,
    feature_importances: Option<Vec<f64>>,
}


impl TreeEstimator {
    /// Construct a new `TreeEstimator` with default options.
    #[inline]
    pub fn new(tree: ArrayTree) -> Self {
        Self {
            tree,
            options: TreeOptions::default(),
            data_type: DataType::Float,
            feature_importances: None,
        }
    }


    /// Set the conversion options.
    #[inline]
    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }


    /// Set the data type continuous features are read as.
    #[inline]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }


    /// Set the feature importances.
    #[inline]
    pub fn with_feature_importances(mut self, importances: Vec<f64>) -> Self {
        self.feature_importances = Some(importances);
        self
    }
}


impl Estimator for TreeEstimator {
    #[inline]
    fn options(&self) -> &TreeOptions {
        &self.options
    }


    #[inline]
    fn data_type(&self) -> DataType {
        self.data_type
    }
}


impl HasTree for TreeEstimator {
    #[inline]
    fn tree(&self) -> &ArrayTree {
        &self.tree
    }


    #[inline]
    fn feature_importances(&self) -> Option<&[f64]> {
        self.feature_importances.as_deref()
    }
}


/// A fitted ensemble of decision trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestEstimator {
    estimators: Vec<TreeEstimator>,
    options: TreeOptions,
}


impl ForestEstimator {
    /// Construct a new `ForestEstimator` with default options.
    #[inline]
    pub fn new(estimators: Vec<TreeEstimator>) -> Self {
        Self { estimators, options: TreeOptions::default() }
    }


    /// Set the conversion options.
    #[inline]
    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }
}


impl Estimator for ForestEstimator {
    #[inline]
    fn options(&self) -> &TreeOptions {
        &self.options
    }
}


impl HasEstimatorEnsemble for ForestEstimator {
    type Member = TreeEstimator;


    #[inline]
    fn estimators(&self) -> &[TreeEstimator] {
        &self.estimators[..]
    }
}
