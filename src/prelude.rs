//! Exports the types and functions needed to encode
//! and transform a fitted tree.
//! 
pub use crate::error::{
    ConversionError,
    Result,
};


// Input ------------------------------------
pub use crate::schema::{
    Value,
    DataType,
    Feature,
    ContinuousFeature,
    BinaryFeature,
    ThresholdFeature,
    Label,
    CategoricalLabel,
    ContinuousLabel,
    Schema,
};

pub use crate::tree::ArrayTree;

pub use crate::estimator::{
    Estimator,
    HasTree,
    HasEstimatorEnsemble,
    TreeEstimator,
    ForestEstimator,
};


// Encoding ---------------------------------
pub use crate::encoder::{
    TreeOptions,
    encode_tree_model,
    encode_tree_model_ensemble,
};


// Output -----------------------------------
pub use crate::tree::{
    Node,
    Predicate,
};

pub use crate::model::{
    MiningFunction,
    MultipleModelMethod,
    TreeModel,
    MiningModel,
    Model,
};


// Transformation ---------------------------
pub use crate::transform::{
    transform,
    transform_with,
};

pub use crate::scoring::{
    Row,
    Scorer,
};
