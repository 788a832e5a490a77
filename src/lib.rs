#![warn(missing_docs)]

//! 
//! A crate that encodes fitted, array-based binary decision trees
//! (and ensembles of them) as PMML-style tree models.
//! 
//! The conversion runs in two stages.
//! 
//! - Encoding
//!     The flat `ArrayTree` buffers of a fitted estimator are turned into
//!     a hierarchy of `Node`s, each guarded by a `Predicate`.
//!     Continuous, binary and categorical-threshold features
//!     get their own predicate shapes.
//!     Classification leaves carry the winning class,
//!     the record count and the score distribution.
//! 
//! 
//! - Transformation
//!     The raw tree is rewritten by an ordered set of passes
//!     (prune, compact, flatten, extension injection, id/score stripping)
//!     selected through `TreeOptions`.
//!     Simplifying passes and the passes that keep node ids,
//!     node scores or node extensions stable are mutually exclusive.
//! 
//! ```no_run
//! use minipmml::prelude::*;
//! 
//! # fn run(estimator: TreeEstimator, schema: Schema) -> minipmml::Result<()> {
//! let tree = encode_tree_model(&estimator, MiningFunction::Classification, &schema)?;
//! let model = transform(&estimator, Model::Tree(tree))?;
//! println!("{}", model.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod common;
pub mod schema;
pub mod tree;
pub mod model;
pub mod estimator;
pub mod encoder;
pub mod transform;
pub mod scoring;

pub mod prelude;


pub use error::{ConversionError, Result};

pub use schema::{
    Value,
    DataType,
    Feature,
    ContinuousFeature,
    BinaryFeature,
    ThresholdFeature,
    Category,
    Label,
    CategoricalLabel,
    ContinuousLabel,
    Schema,
};

pub use tree::{
    ArrayTree,
    Node,
    BranchNode,
    LeafNode,
    Extension,
    Predicate,
    SimplePredicate,
    SimpleSetPredicate,
    Operator,
    BooleanOperator,
    CategoryManager,
    PredicateManager,
    ScoreDistribution,
    ScoreDistributionManager,
};

pub use model::{
    MiningFunction,
    MiningSchema,
    MiningField,
    FieldUsage,
    SplitCharacteristic,
    TreeModel,
    FeatureImportance,
    MiningModel,
    MultipleModelMethod,
    Segmentation,
    Segment,
    Output,
    OutputField,
    Model,
};

pub use estimator::{
    Estimator,
    HasTree,
    HasEstimatorEnsemble,
    TreeEstimator,
    ForestEstimator,
};

pub use encoder::{
    TreeOptions,
    ResolvedOptions,
    NodeExtensions,
    encode_tree_model,
    encode_tree_model_with,
    encode_tree_model_ensemble,
    encode_tree_model_ensemble_with,
};

pub use transform::{transform, transform_with, transform_with_managers};

pub use scoring::{Row, Scorer};
