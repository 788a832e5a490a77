//! The files in `model/` directory define
//! the output documents handed to a PMML writer.

/// Defines the mining function and the mining schema.
pub mod mining_schema;

/// Defines `TreeModel`.
pub mod tree_model;

/// Defines `MiningModel` and its segmentation.
pub mod mining_model;

/// Defines the auxiliary output fields.
pub mod output;

/// Defines `Model`, a tree model or an ensemble of them.
pub mod document;


pub use mining_schema::{
    MiningFunction,
    MiningSchema,
    MiningField,
    FieldUsage,
};
pub use tree_model::{TreeModel, SplitCharacteristic, FeatureImportance};
pub use mining_model::{
    MiningModel,
    MultipleModelMethod,
    Segmentation,
    Segment,
};
pub use output::{Output, OutputField};
pub use document::Model;
