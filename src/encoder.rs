//! The files in `encoder/` directory turn a fitted array tree
//! (or an ensemble of them) into `TreeModel`s.

/// Defines the conversion options.
pub mod options;

/// Defines the predicate synthesizer.
pub mod split;

/// Defines the leaf value decoder.
mod leaf;

/// Defines the recursive node builder.
mod node_builder;

/// Defines the single tree encoder.
pub mod tree_encoder;

/// Defines the ensemble encoder.
pub mod ensemble;


pub use options::{TreeOptions, ResolvedOptions, NodeExtensions};
pub use split::{Split, synthesize};
pub use tree_encoder::{encode_tree_model, encode_tree_model_with};
pub use ensemble::{
    encode_tree_model_ensemble,
    encode_tree_model_ensemble_with,
};
