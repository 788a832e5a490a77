//! The files in `schema/` directory define
//! the feature schema an array tree is encoded against.
//! The schema is produced by the feature-engineering pipeline
//! and read-only to this crate.

/// Defines scalar values and data types.
pub mod value;

/// Defines continuous, binary and categorical-threshold features.
pub mod feature;

/// Defines the target label.
pub mod label;

/// Defines `Schema`, an ordered feature list plus a label.
pub mod schema_struct;


pub use value::{Value, DataType};
pub(crate) use value::ValueKey;
pub use feature::{
    Feature,
    ContinuousFeature,
    BinaryFeature,
    ThresholdFeature,
    Category,
};
pub use label::{Label, CategoricalLabel, ContinuousLabel};
pub use schema_struct::Schema;
