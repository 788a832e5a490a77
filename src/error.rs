//! Defines the error type returned by every conversion step.
//! Conversion either succeeds or fails with one of these;
//! there is no partial tree output.
use crate::model::MiningFunction;


/// Errors that can occur while encoding or transforming a tree model.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Node id/score/extension options were combined with
    /// `compact`, `flat` or `prune`.
    #[error("conflicting tree model options: {fixed} cannot be combined with {simplifying}")]
    ConflictingOptions {
        /// The fixed mode options that are set.
        fixed: String,
        /// The simplification options that are enabled.
        simplifying: String,
    },


    /// A binary feature was split on a threshold outside `[0, 1]`.
    #[error("invalid split on binary feature `{feature}`: threshold {threshold} is not in [0, 1]")]
    InvalidSplit {
        /// Name of the binary feature.
        feature: String,
        /// The offending threshold.
        threshold: f64,
    },


    /// A value buffer does not have the expected number of elements.
    #[error("expected {expected} element(s), got {actual} element(s)")]
    SizeMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        actual: usize,
    },


    /// Winner ids were requested over an ensemble
    /// that has a segment without id.
    #[error("segment #{position} has no id")]
    MissingSegmentId {
        /// One-based position of the segment.
        position: usize,
    },


    /// The mining function is neither classification nor regression.
    #[error("unsupported mining function: {0:?}")]
    UnsupportedMiningFunction(MiningFunction),


    /// Child indices are out of range, shared, or cyclic.
    #[error("malformed array tree: {0}")]
    MalformedArrayTree(String),


    /// The label does not fit the mining function.
    #[error("invalid label: {0}")]
    InvalidLabel(String),


    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),


    /// Writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}


/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ConversionError>;
