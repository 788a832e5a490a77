//! The files in `transform/` directory define
//! the whole-tree rewrites applied after encoding.
//! Every pass consumes a tree and returns the rewritten one.

/// Defines the option-driven pass ordering.
pub mod pipeline;

/// Defines the pruner.
pub mod prune;

/// Defines the compactor.
pub mod compact;

/// Defines the flattener.
pub mod flatten;

/// Defines extension injection.
pub mod extension;

/// Defines id and score stripping.
pub mod cleaner;


pub use pipeline::{transform, transform_with, transform_with_managers};
