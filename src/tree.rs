//! The files in `tree/` directory define
//! the input `ArrayTree`, the output `Node` hierarchy
//! and the path-scoped and run-scoped helpers used to build it.

/// Defines the flat, index-based tree of a fitted estimator.
pub mod array_tree;

/// Defines branch predicates.
pub mod predicate;

/// Defines the inner representation of an encoded tree.
pub mod node;

/// Defines the path-scoped record of reachable categories.
pub mod category_manager;

/// Defines the predicate cache.
pub mod predicate_manager;

/// Defines score distributions and their cache.
pub mod score_distribution;


pub use array_tree::ArrayTree;
pub use predicate::{
    Predicate,
    SimplePredicate,
    SimpleSetPredicate,
    Operator,
    BooleanOperator,
};
pub use node::{Node, BranchNode, LeafNode, Extension};
pub use category_manager::CategoryManager;
pub use predicate_manager::PredicateManager;
pub use score_distribution::{ScoreDistribution, ScoreDistributionManager};
