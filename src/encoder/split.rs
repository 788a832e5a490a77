//! Defines the predicate synthesizer:
//! the pair of branch predicates produced for one split.
use fixedbitset::FixedBitSet;

use crate::common::utils::to_split_value;
use crate::error::{ConversionError, Result};
use crate::schema::{Feature, BinaryFeature, ThresholdFeature, Value};
use crate::tree::{
    CategoryManager,
    Operator,
    Predicate,
    PredicateManager,
};

use std::sync::Arc;


/// The outcome of a split: mutually exclusive, jointly exhaustive
/// predicates for the left and right child, and for categorical splits
/// the category managers each child is built with.
#[derive(Debug, Clone)]
pub struct Split {
    /// Predicate of the left child.
    pub left: Arc<Predicate>,
    /// Predicate of the right child.
    pub right: Arc<Predicate>,
    /// Category manager of the left child.
    pub left_categories: CategoryManager,
    /// Category manager of the right child.
    pub right_categories: CategoryManager,
}


/// Synthesize the predicates for splitting `feature` at `threshold`.
/// 
/// - Binary features yield `!= value` / `== value`;
///   the threshold must lie in `[0, 1]`, so a `NaN` threshold is rejected.
/// - Threshold features (unless `numeric`) yield two category sets,
///   narrowed to the categories still reachable on this path.
/// - Everything else yields `<= t` / `> t`,
///   with `t` rounded through single precision.
pub fn synthesize(
    feature: &Feature,
    threshold: f64,
    numeric: bool,
    categories: &CategoryManager,
    predicates: &PredicateManager,
) -> Result<Split>
{
    match feature {
        Feature::Binary(f) => {
            binary_split(f, threshold, categories, predicates)
        },
        Feature::Threshold(f) if !numeric => {
            Ok(threshold_split(f, threshold, categories, predicates))
        },
        _ => {
            let value = Value::Double(to_split_value(threshold));
            let name = feature.name();

            Ok(Split {
                left: predicates.simple(name, Operator::LessOrEqual, value.clone()),
                right: predicates.simple(name, Operator::GreaterThan, value),
                left_categories: categories.clone(),
                right_categories: categories.clone(),
            })
        },
    }
}


fn binary_split(
    feature: &BinaryFeature,
    threshold: f64,
    categories: &CategoryManager,
    predicates: &PredicateManager,
) -> Result<Split>
{
    if !(0f64..=1f64).contains(&threshold) {
        return Err(ConversionError::InvalidSplit {
            feature: feature.name.clone(),
            threshold,
        });
    }

    let value = feature.value.clone();
    let name = &feature.name;

    Ok(Split {
        left: predicates.simple(name, Operator::NotEqual, value.clone()),
        right: predicates.simple(name, Operator::Equal, value),
        left_categories: categories.clone(),
        right_categories: categories.clone(),
    })
}


fn threshold_split(
    feature: &ThresholdFeature,
    threshold: f64,
    categories: &CategoryManager,
    predicates: &PredicateManager,
) -> Split
{
    let name = &feature.name;
    let n_categories = feature.len();

    let mut left = FixedBitSet::with_capacity(n_categories);
    let mut right = FixedBitSet::with_capacity(n_categories);

    for (i, category) in feature.categories.iter().enumerate() {
        if !categories.is_reachable(name, i) || feature.is_missing(i) {
            continue;
        }

        let value = to_split_value(category.number);
        if value <= threshold {
            left.insert(i);
        } else if value > threshold {
            right.insert(i);
        }
    }


    let left_predicate = predicates.category_set(name, feature.values_of(&left));
    let right_predicate = predicates.category_set(name, feature.values_of(&right));

    Split {
        left: left_predicate,
        right: right_predicate,
        left_categories: categories.fork(name, left),
        right_categories: categories.fork(name, right),
    }
}
