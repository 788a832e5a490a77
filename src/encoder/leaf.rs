//! Defines the leaf value decoder.
use crate::common::utils;
use crate::error::{ConversionError, Result};
use crate::schema::{CategoricalLabel, Value};
use crate::tree::{LeafNode, Predicate, ScoreDistributionManager};

use std::sync::Arc;


/// Returns row `row` of the row-major `rows x columns` buffer `values`.
/// The buffer must hold exactly `rows * columns` elements.
#[inline]
pub(crate) fn get_row(values: &[f64], rows: usize, columns: usize, row: usize)
    -> Result<&[f64]>
{
    let expected = rows * columns;
    if values.len() != expected {
        return Err(ConversionError::SizeMismatch {
            expected,
            actual: values.len(),
        });
    }

    let start = row * columns;
    Ok(&values[start..start + columns])
}


/// Decode a classification leaf.
/// The row of per-class counts at `index` gives the record counts,
/// their sum the total record count,
/// and the first maximal class the score.
pub(crate) fn classification_leaf(
    index: usize,
    predicate: Arc<Predicate>,
    values: &[f64],
    n_nodes: usize,
    label: &CategoricalLabel,
    distributions: &ScoreDistributionManager,
) -> Result<LeafNode>
{
    let record_counts = get_row(values, n_nodes, label.size(), index)?;

    let total_record_count = record_counts.iter().sum::<f64>();

    let max_index = utils::index_of_max(record_counts);
    let score = label.values[max_index].clone();


    let mut leaf = LeafNode::from_raw(index, predicate, score);
    leaf.record_count = Some(total_record_count);
    leaf.score_distributions = Some(
        distributions.create(&label.values[..], record_counts)
    );

    Ok(leaf)
}


/// Decode a regression leaf: the score is the node's fitted value.
pub(crate) fn regression_leaf(
    index: usize,
    predicate: Arc<Predicate>,
    values: &[f64],
) -> LeafNode
{
    LeafNode::from_raw(index, predicate, Value::Double(values[index]))
}
