//! Encodes every member of a fitted ensemble as a `TreeModel`.
use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::estimator::{Estimator, HasEstimatorEnsemble};
use crate::model::{MiningFunction, TreeModel};
use crate::schema::Schema;
use crate::tree::{PredicateManager, ScoreDistributionManager};
use super::tree_encoder::encode_tree_model_with;


/// Encode every member of `estimator`
/// with fresh caches shared by all members.
/// `numeric` is read from the ensemble's options.
pub fn encode_tree_model_ensemble<E>(
    estimator: &E,
    mining_function: MiningFunction,
    schema: &Schema,
) -> Result<Vec<TreeModel>>
    where E: HasEstimatorEnsemble,
{
    let numeric = estimator.options().is_numeric();

    let predicates = PredicateManager::new();
    let distributions = ScoreDistributionManager::new();

    encode_tree_model_ensemble_with(
        estimator,
        mining_function,
        numeric,
        &predicates,
        &distributions,
        schema,
    )
}


/// Encode every member of `estimator` against an anonymous copy
/// of `schema`. Members are encoded in parallel;
/// the result keeps the member order.
/// Each member reads continuous features with its own data type,
/// and its feature importances, if any, are attached to its tree.
pub fn encode_tree_model_ensemble_with<E>(
    estimator: &E,
    mining_function: MiningFunction,
    numeric: bool,
    predicates: &PredicateManager,
    distributions: &ScoreDistributionManager,
    schema: &Schema,
) -> Result<Vec<TreeModel>>
    where E: HasEstimatorEnsemble,
{
    let segment_schema = schema.to_anonymous();

    let trees = estimator.estimators()
        .par_iter()
        .map(|member| {
            let tree_schema = segment_schema
                .to_tree_model_schema(member.data_type(), numeric);

            encode_tree_model_with(
                member,
                mining_function,
                numeric,
                predicates,
                distributions,
                &tree_schema,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "encoded {} member tree(s), {} distinct predicate(s), {} distinct score distribution(s)",
        trees.len(),
        predicates.len(),
        distributions.len(),
    );

    Ok(trees)
}

