//! Encodes a single fitted tree as a `TreeModel`.
use log::debug;

use crate::common::checker;
use crate::error::{ConversionError, Result};
use crate::estimator::{Estimator, HasTree};
use crate::model::{
    FeatureImportance,
    MiningFunction,
    MiningSchema,
    TreeModel,
};
use crate::schema::{Feature, Label, Schema};
use crate::tree::{
    CategoryManager,
    PredicateManager,
    ScoreDistributionManager,
};
use super::node_builder::NodeBuilder;


/// Encode the tree of `estimator` against `schema`
/// with fresh predicate and score distribution caches.
/// `numeric` is read from the estimator's options.
/// 
/// The result is the raw binary-split tree;
/// run `transform` on it to apply the configured passes.
pub fn encode_tree_model<E>(
    estimator: &E,
    mining_function: MiningFunction,
    schema: &Schema,
) -> Result<TreeModel>
    where E: Estimator + HasTree + ?Sized,
{
    let numeric = estimator.options().is_numeric();

    let predicates = PredicateManager::new();
    let distributions = ScoreDistributionManager::new();

    encode_tree_model_with(
        estimator,
        mining_function,
        numeric,
        &predicates,
        &distributions,
        schema,
    )
}


/// Encode the tree of `estimator` against `schema`,
/// interning predicates and score distributions
/// through the given caches.
pub fn encode_tree_model_with<E>(
    estimator: &E,
    mining_function: MiningFunction,
    numeric: bool,
    predicates: &PredicateManager,
    distributions: &ScoreDistributionManager,
    schema: &Schema,
) -> Result<TreeModel>
    where E: HasTree + ?Sized,
{
    check_label(mining_function, schema.label())?;


    let tree = estimator.tree();
    checker::array_tree(tree, schema.n_features())?;

    if mining_function == MiningFunction::Regression
        && tree.values().len() != tree.n_nodes()
    {
        return Err(ConversionError::SizeMismatch {
            expected: tree.n_nodes(),
            actual: tree.values().len(),
        });
    }


    let builder = NodeBuilder {
        tree,
        schema,
        mining_function,
        numeric,
        predicates,
        distributions,
    };
    let categories = root_categories(schema, numeric);
    let root = builder.build(0, predicates.always(), &categories)?;

    debug!(
        "encoded a {mining_function:?} tree: {} node(s), {} leaves, depth {}",
        root.n_nodes(),
        root.n_leaves(),
        root.depth(),
    );


    let mining_schema = MiningSchema::from_label(schema.label());
    let mut tree_model = TreeModel::new(mining_function, mining_schema, root);

    if let Some(importances) = estimator.feature_importances() {
        let importance_schema = schema.to_feature_importance_schema(numeric);
        add_feature_importances(&mut tree_model, importances, &importance_schema)?;
    }

    Ok(tree_model)
}


/// Attach one importance per schema feature to `tree_model`.
pub(crate) fn add_feature_importances(
    tree_model: &mut TreeModel,
    importances: &[f64],
    schema: &Schema,
) -> Result<()>
{
    if importances.len() != schema.n_features() {
        return Err(ConversionError::SizeMismatch {
            expected: schema.n_features(),
            actual: importances.len(),
        });
    }

    tree_model.feature_importances = schema.features()
        .iter()
        .zip(importances)
        .map(|(feature, &importance)| FeatureImportance {
            name: feature.name().to_string(),
            importance,
        })
        .collect();

    Ok(())
}


/// Returns the category manager of the root:
/// every categorical-threshold feature starts with its full universe.
pub(crate) fn root_categories(schema: &Schema, numeric: bool) -> CategoryManager {
    if numeric {
        return CategoryManager::new();
    }

    schema.features()
        .iter()
        .fold(CategoryManager::new(), |categories, feature| match feature {
            Feature::Threshold(f) => categories.fork(&f.name, f.universe()),
            _ => categories,
        })
}


fn check_label(mining_function: MiningFunction, label: &Label) -> Result<()> {
    match (mining_function, label) {
        (MiningFunction::Classification, Label::Categorical(l)) => {
            if l.size() == 0 {
                return Err(ConversionError::InvalidLabel(
                    "a categorical label needs at least one class".into()
                ));
            }
            Ok(())
        },
        (MiningFunction::Classification, Label::Continuous(_)) => {
            Err(ConversionError::InvalidLabel(
                "classification requires a categorical label".into()
            ))
        },
        (MiningFunction::Regression, _) => Ok(()),
        (other, _) => Err(ConversionError::UnsupportedMiningFunction(other)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ContinuousFeature, ContinuousLabel, DataType, ThresholdFeature};

    fn schema() -> Schema {
        let label = ContinuousLabel::new("y", DataType::Double);
        let features = vec![
            ContinuousFeature::new("x", DataType::Double).into(),
            ThresholdFeature::ordinal("c", ["a", "b", "c"], None).into(),
        ];
        Schema::new(label, features)
    }

    #[test]
    fn test_root_categories_hold_the_universe() {
        let categories = root_categories(&schema(), false);
        let universe = categories.reachable("c").unwrap();
        assert_eq!(3, universe.count_ones(..));
        assert!(categories.reachable("x").is_none());
    }

    #[test]
    fn test_numeric_root_is_unrestricted() {
        let categories = root_categories(&schema(), true);
        assert!(categories.reachable("c").is_none());
    }
}
