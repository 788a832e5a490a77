//! Runs the transform passes selected by `TreeOptions`.
use log::{info, warn};

use crate::error::Result;
use crate::estimator::Estimator;
use crate::encoder::TreeOptions;
use crate::model::{Model, SplitCharacteristic};
use crate::model::output;
use crate::schema::DataType;
use crate::tree::{PredicateManager, ScoreDistributionManager};

use super::{cleaner, compact, extension, flatten, prune};


/// Transform `model` with the options of `estimator`.
#[inline]
pub fn transform<E>(estimator: &E, model: Model) -> Result<Model>
    where E: Estimator + ?Sized
{
    transform_with(estimator.options(), model)
}


/// Transform `model` with `options`.
/// 
/// The passes run in a fixed order:
/// 
/// 1. winner id outputs,
/// 2. prune,
/// 3. compact,
/// 4. flatten,
/// 5. extension injection,
/// 6. id stripping (unless node ids are kept),
/// 7. branch score stripping (if node scores are turned off).
/// 
/// Every tree of an ensemble goes through the same passes.
/// The passes intern into fresh caches;
/// use `transform_with_managers` to continue an encoding run's caches.
#[inline]
pub fn transform_with(options: &TreeOptions, model: Model) -> Result<Model> {
    let predicates = PredicateManager::new();
    let distributions = ScoreDistributionManager::new();

    transform_with_managers(options, model, &predicates, &distributions)
}


/// Same as `transform_with`, interning the predicates and
/// score distributions the passes create through the given caches.
pub fn transform_with_managers(
    options: &TreeOptions,
    model: Model,
    predicates: &PredicateManager,
    distributions: &ScoreDistributionManager,
) -> Result<Model>
{
    let options = options.resolve()?;
    info!(
        "transform: winner_id = {}, node_id = {}, node_score = {:?}, \
         compact = {}, flat = {}, prune = {}",
        options.winner_id,
        options.node_id,
        options.node_score,
        options.compact,
        options.flat,
        options.prune,
    );


    let mut model = model;
    if options.winner_id {
        match &mut model {
            Model::Tree(tree) => {
                output::encode_apply_output(tree, DataType::Integer);
            },
            Model::Mining(mining) => {
                output::encode_multi_apply_output(mining, DataType::Integer)?;
            },
        }
    }


    if options.prune {
        let before = n_nodes(&model);
        model = model.map_trees(|tree| {
            tree.map_root(|root| prune::prune(root, distributions))
        });
        info!("prune: {before} -> {} nodes", n_nodes(&model));
    }


    if options.compact {
        let before = n_nodes(&model);
        model = model.map_trees(|tree| {
            tree.map_root(|root| compact::compact(root, predicates))
        });
        info!("compact: {before} -> {} nodes", n_nodes(&model));
    }


    if options.flat {
        let before = depth(&model);
        model = model.map_trees(|tree| {
            let mut tree = tree.map_root(|root| {
                flatten::flatten(root, predicates)
            });
            tree.split_characteristic = SplitCharacteristic::MultiSplit;
            tree
        });

        let after = depth(&model);
        if after == before {
            warn!("flat: nothing to flatten (depth {after})");
        } else {
            info!("flat: depth {before} -> {after}");
        }
    }


    if let Some(extensions) = &options.node_extensions {
        for (name, values) in extensions {
            model = model.map_trees(|tree| {
                tree.map_root(|root| extension::inject(root, name, values))
            });
            info!("extension `{name}`: {} value(s)", values.len());
        }
    }


    if !options.node_id {
        model = model.map_trees(|tree| tree.map_root(cleaner::strip_ids));
    }


    if options.node_score == Some(false) {
        model = model.map_trees(|tree| tree.map_root(cleaner::strip_scores));
    }


    Ok(model)
}


fn n_nodes(model: &Model) -> usize {
    model.trees()
        .into_iter()
        .map(|tree| tree.n_nodes())
        .sum()
}


fn depth(model: &Model) -> usize {
    model.trees()
        .into_iter()
        .map(|tree| tree.root.depth())
        .max()
        .unwrap_or(0)
}
