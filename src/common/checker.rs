//! This file defines some functions that check pre-conditions
//! on the estimator state before a tree is encoded.
//! E.g., the shape of the array tree.
use fixedbitset::FixedBitSet;

use crate::error::{ConversionError, Result};
use crate::tree::ArrayTree;


/// Check whether the array tree is a well-formed binary tree
/// rooted at index `0`.
/// 
/// Every node must be reached at most once from the root,
/// every branch must point to in-range children,
/// and every split feature must exist in the schema.
/// After this check the recursive encoder cannot loop or overflow.
pub(crate) fn array_tree(tree: &ArrayTree, n_features: usize) -> Result<()> {
    let n_nodes = tree.n_nodes();

    if n_nodes == 0 {
        return Err(malformed("the tree has no nodes".into()));
    }


    let lengths = [
        ("children_right", tree.children_right().len()),
        ("feature", tree.feature().len()),
        ("threshold", tree.threshold().len()),
    ];
    for (name, len) in lengths {
        if len != n_nodes {
            return Err(malformed(format!(
                "`{name}` has {len} element(s), `children_left` has {n_nodes}"
            )));
        }
    }


    let mut visited = FixedBitSet::with_capacity(n_nodes);
    let mut stack = vec![0_usize];

    while let Some(index) = stack.pop() {
        if visited.put(index) {
            return Err(malformed(format!(
                "node {index} is reachable more than once"
            )));
        }

        if tree.is_leaf(index) {
            continue;
        }


        let feature = tree.feature()[index] as usize;
        if feature >= n_features {
            return Err(malformed(format!(
                "node {index} splits on feature {feature}, \
                 but the schema has {n_features} feature(s)"
            )));
        }


        let children = [tree.children_left()[index], tree.children_right()[index]];
        for child in children {
            if child < 0 || child as usize >= n_nodes {
                return Err(malformed(format!(
                    "node {index} references child {child}, \
                     but the tree has {n_nodes} node(s)"
                )));
            }
            stack.push(child as usize);
        }
    }

    Ok(())
}


#[inline(always)]
fn malformed(message: String) -> ConversionError {
    ConversionError::MalformedArrayTree(message)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> ArrayTree {
        ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![0.0; 6],
        )
    }

    #[test]
    fn test_well_formed() {
        assert!(array_tree(&stump(), 1).is_ok());
    }

    #[test]
    fn test_out_of_range_child() {
        let mut tree = stump();
        tree.children_right_mut()[0] = 7;
        let res = array_tree(&tree, 1);
        assert!(matches!(res, Err(ConversionError::MalformedArrayTree(_))));
    }

    #[test]
    fn test_cycle() {
        let mut tree = stump();
        tree.children_left_mut()[0] = 0;
        let res = array_tree(&tree, 1);
        assert!(matches!(res, Err(ConversionError::MalformedArrayTree(_))));
    }

    #[test]
    fn test_unknown_feature() {
        let res = array_tree(&stump(), 0);
        assert!(matches!(res, Err(ConversionError::MalformedArrayTree(_))));
    }
}
