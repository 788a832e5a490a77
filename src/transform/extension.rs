//! Defines extension injection.
use crate::common::utils;
use crate::tree::{Extension, Node};

use std::collections::BTreeMap;


/// Attach `name = value` to every node whose id has a value in `values`.
/// Values are rendered in their canonical scalar text form;
/// `null` values are skipped.
pub fn inject(
    mut node: Node,
    name: &str,
    values: &BTreeMap<usize, serde_json::Value>,
) -> Node
{
    let text = node.id()
        .and_then(|id| values.get(&id))
        .and_then(utils::scalar_to_string);

    if let Some(value) = text {
        node.extensions_mut().push(Extension { name: name.to_string(), value });
    }


    if let Node::Branch(ref mut branch) = node {
        branch.children = std::mem::take(&mut branch.children)
            .into_iter()
            .map(|child| inject(child, name, values))
            .collect();
    }

    node
}
