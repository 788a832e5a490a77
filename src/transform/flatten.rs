//! Defines the flattener.
//! Nested else-branches are spliced into their parents,
//! so chains of binary splits become one list of siblings
//! tried in order.
use crate::tree::{Node, PredicateManager};
use super::compact::to_else_form;


/// Flatten the tree rooted at `node`.
/// 
/// Complementary pairs are first put in first-match form.
/// Then, bottom-up, a last child with predicate `True`
/// that is itself a branch is replaced by its children:
/// `[a, True -> [b, c]]` becomes `[a, b, c]`.
pub fn flatten(node: Node, predicates: &PredicateManager) -> Node {
    let mut branch = match node {
        Node::Leaf(leaf) => return Node::Leaf(leaf),
        Node::Branch(branch) => branch,
    };

    let children = std::mem::take(&mut branch.children)
        .into_iter()
        .map(|child| flatten(child, predicates))
        .collect();

    let mut children = to_else_form(children, predicates);

    loop {
        let splice = matches!(
            children.last(),
            Some(Node::Branch(last)) if last.predicate.is_true()
        );
        if !splice {
            break;
        }

        if let Some(Node::Branch(last)) = children.pop() {
            children.extend(last.children);
        }
    }

    branch.children = children;
    Node::Branch(branch)
}
