//! Defines the compactor.
//! 
//! Two rewrites are applied bottom-up in one traversal:
//! 
//! 1. Children whose predicate cannot hold given the predicates
//!    on the path from the root are removed.
//!    A branch left with a single child is replaced by that child,
//!    which takes over the branch's predicate and id.
//! 2. A two-child branch whose children test exact complements
//!    (`<= v` / `> v`, `== v` / `!= v`) is put in first-match form:
//!    the positive test goes first and the second child gets `True`.
//! 
//! Neither rewrite changes the score of a row without missing values.
use crate::schema::Value;
use crate::tree::{
    BooleanOperator,
    Node,
    Operator,
    Predicate,
    PredicateManager,
    SimplePredicate,
};

use std::collections::HashMap;


/// Compact the tree rooted at `node`.
pub fn compact(node: Node, predicates: &PredicateManager) -> Node {
    let bounds = PathBounds::default().with(node.predicate());
    compact_node(node, &bounds, predicates)
}


fn compact_node(node: Node, bounds: &PathBounds, predicates: &PredicateManager)
    -> Node
{
    let mut branch = match node {
        Node::Leaf(leaf) => return Node::Leaf(leaf),
        Node::Branch(branch) => branch,
    };


    let children = std::mem::take(&mut branch.children);
    let (reachable, unreachable): (Vec<Node>, Vec<Node>) = children
        .into_iter()
        .partition(|child| !bounds.contradicts(child.predicate()));

    // An infeasible path keeps its children as they are.
    let children = if reachable.is_empty() { unreachable } else { reachable };


    let mut children = children.into_iter()
        .map(|child| {
            let bounds = bounds.with(child.predicate());
            compact_node(child, &bounds, predicates)
        })
        .collect::<Vec<_>>();


    if children.len() == 1 {
        if let Some(mut only) = children.pop() {
            only.set_predicate(branch.predicate);
            only.set_id(branch.id);
            return only;
        }
    }


    branch.children = to_else_form(children, predicates);
    Node::Branch(branch)
}


/// Put a complementary pair of children in first-match form.
/// Any other child list is returned unchanged.
pub(crate) fn to_else_form(mut children: Vec<Node>, predicates: &PredicateManager)
    -> Vec<Node>
{
    if children.len() != 2 {
        return children;
    }

    let swap = match (children[0].predicate().as_ref(), children[1].predicate().as_ref()) {
        (Predicate::Simple(a), Predicate::Simple(b)) if is_complement(a, b) => {
            Some(matches!(a.operator, Operator::GreaterThan | Operator::NotEqual))
        },
        _ => None,
    };
    let Some(swap) = swap else {
        return children;
    };


    if swap {
        children.swap(0, 1);
    }
    children[1].set_predicate(predicates.always());

    children
}


#[inline]
fn is_complement(a: &SimplePredicate, b: &SimplePredicate) -> bool {
    a.field == b.field
        && a.value == b.value
        && a.operator.negate() == b.operator
}


/// What the predicates on the path say about one field.
#[derive(Debug, Clone, Default)]
struct FieldBounds {
    // x > lower
    lower: Option<f64>,
    // x <= upper
    upper: Option<f64>,
    equal: Option<Value>,
    not_equal: Vec<Value>,
}


#[derive(Debug, Clone, Default)]
struct PathBounds {
    fields: HashMap<String, FieldBounds>,
}


impl PathBounds {
    /// Returns the bounds after also requiring `predicate`.
    fn with(&self, predicate: &Predicate) -> Self {
        let Predicate::Simple(p) = predicate else {
            return self.clone();
        };

        let mut next = self.clone();
        let field = next.fields.entry(p.field.clone()).or_default();

        match p.operator {
            Operator::LessOrEqual => {
                if let Some(v) = p.value.as_f64() {
                    field.upper = Some(field.upper.map_or(v, |u| u.min(v)));
                }
            },
            Operator::GreaterThan => {
                if let Some(v) = p.value.as_f64() {
                    field.lower = Some(field.lower.map_or(v, |l| l.max(v)));
                }
            },
            Operator::Equal => field.equal = Some(p.value.clone()),
            Operator::NotEqual => field.not_equal.push(p.value.clone()),
        }

        next
    }


    /// Returns `true` if `predicate` cannot hold on this path.
    fn contradicts(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::True => false,
            Predicate::CategorySet(p) => {
                p.operator == BooleanOperator::IsIn && p.values.is_empty()
            },
            Predicate::Simple(p) => {
                let Some(field) = self.fields.get(&p.field) else {
                    return false;
                };

                match p.operator {
                    Operator::LessOrEqual => {
                        match (field.lower, p.value.as_f64()) {
                            (Some(l), Some(v)) => l >= v,
                            _ => false,
                        }
                    },
                    Operator::GreaterThan => {
                        match (field.upper, p.value.as_f64()) {
                            (Some(u), Some(v)) => u <= v,
                            _ => false,
                        }
                    },
                    Operator::Equal => {
                        field.equal.as_ref().is_some_and(|e| !e.matches(&p.value))
                            || field.not_equal.iter().any(|n| n.matches(&p.value))
                    },
                    Operator::NotEqual => {
                        field.equal.as_ref().is_some_and(|e| e.matches(&p.value))
                    },
                }
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{BranchNode, LeafNode};

    use std::sync::Arc;

    fn leaf(id: usize, predicate: Arc<Predicate>, score: i64) -> Node {
        Node::Leaf(LeafNode::from_raw(id, predicate, Value::Integer(score)))
    }

    fn branch(id: usize, predicate: Arc<Predicate>, left: Node, right: Node) -> Node {
        Node::Branch(BranchNode::from_raw(id, predicate, None, left, right))
    }

    #[test]
    fn test_unreachable_child_is_removed() {
        let pm = PredicateManager::new();
        let le = |v: f64| pm.simple("x", Operator::LessOrEqual, Value::Double(v));
        let gt = |v: f64| pm.simple("x", Operator::GreaterThan, Value::Double(v));

        let inner = branch(2, gt(0.5), leaf(3, le(0.25), 0), leaf(4, gt(0.25), 1));
        let root = branch(0, pm.always(), leaf(1, le(0.5), 0), inner);

        let root = compact(root, &pm);
        let children = root.children();
        assert_eq!(2, children.len());
        assert_eq!(Some(1), children[0].id());
        assert_eq!(Some(2), children[1].id());
        assert!(children[1].is_leaf());
        assert!(children[1].predicate().is_true());
        assert_eq!(Some(&Value::Integer(1)), children[1].score());
    }

    #[test]
    fn test_empty_category_set_is_removed() {
        let pm = PredicateManager::new();
        let some = pm.category_set("c", vec![Value::from("a")]);
        let none = pm.category_set("c", Vec::new());

        let inner = branch(1, some.clone(), leaf(2, some.clone(), 5), leaf(3, none, 6));
        let root = branch(0, pm.always(), inner, leaf(4, pm.always(), 7));

        let root = compact(root, &pm);
        let first = &root.children()[0];
        assert!(first.is_leaf());
        assert_eq!(Some(1), first.id());
        assert_eq!(Some(&Value::Integer(5)), first.score());
    }

    #[test]
    fn test_equality_contradictions() {
        let pm = PredicateManager::new();
        let eq = pm.simple("c", Operator::Equal, Value::from("red"));
        let ne = pm.simple("c", Operator::NotEqual, Value::from("red"));

        let bounds = PathBounds::default().with(&ne);
        assert!(bounds.contradicts(&eq));
        assert!(!bounds.contradicts(&ne));

        let bounds = PathBounds::default().with(&eq);
        assert!(bounds.contradicts(&ne));
    }

    #[test]
    fn test_category_set_pair_is_kept() {
        let pm = PredicateManager::new();
        let a = pm.category_set("c", vec![Value::from("a")]);
        let b = pm.category_set("c", vec![Value::from("b")]);

        let root = branch(0, pm.always(), leaf(1, a, 0), leaf(2, b, 1));
        let root = compact(root, &pm);
        assert!(root.children().iter().all(|c| !c.predicate().is_true()));
    }
}
