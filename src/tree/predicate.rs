//! Defines the predicates that guard tree nodes.
use serde::{Serialize, Deserialize};

use crate::schema::Value;
use crate::scoring::Row;

use std::fmt;


/// Comparison operators of a `SimplePredicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// `field == value`
    Equal,
    /// `field != value`
    NotEqual,
    /// `field <= value`
    LessOrEqual,
    /// `field > value`
    GreaterThan,
}


impl Operator {
    /// Returns the operator that selects exactly the complement.
    #[inline]
    pub fn negate(&self) -> Self {
        match self {
            Operator::Equal => Operator::NotEqual,
            Operator::NotEqual => Operator::Equal,
            Operator::LessOrEqual => Operator::GreaterThan,
            Operator::GreaterThan => Operator::LessOrEqual,
        }
    }


    #[inline]
    fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessOrEqual => "<=",
            Operator::GreaterThan => ">",
        }
    }
}


/// Membership operators of a `SimpleSetPredicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BooleanOperator {
    /// The field value is in the set.
    IsIn,
    /// The field value is not in the set.
    IsNotIn,
}


/// A single-field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePredicate {
    /// Field name.
    pub field: String,
    /// Comparison operator.
    pub operator: Operator,
    /// Right-hand side.
    pub value: Value,
}


/// A single-field set membership test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleSetPredicate {
    /// Field name.
    pub field: String,
    /// Membership operator.
    pub operator: BooleanOperator,
    /// The value set.
    pub values: Vec<Value>,
}


/// Enumeration of the predicates a node can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Always holds.
    True,


    /// A comparison against a single value.
    Simple(SimplePredicate),


    /// A set membership test.
    CategorySet(SimpleSetPredicate),
}


impl Predicate {
    /// Returns the field the predicate reads, if any.
    #[inline]
    pub fn field(&self) -> Option<&str> {
        match self {
            Predicate::True => None,
            Predicate::Simple(p) => Some(&p.field),
            Predicate::CategorySet(p) => Some(&p.field),
        }
    }


    /// Returns `true` for the `True` predicate.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Predicate::True)
    }


    /// Evaluate the predicate against `row`.
    /// A field that is absent from the row never satisfies a predicate.
    pub fn evaluate(&self, row: &Row) -> bool {
        match self {
            Predicate::True => true,
            Predicate::Simple(p) => {
                let Some(x) = row.get(&p.field) else {
                    return false;
                };
                match p.operator {
                    Operator::Equal => x.matches(&p.value),
                    Operator::NotEqual => !x.matches(&p.value),
                    Operator::LessOrEqual | Operator::GreaterThan => {
                        let (Some(x), Some(v)) = (x.as_f64(), p.value.as_f64()) else {
                            return false;
                        };
                        if p.operator == Operator::LessOrEqual {
                            x <= v
                        } else {
                            x > v
                        }
                    },
                }
            },
            Predicate::CategorySet(p) => {
                let Some(x) = row.get(&p.field) else {
                    return false;
                };
                let contains = p.values.iter().any(|v| x.matches(v));
                match p.operator {
                    BooleanOperator::IsIn => contains,
                    BooleanOperator::IsNotIn => !contains,
                }
            },
        }
    }
}


impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::True => write!(f, "True"),
            Predicate::Simple(p) => {
                write!(f, "{} {} {}", p.field, p.operator.symbol(), p.value)
            },
            Predicate::CategorySet(p) => {
                let op = match p.operator {
                    BooleanOperator::IsIn => "in",
                    BooleanOperator::IsNotIn => "not in",
                };
                let values = p.values.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{} {op} {{{values}}}", p.field)
            },
        }
    }
}
