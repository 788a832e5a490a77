//! Defines `PredicateManager`,
//! an append-only cache that interns predicates
//! so that identical predicates share one allocation.
use crate::schema::{Value, ValueKey};
use super::predicate::*;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};


/// Interns predicates for one conversion run.
/// The cache is `Sync`, so ensemble members may be encoded in parallel
/// against the same manager.
#[derive(Debug, Default)]
pub struct PredicateManager {
    cache: Mutex<HashMap<PredicateKey, Arc<Predicate>>>,
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PredicateKey {
    True,
    Simple(String, Operator, ValueKey),
    CategorySet(String, BooleanOperator, Vec<ValueKey>),
}


impl From<&Predicate> for PredicateKey {
    fn from(predicate: &Predicate) -> Self {
        match predicate {
            Predicate::True => PredicateKey::True,
            Predicate::Simple(p) => {
                PredicateKey::Simple(p.field.clone(), p.operator, (&p.value).into())
            },
            Predicate::CategorySet(p) => {
                let values = p.values.iter().map(ValueKey::from).collect();
                PredicateKey::CategorySet(p.field.clone(), p.operator, values)
            },
        }
    }
}


impl PredicateManager {
    /// Construct an empty `PredicateManager`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Returns the shared instance of `predicate`.
    pub fn intern(&self, predicate: Predicate) -> Arc<Predicate> {
        let key = PredicateKey::from(&predicate);

        let mut cache = self.cache.lock()
            .unwrap_or_else(PoisonError::into_inner);
        cache.entry(key)
            .or_insert_with(|| Arc::new(predicate))
            .clone()
    }


    /// Returns the shared `True` predicate.
    #[inline]
    pub fn always(&self) -> Arc<Predicate> {
        self.intern(Predicate::True)
    }


    /// Returns the shared `field <op> value` predicate.
    #[inline]
    pub fn simple(&self, field: &str, operator: Operator, value: Value)
        -> Arc<Predicate>
    {
        let field = field.to_string();
        self.intern(Predicate::Simple(SimplePredicate { field, operator, value }))
    }


    /// Returns the shared `field in values` predicate.
    #[inline]
    pub fn category_set(&self, field: &str, values: Vec<Value>)
        -> Arc<Predicate>
    {
        let field = field.to_string();
        let operator = BooleanOperator::IsIn;
        self.intern(Predicate::CategorySet(SimpleSetPredicate { field, operator, values }))
    }


    /// Returns the number of distinct predicates seen so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }


    /// Returns `true` if no predicate was interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
