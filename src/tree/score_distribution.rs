//! Defines the per-class record counts of a classification leaf
//! and the cache that lets identical leaves share them.
use serde::{Serialize, Deserialize};

use crate::common::utils;
use crate::schema::{Value, ValueKey};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};


/// The record count of one class at a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// Class value.
    pub value: Value,
    /// Number of training records of this class.
    #[serde(serialize_with = "utils::serialize_narrow")]
    pub record_count: f64,
}


/// Interns score distributions for one conversion run.
/// The key is the class list together with the count vector,
/// so leaves with the same counts share one distribution.
#[derive(Debug, Default)]
pub struct ScoreDistributionManager {
    cache: Mutex<HashMap<(Vec<ValueKey>, Vec<u64>), Arc<[ScoreDistribution]>>>,
}


impl ScoreDistributionManager {
    /// Construct an empty `ScoreDistributionManager`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Returns the shared distribution for `values` and `record_counts`.
    /// Both slices must have the same length.
    pub fn create(&self, values: &[Value], record_counts: &[f64])
        -> Arc<[ScoreDistribution]>
    {
        debug_assert_eq!(values.len(), record_counts.len());

        let key = (
            values.iter().map(ValueKey::from).collect::<Vec<_>>(),
            record_counts.iter().map(|c| c.to_bits()).collect::<Vec<_>>(),
        );

        let mut cache = self.cache.lock()
            .unwrap_or_else(PoisonError::into_inner);
        cache.entry(key)
            .or_insert_with(|| {
                values.iter()
                    .zip(record_counts)
                    .map(|(value, &record_count)| {
                        ScoreDistribution { value: value.clone(), record_count }
                    })
                    .collect()
            })
            .clone()
    }


    /// Returns the shared class-wise sum of the given distributions.
    /// All distributions must list the same classes in the same order.
    pub fn merge<'a, I>(&self, distributions: I) -> Option<Arc<[ScoreDistribution]>>
        where I: IntoIterator<Item = &'a Arc<[ScoreDistribution]>>,
    {
        let mut iter = distributions.into_iter();
        let first = iter.next()?;

        let values = first.iter()
            .map(|sd| sd.value.clone())
            .collect::<Vec<_>>();
        let mut counts = first.iter()
            .map(|sd| sd.record_count)
            .collect::<Vec<_>>();

        for dist in iter {
            counts.iter_mut()
                .zip(dist.iter())
                .for_each(|(c, sd)| *c += sd.record_count);
        }

        Some(self.create(&values, &counts))
    }


    /// Returns the number of distinct distributions seen so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }


    /// Returns `true` if no distribution was interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
