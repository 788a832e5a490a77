//! Defines the features a tree can split on.
//! The variant decides which predicates a split produces.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use super::value::{Value, DataType};


/// Enumeration of the semantic feature types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    /// A numeric feature compared against a threshold.
    Continuous(ContinuousFeature),


    /// A `0/1` indicator of `field == value`.
    Binary(BinaryFeature),


    /// A categorical feature whose categories carry a numeric encoding,
    /// so that a numeric threshold splits the category set.
    Threshold(ThresholdFeature),
}


impl Feature {
    /// Returns the name of the field the feature refers to.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Feature::Continuous(f) => &f.name,
            Feature::Binary(f) => &f.name,
            Feature::Threshold(f) => &f.name,
        }
    }


    /// Returns the continuous view of this feature.
    #[inline]
    pub fn to_continuous(&self, data_type: DataType) -> ContinuousFeature {
        ContinuousFeature::new(self.name(), data_type)
    }
}


/// A numeric feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousFeature {
    /// Field name.
    pub name: String,
    /// Data type the estimator reads the field as.
    pub data_type: DataType,
}


impl ContinuousFeature {
    /// Construct a new `ContinuousFeature`.
    #[inline]
    pub fn new<S: Into<String>>(name: S, data_type: DataType) -> Self {
        Self { name: name.into(), data_type }
    }
}


impl From<ContinuousFeature> for Feature {
    #[inline]
    fn from(feature: ContinuousFeature) -> Self {
        Feature::Continuous(feature)
    }
}


/// A one-hot indicator feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryFeature {
    /// Field name.
    pub name: String,
    /// The value for which the indicator is `1`.
    pub value: Value,
}


impl BinaryFeature {
    /// Construct a new `BinaryFeature`.
    #[inline]
    pub fn new<S, V>(name: S, value: V) -> Self
        where S: Into<String>,
              V: Into<Value>,
    {
        Self { name: name.into(), value: value.into() }
    }
}


impl From<BinaryFeature> for Feature {
    #[inline]
    fn from(feature: BinaryFeature) -> Self {
        Feature::Binary(feature)
    }
}


/// A category of a `ThresholdFeature` and its numeric encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category value.
    pub value: Value,
    /// The number the estimator saw for this category.
    pub number: f64,
}


/// A categorical feature with a numeric encoding per category.
/// The categories form the universe of reachable values at the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdFeature {
    /// Field name.
    pub name: String,
    /// Ordered categories.
    pub categories: Vec<Category>,
    /// The sentinel that stands for a missing value, if any.
    pub missing_value: Option<Value>,
}


impl ThresholdFeature {
    /// Construct a new `ThresholdFeature` from explicit
    /// `(value, number)` pairs.
    pub fn new<S, I, V>(name: S, categories: I, missing_value: Option<Value>)
        -> Self
        where S: Into<String>,
              I: IntoIterator<Item = (V, f64)>,
              V: Into<Value>,
    {
        let categories = categories.into_iter()
            .map(|(value, number)| Category { value: value.into(), number })
            .collect();
        Self { name: name.into(), categories, missing_value }
    }


    /// Construct an ordinal-encoded `ThresholdFeature`:
    /// the `i`-th value is encoded as `i`.
    pub fn ordinal<S, I, V>(name: S, values: I, missing_value: Option<Value>)
        -> Self
        where S: Into<String>,
              I: IntoIterator<Item = V>,
              V: Into<Value>,
    {
        let categories = values.into_iter()
            .enumerate()
            .map(|(i, v)| (v, i as f64));
        Self::new(name, categories, missing_value)
    }


    /// Returns the number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }


    /// Returns `true` if the feature has no category.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }


    /// Returns `true` if the category at `index` is the missing sentinel
    /// or has no numeric encoding.
    #[inline]
    pub fn is_missing(&self, index: usize) -> bool {
        let category = &self.categories[index];
        category.number.is_nan()
            || category.value.is_nan()
            || self.missing_value.as_ref() == Some(&category.value)
    }


    /// Returns the full category universe as a bit set.
    #[inline]
    pub fn universe(&self) -> FixedBitSet {
        let mut set = FixedBitSet::with_capacity(self.len());
        set.insert_range(..);
        set
    }


    /// Returns the values at the positions set in `set`.
    #[inline]
    pub fn values_of(&self, set: &FixedBitSet) -> Vec<Value> {
        set.ones()
            .map(|i| self.categories[i].value.clone())
            .collect()
    }
}


impl From<ThresholdFeature> for Feature {
    #[inline]
    fn from(feature: ThresholdFeature) -> Self {
        Feature::Threshold(feature)
    }
}
