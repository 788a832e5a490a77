//! Defines the target label of a model.
use serde::{Serialize, Deserialize};

use super::value::{Value, DataType};


/// Enumeration of the label kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Label {
    /// Classification target with ordered class values.
    Categorical(CategoricalLabel),


    /// Regression target.
    Continuous(ContinuousLabel),
}


/// Classification target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalLabel {
    /// Target field name. `None` for anonymous labels.
    pub name: Option<String>,
    /// Data type of the class values.
    pub data_type: DataType,
    /// Class values in the order the estimator stores them.
    pub values: Vec<Value>,
}


impl CategoricalLabel {
    /// Construct a new named `CategoricalLabel`.
    pub fn new<S, I, V>(name: S, data_type: DataType, values: I) -> Self
        where S: Into<String>,
              I: IntoIterator<Item = V>,
              V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self { name: Some(name.into()), data_type, values }
    }


    /// Returns the number of classes.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }
}


/// Regression target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousLabel {
    /// Target field name. `None` for anonymous labels.
    pub name: Option<String>,
    /// Data type of the target.
    pub data_type: DataType,
}


impl ContinuousLabel {
    /// Construct a new named `ContinuousLabel`.
    #[inline]
    pub fn new<S: Into<String>>(name: S, data_type: DataType) -> Self {
        Self { name: Some(name.into()), data_type }
    }
}


impl Label {
    /// Returns the target field name, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Label::Categorical(l) => l.name.as_deref(),
            Label::Continuous(l) => l.name.as_deref(),
        }
    }


    /// Returns the data type of the target.
    #[inline]
    pub fn data_type(&self) -> DataType {
        match self {
            Label::Categorical(l) => l.data_type,
            Label::Continuous(l) => l.data_type,
        }
    }


    /// Returns a copy of this label with its name removed.
    pub fn to_anonymous(&self) -> Self {
        match self {
            Label::Categorical(l) => Label::Categorical(CategoricalLabel {
                name: None,
                ..l.clone()
            }),
            Label::Continuous(l) => Label::Continuous(ContinuousLabel {
                name: None,
                ..l.clone()
            }),
        }
    }
}


impl From<CategoricalLabel> for Label {
    #[inline]
    fn from(label: CategoricalLabel) -> Self {
        Label::Categorical(label)
    }
}


impl From<ContinuousLabel> for Label {
    #[inline]
    fn from(label: ContinuousLabel) -> Self {
        Label::Continuous(label)
    }
}
