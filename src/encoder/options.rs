//! Defines `TreeOptions`, the conversion options of a tree estimator,
//! and their resolution into the passes the pipeline runs.
use serde::{Serialize, Deserialize};

use crate::error::{ConversionError, Result};

use std::collections::BTreeMap;


/// Extension name to (node id to value).
pub type NodeExtensions = BTreeMap<String, BTreeMap<usize, serde_json::Value>>;


/// Conversion options.
/// Unset options take mode-dependent defaults, see `resolve`.
/// 
/// ```
/// use minipmml::TreeOptions;
/// 
/// let options = TreeOptions::from_json(r#"{"winner_id": true}"#).unwrap();
/// let resolved = options.resolve().unwrap();
/// assert!(resolved.node_id);
/// assert!(!resolved.prune);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeOptions {
    /// Register a "predicted node id" output.
    pub winner_id: Option<bool>,
    /// Keep node ids.
    pub node_id: Option<bool>,
    /// Keep branch scores.
    pub node_score: Option<bool>,
    /// Attach extensions to nodes by id.
    pub node_extensions: Option<NodeExtensions>,
    /// Remove unreachable children and turn complementary splits
    /// into first-match form.
    pub compact: Option<bool>,
    /// Splice nested else-branches into their parents.
    pub flat: Option<bool>,
    /// Collapse branches whose leaves all agree.
    pub prune: Option<bool>,
    /// Treat categorical-threshold features as continuous.
    pub numeric: Option<bool>,
}


/// The options after defaults and the conflict policy were applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    /// Register a "predicted node id" output.
    pub winner_id: bool,
    /// Keep node ids. `false` strips every id.
    pub node_id: bool,
    /// `Some(false)` strips branch scores; `None` leaves them alone.
    pub node_score: Option<bool>,
    /// Extensions to attach.
    pub node_extensions: Option<NodeExtensions>,
    /// Run the compactor.
    pub compact: bool,
    /// Run the flattener.
    pub flat: bool,
    /// Run the pruner.
    pub prune: bool,
}


impl TreeOptions {
    /// Construct a new `TreeOptions` with every option unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Parse options from a JSON object.
    /// Unknown keys are rejected.
    #[inline]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }


    /// Set `winner_id`.
    #[inline]
    pub fn winner_id(mut self, flag: bool) -> Self {
        self.winner_id = Some(flag);
        self
    }


    /// Set `node_id`.
    #[inline]
    pub fn node_id(mut self, flag: bool) -> Self {
        self.node_id = Some(flag);
        self
    }


    /// Set `node_score`.
    #[inline]
    pub fn node_score(mut self, flag: bool) -> Self {
        self.node_score = Some(flag);
        self
    }


    /// Add an extension map: node id to value.
    #[inline]
    pub fn node_extension<S>(
        mut self,
        name: S,
        values: BTreeMap<usize, serde_json::Value>,
    ) -> Self
        where S: Into<String>,
    {
        self.node_extensions
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), values);
        self
    }


    /// Set `compact`.
    #[inline]
    pub fn compact(mut self, flag: bool) -> Self {
        self.compact = Some(flag);
        self
    }


    /// Set `flat`.
    #[inline]
    pub fn flat(mut self, flag: bool) -> Self {
        self.flat = Some(flag);
        self
    }


    /// Set `prune`.
    #[inline]
    pub fn prune(mut self, flag: bool) -> Self {
        self.prune = Some(flag);
        self
    }


    /// Set `numeric`.
    #[inline]
    pub fn numeric(mut self, flag: bool) -> Self {
        self.numeric = Some(flag);
        self
    }


    /// Returns `true` if categorical-threshold features are read
    /// as continuous. Defaults to `true`.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.numeric.unwrap_or(true)
    }


    /// Resolve the options.
    /// 
    /// "Fixed" mode is active when extensions are given,
    /// or node ids or node scores are requested.
    /// Fixed mode turns `compact`, `flat` and `prune` off by default,
    /// and enabling any of them explicitly is a `ConflictingOptions` error.
    /// Outside fixed mode `compact` and `prune` are on by default,
    /// and `node_id` / `node_score` follow `winner_id`.
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let winner_id = self.winner_id.unwrap_or(false);

        let mut node_extensions = self.node_extensions.clone();
        let mut node_id = self.node_id.unwrap_or(winner_id);
        let mut node_score = self.node_score
            .or(if winner_id { Some(true) } else { None });


        let fixed = node_extensions.is_some()
            || node_id
            || node_score == Some(true);


        let compact = self.compact.unwrap_or(!fixed);
        let flat = self.flat.unwrap_or(false);
        let prune = self.prune.unwrap_or(!fixed);


        if compact || flat || prune {
            if fixed {
                return Err(self.conflict(node_id, node_score, compact, flat, prune));
            }

            // Activate defaults
            node_extensions = None;
            node_id = winner_id;
            node_score = if winner_id { Some(true) } else { None };
        }


        Ok(ResolvedOptions {
            winner_id,
            node_id,
            node_score,
            node_extensions,
            compact,
            flat,
            prune,
        })
    }


    fn conflict(
        &self,
        node_id: bool,
        node_score: Option<bool>,
        compact: bool,
        flat: bool,
        prune: bool,
    ) -> ConversionError
    {
        let fixed = [
            ("node_extensions", self.node_extensions.is_some()),
            ("node_id", node_id),
            ("node_score", node_score == Some(true)),
        ];
        let simplifying = [
            ("compact", compact),
            ("flat", flat),
            ("prune", prune),
        ];

        let names = |flags: &[(&str, bool)]| {
            flags.iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        ConversionError::ConflictingOptions {
            fixed: names(&fixed[..]),
            simplifying: names(&simplifying[..]),
        }
    }
}
