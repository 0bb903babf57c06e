//! Scoring Profile Builder.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schema::{weighted_fields, FieldDescriptor};

/// How per-field contributions are combined into a document score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
}

/// A named set of text weights, built once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    pub name: String,
    pub aggregation: Aggregation,
    /// Lower-cased field name to weight.
    pub text_weights: BTreeMap<String, f64>,
}

/// Build a scoring profile from the weighted descriptors in `fields`.
///
/// Field names are lower-cased to match the schema's naming. An empty
/// weight mapping is allowed but logged, since ranking then falls back to
/// the service's default similarity.
pub fn build_scoring_profile(fields: &[FieldDescriptor], name: &str) -> Result<ScoringProfile> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidConfig("scoring profile name must not be empty".into()));
    }
    debug!(profile = name, "building scoring profile");

    let text_weights: BTreeMap<String, f64> = weighted_fields(fields)
        .into_iter()
        .filter_map(|f| f.weight.map(|w| (f.name.to_lowercase(), w)))
        .collect();

    if text_weights.is_empty() {
        warn!(profile = name, "no weighted fields; scoring profile has no text weights");
    } else {
        debug!(profile = name, count = text_weights.len(), weights = ?text_weights, "found text weights");
    }

    Ok(ScoringProfile { name: name.to_string(), aggregation: Aggregation::Sum, text_weights })
}
