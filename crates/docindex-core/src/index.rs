//! Index Definition assembled from the field table and its scoring profile.

use crate::error::{Error, Result};
use crate::schema::{FieldDescriptor, IndexedDocument};
use crate::scoring::{build_scoring_profile, ScoringProfile};

pub const CORS_ALLOW_ALL: &str = "*";
pub const CORS_MAX_AGE_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOptions {
    pub allowed_origins: Vec<String>,
    pub max_age_in_seconds: u64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self { allowed_origins: vec![CORS_ALLOW_ALL.to_string()], max_age_in_seconds: CORS_MAX_AGE_SECS }
    }
}

/// Everything needed to create an index remotely. Created at most once per
/// index name; an index that already exists is never compared against it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDefinition {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub scoring_profiles: Vec<ScoringProfile>,
    pub default_scoring_profile: String,
    pub cors: CorsOptions,
}

pub fn scoring_profile_name(index_name: &str) -> String {
    format!("{index_name}-scoring")
}

impl IndexDefinition {
    pub fn for_document<D: IndexedDocument>(index_name: &str) -> Result<Self> {
        let index_name = index_name.trim();
        if index_name.is_empty() {
            return Err(Error::InvalidConfig("index name must not be empty".into()));
        }
        let fields = D::fields();
        let profile = build_scoring_profile(fields, &scoring_profile_name(index_name))?;
        Ok(Self {
            name: index_name.to_string(),
            fields: fields.to_vec(),
            default_scoring_profile: profile.name.clone(),
            scoring_profiles: vec![profile],
            cors: CorsOptions::default(),
        })
    }
}
