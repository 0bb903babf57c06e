//! JSON shapes of the Azure Search REST API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use docindex_core::index::{CorsOptions, IndexDefinition};
use docindex_core::schema::{Capability, DataType, FieldDescriptor};
use docindex_core::scoring::{Aggregation, ScoringProfile};
use docindex_core::{BatchResult, Document};

pub const UPLOAD_ACTION: &str = "upload";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPayload<'a> {
    pub name: &'a str,
    pub fields: Vec<FieldPayload<'a>>,
    pub scoring_profiles: Vec<ScoringProfilePayload<'a>>,
    pub default_scoring_profile: &'a str,
    pub cors_options: CorsPayload<'a>,
}

#[derive(Debug, Serialize)]
pub struct FieldPayload<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub data_type: &'static str,
    pub key: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub facetable: bool,
    pub retrievable: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfilePayload<'a> {
    pub name: &'a str,
    pub text: TextWeightsPayload<'a>,
    pub function_aggregation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TextWeightsPayload<'a> {
    pub weights: &'a BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPayload<'a> {
    pub allowed_origins: &'a [String],
    pub max_age_in_seconds: u64,
}

fn edm_type(data_type: DataType) -> &'static str {
    match data_type {
        DataType::String => "Edm.String",
        DataType::StringCollection => "Collection(Edm.String)",
        DataType::DateTimeOffset => "Edm.DateTimeOffset",
    }
}

fn aggregation(aggregation: Aggregation) -> &'static str {
    match aggregation {
        Aggregation::Sum => "sum",
    }
}

impl<'a> From<&'a FieldDescriptor> for FieldPayload<'a> {
    fn from(f: &'a FieldDescriptor) -> Self {
        Self {
            name: f.name,
            data_type: edm_type(f.data_type),
            key: f.key,
            searchable: f.has(Capability::Searchable),
            filterable: f.has(Capability::Filterable),
            sortable: f.has(Capability::Sortable),
            facetable: f.has(Capability::Facetable),
            retrievable: f.has(Capability::Retrievable),
        }
    }
}

impl<'a> From<&'a ScoringProfile> for ScoringProfilePayload<'a> {
    fn from(p: &'a ScoringProfile) -> Self {
        Self {
            name: &p.name,
            text: TextWeightsPayload { weights: &p.text_weights },
            function_aggregation: aggregation(p.aggregation),
        }
    }
}

impl<'a> From<&'a CorsOptions> for CorsPayload<'a> {
    fn from(c: &'a CorsOptions) -> Self {
        Self { allowed_origins: &c.allowed_origins, max_age_in_seconds: c.max_age_in_seconds }
    }
}

impl<'a> From<&'a IndexDefinition> for IndexPayload<'a> {
    fn from(d: &'a IndexDefinition) -> Self {
        Self {
            name: &d.name,
            fields: d.fields.iter().map(FieldPayload::from).collect(),
            scoring_profiles: d.scoring_profiles.iter().map(ScoringProfilePayload::from).collect(),
            default_scoring_profile: &d.default_scoring_profile,
            cors_options: CorsPayload::from(&d.cors),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexAction<'a> {
    #[serde(rename = "@search.action")]
    pub action: &'static str,
    #[serde(flatten)]
    pub document: &'a Document,
}

#[derive(Debug, Serialize)]
pub struct IndexBatchPayload<'a> {
    pub value: Vec<IndexAction<'a>>,
}

impl<'a> IndexBatchPayload<'a> {
    pub fn upload(documents: &'a [Document]) -> Self {
        Self { value: documents.iter().map(|document| IndexAction { action: UPLOAD_ACTION, document }).collect() }
    }
}

#[derive(Debug, Deserialize)]
pub struct IndexBatchResponse {
    pub value: Vec<IndexingResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingResult {
    pub key: String,
    pub status: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub status_code: u16,
}

impl From<IndexingResult> for BatchResult {
    fn from(r: IndexingResult) -> Self {
        Self { key: r.key, succeeded: r.status, status_code: r.status_code, error_message: r.error_message }
    }
}
