//! Domain types shared by the source, the pipeline and the remote client.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// One indexable record as read from the document source.
///
/// - `uid`: stable identifier, matched on upsert
/// - `title`/`section`/`tags`/`content`: weighted full-text fields
/// - `date`: publication timestamp, filterable but not weighted
/// - `url`: returned with hits, never searched
/// - `rendered`: rendered body carried by some sources; read but never uploaded
///
/// Missing keys and explicit `null`s deserialize to empty values so
/// eligibility is decided by validation rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub section: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "lenient_date")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(skip_serializing)]
    pub rendered: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 timestamps keep their offset; timestamps without one are read as UTC.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(date));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc).fixed_offset()))
        .map_err(|e| de::Error::custom(format!("invalid date '{raw}': {e}")))
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Outcome of one document inside a batch upload.
///
/// `status_code` follows HTTP semantics (200/201 on success). Results come
/// back in the order chosen by the service, not submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub key: String,
    pub succeeded: bool,
    pub status_code: u16,
    pub error_message: Option<String>,
}

/// All per-document results of a single upload call.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub results: Vec<BatchResult>,
}

impl BatchSummary {
    pub fn new(results: Vec<BatchResult>) -> Self {
        Self { results }
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }
}
