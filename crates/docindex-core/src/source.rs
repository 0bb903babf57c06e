//! Document loading and the upload eligibility filter.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::traits::DocumentSource;
use crate::types::Document;

/// Reads a JSON array of documents from a single file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Document>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        info!(chars = json.len(), path = %self.path.display(), "read document file");
        // A literal `null` is treated like an empty array.
        let docs: Option<Vec<Document>> = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(docs.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationPolicy {
    /// Also require the rendered body to be present.
    #[serde(default)]
    pub require_rendered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub uid: String,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Validated {
    pub accepted: Vec<Document>,
    pub rejected: Vec<Rejection>,
}

/// Why `doc` may not be uploaded, or `None` if it is eligible.
pub fn rejection_reason(doc: &Document, policy: &ValidationPolicy) -> Option<&'static str> {
    if doc.uid.is_empty() {
        Some("missing uid")
    } else if doc.title.is_empty() {
        Some("missing title")
    } else if doc.content.is_empty() {
        Some("missing content")
    } else if policy.require_rendered && doc.rendered.as_deref().map_or(true, str::is_empty) {
        Some("missing rendered body")
    } else {
        None
    }
}

/// Split documents into those eligible for upload and those rejected.
/// Accepted documents are passed through unmodified, in input order.
pub fn validate(documents: Vec<Document>, policy: &ValidationPolicy) -> Validated {
    let mut out = Validated::default();
    for doc in documents {
        match rejection_reason(&doc, policy) {
            None => out.accepted.push(doc),
            Some(reason) => {
                debug!(uid = %doc.uid, reason, "document rejected");
                out.rejected.push(Rejection { uid: doc.uid, reason });
            }
        }
    }
    out
}
