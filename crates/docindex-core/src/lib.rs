//! docindex-core
//!
//! Domain model for the search index uploader: documents and batch results,
//! the static field table, the scoring profile and index definition derived
//! from it, the document source with its eligibility filter, configuration,
//! and the traits the pipeline uses to reach the remote service.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod index;
pub mod schema;
pub mod scoring;
pub mod source;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use index::IndexDefinition;
pub use schema::{Capability, DataType, FieldDescriptor, IndexedDocument};
pub use scoring::{build_scoring_profile, ScoringProfile};
pub use types::{BatchResult, BatchSummary, Document};
