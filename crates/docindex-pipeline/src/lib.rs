//! docindex-pipeline
//!
//! Sequences one indexing run over the collaborator traits from
//! `docindex-core`: the document source, the search service and the index
//! document connection. Every remote call is awaited before the next step.

pub mod orchestrator;
pub mod provision;
pub mod status;
pub mod upload;

pub use orchestrator::{Orchestrator, RunReport, Stage};
pub use provision::{ensure_index, Provisioned};
pub use status::{RunClock, Severity, Status, StatusSink, TracingSink};
pub use upload::upload;
