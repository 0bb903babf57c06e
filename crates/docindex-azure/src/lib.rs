//! docindex-azure
//!
//! Azure Search REST implementation of the service and index-document
//! connections used by the pipeline. See `client` for the calls and `wire`
//! for the JSON shapes.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{Connection, SearchIndexClient, SearchServiceClient};
pub use error::AzureError;
