//! Index Provisioner: create the index if it is absent, never touch it otherwise.

use docindex_core::traits::SearchService;
use docindex_core::{Error, IndexDefinition, IndexedDocument, Result};

use crate::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

/// Make sure `index_name` exists, creating it from `D`'s field table if not.
///
/// An existing index is trusted as-is: its schema is not compared with the
/// current field table. Failures of either remote call are fatal and are
/// not retried.
pub async fn ensure_index<D, S>(service: &S, index_name: &str, status: &Status<'_>) -> Result<Provisioned>
where
    D: IndexedDocument,
    S: SearchService + ?Sized,
{
    status.info(format!("Checking if index {index_name} exists..."));
    let exists = service
        .index_exists(index_name)
        .await
        .map_err(|e| Error::provisioning(index_name, e))?;
    if exists {
        status.info(format!("Index {index_name} existed"));
        return Ok(Provisioned::AlreadyExists);
    }

    status.info(format!("Index {index_name} did not exist. Building index..."));
    let definition = IndexDefinition::for_document::<D>(index_name)?;
    let weights = definition.scoring_profiles.iter().map(|p| p.text_weights.len()).sum::<usize>();
    status.info(format!(
        "Built scoring profile {} with {weights} text weights",
        definition.default_scoring_profile
    ));
    if weights == 0 {
        status.warn("Scoring profile has no text weights; ranking uses service defaults");
    }

    status.info("Index built, creating on the search service...");
    service
        .create_index(&definition)
        .await
        .map_err(|e| Error::provisioning(index_name, e))?;
    status.info(format!("Index {index_name} created"));
    Ok(Provisioned::Created)
}
