//! Batch Uploader.

use docindex_core::traits::DocumentIndex;
use docindex_core::{BatchSummary, Document, Error, Result};

/// Submit `documents` as a single upsert batch.
///
/// Per-document rejections come back inside the summary; only a failure of
/// the call as a whole is an error. There is no rollback across documents.
pub async fn upload<C>(index: &C, documents: &[Document]) -> Result<BatchSummary>
where
    C: DocumentIndex + ?Sized,
{
    if documents.is_empty() {
        return Err(Error::EmptyBatch);
    }
    let results = index.upsert_batch(documents).await.map_err(Error::transport)?;
    Ok(BatchSummary::new(results))
}
