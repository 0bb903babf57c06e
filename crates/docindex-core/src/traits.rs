use async_trait::async_trait;

use crate::index::IndexDefinition;
use crate::types::{BatchResult, Document};

pub trait DocumentSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> anyhow::Result<Vec<Document>>;
}

#[async_trait]
pub trait SearchService: Send + Sync {
    async fn index_exists(&self, name: &str) -> anyhow::Result<bool>;
    async fn create_index(&self, definition: &IndexDefinition) -> anyhow::Result<()>;
}

#[async_trait]
pub trait DocumentIndex: Send + Sync {
    /// Insert-or-replace every document by key. Per-document rejections are
    /// returned as results; only whole-call failures are errors.
    async fn upsert_batch(&self, documents: &[Document]) -> anyhow::Result<Vec<BatchResult>>;
}
