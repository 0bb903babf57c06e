//! In-memory collaborators for pipeline tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use docindex_core::traits::{DocumentIndex, DocumentSource, SearchService};
use docindex_core::{BatchResult, Document, IndexDefinition};
use docindex_pipeline::{Severity, StatusSink};

pub fn doc(uid: &str) -> Document {
    Document {
        uid: uid.into(),
        title: format!("Title {uid}"),
        section: "Recipes".into(),
        tags: vec!["baking".into()],
        content: format!("Content of {uid}"),
        url: format!("/{uid}"),
        ..Document::default()
    }
}

/// Yields fixed documents, or fails like an unreadable file when `docs` is `None`.
pub struct FakeSource {
    docs: Option<Vec<Document>>,
    pub loads: AtomicUsize,
}

impl FakeSource {
    pub fn with(docs: Vec<Document>) -> Self {
        Self { docs: Some(docs), loads: AtomicUsize::new(0) }
    }

    pub fn unreadable() -> Self {
        Self { docs: None, loads: AtomicUsize::new(0) }
    }
}

impl DocumentSource for FakeSource {
    fn describe(&self) -> String {
        "fake source".into()
    }

    fn load(&self) -> anyhow::Result<Vec<Document>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.docs.clone().ok_or_else(|| anyhow::anyhow!("file not found"))
    }
}

/// Search service whose index springs into existence once created.
#[derive(Default)]
pub struct FakeService {
    exists: AtomicBool,
    fail_exists: bool,
    fail_create: bool,
    pub exists_calls: AtomicUsize,
    pub created: Mutex<Vec<IndexDefinition>>,
}

impl FakeService {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn present() -> Self {
        Self { exists: AtomicBool::new(true), ..Self::default() }
    }

    pub fn unreachable() -> Self {
        Self { fail_exists: true, ..Self::default() }
    }

    pub fn rejecting_create() -> Self {
        Self { fail_create: true, ..Self::default() }
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst) + self.create_calls()
    }
}

#[async_trait]
impl SearchService for FakeService {
    async fn index_exists(&self, _name: &str) -> anyhow::Result<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_exists {
            anyhow::bail!("connection refused");
        }
        Ok(self.exists.load(Ordering::SeqCst))
    }

    async fn create_index(&self, definition: &IndexDefinition) -> anyhow::Result<()> {
        if self.fail_create {
            anyhow::bail!("quota exceeded");
        }
        self.created.lock().unwrap().push(definition.clone());
        self.exists.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Index connection that accepts every document except the keys listed in
/// `reject`, and answers in reverse submission order.
#[derive(Default)]
pub struct FakeIndex {
    reject: Vec<(String, u16, String)>,
    fail_transport: bool,
    pub batches: Mutex<Vec<Vec<Document>>>,
}

impl FakeIndex {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting(key: &str, status: u16, message: &str) -> Self {
        Self { reject: vec![(key.into(), status, message.into())], ..Self::default() }
    }

    pub fn rejecting_many(keys: &[&str]) -> Self {
        Self { reject: keys.iter().map(|k| ((*k).to_string(), 400, "invalid document".to_string())).collect(), ..Self::default() }
    }

    pub fn broken() -> Self {
        Self { fail_transport: true, ..Self::default() }
    }

    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn uploaded(&self) -> Vec<Document> {
        self.batches.lock().unwrap().iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl DocumentIndex for FakeIndex {
    async fn upsert_batch(&self, documents: &[Document]) -> anyhow::Result<Vec<BatchResult>> {
        if self.fail_transport {
            anyhow::bail!("401 Unauthorized");
        }
        self.batches.lock().unwrap().push(documents.to_vec());
        Ok(documents
            .iter()
            .rev()
            .map(|d| match self.reject.iter().find(|(k, _, _)| *k == d.uid) {
                Some((key, status, message)) => BatchResult {
                    key: key.clone(),
                    succeeded: false,
                    status_code: *status,
                    error_message: Some(message.clone()),
                },
                None => BatchResult { key: d.uid.clone(), succeeded: true, status_code: 201, error_message: None },
            })
            .collect())
    }
}

/// Collects every status line.
#[derive(Default)]
pub struct MemorySink {
    pub lines: Mutex<Vec<(Duration, Severity, String)>>,
}

impl MemorySink {
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().unwrap().iter().map(|(_, _, m)| m.clone()).collect()
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.messages().iter().filter(|m| m.starts_with(prefix)).count()
    }
}

impl StatusSink for MemorySink {
    fn emit(&self, elapsed: Duration, severity: Severity, message: &str) {
        self.lines.lock().unwrap().push((elapsed, severity, message.to_string()));
    }
}
