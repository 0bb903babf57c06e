//! Orchestrator: load, validate, provision, upload, report.

use docindex_core::source::{validate, ValidationPolicy};
use docindex_core::traits::{DocumentIndex, DocumentSource, SearchService};
use docindex_core::{BatchSummary, Document, Error, Result};

use crate::provision::{ensure_index, Provisioned};
use crate::status::Status;
use crate::upload::upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Loading,
    Validating,
    Provisioning,
    Uploading,
    Reporting,
    Success,
    Failed,
}

/// What a run did and how it ended.
#[derive(Debug, Default)]
pub struct RunReport {
    pub state: Stage,
    /// Stage that was active when the run failed.
    pub failed_at: Option<Stage>,
    pub error: Option<Error>,
    pub loaded: usize,
    pub rejected: usize,
    pub provisioned: Option<Provisioned>,
    pub summary: Option<BatchSummary>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.state == Stage::Success
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

pub struct Orchestrator<Src, Svc, Idx>
where
    Src: DocumentSource,
    Svc: SearchService,
    Idx: DocumentIndex,
{
    source: Src,
    service: Svc,
    index: Idx,
    index_name: String,
    policy: ValidationPolicy,
}

impl<Src, Svc, Idx> Orchestrator<Src, Svc, Idx>
where
    Src: DocumentSource,
    Svc: SearchService,
    Idx: DocumentIndex,
{
    pub fn new(source: Src, service: Svc, index: Idx, index_name: impl Into<String>) -> Self {
        Self { source, service, index, index_name: index_name.into(), policy: ValidationPolicy::default() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &Src {
        &self.source
    }

    pub fn service(&self) -> &Svc {
        &self.service
    }

    pub fn index(&self) -> &Idx {
        &self.index
    }

    /// Run the pipeline once. Fatal errors are reported on `status` and
    /// returned inside the report rather than propagated.
    pub async fn run(&self, status: &Status<'_>) -> RunReport {
        let mut report = RunReport::default();
        match self.drive(status, &mut report).await {
            Ok(()) => {
                report.state = Stage::Success;
                status.info("Indexing completed successfully");
            }
            Err(err) => {
                report.failed_at = Some(report.state);
                report.state = Stage::Failed;
                status.fatal(&err);
                report.error = Some(err);
            }
        }
        report
    }

    async fn drive(&self, status: &Status<'_>, report: &mut RunReport) -> Result<()> {
        report.state = Stage::Loading;
        let origin = self.source.describe();
        status.info(format!("Reading {origin}..."));
        let raw = self.source.load().map_err(|e| Error::SourceUnavailable(format!("{e:#}")))?;
        if raw.is_empty() {
            return Err(Error::SourceUnavailable(format!("no documents found in {origin}")));
        }
        report.loaded = raw.len();
        status.info(format!("Read {} documents", raw.len()));

        report.state = Stage::Validating;
        let validated = validate(raw, &self.policy);
        report.rejected = validated.rejected.len();
        for rejection in &validated.rejected {
            status.warn(format!("Skipping document '{}': {}", rejection.uid, rejection.reason));
        }
        if validated.accepted.is_empty() {
            return Err(Error::ValidationExhausted { rejected: validated.rejected.len() });
        }
        status.info(format!("Found {} documents", validated.accepted.len()));

        report.state = Stage::Provisioning;
        let provisioned = ensure_index::<Document, _>(&self.service, &self.index_name, status).await?;
        report.provisioned = Some(provisioned);

        report.state = Stage::Uploading;
        status.info(format!("Sending batch of {} documents to {}...", validated.accepted.len(), self.index_name));
        let summary = upload(&self.index, &validated.accepted).await?;
        status.info("Batch completed");

        report.state = Stage::Reporting;
        let outcome = report_results(&summary, status);
        report.summary = Some(summary);
        outcome
    }
}

/// Emit the success count and one line per failed document.
fn report_results(summary: &BatchSummary, status: &Status<'_>) -> Result<()> {
    status.info(format!("Success: {}", summary.succeeded()));
    for failure in summary.failures() {
        status.error(format!(
            "Failure for key {} (status {}): {}",
            failure.key,
            failure.status_code,
            failure.error_message.as_deref().unwrap_or("no error message")
        ));
    }
    if summary.is_clean() {
        Ok(())
    } else {
        Err(Error::DocumentsRejected { failed: summary.failed(), total: summary.results.len() })
    }
}
