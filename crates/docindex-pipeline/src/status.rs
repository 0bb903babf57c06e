//! Human-readable progress reporting stamped with elapsed run time.

use std::time::{Duration, Instant};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Receives status lines. Purely observational: nothing in the pipeline
/// depends on what a sink does with them.
pub trait StatusSink: Send + Sync {
    fn emit(&self, elapsed: Duration, severity: Severity, message: &str);
}

/// Forwards status lines to `tracing` with an `elapsed_ms` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn emit(&self, elapsed: Duration, severity: Severity, message: &str) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match severity {
            Severity::Info => info!(elapsed_ms, "{message}"),
            Severity::Warn => warn!(elapsed_ms, "{message}"),
            Severity::Error => error!(elapsed_ms, "{message}"),
        }
    }
}

/// Monotonic start time of one run.
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    start: Instant,
}

impl RunClock {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// The clock and sink a run reports through.
#[derive(Clone, Copy)]
pub struct Status<'a> {
    clock: RunClock,
    sink: &'a dyn StatusSink,
}

impl<'a> Status<'a> {
    pub fn new(clock: RunClock, sink: &'a dyn StatusSink) -> Self {
        Self { clock, sink }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.sink.emit(self.clock.elapsed(), Severity::Info, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.sink.emit(self.clock.elapsed(), Severity::Warn, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.sink.emit(self.clock.elapsed(), Severity::Error, message.as_ref());
    }

    /// Emit an error followed by each of its causes on its own line.
    pub fn fatal(&self, err: &(dyn std::error::Error + 'static)) {
        self.error(format!("Run failed: {err}"));
        let mut cause = err.source();
        while let Some(inner) = cause {
            self.error(format!("Caused by: {inner}"));
            cause = inner.source();
        }
    }
}
