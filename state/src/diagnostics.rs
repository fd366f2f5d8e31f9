//! Diagnostic sinks

use hashparam_core::{DiagnosticSink, HashParamError};
use parking_lot::Mutex;
use tracing::{error, trace, warn};

/// Default sink: forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn url_too_long(&self, length: usize, limit: usize) {
        warn!(length, limit, "URL is {} characters long, exceeding the {} character limit", length, limit);
    }

    fn history_write_failed(&self, error: &HashParamError) {
        error!("History replacement failed, assigning fragment directly: {}", error);
    }

    fn segment_ignored(&self, segment: &str) {
        trace!(segment, "Ignoring non-parameter segment");
    }
}

/// A diagnostic captured by [`RecordingDiagnostics`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UrlTooLong { length: usize, limit: usize },
    HistoryWriteFailed(String),
    SegmentIgnored(String),
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn url_too_long(&self, length: usize, limit: usize) {
        self.events.lock().push(Diagnostic::UrlTooLong { length, limit });
    }

    fn history_write_failed(&self, error: &HashParamError) {
        self.events
            .lock()
            .push(Diagnostic::HistoryWriteFailed(error.to_string()));
    }

    fn segment_ignored(&self, segment: &str) {
        self.events
            .lock()
            .push(Diagnostic::SegmentIgnored(segment.to_string()));
    }
}
