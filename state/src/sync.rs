//! Location synchronization
//!
//! Keeps the parameter region of the fragment apart from the application's
//! path segments and commits changes through history replacement, falling
//! back to a plain fragment assignment when replacement fails.

use hashparam_codec::{compose_fragment, decode_with, encode_optional, fragment_path, strip_marker};
use hashparam_core::{DiagnosticSink, LocationProvider, ParameterMap, SyncConfig};
use std::sync::Arc;
use tracing::debug;

use crate::diagnostics::TracingDiagnostics;

/// Reads and writes the parameter region of a location's fragment
pub struct LocationSynchronizer<L: LocationProvider> {
    location: L,
    config: SyncConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<L: LocationProvider> LocationSynchronizer<L> {
    pub fn new(location: L) -> Self {
        Self::with_config(location, SyncConfig::default())
    }

    pub fn with_config(location: L, config: SyncConfig) -> Self {
        Self {
            location,
            config,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replace the diagnostic sink
    pub fn diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Current fragment without its leading `#`
    pub fn raw_fragment(&self) -> String {
        strip_marker(&self.location.fragment()).to_string()
    }

    /// Current path segments joined with `/`
    pub fn fragment_path(&self) -> String {
        fragment_path(&self.location.fragment()).join("/")
    }

    /// Decode the parameters of the current fragment
    pub fn read(&self) -> ParameterMap {
        let raw = self.raw_fragment();
        decode_with(&raw, |segment| {
            if !segment.is_empty() {
                self.diagnostics.segment_ignored(segment);
            }
        })
    }

    /// Replace the whole parameter region with `params`, keeping the path.
    ///
    /// `None` commits zero parameters. Returns the committed fragment
    /// (without `#`).
    pub fn commit(&self, params: Option<&ParameterMap>) -> String {
        let encoded = encode_optional(params);

        // Re-split the live fragment so path changes made since the last read survive
        let current = self.location.fragment();
        let path = fragment_path(&current);
        let fragment = compose_fragment(&path, &encoded);

        let url = self.build_url(&fragment);
        let length = url.chars().count();
        if length > self.config.max_url_length {
            self.diagnostics.url_too_long(length, self.config.max_url_length);
        }

        let state = params.cloned().unwrap_or_default();
        match self.location.replace_history(&state, &url) {
            Ok(()) => debug!("Replaced history entry with {}", url),
            Err(err) => {
                self.diagnostics.history_write_failed(&err);
                self.location.set_fragment(&fragment);
                debug!("Assigned fragment #{}", fragment);
            }
        }

        fragment
    }

    /// Absolute URL of the current location with `fragment` in place
    pub fn build_url(&self, fragment: &str) -> String {
        let port = self.location.port();
        let host = if port.is_empty() {
            self.location.hostname()
        } else {
            format!("{}:{}", self.location.hostname(), port)
        };
        format!(
            "{}//{}{}{}#{}",
            self.location.protocol(),
            host,
            self.location.pathname(),
            self.location.search(),
            fragment
        )
    }
}
