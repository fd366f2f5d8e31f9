//! Core traits defining hashparam interfaces
//!
//! These traits describe the navigable location and the diagnostic channel
//! that the synchronizer and store are written against.

use crate::error::HashParamError;
use crate::types::ParameterMap;
use std::sync::Arc;

/// Result type for hashparam operations
pub type HashParamResult<T> = Result<T, HashParamError>;

/// Navigable location with a history stack.
///
/// Field formats follow the browser `Location` object: `protocol` carries its
/// trailing colon, `search` its leading `?`, `fragment` its leading `#`, and
/// absent parts are empty strings.
pub trait LocationProvider {
    /// Current fragment, including the leading `#` when present
    fn fragment(&self) -> String;

    /// Assign the fragment directly. Creates a new history entry.
    fn set_fragment(&self, fragment: &str);

    fn protocol(&self) -> String;

    fn hostname(&self) -> String;

    fn port(&self) -> String;

    fn pathname(&self) -> String;

    fn search(&self) -> String;

    /// Replace the current history entry in place, attaching `state` to it
    fn replace_history(&self, state: &ParameterMap, url: &str) -> HashParamResult<()>;
}

impl<T: LocationProvider + ?Sized> LocationProvider for Arc<T> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment)
    }

    fn protocol(&self) -> String {
        (**self).protocol()
    }

    fn hostname(&self) -> String {
        (**self).hostname()
    }

    fn port(&self) -> String {
        (**self).port()
    }

    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn search(&self) -> String {
        (**self).search()
    }

    fn replace_history(&self, state: &ParameterMap, url: &str) -> HashParamResult<()> {
        (**self).replace_history(state, url)
    }
}

/// Best-effort sink for non-fatal conditions
pub trait DiagnosticSink: Send + Sync {
    /// The committed URL is longer than the configured limit
    fn url_too_long(&self, length: usize, limit: usize);

    /// History replacement failed and the fragment was assigned directly
    fn history_write_failed(&self, error: &HashParamError);

    /// A fragment segment was not a `key:value` pair and was skipped
    fn segment_ignored(&self, _segment: &str) {}
}
