//! In-memory location for tests and command-line use

use hashparam_core::{HashParamError, HashParamResult, LocationProvider, ParameterMap};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Components of a navigable URL, in browser `Location` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    pub protocol: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub search: String,
    pub fragment: String,
}

impl LocationParts {
    pub fn from_url(url: &Url) -> Self {
        Self {
            protocol: format!("{}:", url.scheme()),
            hostname: url.host_str().unwrap_or_default().to_string(),
            port: url.port().map(|p| p.to_string()).unwrap_or_default(),
            pathname: url.path().to_string(),
            search: url.query().map(|q| format!("?{}", q)).unwrap_or_default(),
            fragment: match url.fragment() {
                Some(f) if !f.is_empty() => format!("#{}", f),
                _ => String::new(),
            },
        }
    }

    /// `protocol//host[:port]`
    pub fn origin(&self) -> String {
        if self.port.is_empty() {
            format!("{}//{}", self.protocol, self.hostname)
        } else {
            format!("{}//{}:{}", self.protocol, self.hostname, self.port)
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}{}{}", self.origin(), self.pathname, self.search, self.fragment)
    }
}

/// One entry of the history stack
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub location: LocationParts,
    /// Payload attached by history replacement
    pub state: Option<ParameterMap>,
}

struct HistoryStack {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl HistoryStack {
    fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }
}

/// In-memory location with a history stack
pub struct MemoryLocation {
    history: RwLock<HistoryStack>,
    reject_history_writes: AtomicBool,
}

impl MemoryLocation {
    pub fn new(location: LocationParts) -> Self {
        Self {
            history: RwLock::new(HistoryStack {
                entries: vec![HistoryEntry {
                    location,
                    state: None,
                }],
                index: 0,
            }),
            reject_history_writes: AtomicBool::new(false),
        }
    }

    /// Create a location from an absolute URL
    pub fn parse(url: &str) -> HashParamResult<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| HashParamError::InvalidLocation(format!("{}: {}", url, e)))?;
        Ok(Self::new(LocationParts::from_url(&parsed)))
    }

    /// Snapshot of the current location
    pub fn current(&self) -> LocationParts {
        self.history.read().current().location.clone()
    }

    pub fn href(&self) -> String {
        self.current().href()
    }

    /// State payload of the current history entry
    pub fn history_state(&self) -> Option<ParameterMap> {
        self.history.read().current().state.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.read().entries.len()
    }

    /// Make `replace_history` fail, as browsers do when the call is blocked
    pub fn reject_history_writes(&self, reject: bool) {
        self.reject_history_writes.store(reject, Ordering::SeqCst);
    }

    /// Step back one history entry. Returns false at the oldest entry.
    pub fn back(&self) -> bool {
        let mut history = self.history.write();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Step forward one history entry. Returns false at the newest entry.
    pub fn forward(&self) -> bool {
        let mut history = self.history.write();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }
}

impl LocationProvider for MemoryLocation {
    fn fragment(&self) -> String {
        self.history.read().current().location.fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let fragment = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        };

        let mut history = self.history.write();
        if history.current().location.fragment == fragment {
            return;
        }

        let mut location = history.current().location.clone();
        location.fragment = fragment;

        let next = history.index + 1;
        history.entries.truncate(next);
        history.entries.push(HistoryEntry {
            location,
            state: None,
        });
        history.index = next;
    }

    fn protocol(&self) -> String {
        self.history.read().current().location.protocol.clone()
    }

    fn hostname(&self) -> String {
        self.history.read().current().location.hostname.clone()
    }

    fn port(&self) -> String {
        self.history.read().current().location.port.clone()
    }

    fn pathname(&self) -> String {
        self.history.read().current().location.pathname.clone()
    }

    fn search(&self) -> String {
        self.history.read().current().location.search.clone()
    }

    fn replace_history(&self, state: &ParameterMap, url: &str) -> HashParamResult<()> {
        if self.reject_history_writes.load(Ordering::SeqCst) {
            return Err(HashParamError::CommitFailure(
                "history replacement rejected".to_string(),
            ));
        }

        let parsed = Url::parse(url)
            .map_err(|e| HashParamError::CommitFailure(format!("invalid URL {}: {}", url, e)))?;
        let location = LocationParts::from_url(&parsed);

        let mut history = self.history.write();
        let current_origin = history.current().location.origin();
        if location.origin() != current_origin {
            return Err(HashParamError::CommitFailure(format!(
                "{} is not same-origin with {}",
                url, current_origin
            )));
        }

        let index = history.index;
        history.entries[index] = HistoryEntry {
            location,
            state: Some(state.clone()),
        };
        Ok(())
    }
}

/// Thread-safe location handle
pub type SharedMemoryLocation = Arc<MemoryLocation>;

/// Create a shared in-memory location from an absolute URL
pub fn create_memory_location(url: &str) -> HashParamResult<SharedMemoryLocation> {
    Ok(Arc::new(MemoryLocation::parse(url)?))
}
