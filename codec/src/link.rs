//! Link building

use hashparam_core::ParameterMap;

use crate::fragment::{encode, FRAGMENT_MARKER, SEGMENT_SEPARATOR};

/// Build a fragment-bearing href such as `#settings/a:1`.
///
/// `path` gains a leading `#` and a trailing `/` when missing.
pub fn create_link(path: &str, params: &ParameterMap) -> String {
    let marker = if path.starts_with(FRAGMENT_MARKER) { "" } else { FRAGMENT_MARKER };
    let slash = if path.ends_with(SEGMENT_SEPARATOR) { "" } else { SEGMENT_SEPARATOR };
    format!("{}{}{}{}", marker, path, slash, encode(params))
}
