//! Fragment grammar
//!
//! ```text
//! fragment     := pathSegment* paramSegment*
//! pathSegment  := <'/'-free text that is not a key:value pair> "/"
//! paramSegment := escape(key) ":" value "/"
//! value        := scalar ("," scalar)*
//! scalar       := escape(stringified value)
//! ```
//!
//! A segment belongs to the parameter region only when splitting it on `:`
//! yields exactly two pieces. Everything else is left to the application as
//! path.

use hashparam_core::{ParameterMap, ParameterValue, Scalar};

use crate::cast::type_cast;
use crate::escape::{escape, unescape};

pub const FRAGMENT_MARKER: &str = "#";
pub const SEGMENT_SEPARATOR: &str = "/";
pub const KEY_VALUE_SEPARATOR: &str = ":";
pub const ARRAY_SEPARATOR: &str = ",";

/// Decode every `key:value` segment of `raw`
pub fn decode(raw: &str) -> ParameterMap {
    decode_with(raw, |_| {})
}

/// Decode `raw`, reporting each segment that is not a `key:value` pair.
///
/// A later occurrence of a key overwrites an earlier one.
pub fn decode_with<F>(raw: &str, mut on_ignored: F) -> ParameterMap
where
    F: FnMut(&str),
{
    let mut map = ParameterMap::new();
    for segment in raw.split(SEGMENT_SEPARATOR) {
        match split_pair(segment) {
            Some((key, value)) => {
                map.insert(unescape(key), decode_value(value));
            }
            None => on_ignored(segment),
        }
    }
    map
}

/// Encode `map` as `/`-joined `key:value` segments in insertion order
pub fn encode(map: &ParameterMap) -> String {
    map.iter()
        .map(|(key, value)| format!("{}{}{}", escape(key), KEY_VALUE_SEPARATOR, encode_value(value)))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Encode an optional map. A missing map has zero entries.
pub fn encode_optional(map: Option<&ParameterMap>) -> String {
    map.map(encode).unwrap_or_default()
}

/// Whether `segment` is a `key:value` pair
pub fn is_parameter_segment(segment: &str) -> bool {
    split_pair(segment).is_some()
}

/// Strip a single leading `#`
pub fn strip_marker(raw: &str) -> &str {
    raw.strip_prefix(FRAGMENT_MARKER).unwrap_or(raw)
}

/// Path segments of a fragment: non-empty segments that are not parameters
pub fn fragment_path(raw: &str) -> Vec<&str> {
    strip_marker(raw)
        .split(SEGMENT_SEPARATOR)
        .filter(|segment| !segment.is_empty() && !is_parameter_segment(segment))
        .collect()
}

/// Splice an encoded parameter string after the path.
///
/// The separator is always written, so an empty parameter string leaves a
/// trailing `/`.
pub fn compose_fragment(path: &[&str], params: &str) -> String {
    format!("{}{}{}", path.join(SEGMENT_SEPARATOR), SEGMENT_SEPARATOR, params)
}

fn split_pair(segment: &str) -> Option<(&str, &str)> {
    let mut parts = segment.split(KEY_VALUE_SEPARATOR);
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((key, value))
}

fn decode_value(value: &str) -> ParameterValue {
    if value.contains(ARRAY_SEPARATOR) {
        ParameterValue::Sequence(
            value
                .split(ARRAY_SEPARATOR)
                .map(|item| type_cast(&unescape(item)))
                .collect(),
        )
    } else {
        ParameterValue::Scalar(type_cast(&unescape(value)))
    }
}

fn encode_value(value: &ParameterValue) -> String {
    match value {
        ParameterValue::Scalar(scalar) => encode_scalar(scalar),
        ParameterValue::Sequence(items) => items
            .iter()
            .map(encode_scalar)
            .collect::<Vec<_>>()
            .join(ARRAY_SEPARATOR),
    }
}

fn encode_scalar(scalar: &Scalar) -> String {
    escape(&scalar.to_string())
}
