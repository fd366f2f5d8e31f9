//! Type casting of decoded tokens

use hashparam_core::Scalar;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+\.?[0-9]*$").expect("number pattern is valid")
});

/// Convert a decoded token into its most specific scalar.
///
/// Numbers are recognised only in plain decimal form (`12`, `-3.5`, `7.`);
/// anything else that is not `true`, `false`, `null` or `undefined` stays a
/// string.
pub fn type_cast(token: &str) -> Scalar {
    if NUMBER_PATTERN.is_match(token) {
        if let Some(n) = parse_decimal(token) {
            return Scalar::Number(n);
        }
    }
    match token {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        "null" => Scalar::Null,
        "undefined" => Scalar::Absent,
        _ => Scalar::String(token.to_string()),
    }
}

fn parse_decimal(token: &str) -> Option<f64> {
    token.trim_end_matches('.').parse::<f64>().ok()
}
