//! CLI Commands

use anyhow::{bail, Context};
use hashparam_codec::type_cast;
use hashparam_core::{ParameterMap, ParameterValue};
use tracing_subscriber::EnvFilter;

/// Parse a command-line value with the same casting rules as the fragment.
///
/// A `,` makes the value a sequence.
pub fn parse_value(raw: &str) -> ParameterValue {
    if raw.contains(',') {
        ParameterValue::Sequence(raw.split(',').map(type_cast).collect())
    } else {
        ParameterValue::Scalar(type_cast(raw))
    }
}

/// Parse a `key=value` argument
pub fn parse_pair(arg: &str) -> anyhow::Result<(String, ParameterValue)> {
    let Some((key, value)) = arg.split_once('=') else {
        bail!("Expected key=value, got '{}'", arg);
    };
    if key.is_empty() {
        bail!("Empty key in '{}'", arg);
    }
    Ok((key.to_string(), parse_value(value)))
}

/// Parse `key=value` arguments into a map, later keys overwriting earlier ones
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> anyhow::Result<ParameterMap> {
    let mut map = ParameterMap::new();
    for arg in args {
        let (key, value) = parse_pair(arg.as_ref())?;
        map.insert(key, value);
    }
    Ok(map)
}

/// Render a value as JSON
pub fn format_value(value: &ParameterValue) -> anyhow::Result<String> {
    serde_json::to_string(value).context("Failed to render value")
}

/// Render a map as pretty JSON or as `key = value` lines
pub fn format_map(map: &ParameterMap, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(map).context("Failed to render parameters");
    }
    let mut lines = Vec::with_capacity(map.len());
    for (key, value) in map.iter() {
        lines.push(format!("{} = {}", key, format_value(value)?));
    }
    Ok(lines.join("\n"))
}

/// Install the fmt subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashparam_core::Scalar;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("3"), ParameterValue::from(3));
        assert_eq!(parse_value("hello"), ParameterValue::from("hello"));
        assert_eq!(parse_value("null"), ParameterValue::from(Scalar::Null));
        assert_eq!(
            parse_value("1,x,false"),
            ParameterValue::Sequence(vec![Scalar::Number(1.0), Scalar::from("x"), Scalar::Bool(false)])
        );
    }

    #[test]
    fn test_parse_pair() {
        let (key, value) = parse_pair("page=2").unwrap();
        assert_eq!(key, "page");
        assert_eq!(value, ParameterValue::from(2));

        let (key, value) = parse_pair("q=a=b").unwrap();
        assert_eq!(key, "q");
        assert_eq!(value, ParameterValue::from("a=b"));

        let (_, value) = parse_pair("empty=").unwrap();
        assert_eq!(value, ParameterValue::from(""));

        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=1").is_err());
    }

    #[test]
    fn test_parse_pairs_last_wins() {
        let map = parse_pairs(&["a=1", "b=2", "a=3"]).unwrap();
        let expected: ParameterMap = vec![("a", 3), ("b", 2)].into_iter().collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_format_map() {
        let map = parse_pairs(&["name=ada", "tags=x,1"]).unwrap();
        assert_eq!(format_map(&map, false).unwrap(), "name = \"ada\"\ntags = [\"x\",1.0]");
        assert!(format_map(&map, true).unwrap().contains("\"name\": \"ada\""));
    }
}
