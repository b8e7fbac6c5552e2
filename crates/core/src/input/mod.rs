//! Parsing raw action inputs into lists, maps and scalars
//!
//! Inputs arrive as plain strings. Lists may be JSON arrays, JSON-escaped
//! strings holding a JSON array, newline-separated or comma-separated text.
//! Maps are JSON objects.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Parse a list input. Items are trimmed and empty items dropped.
pub fn parse_string_list(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('"') {
        return parse_string_list(&decode_escaped(trimmed)?);
    }

    let items: Vec<String> = if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)
            .map_err(|e| Error::ParseError(format!("invalid JSON list '{trimmed}': {e}")))?;
        values
            .iter()
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                other => Err(Error::InvalidArgument(format!(
                    "list items must be strings, got {other}"
                ))),
            })
            .collect::<Result<_>>()?
    } else if trimmed.contains('\n') {
        trimmed.lines().map(str::to_string).collect()
    } else {
        trimmed.split(',').map(str::to_string).collect()
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Parse a JSON object input into ordered `(key, value)` pairs.
///
/// Strings are kept verbatim, numbers and booleans stringified, arrays and
/// objects rendered as compact JSON. `null` values are rejected.
pub fn parse_string_map(raw: &str) -> Result<Vec<(String, String)>> {
    parse_object_map(raw)?
        .into_iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => {
                    return Err(Error::InvalidArgument(format!(
                        "value for '{key}' must not be null"
                    )));
                }
                complex => complex.to_string(),
            };
            Ok((key, rendered))
        })
        .collect()
}

/// Parse a JSON object input without flattening its values
pub fn parse_json_object(raw: &str) -> Result<Value> {
    parse_object_map(raw).map(Value::Object)
}

fn parse_object_map(raw: &str) -> Result<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Map::new());
    }
    if trimmed.starts_with('"') {
        return parse_object_map(&decode_escaped(trimmed)?);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| Error::ParseError(format!("invalid JSON object '{trimmed}': {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidArgument(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Parse a boolean input; blank yields `default`
pub fn parse_bool(raw: &str, default: bool) -> Result<bool> {
    Ok(parse_optional_bool(raw)?.unwrap_or(default))
}

/// Parse a boolean input; blank yields `None`
pub fn parse_optional_bool(raw: &str) -> Result<Option<bool>> {
    match raw.trim() {
        "" => Ok(None),
        "true" | "True" | "TRUE" => Ok(Some(true)),
        "false" | "False" | "FALSE" => Ok(Some(false)),
        other => Err(Error::InvalidArgument(format!(
            "'{other}' is not a boolean, expected true or false"
        ))),
    }
}

/// Parse a parallelism input; blank and zero are both absent
pub fn parse_parallelism(raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: u32 = trimmed.parse().map_err(|_| {
        Error::InvalidArgument(format!("'{trimmed}' is not a non-negative integer"))
    })?;
    Ok(Some(value).filter(|n| *n > 0))
}

fn decode_escaped(raw: &str) -> Result<String> {
    serde_json::from_str::<String>(raw)
        .map_err(|e| Error::ParseError(format!("invalid escaped JSON '{raw}': {e}")))
}
