//! Path parameter extraction and validation.

use serde_json::{Map, Value};

/// Get a named path parameter from an API Gateway event's parameter map.
///
/// Returns `None` for a missing map, a missing key, a non-string value, or
/// a value that is blank after trimming whitespace.
pub fn get_path_param<'a>(
    path_parameters: Option<&'a Map<String, Value>>,
    key: &str,
) -> Option<&'a str> {
    let value = path_parameters?.get(key)?.as_str()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn returns_a_present_string_parameter() {
        let params = params(json!({"param": "value"}));
        assert_eq!(get_path_param(Some(&params), "param"), Some("value"));
    }

    #[test]
    fn missing_map_returns_none() {
        assert_eq!(get_path_param(None, "param"), None);
    }

    #[test]
    fn missing_key_returns_none() {
        let params = params(json!({}));
        assert_eq!(get_path_param(Some(&params), "param"), None);
    }

    #[test]
    fn non_string_value_returns_none() {
        let params = params(json!({"param": 1}));
        assert_eq!(get_path_param(Some(&params), "param"), None);
    }

    #[test]
    fn blank_value_returns_none() {
        let params = params(json!({"param": "   "}));
        assert_eq!(get_path_param(Some(&params), "param"), None);
    }
}
