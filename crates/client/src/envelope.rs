//! Helpers for picking values out of the backend's JSON envelopes.
//!
//! The backend wraps payloads as `{status, message, data}` but the nesting
//! under `data` differs per endpoint. Lookups follow loose truthiness: a
//! missing key, `null`, `false`, `0` and `""` all count as "not set" and fall
//! through to the next candidate path.

use serde_json::Value;
use storedesk_core::Acknowledgement;

/// A lookup path from the reply root. Numeric segments index arrays.
pub(crate) type Path<'a> = &'a [&'a str];

/// Follow `path` from `root`.
pub(crate) fn lookup<'v>(root: &'v Value, path: Path<'_>) -> Option<&'v Value> {
    path.iter().try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Loose truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The first candidate path holding a truthy value.
pub(crate) fn first_truthy<'v>(root: &'v Value, paths: &[Path<'_>]) -> Option<&'v Value> {
    paths
        .iter()
        .filter_map(|path| lookup(root, path))
        .find(|v| is_truthy(v))
}

/// Render a scalar as a string. Numbers keep their JSON form.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First truthy scalar as a string, or `""`.
pub(crate) fn string_at(root: &Value, paths: &[Path<'_>]) -> String {
    opt_string_at(root, paths).unwrap_or_default()
}

/// First truthy scalar as a string, or `None`.
pub(crate) fn opt_string_at(root: &Value, paths: &[Path<'_>]) -> Option<String> {
    first_truthy(root, paths).and_then(scalar_to_string)
}

/// Interpret a flag the backend may send as a bool, `0`/`1`, or a string.
pub(crate) fn as_flag(value: &Value) -> bool {
    match value {
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "active" | "enabled"
        ),
        other => is_truthy(other),
    }
}

/// First truthy candidate interpreted as a flag, or `false`.
pub(crate) fn flag_at(root: &Value, paths: &[Path<'_>]) -> bool {
    first_truthy(root, paths).is_some_and(as_flag)
}

/// First candidate that is present and not `null`, interpreted as a flag.
///
/// Unlike [`flag_at`], an explicit `false` / `0` is respected instead of
/// falling through, so a default of `true` can be overridden.
pub(crate) fn flag_or(root: &Value, paths: &[Path<'_>], default: bool) -> bool {
    paths
        .iter()
        .filter_map(|path| lookup(root, path))
        .find(|v| !v.is_null())
        .map_or(default, as_flag)
}

/// First truthy candidate as a non-negative integer that fits in `u32`.
pub(crate) fn u32_at(root: &Value, paths: &[Path<'_>]) -> Option<u32> {
    first_truthy(root, paths).and_then(|v| match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// The envelope's `message`, or `""`.
pub(crate) fn message(root: &Value) -> String {
    string_at(root, &[&["message"]])
}

/// Wrap the envelope's `message` as the result of a mutation.
pub(crate) fn acknowledgement(root: &Value) -> Acknowledgement {
    Acknowledgement {
        message: message(root),
    }
}

/// The `message` of an error reply body, if the body is JSON and has one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    lookup(&value, &["message"])
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_lookup_objects_and_arrays() {
        let body = json!({"data": [{"shop_name": "Harbor"}]});
        assert_eq!(
            lookup(&body, &["data", "0", "shop_name"]),
            Some(&json!("Harbor"))
        );
        assert!(lookup(&body, &["data", "1", "shop_name"]).is_none());
        assert!(lookup(&body, &["data", "x"]).is_none());
    }

    #[test]
    fn test_fallback_chain_skips_falsy() {
        let body = json!({
            "data": {"company_details": {"site_title": ""}, "site_title": "From data"},
            "site_title": "From root"
        });
        let paths: &[Path<'_>] = &[
            &["data", "company_details", "site_title"],
            &["data", "site_title"],
            &["site_title"],
        ];
        assert_eq!(string_at(&body, paths), "From data");
    }

    #[test]
    fn test_string_at_defaults_empty() {
        assert_eq!(string_at(&json!({}), &[&["missing"]]), "");
        assert_eq!(opt_string_at(&json!({"logo": null}), &[&["logo"]]), None);
    }

    #[test]
    fn test_numbers_render_as_strings() {
        assert_eq!(string_at(&json!({"id": 42}), &[&["id"]]), "42");
    }

    #[test]
    fn test_flags() {
        assert!(flag_at(&json!({"v": 1}), &[&["v"]]));
        assert!(flag_at(&json!({"v": "true"}), &[&["v"]]));
        assert!(flag_at(&json!({"v": "1"}), &[&["v"]]));
        assert!(!flag_at(&json!({"v": "0"}), &[&["v"]]));
        assert!(!flag_at(&json!({"v": 0}), &[&["v"]]));
        assert!(!flag_at(&json!({}), &[&["v"]]));
    }

    #[test]
    fn test_flag_or_respects_explicit_false() {
        assert!(!flag_or(&json!({"status": 0}), &[&["status"]], true));
        assert!(flag_or(&json!({"status": null}), &[&["status"]], true));
        assert!(flag_or(&json!({}), &[&["status"]], true));
    }

    #[test]
    fn test_u32_at() {
        assert_eq!(u32_at(&json!({"t": 30}), &[&["t"]]), Some(30));
        assert_eq!(u32_at(&json!({"t": "45"}), &[&["t"]]), Some(45));
        assert_eq!(u32_at(&json!({"t": -1}), &[&["t"]]), None);
        assert_eq!(u32_at(&json!({"t": 0}), &[&["t"]]), None);
    }

    #[test]
    fn test_acknowledgement_message() {
        let ack = acknowledgement(&json!({"status": true, "message": "Reset code sent"}));
        assert_eq!(ack.message, "Reset code sent");
        assert_eq!(acknowledgement(&Value::Null).message, "");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(error_message(r#"{"message":"  "}"#), None);
        assert_eq!(error_message(r#"{"error":"x"}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }
}
