//! JSON serialization settings for response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

/// Content type written with every envelope
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Process-wide serialization configuration
///
/// Built once at startup and handed to the response writer. Property naming
/// (camelCase) is fixed by the envelope type itself; these settings govern
/// null handling and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SerializerSettings {
    /// Drop `null` object members at every depth, including inside `data`
    #[serde(default = "default_strip_nulls")]
    pub strip_nulls: bool,

    /// Indent output. Local debugging only; the wire format is compact.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for SerializerSettings {
    fn default() -> Self {
        Self {
            strip_nulls: default_strip_nulls(),
            pretty: false,
        }
    }
}

impl SerializerSettings {
    /// Read `JSON_PRETTY` on top of the defaults
    pub fn from_env() -> Self {
        let pretty = env::var("JSON_PRETTY")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            pretty,
            ..Default::default()
        }
    }

    /// Encode a value according to these settings
    pub fn to_vec<T: Serialize>(&self, value: &T) -> serde_json::Result<Vec<u8>> {
        if !self.strip_nulls {
            return self.write(value);
        }

        let mut value = serde_json::to_value(value)?;
        strip_nulls(&mut value);
        self.write(&value)
    }

    fn write<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<Vec<u8>> {
        if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
    }
}

/// Remove `null` members from every object in the tree
///
/// Array elements are kept in place so positions stay meaningful.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn default_strip_nulls() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Profile {
        display_name: String,
        nick_name: Option<String>,
    }

    #[test]
    fn test_nested_nulls_are_removed() {
        let mut value = json!({
            "a": null,
            "b": {"c": null, "d": 1},
            "e": [null, {"f": null}]
        });
        strip_nulls(&mut value);
        assert_eq!(value, json!({"b": {"d": 1}, "e": [null, {}]}));
    }

    #[test]
    fn test_output_is_compact_by_default() {
        let settings = SerializerSettings::default();
        let body = settings
            .to_vec(&Profile {
                display_name: "Ada".to_string(),
                nick_name: None,
            })
            .unwrap();

        assert_eq!(String::from_utf8(body).unwrap(), r#"{"displayName":"Ada"}"#);
    }

    #[test]
    fn test_nulls_kept_when_disabled() {
        let settings = SerializerSettings {
            strip_nulls: false,
            pretty: false,
        };
        let body = settings
            .to_vec(&Profile {
                display_name: "Ada".to_string(),
                nick_name: None,
            })
            .unwrap();

        assert_eq!(String::from_utf8(body).unwrap(), r#"{"displayName":"Ada","nickName":null}"#);
    }
}
