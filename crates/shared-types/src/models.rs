use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Bookkeeping fields the backend's document store adds to every record.
const INTERNAL_KEYS: &[&str] = &["createdAt", "updatedAt", "password"];

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The signed-in user's profile as returned by `/{role}/my-details`.
///
/// Only `name` and `email` are read by the dashboards. Everything else the
/// backend sends (employee id, enrollment number, branch, ...) is kept in
/// `details` in key order so the profile view can list it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl ProfileData {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            details: BTreeMap::new(),
        }
    }

    /// Role-specific fields rendered as display strings.
    ///
    /// Nested objects and arrays are skipped, nulls and blank strings too,
    /// as are store-internal keys (`_id`, `__v`, timestamps).
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .filter(|(key, _)| !is_internal_key(key))
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) if !s.trim().is_empty() => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
                    _ => return None,
                };
                Some((humanize_key(key), text))
            })
            .collect()
    }
}

fn is_internal_key(key: &str) -> bool {
    key.starts_with('_') || INTERNAL_KEYS.contains(&key)
}

/// Missing and `null` both read as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `enrollmentNo` -> `Enrollment No`, `branch_id` -> `Branch Id`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            out.push(' ');
        }
        if out.is_empty() || out.ends_with(' ') {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }
    out
}
