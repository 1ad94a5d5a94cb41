use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::Idea;

pub const DEFAULT_LIMIT: usize = 6;
pub const MAX_LIMIT: usize = 50;

/// Mood selector from the request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Outdoor,
    Indoor,
    Relax,
    Active,
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outdoor" => Ok(Mood::Outdoor),
            "indoor" => Ok(Mood::Indoor),
            "relax" => Ok(Mood::Relax),
            "active" => Ok(Mood::Active),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

/// One recommendation query, with defaults applied and numbers clamped
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaQuery {
    pub random: bool,
    /// Clamped to `1..=MAX_LIMIT`
    pub limit: usize,
    pub offset: usize,
    pub mood: Option<Mood>,
    pub outcome: String,
    pub party: String,
    /// OR-tag list
    pub tags: Vec<String>,
    pub exclude_ids: Vec<String>,
    /// Free-text condition tokens
    pub conditions: Vec<String>,
}

impl Default for IdeaQuery {
    fn default() -> Self {
        Self {
            random: false,
            limit: DEFAULT_LIMIT,
            offset: 0,
            mood: None,
            outcome: String::new(),
            party: String::new(),
            tags: Vec::new(),
            exclude_ids: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

impl IdeaQuery {
    /// Decodes a request body, degrading to the all-defaults query when the
    /// body is not a JSON object.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_json(&value),
            Err(e) => {
                tracing::debug!(error = %e, "Request body is not JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Decodes each field independently; a field of the wrong type falls back
    /// to its own default.
    pub fn from_json(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        let limit = read_integer(fields, &["limit"])
            .map(|n| n.clamp(1, MAX_LIMIT as i64) as usize)
            .unwrap_or(DEFAULT_LIMIT);

        let offset = read_integer(fields, &["offset"])
            .map(|n| n.max(0) as usize)
            .unwrap_or(0);

        Self {
            random: read_bool(fields, "random"),
            limit,
            offset,
            mood: read_string(fields, "mood").parse().ok(),
            outcome: read_string(fields, "outcome"),
            party: read_string(fields, "party"),
            tags: read_list(fields, &["tags"]),
            exclude_ids: read_list(fields, &["excludeIds", "exclude_ids"]),
            conditions: read_list(fields, &["conditions"]),
        }
    }
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| fields.get(*key))
}

fn read_bool(fields: &Map<String, Value>, key: &str) -> bool {
    match fields.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn read_integer(fields: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    let number = match first_present(fields, keys)? {
        Value::Number(n) => n.as_i64().map(|i| i as f64).or_else(|| n.as_f64()),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then(|| number.trunc() as i64)
}

fn read_string(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn read_list(fields: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    let items: Vec<String> = match first_present(fields, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => vec![s.trim().to_string()],
        _ => Vec::new(),
    };

    items.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Response body for the generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdeasResponse {
    pub ideas: Vec<Idea>,
    pub has_more: bool,
    /// Pool size after hard filtering, before selection
    pub total: usize,
}

#[cfg(test)]
impl IdeasResponse {
    pub fn empty() -> Self {
        Self {
            ideas: Vec::new(),
            has_more: false,
            total: 0,
        }
    }
}
