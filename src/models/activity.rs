use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Catalog record as it appears in the source file.
///
/// Tag information may come as a flat `tags` list or spread over the legacy
/// fields, and any field may mix canonical and legacy tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "duration_min", alias = "durationMinutes")]
    pub duration: Option<Value>,
    #[serde(default)]
    pub tags: LegacyField,
    #[serde(default)]
    pub place: LegacyField,
    #[serde(default, alias = "outcome")]
    pub outcomes: LegacyField,
    #[serde(default)]
    pub mood: LegacyField,
    #[serde(default)]
    pub party: LegacyField,
    #[serde(default)]
    pub kids: LegacyField,
    #[serde(default)]
    pub cat: LegacyField,
    #[serde(default, alias = "extraTags")]
    pub extra_tags: LegacyField,
}

/// A legacy tag field: a scalar, a list, or nothing usable
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyField {
    #[default]
    Empty,
    One(String),
    /// Elements other than strings and numbers are skipped one by one
    Many(Vec<Value>),
    /// Any other JSON shape; contributes no tokens
    Other(Value),
}

impl LegacyField {
    /// Coerces the field to a list of non-empty tokens.
    ///
    /// Scalars are split on commas (ASCII, Japanese and full-width) and
    /// whitespace; list elements are only trimmed, with numbers stringified.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            LegacyField::Empty | LegacyField::Other(_) => Vec::new(),
            LegacyField::One(s) => s
                .split(|c: char| c == ',' || c == '、' || c == '，' || c.is_whitespace())
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            LegacyField::Many(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
impl From<&str> for LegacyField {
    fn from(value: &str) -> Self {
        LegacyField::One(value.to_string())
    }
}

#[cfg(test)]
impl From<Vec<&str>> for LegacyField {
    fn from(values: Vec<&str>) -> Self {
        LegacyField::Many(values.into_iter().map(Value::from).collect())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Catalog entry after one-time canonicalization. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedActivity {
    pub id: String,
    pub title: String,
    pub duration_minutes: u32,
    /// Canonical tags only, always including exactly one `dur:*` tag
    pub tags: BTreeSet<String>,
}

impl NormalizedActivity {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Values of all tags under `party:`
    pub fn party_values(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|t| t.strip_prefix("party:"))
    }
}

/// Activity as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub duration_minutes: u32,
    pub tags: Vec<String>,
}

impl From<&NormalizedActivity> for Idea {
    fn from(activity: &NormalizedActivity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            duration_minutes: activity.duration_minutes,
            tags: activity.tags.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_activity_accepts_numeric_id_and_mixed_fields() {
        let raw: RawActivity = serde_json::from_str(
            r#"{"id": 12, "title": "散歩", "duration": "40", "place": "outdoor",
                "outcomes": ["fun", "refresh"], "kids": null}"#,
        )
        .unwrap();

        assert_eq!(raw.id, "12");
        assert_eq!(raw.duration, Some(Value::String("40".to_string())));
        assert_eq!(raw.place, LegacyField::One("outdoor".to_string()));
        assert_eq!(raw.outcomes.tokens(), vec!["fun", "refresh"]);
        assert_eq!(raw.kids, LegacyField::Empty);
        assert_eq!(raw.cat, LegacyField::Empty);
    }

    #[test]
    fn test_raw_activity_ignores_unusable_field_shapes() {
        let raw: RawActivity =
            serde_json::from_str(r#"{"id": "1", "title": "x", "cat": {"a": 1}}"#).unwrap();
        assert!(raw.cat.tokens().is_empty());
    }

    #[test]
    fn test_list_keeps_valid_elements_around_odd_ones() {
        let raw: RawActivity = serde_json::from_str(
            r#"{"id": "1", "title": "x", "tags": ["indoor", 5, null, {"a": 1}, "relax"]}"#,
        )
        .unwrap();
        assert_eq!(raw.tags.tokens(), vec!["indoor", "5", "relax"]);
    }

    #[test]
    fn test_scalar_tokens_split_on_commas_and_spaces() {
        let field = LegacyField::from("learning, fun 屋内、ひとり，budget");
        assert_eq!(
            field.tokens(),
            vec!["learning", "fun", "屋内", "ひとり", "budget"]
        );
    }

    #[test]
    fn test_list_tokens_are_trimmed_not_split() {
        let field = LegacyField::from(vec![" outcome:fun ", "", "a b"]);
        assert_eq!(field.tokens(), vec!["outcome:fun", "a b"]);
    }

    #[test]
    fn test_idea_serializes_camel_case() {
        let activity = NormalizedActivity {
            id: "7".to_string(),
            title: "ベランダ菜園のプチ手入れ".to_string(),
            duration_minutes: 20,
            tags: ["dur:30m", "place:indoor"].iter().map(|s| s.to_string()).collect(),
        };

        let json = serde_json::to_value(Idea::from(&activity)).unwrap();
        assert_eq!(json["durationMinutes"], 20);
        assert_eq!(json["tags"], serde_json::json!(["dur:30m", "place:indoor"]));
    }
}
