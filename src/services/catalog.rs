use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{
        vocabulary::{canonicalize_tag, duration_bucket, Namespace},
        NormalizedActivity, RawActivity,
    },
    services::translator::translate,
};

pub const DEFAULT_DURATION_MINUTES: u32 = 60;

const BUILTIN_CATALOG: &str = include_str!("../../data/activities.json");

/// Read-only activity catalog, normalized once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<NormalizedActivity>,
}

impl Catalog {
    /// Normalizes raw records. The first record wins on duplicate ids.
    pub fn from_raw(records: Vec<RawActivity>) -> Self {
        let mut seen = HashSet::new();
        let mut activities = Vec::with_capacity(records.len());

        for raw in records {
            if !seen.insert(raw.id.clone()) {
                tracing::warn!(id = %raw.id, title = %raw.title, "Duplicate activity id, skipping");
                continue;
            }
            activities.push(normalize_activity(&raw));
        }

        Self { activities }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let records: Vec<RawActivity> = serde_json::from_str(json)?;
        Ok(Self::from_raw(records))
    }

    /// Loads and normalizes a catalog file
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            activities = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> AppResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
            .map_err(|e| AppError::Internal(format!("Built-in catalog is invalid: {}", e)))
    }

    pub fn activities(&self) -> &[NormalizedActivity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&NormalizedActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Converts one raw record into its canonical form. Pure and idempotent.
pub fn normalize_activity(raw: &RawActivity) -> NormalizedActivity {
    let duration_minutes = resolve_duration(raw.duration.as_ref());
    let mut tags = BTreeSet::new();
    tags.insert(duration_bucket(duration_minutes).to_string());

    let general_fields = [
        &raw.tags,
        &raw.place,
        &raw.outcomes,
        &raw.mood,
        &raw.party,
        &raw.cat,
        &raw.extra_tags,
    ];

    for token in general_fields.iter().flat_map(|field| field.tokens()) {
        tags.extend(translate(&token));
    }

    for token in raw.kids.tokens() {
        tags.extend(translate_kids(&token));
    }

    // A record may carry its own dur:* tag; the computed bucket is authoritative.
    let bucket = duration_bucket(duration_minutes);
    tags.retain(|t| !t.starts_with("dur:") || t == bucket);

    NormalizedActivity {
        id: raw.id.clone(),
        title: raw.title.clone(),
        duration_minutes,
        tags,
    }
}

/// `kids` values are usually bare (`ok`, `ng`)
fn translate_kids(token: &str) -> Vec<String> {
    if !token.contains(':') {
        if let Some(tag) = canonicalize_tag(&Namespace::Kids.tag(token)) {
            return vec![tag];
        }
    }
    translate(token)
}

/// Duration in whole minutes, never below 1. Missing, non-numeric or
/// non-finite values fall back to the default.
pub fn resolve_duration(value: Option<&Value>) -> u32 {
    let minutes = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match minutes {
        Some(m) if m.is_finite() => m.round().clamp(1.0, u32::MAX as f64) as u32,
        _ => DEFAULT_DURATION_MINUTES,
    }
}
