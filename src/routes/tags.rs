use axum::Json;
use serde::Serialize;

use crate::models::{
    vocabulary::{all_tags, label, split_tag},
    Namespace,
};

#[derive(Debug, Serialize)]
pub struct TagEntry {
    pub tag: String,
    pub namespace: Namespace,
    /// Display label, `None` for tags not shown to users
    pub label: Option<&'static str>,
}

/// Lists the canonical tag vocabulary with display labels
pub async fn list_tags() -> Json<Vec<TagEntry>> {
    let entries = all_tags()
        .filter_map(|tag| {
            let (namespace, _) = split_tag(&tag)?;
            Some(TagEntry {
                namespace,
                label: label(&tag),
                tag,
            })
        })
        .collect();

    Json(entries)
}
