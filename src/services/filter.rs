use std::collections::HashSet;

use crate::{
    models::{IdeaQuery, Mood, NormalizedActivity},
    services::{
        conditions::ConditionFlags,
        translator::{normalize_party, translate},
    },
};

/// Title words that mark an untagged activity as meant for several people
const MULTI_PERSON_WORDS: &[&str] = &[
    "家族",
    "親子",
    "友だち",
    "友達",
    "みんなで",
    "ペア",
    "二人",
    "ふたり",
    "カップル",
];

/// Reduces the catalog to the activities satisfying every hard constraint.
///
/// Incoming order is preserved.
pub fn apply_hard_filters<'a>(
    activities: &'a [NormalizedActivity],
    query: &IdeaQuery,
    flags: &ConditionFlags,
) -> Vec<&'a NormalizedActivity> {
    let place = required_place(query.mood, flags);
    let party = normalize_party(&query.party);
    let excluded: HashSet<&str> = query.exclude_ids.iter().map(String::as_str).collect();
    let or_tags = or_tag_targets(&query.tags);

    if !query.party.is_empty() && party.is_none() {
        tracing::debug!(party = %query.party, "Unknown party value, no party constraint");
    }

    activities
        .iter()
        .filter(|a| place.map_or(true, |tag| a.has_tag(tag)))
        .filter(|a| flags.accepts_duration(a.duration_minutes))
        .filter(|a| party.map_or(true, |p| matches_party(a, p)))
        .filter(|a| !excluded.contains(a.id.as_str()))
        .filter(|a| or_tags.is_empty() || a.tags.iter().any(|t| or_tags.contains(t)))
        .collect()
}

/// Place tag required by the mood selector, falling back to the conditions
pub fn required_place(mood: Option<Mood>, flags: &ConditionFlags) -> Option<&'static str> {
    match mood {
        Some(Mood::Outdoor) => Some("place:outdoor"),
        Some(Mood::Indoor) => Some("place:indoor"),
        _ => flags.place_tag(),
    }
}

/// Whether an activity fits the requested party.
///
/// Tagged activities must list the party. Untagged ones pass, except that a
/// solo request drops titles that read as group activities.
pub fn matches_party(activity: &NormalizedActivity, party: &str) -> bool {
    let mut tagged = activity.party_values().peekable();
    if tagged.peek().is_some() {
        return tagged.any(|p| p == party);
    }

    if party == "solo" {
        return !MULTI_PERSON_WORDS
            .iter()
            .any(|word| activity.title.contains(word));
    }

    true
}

/// Canonical targets for the OR-tag list; untranslatable tokens are dropped
fn or_tag_targets(tokens: &[String]) -> HashSet<String> {
    tokens.iter().flat_map(|t| translate(t)).collect()
}
