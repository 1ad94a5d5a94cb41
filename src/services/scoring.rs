use std::cmp::Reverse;
use std::collections::HashSet;

use crate::{
    models::{IdeaQuery, Mood, NormalizedActivity},
    services::{conditions::ConditionFlags, translator::normalize_party},
};

/// Weight of a matching `outcome:*` tag; every other match counts 1
pub const OUTCOME_WEIGHT: u32 = 2;

/// Soft tags implied by each outcome choice
fn outcome_cluster(outcome: &str) -> &'static [&'static str] {
    match outcome {
        "smile" => &["outcome:smile", "outcome:fun", "cat:entertainment"],
        "fun" => &["outcome:fun", "cat:entertainment", "cat:hobby"],
        "refresh" => &["outcome:refresh", "mood:active", "cat:nature"],
        "stress" => &["outcome:stress", "mood:active", "cat:exercise"],
        "learning" => &["outcome:learning", "cat:study"],
        "achievement" => &["outcome:achievement", "cat:craft", "cat:organize"],
        "relax" => &["outcome:relax", "mood:relax", "cat:wellness", "cat:selfcare"],
        "budget" => &["outcome:budget", "cat:home"],
        "nature" => &["outcome:nature", "cat:nature", "place:outdoor"],
        "hobby" => &["outcome:hobby", "cat:hobby", "cat:craft"],
        "experience" => &["outcome:experience", "cat:travel"],
        "health" => &["outcome:health", "cat:exercise", "cat:wellness"],
        "luxury" => &["outcome:luxury", "cat:food", "cat:shopping"],
        "art" => &["outcome:art", "cat:art"],
        "clean" => &["outcome:clean", "cat:cleaning", "cat:organize"],
        "talk" => &["outcome:talk", "party:friends", "party:partner"],
        _ => &[],
    }
}

fn mood_cluster(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Relax => &["mood:relax", "outcome:relax", "cat:selfcare"],
        Mood::Active => &["mood:active", "cat:exercise", "outcome:refresh"],
        Mood::Indoor | Mood::Outdoor => &[],
    }
}

fn party_signal(party: &str) -> Option<&'static str> {
    match party {
        "family" => Some("kids:ok"),
        "solo" => Some("party:solo"),
        "partner" => Some("party:partner"),
        "friends" => Some("party:friends"),
        _ => None,
    }
}

/// Collects the soft tags a query's preferences point at
pub fn soft_tags(query: &IdeaQuery, flags: &ConditionFlags) -> HashSet<&'static str> {
    let mut soft = HashSet::new();

    let outcome = query.outcome.trim().to_lowercase();
    let outcome = outcome.strip_prefix("outcome:").unwrap_or(&outcome);
    soft.extend(outcome_cluster(outcome));

    if let Some(mood) = query.mood {
        soft.extend(mood_cluster(mood));
    }

    if let Some(signal) = normalize_party(&query.party).and_then(party_signal) {
        soft.insert(signal);
    }

    if flags.want_budget {
        soft.extend(outcome_cluster("budget"));
    }

    soft
}

/// Weighted count of an activity's tags found in the soft set
pub fn score(activity: &NormalizedActivity, soft: &HashSet<&str>) -> u32 {
    activity
        .tags
        .iter()
        .filter(|t| soft.contains(t.as_str()))
        .map(|t| if t.starts_with("outcome:") { OUTCOME_WEIGHT } else { 1 })
        .sum()
}

/// Stable sort by score, highest first. Ties keep their pool order.
pub fn rank<'a>(
    pool: Vec<&'a NormalizedActivity>,
    soft: &HashSet<&str>,
) -> Vec<&'a NormalizedActivity> {
    if soft.is_empty() {
        return pool;
    }

    let mut scored: Vec<(u32, &NormalizedActivity)> =
        pool.into_iter().map(|a| (score(a, soft), a)).collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));

    if let Some((top, _)) = scored.first() {
        tracing::trace!(top_score = top, candidates = scored.len(), "Pool ranked");
    }

    scored.into_iter().map(|(_, a)| a).collect()
}
