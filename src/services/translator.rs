use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::vocabulary::canonicalize_tag;

/// Legacy token → canonical tags. Keys are lowercase.
const LEGACY_TAGS: &[(&str, &[&str])] = &[
    // place
    ("indoor", &["place:indoor"]),
    ("屋内", &["place:indoor"]),
    ("室内", &["place:indoor"]),
    ("おうち", &["place:indoor", "cat:home"]),
    ("outdoor", &["place:outdoor"]),
    ("屋外", &["place:outdoor"]),
    ("外", &["place:outdoor"]),
    // mood
    ("relax", &["mood:relax", "outcome:relax"]),
    ("のんびり", &["mood:relax"]),
    ("癒し", &["mood:relax", "outcome:relax"]),
    ("active", &["mood:active"]),
    ("アクティブ", &["mood:active"]),
    // party
    ("solo", &["party:solo"]),
    ("ひとり", &["party:solo"]),
    ("一人", &["party:solo"]),
    ("1人", &["party:solo"]),
    ("family", &["party:family"]),
    ("家族", &["party:family"]),
    ("partner", &["party:partner"]),
    ("パートナー", &["party:partner"]),
    ("friends", &["party:friends"]),
    ("friend", &["party:friends"]),
    ("友だち", &["party:friends"]),
    ("友達", &["party:friends"]),
    // kids
    ("kids", &["kids:ok"]),
    ("子連れ", &["kids:ok"]),
    ("子ども", &["kids:ok"]),
    // outcomes
    ("smile", &["outcome:smile"]),
    ("fun", &["outcome:fun"]),
    ("楽しい", &["outcome:fun"]),
    ("refresh", &["outcome:refresh"]),
    ("リフレッシュ", &["outcome:refresh"]),
    ("stress", &["outcome:stress"]),
    ("learning", &["outcome:learning", "cat:study"]),
    ("学び", &["outcome:learning", "cat:study"]),
    ("achievement", &["outcome:achievement"]),
    ("達成感", &["outcome:achievement"]),
    ("budget", &["outcome:budget"]),
    ("free", &["outcome:budget"]),
    ("無料", &["outcome:budget"]),
    ("低予算", &["outcome:budget"]),
    ("節約", &["outcome:budget"]),
    ("nature", &["outcome:nature", "cat:nature"]),
    ("自然", &["outcome:nature", "cat:nature"]),
    ("hobby", &["outcome:hobby", "cat:hobby"]),
    ("趣味", &["outcome:hobby", "cat:hobby"]),
    ("experience", &["outcome:experience"]),
    ("体験", &["outcome:experience"]),
    ("health", &["outcome:health"]),
    ("健康", &["outcome:health"]),
    ("luxury", &["outcome:luxury"]),
    ("贅沢", &["outcome:luxury"]),
    ("art", &["outcome:art", "cat:art"]),
    ("アート", &["outcome:art", "cat:art"]),
    ("clean", &["outcome:clean"]),
    ("talk", &["outcome:talk"]),
    ("おしゃべり", &["outcome:talk"]),
    // categories
    ("food", &["cat:food"]),
    ("cooking", &["cat:food", "cat:hobby"]),
    ("料理", &["cat:food", "cat:hobby"]),
    ("exercise", &["cat:exercise", "outcome:health"]),
    ("運動", &["cat:exercise", "outcome:health"]),
    ("walk", &["cat:exercise", "outcome:refresh"]),
    ("散歩", &["cat:exercise", "outcome:refresh"]),
    ("study", &["cat:study"]),
    ("reading", &["cat:study", "outcome:learning"]),
    ("読書", &["cat:study", "outcome:learning"]),
    ("cleaning", &["cat:cleaning", "outcome:clean"]),
    ("掃除", &["cat:cleaning", "outcome:clean"]),
    ("片づけ", &["cat:organize", "outcome:clean"]),
    ("shopping", &["cat:shopping"]),
    ("買い物", &["cat:shopping"]),
    ("entertainment", &["cat:entertainment"]),
    ("movie", &["cat:entertainment"]),
    ("映画", &["cat:entertainment"]),
    ("travel", &["cat:travel"]),
    ("おでかけ", &["cat:travel"]),
    ("wellness", &["cat:wellness"]),
    ("home", &["cat:home"]),
    ("errand", &["cat:errand"]),
    ("digital", &["cat:digital"]),
    ("craft", &["cat:craft"]),
    ("工作", &["cat:craft"]),
    ("selfcare", &["cat:selfcare"]),
    ("organize", &["cat:organize"]),
];

/// Party synonyms → party value
const PARTY_SYNONYMS: &[(&str, &str)] = &[
    ("solo", "solo"),
    ("ひとり", "solo"),
    ("一人", "solo"),
    ("1人", "solo"),
    ("ソロ", "solo"),
    ("family", "family"),
    ("家族", "family"),
    ("ファミリー", "family"),
    ("子連れ", "family"),
    ("親子", "family"),
    ("partner", "partner"),
    ("パートナー", "partner"),
    ("恋人", "partner"),
    ("カップル", "partner"),
    ("夫婦", "partner"),
    ("friends", "friends"),
    ("friend", "friends"),
    ("友だち", "friends"),
    ("友達", "friends"),
    ("友人", "friends"),
    ("仲間", "friends"),
];

fn legacy_table() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static TABLE: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    TABLE.get_or_init(|| LEGACY_TAGS.iter().copied().collect())
}

fn party_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| PARTY_SYNONYMS.iter().copied().collect())
}

/// Translates one token into canonical tags.
///
/// Tokens already shaped `namespace:value` pass through when they belong to
/// the vocabulary. Unknown tokens translate to nothing.
pub fn translate(token: &str) -> Vec<String> {
    let key = token.trim().to_lowercase();
    if key.is_empty() {
        return Vec::new();
    }

    if key.contains(':') {
        return canonicalize_tag(&key).into_iter().collect();
    }

    legacy_table()
        .get(key.as_str())
        .map(|tags| tags.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

/// Normalizes a requested party value, e.g. `"ひとり"` → `"solo"`.
///
/// Accepts the canonical form `party:solo` as well. Unknown values yield `None`.
pub fn normalize_party(value: &str) -> Option<&'static str> {
    let key = value.trim().to_lowercase();
    let key = key.strip_prefix("party:").unwrap_or(&key);
    party_table().get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vocabulary::is_canonical;

    #[test]
    fn test_legacy_table_only_produces_canonical_tags() {
        for (token, tags) in LEGACY_TAGS {
            for tag in *tags {
                assert!(is_canonical(tag), "{} maps to non-canonical {}", token, tag);
            }
        }
    }

    #[test]
    fn test_many_to_one() {
        for token in ["ひとり", "一人", "solo", "SOLO"] {
            assert_eq!(translate(token), vec!["party:solo"]);
        }
    }

    #[test]
    fn test_one_to_many() {
        assert_eq!(translate("learning"), vec!["outcome:learning", "cat:study"]);
    }

    #[test]
    fn test_canonical_passthrough() {
        assert_eq!(translate("Outcome:Fun"), vec!["outcome:fun"]);
        assert!(translate("outcome:sleep").is_empty());
    }

    #[test]
    fn test_unknown_tokens_translate_to_nothing() {
        assert!(translate("zzz").is_empty());
        assert!(translate("  ").is_empty());
    }

    #[test]
    fn test_normalize_party() {
        assert_eq!(normalize_party("ひとり"), Some("solo"));
        assert_eq!(normalize_party("Party:Family"), Some("family"));
        assert_eq!(normalize_party("友人"), Some("friends"));
        assert_eq!(normalize_party("cat"), None);
        assert_eq!(normalize_party(""), None);
    }
}
