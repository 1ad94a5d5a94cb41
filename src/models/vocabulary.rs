use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Namespace of a canonical `namespace:value` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Place,
    Outcome,
    Mood,
    Party,
    Cat,
    Dur,
    Kids,
}

const PLACE_VALUES: &[&str] = &["indoor", "outdoor"];

const OUTCOME_VALUES: &[&str] = &[
    "smile",
    "fun",
    "refresh",
    "stress",
    "learning",
    "achievement",
    "relax",
    "budget",
    "nature",
    "hobby",
    "experience",
    "health",
    "luxury",
    "art",
    "clean",
    "talk",
];

const MOOD_VALUES: &[&str] = &["relax", "active"];

const PARTY_VALUES: &[&str] = &["solo", "family", "partner", "friends"];

const CAT_VALUES: &[&str] = &[
    "nature",
    "food",
    "exercise",
    "study",
    "art",
    "cleaning",
    "shopping",
    "entertainment",
    "travel",
    "wellness",
    "home",
    "errand",
    "hobby",
    "digital",
    "craft",
    "selfcare",
    "organize",
];

const DUR_VALUES: &[&str] = &["15m", "30m", "45m", "60m", "90m", "120m", "halfday", "fullday"];

const KIDS_VALUES: &[&str] = &["ok", "ng"];

impl Namespace {
    pub const ALL: [Namespace; 7] = [
        Namespace::Place,
        Namespace::Outcome,
        Namespace::Mood,
        Namespace::Party,
        Namespace::Cat,
        Namespace::Dur,
        Namespace::Kids,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Place => "place",
            Namespace::Outcome => "outcome",
            Namespace::Mood => "mood",
            Namespace::Party => "party",
            Namespace::Cat => "cat",
            Namespace::Dur => "dur",
            Namespace::Kids => "kids",
        }
    }

    /// Closed set of values allowed under this namespace
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Namespace::Place => PLACE_VALUES,
            Namespace::Outcome => OUTCOME_VALUES,
            Namespace::Mood => MOOD_VALUES,
            Namespace::Party => PARTY_VALUES,
            Namespace::Cat => CAT_VALUES,
            Namespace::Dur => DUR_VALUES,
            Namespace::Kids => KIDS_VALUES,
        }
    }

    /// Builds `namespace:value` without checking the value
    pub fn tag(&self, value: &str) -> String {
        format!("{}:{}", self.as_str(), value)
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tag namespace: {}", s))
    }
}

/// Validates a `namespace:value` string against the vocabulary.
///
/// Comparison is case-insensitive; the returned tag is lowercased. Anything
/// outside the closed vocabulary yields `None`.
pub fn canonicalize_tag(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    let (ns, value) = lower.split_once(':')?;
    let namespace: Namespace = ns.parse().ok()?;
    let value = value.trim();

    namespace
        .values()
        .contains(&value)
        .then(|| namespace.tag(value))
}

#[cfg(test)]
pub fn is_canonical(tag: &str) -> bool {
    canonicalize_tag(tag).is_some()
}

/// Splits a canonical tag into its namespace and value
pub fn split_tag(tag: &str) -> Option<(Namespace, &str)> {
    let (ns, value) = tag.split_once(':')?;
    Some((ns.parse().ok()?, value))
}

/// Every tag of the vocabulary, namespace by namespace
pub fn all_tags() -> impl Iterator<Item = String> {
    Namespace::ALL
        .into_iter()
        .flat_map(|ns| ns.values().iter().map(move |value| ns.tag(value)))
}

/// Duration bucket tag for a duration in minutes
pub fn duration_bucket(minutes: u32) -> &'static str {
    match minutes {
        0..=15 => "dur:15m",
        16..=30 => "dur:30m",
        31..=45 => "dur:45m",
        46..=60 => "dur:60m",
        61..=90 => "dur:90m",
        91..=120 => "dur:120m",
        _ => "dur:halfday",
    }
}

/// Japanese display label for a canonical tag.
///
/// Returns `None` for tags that are not shown to users.
pub fn label(tag: &str) -> Option<&'static str> {
    let (namespace, value) = split_tag(tag)?;

    let label = match (namespace, value) {
        (Namespace::Party, "solo") => "1人",
        (Namespace::Party, "family") => "家族",
        (Namespace::Party, "partner") => "パートナー",
        (Namespace::Party, "friends") => "友だち",

        (Namespace::Place, "indoor") => "屋内",
        (Namespace::Place, "outdoor") => "屋外",

        (Namespace::Outcome, "smile") => "笑顔になりたい",
        (Namespace::Outcome, "fun") => "楽しい",
        (Namespace::Outcome, "refresh") => "リフレッシュ",
        (Namespace::Outcome, "stress") => "ストレス発散",
        (Namespace::Outcome, "learning") => "学びたい",
        (Namespace::Outcome, "achievement") => "達成感",
        (Namespace::Outcome, "relax") => "癒やされたい",
        (Namespace::Outcome, "budget") => "節約したい",
        (Namespace::Outcome, "nature") => "自然と触れる",
        (Namespace::Outcome, "hobby") => "趣味を見つける",
        (Namespace::Outcome, "experience") => "体験したい",
        (Namespace::Outcome, "health") => "健康",
        (Namespace::Outcome, "luxury") => "ちょっと贅沢",
        (Namespace::Outcome, "art") => "アート・文学",
        (Namespace::Outcome, "clean") => "片づけ",
        (Namespace::Outcome, "talk") => "おしゃべり",

        (Namespace::Cat, "nature") => "自然",
        (Namespace::Cat, "food") => "食べ物",
        (Namespace::Cat, "exercise") => "運動",
        (Namespace::Cat, "study") => "学び",
        (Namespace::Cat, "art") => "アート・文学",
        (Namespace::Cat, "cleaning") => "片づけ",
        (Namespace::Cat, "shopping") => "買い物",
        (Namespace::Cat, "entertainment") => "エンタメ",
        (Namespace::Cat, "travel") => "おでかけ",
        (Namespace::Cat, "wellness") => "ウェルネス",
        (Namespace::Cat, "home") => "おうち",
        (Namespace::Cat, "hobby") => "趣味",

        (Namespace::Dur, "15m") => "〜15分",
        (Namespace::Dur, "30m") => "〜30分",
        (Namespace::Dur, "45m") => "〜45分",
        (Namespace::Dur, "60m") => "〜60分",
        (Namespace::Dur, "90m") => "〜90分",
        (Namespace::Dur, "120m") => "〜120分",
        (Namespace::Dur, "halfday") => "半日",
        (Namespace::Dur, "fullday") => "1日",

        (Namespace::Kids, "ok") => "子連れOK",

        _ => return None,
    };

    Some(label)
}
