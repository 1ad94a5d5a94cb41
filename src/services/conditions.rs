/// Duration in minutes at or under which an activity counts as short
pub const SHORT_MAX_MINUTES: u32 = 75;

/// Duration in minutes at or over which an activity counts as long
pub const LONG_MIN_MINUTES: u32 = 90;

const INDOOR_KEYWORDS: &[&str] = &["indoor", "屋内"];
const OUTDOOR_KEYWORDS: &[&str] = &["outdoor", "屋外"];
const BUDGET_KEYWORDS: &[&str] = &["budget", "低予算", "free", "無料"];
const SHORT_KEYWORDS: &[&str] = &["短", "short"];
const LONG_KEYWORDS: &[&str] = &["長", "long"];

/// Preferences extracted from free-text condition tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    pub want_indoor: bool,
    pub want_outdoor: bool,
    pub want_short: bool,
    pub want_long: bool,
    pub want_budget: bool,
}

impl ConditionFlags {
    /// Place tag implied by the conditions, if exactly one place was asked for
    pub fn place_tag(&self) -> Option<&'static str> {
        match (self.want_indoor, self.want_outdoor) {
            (true, false) => Some("place:indoor"),
            (false, true) => Some("place:outdoor"),
            _ => None,
        }
    }

    /// Whether a duration satisfies the short/long preference
    pub fn accepts_duration(&self, minutes: u32) -> bool {
        match (self.want_short, self.want_long) {
            (true, false) => minutes <= SHORT_MAX_MINUTES,
            (false, true) => minutes >= LONG_MIN_MINUTES,
            _ => true,
        }
    }
}

/// Canonical form of a condition token used for keyword matching.
///
/// Full-width ASCII becomes half-width, letters are lowercased, and
/// whitespace, brackets, tildes and dashes are dropped.
pub fn canonicalize_text(token: &str) -> String {
    token
        .chars()
        .map(to_half_width)
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace() && !is_bracket(*c) && !is_tilde_or_dash(*c))
        .collect()
}

fn to_half_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        _ => c,
    }
}

fn is_bracket(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '「'
            | '」'
            | '『'
            | '』'
            | '【'
            | '】'
            | '〔'
            | '〕'
            | '〈'
            | '〉'
            | '《'
            | '》'
    )
}

fn is_tilde_or_dash(c: char) -> bool {
    matches!(
        c,
        '~' | '〜' | '-' | '‐' | '‑' | '‒' | '–' | '—' | '―' | '−'
    )
}

/// Reduces condition tokens to flags.
///
/// Asking for both short and long cancels both out.
pub fn normalize_conditions<S: AsRef<str>>(tokens: &[S]) -> ConditionFlags {
    let mut flags = ConditionFlags::default();

    for token in tokens {
        let text = canonicalize_text(token.as_ref());
        if text.is_empty() {
            continue;
        }
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

        flags.want_indoor |= has_any(INDOOR_KEYWORDS);
        flags.want_outdoor |= has_any(OUTDOOR_KEYWORDS);
        flags.want_budget |= has_any(BUDGET_KEYWORDS);
        flags.want_short |= has_any(SHORT_KEYWORDS) || text == "60" || text == "60分";
        flags.want_long |= has_any(LONG_KEYWORDS) || text == "90" || text == "90分";
    }

    if flags.want_short && flags.want_long {
        tracing::debug!("Conflicting duration conditions, ignoring both");
        flags.want_short = false;
        flags.want_long = false;
    }

    flags
}
