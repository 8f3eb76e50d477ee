//! Title classification for display.
//!
//! Maps free-text item titles to a display icon and a break/social flag.
//! Rules are ordered data, evaluated top to bottom with first match winning,
//! so new synonyms can be added to a category without touching control flow.
//! Keywords cover the English and German titles the generation service
//! produces.

/// Icon shown for titles that match no category.
pub const DEFAULT_ICON: &str = "📅";

/// One icon category: any keyword hit selects the icon.
struct IconRule {
    icon: &'static str,
    keywords: &'static [&'static str],
}

/// Ordered icon categories, highest priority first.
const ICON_RULES: &[IconRule] = &[
    IconRule {
        icon: "☕",
        keywords: &["coffee", "kaffee", "espresso"],
    },
    IconRule {
        icon: "🍽️",
        keywords: &["lunch", "mittag", "meal"],
    },
    IconRule {
        icon: "🍷",
        keywords: &["dinner", "social", "abendessen", "networking"],
    },
    IconRule {
        icon: "⏸️",
        keywords: &["break", "pause", "auszeit"],
    },
    IconRule {
        icon: "👋",
        keywords: &["welcome", "intro", "opening", "kickoff", "begrüßung", "vorstellung"],
    },
    IconRule {
        icon: "🏁",
        keywords: &["closing", "wrap-up", "wrap up", "recap", "abschluss", "zusammenfassung", "fazit"],
    },
];

/// Keywords marking a title as a break, meal or social slot rather than a
/// working session. Deliberately independent of the icon table.
const BREAK_KEYWORDS: &[&str] = &[
    "break",
    "pause",
    "auszeit",
    "lunch",
    "mittag",
    "meal",
    "snack",
    "coffee",
    "kaffee",
    "dinner",
    "abendessen",
    "social",
    "networking",
];

/// Pick the display icon for an agenda item title.
///
/// Total over any input: case-insensitive substring match against the
/// ordered categories, falling back to [`DEFAULT_ICON`].
pub fn icon_for_title(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    ICON_RULES
        .iter()
        .find(|rule| contains_any(&lower, rule.keywords))
        .map(|rule| rule.icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Whether a title describes a break-like slot (break, meal, social event).
pub fn is_break_like(title: &str) -> bool {
    contains_any(&title.to_lowercase(), BREAK_KEYWORDS)
}

/// Check if a string contains any of the given substrings.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
