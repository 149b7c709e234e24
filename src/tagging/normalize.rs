//! Text normalization shared by every heuristic.
//!
//! All classifiers look at text through the same four views: the
//! whitespace-collapsed form, its lower-cased form, the "match form" (only
//! digits and German letters survive, everything else becomes a single
//! space) and the lower-cased first token. Keyword tests are always run on
//! match forms so punctuation and casing never decide a match.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Anything that is not a digit or a lower-case German letter.
static NON_MATCH_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9a-zäöüß]+").unwrap());

/// Trim and collapse runs of whitespace into single spaces.
pub fn collapse(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Collapsed and lower-cased.
pub fn lower(s: &str) -> String {
    collapse(s).to_lowercase()
}

/// The lower-cased first whitespace-delimited token, or `""`.
pub fn first_word(s: &str) -> String {
    lower(s).split(' ').next().unwrap_or_default().to_string()
}

/// Lower-cased text with every run of non-matchable characters turned into
/// one space, trimmed.
pub fn match_form(s: &str) -> String {
    let lowered = lower(s);
    let replaced = NON_MATCH_CHARS.replace_all(&lowered, " ");
    collapse(&replaced)
}

/// Whole-word containment: true if any keyword's match form appears in the
/// text's match form bounded by spaces on both sides.
///
/// A short keyword never matches inside a longer token ("hi" does not match
/// "high"). Multi-word keywords ("post office") match across tokens.
/// Keywords with an empty match form are ignored.
pub fn has_any_word<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let hay = format!(" {} ", match_form(text));
    keywords.iter().any(|kw| {
        let k = match_form(kw.as_ref());
        !k.is_empty() && hay.contains(&format!(" {k} "))
    })
}

/// Substring containment on match forms, used where partial matches are
/// wanted (compounds such as "Arbeitsvertrag" containing "arbeit").
pub fn contains_any<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    let hay = match_form(text);
    needles.iter().any(|n| {
        let needle = match_form(n.as_ref());
        !needle.is_empty() && hay.contains(&needle)
    })
}

/// Python-style `islower`: at least one cased character and no upper-case
/// ones.
pub fn is_lowercase_word(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Every normalized view of one field, computed once per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Input as given.
    pub raw: String,
    pub collapsed: String,
    pub lower: String,
    pub matched: String,
    pub first: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let collapsed = collapse(raw);
        let lower = collapsed.to_lowercase();
        let first = lower.split(' ').next().unwrap_or_default().to_string();
        Self {
            raw: raw.to_string(),
            matched: match_form(raw),
            collapsed,
            lower,
            first,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Number of space-separated tokens in the collapsed form.
    pub fn token_count(&self) -> usize {
        if self.collapsed.is_empty() {
            0
        } else {
            self.collapsed.split(' ').count()
        }
    }
}
