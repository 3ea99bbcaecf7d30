use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HIGHLIGHT_PUNCTUATION: Regex =
        Regex::new(r#"[.,/#!$%^&*;:{}=\-_`~()\[\]"]"#).expect("hardcoded regex should compile");
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s{2,}").expect("hardcoded regex should compile");
}

/// Canonical form for gap/dropdown/hint/option comparisons: trim + lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonical form for highlight comparisons. Manual text selection drags in
/// stray punctuation and doubled spaces, so those are removed before the
/// trim + lowercase step. Gap/dropdown/hint comparisons stay exact on purpose
/// and must NOT use this.
pub fn normalize_highlight(raw: &str) -> String {
    let stripped = HIGHLIGHT_PUNCTUATION.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    normalize(&collapsed)
}
