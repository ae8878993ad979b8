//! Whitespace normalization pass
//!
//! Runs after the rebuild step, over the already-masked text.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \r\x0C\x0B]+").expect("valid whitespace-run pattern"));
static ANY_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// How whitespace in the masked output is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceMode {
    /// Remove every whitespace character. Merges adjacent tokens, so it
    /// is not recommended for model input.
    All,
    /// Same behavior as `Normalize`; kept so the caller-facing mode
    /// string round-trips.
    #[value(name = "newline_tab")]
    NewlineTab,
    /// Replace newlines/tabs with spaces, collapse runs, trim. The
    /// recommended default.
    Normalize,
}

impl Default for WhitespaceMode {
    fn default() -> Self {
        WhitespaceMode::Normalize
    }
}

impl fmt::Display for WhitespaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhitespaceMode::All => write!(f, "all"),
            WhitespaceMode::NewlineTab => write!(f, "newline_tab"),
            WhitespaceMode::Normalize => write!(f, "normalize"),
        }
    }
}

impl WhitespaceMode {
    /// Resolve a caller-supplied mode string. Unknown values fall back to
    /// `Normalize`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "all" => WhitespaceMode::All,
            "newline_tab" => WhitespaceMode::NewlineTab,
            _ => WhitespaceMode::Normalize,
        }
    }
}

/// Rewrite whitespace in `text` according to `mode`.
pub fn normalize(text: &str, mode: WhitespaceMode) -> String {
    match mode {
        WhitespaceMode::All => ANY_WHITESPACE.replace_all(text, "").into_owned(),
        WhitespaceMode::NewlineTab | WhitespaceMode::Normalize => {
            let replaced = text.replace(['\n', '\t'], " ");
            SPACE_RUN.replace_all(&replaced, " ").trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        let text = "int  a ;\n\treturn\r\n  a ;";
        assert_eq!(
            normalize(text, WhitespaceMode::Normalize),
            "int a ; return a ;"
        );
    }

    #[test]
    fn test_all_removes_everything() {
        assert_eq!(normalize("int   a ;\n", WhitespaceMode::All), "inta;");
    }

    #[test]
    fn test_newline_tab_matches_normalize() {
        let text = " x\t=\n1 ; ";
        assert_eq!(
            normalize(text, WhitespaceMode::NewlineTab),
            normalize(text, WhitespaceMode::Normalize)
        );
    }

    #[test]
    fn test_whitespace_only_input_becomes_empty() {
        assert_eq!(normalize(" \n\t \r ", WhitespaceMode::Normalize), "");
        assert_eq!(normalize(" \n\t \r ", WhitespaceMode::All), "");
    }

    #[test]
    fn test_unknown_mode_string_falls_back() {
        assert_eq!(WhitespaceMode::from_tag("shrink"), WhitespaceMode::Normalize);
        assert_eq!(WhitespaceMode::from_tag("all"), WhitespaceMode::All);
        assert_eq!(
            WhitespaceMode::from_tag("newline_tab"),
            WhitespaceMode::NewlineTab
        );
    }
}
