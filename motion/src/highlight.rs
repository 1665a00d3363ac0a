//! Cosmetic colouring of terminal lines.
//!
//! Plain substring checks in priority order. This is not a parser; a line
//! mentioning `if` inside a word still counts as a keyword line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Comment,
    Assignment,
    Keyword,
    Literal,
    Plain,
}

impl LineStyle {
    /// First matching rule wins: `#`, then `=`, then `if`/`def`, then
    /// `True`/`False`.
    pub fn classify(line: &str) -> Self {
        if line.contains('#') {
            LineStyle::Comment
        } else if line.contains('=') {
            LineStyle::Assignment
        } else if line.contains("if") || line.contains("def") {
            LineStyle::Keyword
        } else if line.contains("True") || line.contains("False") {
            LineStyle::Literal
        } else {
            LineStyle::Plain
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LineStyle::Comment => "term-comment",
            LineStyle::Assignment => "term-assign",
            LineStyle::Keyword => "term-keyword",
            LineStyle::Literal => "term-literal",
            LineStyle::Plain => "term-plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_priority() {
        assert_eq!(
            LineStyle::classify("stress_signature_score = 0.89 # Low Bifido"),
            LineStyle::Comment
        );
        assert_eq!(
            LineStyle::classify("    energy_support = True"),
            LineStyle::Assignment
        );
        assert_eq!(
            LineStyle::classify("if stress_signature_score > 0.8:"),
            LineStyle::Keyword
        );
        assert_eq!(LineStyle::classify("flag: False"), LineStyle::Literal);
        assert_eq!(
            LineStyle::classify("Initializing BALANX Microbiome AI..."),
            LineStyle::Plain
        );
        assert_eq!(LineStyle::classify(""), LineStyle::Plain);
    }

    #[test]
    fn substring_match_is_not_word_aware() {
        // "Processing ... signals" has no keyword, "Analyzing family lifestyle" does
        assert_eq!(
            LineStyle::classify("Processing gut-brain axis signals..."),
            LineStyle::Plain
        );
        assert_eq!(
            LineStyle::classify("Analyzing family lifestyle impact..."),
            LineStyle::Keyword
        );
    }

    #[test]
    fn css_classes_are_distinct() {
        let all = [
            LineStyle::Comment,
            LineStyle::Assignment,
            LineStyle::Keyword,
            LineStyle::Literal,
            LineStyle::Plain,
        ];
        let classes: std::collections::HashSet<_> = all.iter().map(|s| s.css_class()).collect();
        assert_eq!(classes.len(), all.len());
    }
}
