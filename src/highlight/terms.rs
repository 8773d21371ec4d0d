//! Term collection and pattern construction
//!
//! All terms are folded into one alternation so a single regex scan
//! finds every match. At a given position the earliest listed term that
//! matches wins.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use tracing::debug;

/// Suffix that stretches a match from the term start to the next word boundary
const BOUNDARY_SUFFIX: &str = r".*?\b";

/// Matching options shared by both fragmenters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HighlightOptions {
    /// Match terms case-sensitively (default: ignore case)
    pub case_sensitive: bool,
    /// Extend each match through to the next word boundary
    pub until_next_boundary: bool,
}

impl HighlightOptions {
    /// Builder: set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Builder: set boundary extension
    pub fn with_until_next_boundary(mut self, until_next_boundary: bool) -> Self {
        self.until_next_boundary = until_next_boundary;
        self
    }
}

/// Ordered collection of terms to highlight
///
/// The single term comes first, then the list in order. Duplicates are
/// kept; empty strings are not, since an empty alternative matches
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    /// Collect terms from an optional single term and an optional list
    pub fn new<S: AsRef<str>>(single: Option<&str>, list: Option<&[S]>) -> Self {
        let mut terms = Vec::new();

        if let Some(term) = single.filter(|t| !t.is_empty()) {
            terms.push(term.to_string());
        }

        for term in list.unwrap_or_default() {
            let term: &str = term.as_ref();
            if !term.is_empty() {
                terms.push(term.to_string());
            }
        }

        Self { terms }
    }

    /// Build the alternation pattern for these terms
    pub fn pattern(&self, until_next_boundary: bool) -> TermPattern {
        if self.terms.is_empty() {
            return TermPattern::default();
        }

        let alternatives: Vec<String> = self
            .terms
            .iter()
            .map(|term| {
                let suffix = if until_next_boundary { BOUNDARY_SUFFIX } else { "" };
                format!("(?:{}{})", regex::escape(term), suffix)
            })
            .collect();

        let source = format!("({})", alternatives.join("|"));
        debug!(terms = self.terms.len(), pattern = %source, "built term pattern");
        TermPattern { source }
    }
}

/// Regex source for a term set; empty when there is nothing to highlight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPattern {
    source: String,
}

impl TermPattern {
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Compile the pattern for matching
    pub fn compile(&self, case_sensitive: bool) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.source)
            .case_insensitive(!case_sensitive)
            .build()
    }

    /// Compile a variant anchored at both ends, for classifying whole fragments
    pub fn compile_anchored(&self, case_sensitive: bool) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&format!("^(?:{})$", self.source))
            .case_insensitive(!case_sensitive)
            .build()
    }
}

/// Build the pattern for a single term and/or a list of terms
pub fn build_pattern<S: AsRef<str>>(single: Option<&str>, list: Option<&[S]>) -> TermPattern {
    TermSet::new(single, list).pattern(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Option<&[&str]> = None;

    #[test]
    fn test_single_term_pattern() {
        let pattern = build_pattern(Some("item"), NONE);
        assert_eq!(pattern.as_str(), "((?:item))");
        assert!(!pattern.is_empty());
    }

    #[test]
    fn test_single_then_list_order() {
        let pattern = build_pattern(Some("a"), Some(&["b", "c"][..]));
        assert_eq!(pattern.as_str(), "((?:a)|(?:b)|(?:c))");
    }

    #[test]
    fn test_empty_terms() {
        assert!(build_pattern(None, NONE).is_empty());
        assert!(build_pattern(Some(""), Some(&[""][..])).is_empty());
        assert_eq!(build_pattern(None, Some(&[] as &[&str])).as_str(), "");
    }

    #[test]
    fn test_duplicates_preserved() {
        let pattern = build_pattern(None, Some(&["item", "item"][..]));
        assert_eq!(pattern.as_str(), "((?:item)|(?:item))");
    }

    #[test]
    fn test_special_chars_escaped() {
        let pattern = build_pattern(Some("a.b(c)"), NONE);
        assert_eq!(pattern.as_str(), r"((?:a\.b\(c\)))");
        let re = pattern.compile(false).unwrap();
        assert!(re.is_match("xa.b(c)x"));
        assert!(!re.is_match("axb(c)"));
    }

    #[test]
    fn test_boundary_suffix() {
        let pattern = TermSet::new(Some("it"), NONE).pattern(true);
        assert_eq!(pattern.as_str(), r"((?:it.*?\b))");
    }

    #[test]
    fn test_compile_case_sensitivity() {
        let pattern = build_pattern(Some("Item"), NONE);
        assert!(pattern.compile(false).unwrap().is_match("ITEM"));
        assert!(!pattern.compile(true).unwrap().is_match("ITEM"));
    }

    #[test]
    fn test_compile_anchored() {
        let pattern = build_pattern(None, Some(&["the", "item"][..]));
        let re = pattern.compile_anchored(false).unwrap();
        assert!(re.is_match("The"));
        assert!(!re.is_match("the item"));
    }

    #[test]
    fn test_options_deserialize() {
        let options: HighlightOptions = toml::from_str("case-sensitive = true").unwrap();
        assert!(options.case_sensitive);
        assert!(!options.until_next_boundary);
    }
}
