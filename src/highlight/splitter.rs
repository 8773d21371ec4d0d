//! Plain-text fragmentation
//!
//! Splits text into the runs between matches and the matches themselves,
//! in left-to-right order. Matches never overlap; scanning resumes right
//! after each one.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::fragment::{Fragment, FragmentKind};
use super::terms::{HighlightOptions, TermPattern, TermSet};

/// Compiled term matcher
pub struct Splitter {
    pattern: TermPattern,
    case_sensitive: bool,
    /// Finds matches inside text; None when there is nothing to highlight
    regex: Option<Regex>,
    /// Whole-string variant for classifying standalone fragments, built on first use
    anchored: OnceLock<Option<Regex>>,
}

impl Splitter {
    /// Build a splitter for a single term and/or a list of terms
    pub fn new<S: AsRef<str>>(
        single: Option<&str>,
        list: Option<&[S]>,
        options: HighlightOptions,
    ) -> Self {
        let terms = TermSet::new(single, list);
        Self::from_terms(&terms, options)
    }

    pub fn from_terms(terms: &TermSet, options: HighlightOptions) -> Self {
        let pattern = terms.pattern(options.until_next_boundary);
        let inactive = Self {
            pattern: TermPattern::default(),
            case_sensitive: options.case_sensitive,
            regex: None,
            anchored: OnceLock::new(),
        };
        if pattern.is_empty() {
            return inactive;
        }

        match pattern.compile(options.case_sensitive) {
            Ok(regex) => Self {
                pattern,
                regex: Some(regex),
                ..inactive
            },
            Err(e) => {
                // Escaped terms always compile; only size limits can land here
                warn!(error = %e, "term pattern failed to compile, highlighting disabled");
                inactive
            }
        }
    }

    /// The alternation pattern source, empty when inactive
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether any terms are being highlighted
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Byte ranges of `text` in order, each flagged as a match or not
    ///
    /// Empty ranges are never produced.
    pub fn segments(&self, text: &str) -> Vec<(Range<usize>, bool)> {
        let Some(regex) = &self.regex else {
            if text.is_empty() {
                return Vec::new();
            }
            return vec![(0..text.len(), false)];
        };

        let mut segments = Vec::new();
        let mut last = 0;

        for m in regex.find_iter(text) {
            if m.start() > last {
                segments.push((last..m.start(), false));
            }
            if !m.range().is_empty() {
                segments.push((m.range(), true));
            }
            last = m.end();
        }

        if last < text.len() {
            segments.push((last..text.len(), false));
        }

        segments
    }

    /// Split `text` into fragments
    ///
    /// Empty text or an inactive splitter gives back the text as the only
    /// fragment.
    pub fn split<'t>(&self, text: &'t str) -> Split<'t> {
        if text.is_empty() || !self.is_active() {
            return Split {
                fragments: vec![text],
                highlighted: vec![false],
                pattern: String::new(),
            };
        }

        let (fragments, highlighted) = self
            .segments(text)
            .into_iter()
            .map(|(range, matched)| (&text[range], matched))
            .unzip();

        let split = Split {
            fragments,
            highlighted,
            pattern: self.pattern.as_str().to_string(),
        };
        debug!(
            fragments = split.fragments.len(),
            matches = split.match_count(),
            "split text"
        );
        split
    }

    /// Whether a standalone fragment is, in its entirety, a term match
    pub fn is_highlighted(&self, fragment: &str) -> bool {
        if fragment.is_empty() || !self.is_active() {
            return false;
        }

        let anchored = self.anchored.get_or_init(|| {
            self.pattern
                .compile_anchored(self.case_sensitive)
                .map_err(|e| warn!(error = %e, "anchored term pattern failed to compile"))
                .ok()
        });
        anchored.as_ref().is_some_and(|re| re.is_match(fragment))
    }
}

/// Result of plain-text fragmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'t> {
    /// Runs of text and matches, interleaved in original order
    pub fragments: Vec<&'t str>,
    /// The pattern used, empty when nothing was highlighted
    pub pattern: String,
    highlighted: Vec<bool>,
}

impl<'t> Split<'t> {
    /// Fragments paired with their classification
    pub fn iter(&self) -> impl Iterator<Item = (&'t str, FragmentKind)> + '_ {
        self.fragments
            .iter()
            .zip(&self.highlighted)
            .map(|(&fragment, &matched)| {
                let kind = if matched {
                    FragmentKind::HighlightedText
                } else {
                    FragmentKind::Text
                };
                (fragment, kind)
            })
    }

    /// Owned, classified fragments
    pub fn spans(&self) -> Vec<Fragment> {
        self.iter()
            .map(|(content, kind)| Fragment::new(content, kind))
            .collect()
    }

    /// Number of highlighted fragments
    pub fn match_count(&self) -> usize {
        self.highlighted.iter().filter(|&&m| m).count()
    }
}

/// Split `text` around a single term and/or a list of terms
pub fn get_fragments<'t, S: AsRef<str>>(
    text: &'t str,
    single: Option<&str>,
    list: Option<&[S]>,
    options: HighlightOptions,
) -> Split<'t> {
    Splitter::new(single, list, options).split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "This is the first item";
    const NONE: Option<&[&str]> = None;

    fn boundary() -> HighlightOptions {
        HighlightOptions::default().with_until_next_boundary(true)
    }

    #[test]
    fn test_single_term() {
        let split = get_fragments(TEXT, Some("item"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec!["This is the first ", "item"]);
        assert_eq!(split.pattern, "((?:item))");
    }

    #[test]
    fn test_term_list() {
        let split = get_fragments(
            TEXT,
            None,
            Some(&["item", "the"][..]),
            HighlightOptions::default(),
        );
        assert_eq!(split.fragments, vec!["This is ", "the", " first ", "item"]);
        assert_eq!(split.pattern, "((?:item)|(?:the))");
        assert_eq!(split.match_count(), 2);
    }

    #[test]
    fn test_no_terms_passes_text_through() {
        let split = get_fragments(TEXT, None, NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec![TEXT]);
        assert_eq!(split.pattern, "");

        let split = get_fragments(TEXT, Some(""), Some(&[""][..]), HighlightOptions::default());
        assert_eq!(split.fragments, vec![TEXT]);
        assert_eq!(split.pattern, "");
    }

    #[test]
    fn test_empty_text() {
        let split = get_fragments("", Some("item"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec![""]);
        assert_eq!(split.pattern, "");
    }

    #[test]
    fn test_until_next_boundary() {
        let split = get_fragments(TEXT, Some("It"), NONE, boundary());
        assert_eq!(split.fragments, vec!["This is the first ", "item"]);
        assert_eq!(split.pattern, r"((?:It.*?\b))");
    }

    #[test]
    fn test_without_boundary_matches_term_only() {
        let split = get_fragments(TEXT, Some("It"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec!["This is the first ", "it", "em"]);
    }

    #[test]
    fn test_case_sensitive() {
        let options = HighlightOptions::default().with_case_sensitive(true);
        let split = get_fragments(TEXT, Some("this"), NONE, options);
        assert_eq!(split.fragments, vec![TEXT]);
        assert_eq!(split.pattern, "((?:this))");

        let split = get_fragments(TEXT, Some("this"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec!["This", " is the first item"]);
    }

    #[test]
    fn test_regex_chars_are_literal() {
        let split = get_fragments(TEXT, Some("."), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec![TEXT]);
        assert_eq!(split.pattern, r"((?:\.))");
    }

    #[test]
    fn test_duplicate_terms() {
        let split = get_fragments(
            TEXT,
            None,
            Some(&["item", "item"][..]),
            HighlightOptions::default(),
        );
        assert_eq!(split.pattern, "((?:item)|(?:item))");
        assert_eq!(split.fragments, vec!["This is the first ", "item"]);
    }

    #[test]
    fn test_segment_count_and_reconstruction() {
        // Interior matches: 2n + 1
        let split = get_fragments("a x b x c", Some("x"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments.len(), 5);
        // Touching both ends: 2n - 1
        let split = get_fragments("x b x", Some("x"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments.len(), 3);
        // Touching one end: 2n
        let split = get_fragments("x b x c", Some("x"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments.len(), 4);

        for text in ["a x b x c", "xx", "x", "no match", "ünïcödé x ü"] {
            let split = get_fragments(text, Some("x"), NONE, HighlightOptions::default());
            assert_eq!(split.fragments.concat(), text);
        }
    }

    #[test]
    fn test_adjacent_matches() {
        let split = get_fragments("xxy", Some("x"), NONE, HighlightOptions::default());
        assert_eq!(split.fragments, vec!["x", "x", "y"]);
        assert_eq!(split.match_count(), 2);
    }

    #[test]
    fn test_earliest_alternative_wins() {
        let split = get_fragments(
            "items",
            None,
            Some(&["item", "items"][..]),
            HighlightOptions::default(),
        );
        assert_eq!(split.fragments, vec!["item", "s"]);

        let split = get_fragments(
            "items",
            None,
            Some(&["items", "item"][..]),
            HighlightOptions::default(),
        );
        assert_eq!(split.fragments, vec!["items"]);
    }

    #[test]
    fn test_spans_classification() {
        let split = get_fragments(TEXT, Some("first"), NONE, HighlightOptions::default());
        let spans = split.spans();
        assert_eq!(
            spans,
            vec![
                Fragment::text("This is the "),
                Fragment::highlighted("first"),
                Fragment::text(" item"),
            ]
        );
    }

    #[test]
    fn test_is_highlighted() {
        let splitter = Splitter::new(None, Some(&["item", "the"][..]), HighlightOptions::default());
        assert!(splitter.is_highlighted("ITEM"));
        assert!(splitter.is_highlighted("the"));
        assert!(!splitter.is_highlighted(" first "));
        assert!(!splitter.is_highlighted(""));

        let inactive = Splitter::new(None, NONE, HighlightOptions::default());
        assert!(!inactive.is_active());
        assert!(!inactive.is_highlighted("item"));
    }

    #[test]
    fn test_anchored_pattern_built_on_demand() {
        let splitter = Splitter::new(Some("item"), NONE, HighlightOptions::default());
        splitter.split(TEXT);
        assert!(splitter.anchored.get().is_none());

        assert!(splitter.is_highlighted("Item"));
        assert!(matches!(splitter.anchored.get(), Some(Some(_))));

        let case_sensitive = HighlightOptions::default().with_case_sensitive(true);
        let splitter = Splitter::new(Some("item"), NONE, case_sensitive);
        assert!(!splitter.is_highlighted("Item"));
        assert!(splitter.is_highlighted("item"));
    }
}
