//! Fragment types produced by the fragmenters
//!
//! A fragment is a contiguous piece of the input tagged with how a
//! renderer should treat it.

use serde::Serialize;

use super::entities::encode;

/// Rendering classification of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FragmentKind {
    /// Plain text, HTML-encoded when rendered
    Text,
    /// Text matching one of the terms, encoded and wrapped in a marker
    HighlightedText,
    /// A well-formed tag passed through verbatim (HTML-aware mode only)
    Markup,
}

/// A classified slice of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Literal text for text kinds, the raw tag for markup
    pub content: String,
    /// How this fragment renders
    pub kind: FragmentKind,
}

impl Fragment {
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Text)
    }

    pub fn highlighted(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::HighlightedText)
    }

    pub fn markup(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Markup)
    }

    pub fn is_markup(&self) -> bool {
        self.kind == FragmentKind::Markup
    }

    /// Render this fragment as HTML, without any highlight marker
    ///
    /// Markup is emitted raw; both text kinds are entity-encoded.
    pub fn to_html(&self) -> String {
        match self.kind {
            FragmentKind::Markup => self.content.clone(),
            FragmentKind::Text | FragmentKind::HighlightedText => encode(&self.content),
        }
    }
}
