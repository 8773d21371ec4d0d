//! HTML output
//!
//! Text is entity-encoded, markup passes through, and highlighted text
//! is wrapped in a `<mark>` element.

use crate::highlight::{encode, Fragment, FragmentKind, Split};

/// How highlighted text is marked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkStyle {
    /// Element wrapping highlighted text
    pub element: String,
    /// CSS class on that element; omitted when empty
    pub class: String,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            element: "mark".to_string(),
            class: String::new(),
        }
    }
}

impl MarkStyle {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Default::default()
        }
    }

    fn open(&self) -> String {
        if self.class.is_empty() {
            format!("<{}>", self.element)
        } else {
            format!("<{} class=\"{}\">", self.element, encode(&self.class))
        }
    }

    fn close(&self) -> String {
        format!("</{}>", self.element)
    }
}

fn push_fragment(out: &mut String, content: &str, kind: FragmentKind, mark: &MarkStyle) {
    match kind {
        FragmentKind::Markup => out.push_str(content),
        FragmentKind::Text => out.push_str(&encode(content)),
        FragmentKind::HighlightedText => {
            out.push_str(&mark.open());
            out.push_str(&encode(content));
            out.push_str(&mark.close());
        }
    }
}

/// Render classified fragments to HTML
pub fn to_html(fragments: &[Fragment], mark: &MarkStyle) -> String {
    let mut out = String::new();
    for fragment in fragments {
        push_fragment(&mut out, &fragment.content, fragment.kind, mark);
    }
    out
}

/// Render a plain-text split to HTML
pub fn to_html_plain(split: &Split<'_>, mark: &MarkStyle) -> String {
    let mut out = String::new();
    for (content, kind) in split.iter() {
        push_fragment(&mut out, content, kind, mark);
    }
    out
}
