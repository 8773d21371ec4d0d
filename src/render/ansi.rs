//! Terminal output using crossterm styling

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, StyledContent};

use super::style::Style;
use crate::error::Result;
use crate::highlight::{Fragment, FragmentKind};

/// Write fragments to a terminal, styling highlighted text
///
/// Markup is dropped: a terminal has no use for tags.
pub fn write_ansi<W: Write>(out: &mut W, fragments: &[Fragment], style: Style) -> Result<()> {
    let content_style = style.to_content_style();

    for fragment in fragments {
        match fragment.kind {
            FragmentKind::Markup => {}
            FragmentKind::Text => queue!(out, Print(&fragment.content))?,
            FragmentKind::HighlightedText => queue!(
                out,
                PrintStyledContent(StyledContent::new(content_style, fragment.content.as_str()))
            )?,
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{get_html_aware_fragments, HighlightOptions};
    use crate::render::Color;

    const NONE: Option<&[&str]> = None;

    #[test]
    fn test_unstyled_text_written_verbatim() {
        let fragments = vec![Fragment::text("a < b"), Fragment::highlighted("c")];
        let mut out = Vec::new();
        write_ansi(&mut out, &fragments, Style::default()).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("a < b"));
        assert!(written.contains('c'));
    }

    #[test]
    fn test_markup_is_dropped() {
        let result = get_html_aware_fragments(
            "<b>bold</b> text",
            Some("text"),
            NONE,
            HighlightOptions::default(),
        );
        let mut out = Vec::new();
        write_ansi(&mut out, &result.fragments, Style::highlight(Color::Default)).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("bold "));
        assert!(!written.contains("<b>"));
        assert!(written.contains("\x1b["));
        assert!(written.contains("text"));
    }
}
