//! Highlight fragmentation
//!
//! This module splits text around highlighted terms:
//! - Plain text, into interleaved runs and matches
//! - HTML-ish text, additionally passing well-formed tags through as markup

mod entities;
mod fragment;
mod markup;
mod splitter;
mod terms;

pub use entities::{decode, encode};
pub use fragment::{Fragment, FragmentKind};
pub use markup::{fragment_markup, get_html_aware_fragments, MarkupSplit};
pub use splitter::{get_fragments, Split, Splitter};
pub use terms::{build_pattern, HighlightOptions, TermPattern, TermSet};
