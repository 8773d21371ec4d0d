//! highlighter - split text around highlighted terms
//!
//! Given a text and one or more terms, produces the ordered fragments a
//! renderer needs to draw highlights: runs of plain text and matches. In
//! HTML-aware mode well-formed tags are passed through as markup and only
//! the text between them is searched.
//!
//! ```
//! use highlighter::highlight::{get_fragments, HighlightOptions};
//!
//! let split = get_fragments(
//!     "This is the first item",
//!     None,
//!     Some(&["item", "the"][..]),
//!     HighlightOptions::default(),
//! );
//! assert_eq!(split.fragments, ["This is ", "the", " first ", "item"]);
//! assert_eq!(split.pattern, "((?:item)|(?:the))");
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod render;

pub use error::{HighlightError, Result};
