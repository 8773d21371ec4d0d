//! Fragment rendering
//!
//! Turns fragments into output:
//! - HTML, with highlighted text wrapped in a marker element
//! - Terminal text, with highlighted text styled via crossterm

mod ansi;
mod html;
mod style;

pub use ansi::write_ansi;
pub use html::{to_html, to_html_plain, MarkStyle};
pub use style::{Color, Style};
