//! CLI argument parsing with clap derive macros.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use highlighter::config::OutputFormat;

/// Highlight terms in text.
///
/// Reads FILE (or stdin) and prints it with every occurrence of the given
/// terms highlighted, as styled terminal text, HTML or JSON fragments.
#[derive(Debug, Parser)]
#[command(
    name = "highlight",
    version,
    after_help = "\
Examples:
  highlight -t item notes.txt                 # Highlight one term
  highlight -T item -T the notes.txt          # Several terms
  highlight -b -t it notes.txt                # Extend matches to word end
  highlight -m -f html -t text page.html      # HTML in, HTML with <mark> out
  echo 'a b a' | highlight -t a -f json       # Fragments as JSON"
)]
pub struct Cli {
    /// Input file [default: stdin]
    pub file: Option<PathBuf>,

    /// Term to highlight
    #[arg(short = 't', long)]
    pub term: Option<String>,

    /// Additional terms to highlight (repeatable)
    #[arg(short = 'T', long = "terms", value_name = "TERM")]
    pub terms: Vec<String>,

    /// Match case exactly
    #[arg(short, long, overrides_with = "no_case_sensitive")]
    pub case_sensitive: bool,

    /// Ignore case, even if the config says otherwise
    #[arg(long, overrides_with = "case_sensitive")]
    pub no_case_sensitive: bool,

    /// Extend each match to the next word boundary
    #[arg(short = 'b', long, overrides_with = "no_until_next_boundary")]
    pub until_next_boundary: bool,

    /// Stop matches at the end of the term
    #[arg(long, overrides_with = "until_next_boundary")]
    pub no_until_next_boundary: bool,

    /// Treat input as HTML, passing well-formed tags through
    #[arg(short, long, overrides_with = "no_markup")]
    pub markup: bool,

    /// Treat input as plain text
    #[arg(long, overrides_with = "markup")]
    pub no_markup: bool,

    /// Output format [default: from config, else ansi]
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// CSS class for the <mark> element in HTML output
    #[arg(long, value_name = "CLASS")]
    pub class: Option<String>,

    /// Config file [default: ~/.highlighter.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Case sensitivity: an explicit flag wins over the config value
    pub fn case_sensitive(&self, config: bool) -> bool {
        resolve(self.case_sensitive, self.no_case_sensitive, config)
    }

    pub fn until_next_boundary(&self, config: bool) -> bool {
        resolve(self.until_next_boundary, self.no_until_next_boundary, config)
    }

    pub fn markup(&self, config: bool) -> bool {
        resolve(self.markup, self.no_markup, config)
    }
}

/// Pick the value of an on/off flag pair, falling back when neither is given
fn resolve(on: bool, off: bool, fallback: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => fallback,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// HTML with highlighted text in <mark>
    Html,
    /// Styled terminal text
    Ansi,
    /// Fragment list as JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Ansi => OutputFormat::Ansi,
            Format::Json => OutputFormat::Json,
        }
    }
}
