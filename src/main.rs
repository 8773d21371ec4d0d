//! highlight - print text with terms highlighted

mod args;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::debug;

use highlighter::config::{Config, OutputFormat};
use highlighter::error::{HighlightError, Result};
use highlighter::highlight::{get_fragments, get_html_aware_fragments, Fragment, HighlightOptions};
use highlighter::render::{to_html, write_ansi, MarkStyle, Style};

use crate::args::Cli;

/// JSON output shape
#[derive(Serialize)]
struct Output<'a> {
    pattern: &'a str,
    fragments: &'a [Fragment],
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let options = HighlightOptions::default()
        .with_case_sensitive(cli.case_sensitive(config.case_sensitive))
        .with_until_next_boundary(cli.until_next_boundary(config.until_next_boundary));
    let markup = cli.markup(config.markup);
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.format);

    let text = read_input(cli.file.as_deref())?;
    let single = cli.term.as_deref();
    let list = Some(cli.terms.as_slice());

    let (fragments, pattern) = if markup {
        let split = get_html_aware_fragments(&text, single, list, options);
        (split.fragments, split.pattern)
    } else {
        let split = get_fragments(&text, single, list, options);
        (split.spans(), split.pattern)
    };
    debug!(fragments = fragments.len(), %pattern, ?format, "highlighted input");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Html => {
            let mark = MarkStyle::with_class(cli.class.unwrap_or(config.mark_class));
            out.write_all(to_html(&fragments, &mark).as_bytes())?;
            out.flush()?;
        }
        OutputFormat::Ansi => {
            write_ansi(&mut out, &fragments, Style::highlight(config.color))?;
        }
        OutputFormat::Json => {
            let output = Output {
                pattern: &pattern,
                fragments: &fragments,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Read the whole input from a file, or stdin when no file is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(HighlightError::FileNotFound(path.display().to_string()));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
