//! HTML-aware fragmentation
//!
//! Text is scanned for tag candidates, which are then balanced against
//! each other with a stack of pending open tags. Tags that pair up (or
//! close themselves) pass through as markup. Everything else, including
//! tag-like text that doesn't pair, is literal text: it is searched for
//! terms and HTML-encoded on output.

use std::ops::Range;

use tracing::{debug, trace};

use super::entities::decode;
use super::fragment::Fragment;
use super::splitter::Splitter;
use super::terms::HighlightOptions;

/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements allowed to carry valueless attributes (`<input disabled>`)
///
/// Anything else with a bare attribute, like `<notatag an attribute>`,
/// reads as prose in angle brackets rather than a tag.
const KNOWN_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd",
    "label", "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre",
    "progress", "q", "s", "samp", "script", "section", "select", "small", "source", "span",
    "strong", "style", "sub", "summary", "sup", "table", "tbody", "td", "template", "textarea",
    "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Shape of a tag candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagForm {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name ... />`
    SelfClosing,
}

/// A syntactically valid tag found in the input
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tag {
    /// Byte range of the whole tag, angle brackets included
    range: Range<usize>,
    /// Lowercased element name
    name: String,
    form: TagForm,
}

impl Tag {
    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

/// Byte cursor over a tag candidate
struct TagCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    /// Set once an attribute without a value has been read
    bare_attribute: bool,
}

impl<'a> TagCursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip ASCII whitespace, returning whether any was skipped
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Consume bytes while `accept` holds, returning the count
    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `[A-Za-z][A-Za-z0-9-]*`
    fn tag_name(&mut self) -> Option<Range<usize>> {
        let start = self.pos;
        if !self.peek()?.is_ascii_alphabetic() {
            return None;
        }
        self.take_while(|b| b.is_ascii_alphanumeric() || b == b'-');
        Some(start..self.pos)
    }

    /// `name`, `name=value`, `name="value"` or `name='value'`
    ///
    /// Returns whether whitespace followed the attribute.
    fn attribute(&mut self) -> Option<bool> {
        let name_len = self.take_while(|b| {
            !b.is_ascii_whitespace() && !matches!(b, b'"' | b'\'' | b'>' | b'/' | b'=' | b'<')
        });
        if name_len == 0 {
            return None;
        }

        let spaced = self.skip_whitespace();
        if !self.eat(b'=') {
            self.bare_attribute = true;
            return Some(spaced);
        }

        self.skip_whitespace();
        match self.peek()? {
            quote @ (b'"' | b'\'') => {
                self.pos += 1;
                self.take_while(|b| b != quote);
                if !self.eat(quote) {
                    return None;
                }
            }
            _ => {
                let value_len = self.take_while(|b| {
                    !b.is_ascii_whitespace()
                        && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
                });
                if value_len == 0 {
                    return None;
                }
            }
        }

        Some(self.skip_whitespace())
    }
}

/// Try to read a tag starting at `start` (which must hold `<`)
fn parse_tag(text: &str, start: usize) -> Option<Tag> {
    let mut cursor = TagCursor {
        bytes: text.as_bytes(),
        pos: start + 1,
        bare_attribute: false,
    };

    let closing = cursor.eat(b'/');
    let name = cursor.tag_name()?;
    let name = text[name].to_ascii_lowercase();

    if closing {
        cursor.skip_whitespace();
        if !cursor.eat(b'>') {
            return None;
        }
        return Some(Tag {
            range: start..cursor.pos,
            name,
            form: TagForm::Close,
        });
    }

    let mut spaced = cursor.skip_whitespace();
    let form = loop {
        match cursor.peek()? {
            b'>' => {
                cursor.pos += 1;
                break TagForm::Open;
            }
            b'/' if cursor.peek_at(1) == Some(b'>') => {
                cursor.pos += 2;
                break TagForm::SelfClosing;
            }
            // Attributes must be separated from the name and each other
            _ if !spaced => return None,
            _ => spaced = cursor.attribute()?,
        }
    };

    if cursor.bare_attribute && !KNOWN_ELEMENTS.contains(&name.as_str()) {
        trace!(tag = %name, at = start, "bare attribute on unknown element");
        return None;
    }

    Some(Tag {
        range: start..cursor.pos,
        name,
        form,
    })
}

/// Find every syntactically valid tag, in order
fn scan_tags(text: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('<') {
        let start = pos + offset;
        match parse_tag(text, start) {
            Some(tag) => {
                pos = tag.range.end;
                tags.push(tag);
            }
            None => pos = start + 1,
        }
    }

    tags
}

/// Decide which tags resolve to markup
///
/// A closing tag only pairs with the open tag on top of the stack.
/// Mismatched closers and openers left on the stack stay text.
fn balance(tags: &[Tag]) -> Vec<bool> {
    let mut markup = vec![false; tags.len()];
    let mut open: Vec<usize> = Vec::new();

    for (idx, tag) in tags.iter().enumerate() {
        match tag.form {
            TagForm::SelfClosing => markup[idx] = true,
            TagForm::Open if tag.is_void() => markup[idx] = true,
            TagForm::Open => open.push(idx),
            TagForm::Close => match open.last() {
                Some(&top) if tags[top].name == tag.name => {
                    open.pop();
                    markup[top] = true;
                    markup[idx] = true;
                }
                _ => trace!(tag = %tag.name, at = tag.range.start, "mismatched closing tag"),
            },
        }
    }

    for idx in open {
        trace!(tag = %tags[idx].name, at = tags[idx].range.start, "unclosed tag");
    }

    markup
}

/// Result of HTML-aware fragmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSplit {
    pub fragments: Vec<Fragment>,
    /// The pattern used, empty when nothing was highlighted
    pub pattern: String,
}

/// Split an HTML-ish `text`, keeping well-formed tags as markup and
/// highlighting terms only in the text between them
pub fn get_html_aware_fragments<S: AsRef<str>>(
    text: &str,
    single: Option<&str>,
    list: Option<&[S]>,
    options: HighlightOptions,
) -> MarkupSplit {
    if text.is_empty() {
        return MarkupSplit {
            fragments: Vec::new(),
            pattern: String::new(),
        };
    }

    let splitter = Splitter::new(single, list, options);
    let fragments = fragment_markup(text, &splitter);
    debug!(fragments = fragments.len(), "split markup");

    MarkupSplit {
        fragments,
        pattern: splitter.pattern().to_string(),
    }
}

/// Fragment `text` with an already compiled splitter
pub fn fragment_markup(text: &str, splitter: &Splitter) -> Vec<Fragment> {
    let tags = scan_tags(text);
    let markup = balance(&tags);

    let mut fragments = Vec::new();
    let mut region_start = 0;

    for (tag, _) in tags.iter().zip(&markup).filter(|(_, m)| **m) {
        push_text_region(&mut fragments, &text[region_start..tag.range.start], splitter);
        fragments.push(Fragment::markup(&text[tag.range.clone()]));
        region_start = tag.range.end;
    }
    push_text_region(&mut fragments, &text[region_start..], splitter);

    fragments
}

/// Decode a text region and split it into text and highlighted fragments
fn push_text_region(fragments: &mut Vec<Fragment>, raw: &str, splitter: &Splitter) {
    if raw.is_empty() {
        return;
    }

    let decoded = decode(raw);
    for (range, matched) in splitter.segments(&decoded) {
        let content = &decoded[range];
        fragments.push(if matched {
            Fragment::highlighted(content)
        } else {
            Fragment::text(content)
        });
    }
}
