//! HTML tokenizer.
//!
//! Splits a raw HTML string into the token sequence the diff operates on.
//! The scanner is tolerant: it never rejects malformed input. Unterminated
//! tags and atomic blocks consume to end-of-input, and a stray `<` that does
//! not begin a tag is treated as plain punctuation.
//!
//! Tokenization is lossless: concatenating the raw text of all emitted
//! tokens reproduces the input exactly.

use crate::constants::{is_void_tag, DEFAULT_ATOMIC_TAGS};
use crate::token::{TagKind, Token};

/// Tokenizer configured with a set of atomic tag names.
pub struct Tokenizer {
    /// Lowercased tag names whose subtrees are emitted as single tokens.
    atomic_tags: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with the default atomic tag set.
    pub fn new() -> Self {
        Tokenizer {
            atomic_tags: DEFAULT_ATOMIC_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Creates a tokenizer from a comma-separated list of atomic tag names.
    ///
    /// The list replaces the default set wholesale; an empty list disables
    /// atomic handling entirely.
    pub fn with_atomic_tags(list: &str) -> Self {
        Tokenizer {
            atomic_tags: list
                .split(',')
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    fn is_atomic(&self, name: &str) -> bool {
        self.atomic_tags.iter().any(|t| t == name)
    }

    /// Tokenizes an HTML document.
    pub fn tokenize(&self, html: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < html.len() {
            let rest = &html[i..];
            let Some(c) = rest.chars().next() else {
                break;
            };

            if c == '<' && is_tag_start(rest) {
                let (end, name, kind) = scan_tag(html, i);
                if kind == TagKind::Opening && self.is_atomic(&name) {
                    let block_end = scan_atomic_block(html, end, &name);
                    tokens.push(Token::atomic(&html[i..block_end], name));
                    i = block_end;
                } else if kind == TagKind::SelfClosing && self.is_atomic(&name) {
                    // A childless atomic tag is still one opaque unit.
                    tokens.push(Token::atomic(&html[i..end], name));
                    i = end;
                } else {
                    tokens.push(Token::tag(&html[i..end], name, kind));
                    i = end;
                }
            } else if c.is_whitespace() {
                let end = scan_while(html, i, char::is_whitespace);
                tokens.push(Token::whitespace(&html[i..end]));
                i = end;
            } else if is_word_char(c) {
                let end = scan_while(html, i, is_word_char);
                tokens.push(Token::word(&html[i..end]));
                i = end;
            } else {
                // Punctuation (including a stray '<') is a single-character
                // token so change boundaries never land inside a word.
                let end = i + c.len_utf8();
                tokens.push(Token::whitespace(&html[i..end]));
                i = end;
            }
        }

        tracing::trace!(tokens = tokens.len(), "tokenized document");
        tokens
    }
}

/// Characters that form word tokens.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '#' | '@')
}

/// Returns true if `rest` (starting with `<`) actually begins a tag.
fn is_tag_start(rest: &str) -> bool {
    match rest[1..].chars().next() {
        Some(c) => c == '/' || c == '!' || c == '?' || c.is_ascii_alphabetic(),
        None => false,
    }
}

/// Extends a run of characters satisfying `pred` starting at byte `start`.
fn scan_while(html: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    for c in html[start..].chars() {
        if !pred(c) {
            break;
        }
        end += c.len_utf8();
    }
    end
}

/// Scans one tag starting at byte `start` (which must be `<`).
///
/// Returns the exclusive byte end of the tag, its lowercased name, and its
/// kind. An unterminated tag consumes to end-of-input.
fn scan_tag(html: &str, start: usize) -> (usize, String, TagKind) {
    let rest = &html[start..];

    // Comments may contain '>', so they are scanned to '-->'.
    if rest.starts_with("<!--") {
        let end = match rest.find("-->") {
            Some(pos) => start + pos + 3,
            None => html.len(),
        };
        return (end, "!--".to_string(), TagKind::SelfClosing);
    }

    let end = match rest.find('>') {
        Some(pos) => start + pos + 1,
        None => html.len(),
    };
    let raw = &html[start..end];

    let is_closing = raw.starts_with("</");
    let name_start = if is_closing { 2 } else { 1 };
    let name: String = raw[name_start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '_'))
        .flat_map(char::to_lowercase)
        .collect();

    let kind = if is_closing {
        TagKind::Closing
    } else if raw.starts_with("<!") || raw.starts_with("<?") {
        TagKind::SelfClosing
    } else if raw.ends_with("/>") || is_void_tag(&name) {
        TagKind::SelfClosing
    } else {
        TagKind::Opening
    };

    (end, name, kind)
}

/// Scans forward from the end of an atomic opening tag to the end of its
/// matching closing tag, depth-counting nested same-name tags.
///
/// Returns the exclusive byte end of the block; end-of-input if the block is
/// never closed.
fn scan_atomic_block(html: &str, after_open: usize, name: &str) -> usize {
    let mut depth = 1usize;
    let mut i = after_open;

    while i < html.len() {
        let rel = match html[i..].find('<') {
            Some(rel) => rel,
            None => return html.len(),
        };
        let tag_at = i + rel;
        if !is_tag_start(&html[tag_at..]) {
            i = tag_at + 1;
            continue;
        }

        let (end, tag_name, kind) = scan_tag(html, tag_at);
        if tag_name == name {
            match kind {
                TagKind::Opening => depth += 1,
                TagKind::Closing => {
                    depth -= 1;
                    if depth == 0 {
                        return end;
                    }
                }
                TagKind::SelfClosing => {}
            }
        }
        i = end;
    }

    html.len()
}
