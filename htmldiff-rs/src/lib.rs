//! Visually-annotated HTML diffing.
//!
//! This library computes the difference between two versions of an HTML
//! document and produces a third document in which every inserted passage is
//! wrapped in `<ins>` and every deleted passage in `<del>`, while the
//! surrounding markup structure is preserved so the result still renders as
//! valid HTML.
//!
//! # Overview
//!
//! The pipeline is a token-stream diff with HTML-aware tokenization, not a
//! tree-edit-distance algorithm:
//!
//! 1. Both documents are tokenized into tags, words, whitespace/punctuation
//!    runs, and atomic blocks (tags like `<script>` whose content is never
//!    split).
//! 2. The longest shared token runs are found with a position index and the
//!    segments around them are diffed in turn, yielding an ordered list of
//!    equal/insert/delete/replace operations.
//! 3. The operation list is serialized back to HTML. Changed spans are
//!    wrapped in markers carrying an auto-incrementing operation-index
//!    attribute; markers are split rather than ever spanning a tag boundary
//!    they do not own.
//!
//! Malformed HTML is never rejected: unmatched closing tags pass through,
//! unterminated tags and atomic blocks consume to end-of-input.
//!
//! # Example
//!
//! ```
//! use htmldiff_rs::{diff_html, DiffOptions};
//!
//! let diffed = diff_html(
//!     "<p>Hello world</p>",
//!     "<p>Hello cruel world</p>",
//!     &DiffOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(
//!     diffed,
//!     "<p>Hello <ins data-operation-index=\"1\">cruel </ins>world</p>"
//! );
//! ```

pub mod constants;
pub mod diff;
pub mod error;
pub mod matching;
pub mod render;
pub mod token;
pub mod tokenizer;

use std::fs;
use std::path::Path;

// Re-export commonly used types
pub use diff::{diff, DiffOperation};
pub use error::{Error, Result};
pub use matching::{find_best_match, Match};
pub use render::render;
pub use token::{TagKind, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Options controlling marker rendering and tokenization.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Class attribute added to every `<ins>`/`<del>` marker.
    pub class_name: Option<String>,
    /// Prefix for the index attribute: `data-{prefix}-operation-index`
    /// instead of `data-operation-index`.
    pub data_prefix: Option<String>,
    /// Comma-separated list of atomic tag names, replacing the default set
    /// wholesale.
    pub atomic_tags: Option<String>,
}

/// Diffs two HTML documents and returns the annotated result.
///
/// Returns [`Error::EmptyDocument`] if either input is empty; malformed HTML
/// is handled tolerantly and never fails.
pub fn diff_html(before: &str, after: &str, options: &DiffOptions) -> Result<String> {
    if before.is_empty() {
        return Err(Error::EmptyDocument("before"));
    }
    if after.is_empty() {
        return Err(Error::EmptyDocument("after"));
    }

    let tokenizer = match &options.atomic_tags {
        Some(list) => Tokenizer::with_atomic_tags(list),
        None => Tokenizer::new(),
    };
    let old = tokenizer.tokenize(before);
    let new = tokenizer.tokenize(after);
    tracing::debug!(
        old_tokens = old.len(),
        new_tokens = new.len(),
        "tokenized documents"
    );

    let ops = diff::diff(&old, &new);
    Ok(render::render(&old, &new, &ops, options))
}

/// Reads two HTML files and diffs them.
///
/// Empty files are rejected before the diff runs.
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    before: P,
    after: Q,
    options: &DiffOptions,
) -> Result<String> {
    let before_html = fs::read_to_string(before)?;
    let after_html = fs::read_to_string(after)?;
    diff_html(&before_html, &after_html, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_rejected() {
        let err = diff_html("", "<p>x</p>", &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument("before")));

        let err = diff_html("<p>x</p>", "", &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument("after")));
    }

    #[test]
    fn test_atomic_tags_option_replaces_default() {
        let options = DiffOptions {
            atomic_tags: Some("span".to_string()),
            ..DiffOptions::default()
        };
        // With "span" atomic, the changed span is replaced as one unit.
        let out = diff_html("<span>a b</span>", "<span>a c</span>", &options).unwrap();
        assert!(out.contains("<del data-operation-index=\"1\"><span>a b</span></del>"));
        assert!(out.contains("<ins data-operation-index=\"2\"><span>a c</span></ins>"));
    }
}
