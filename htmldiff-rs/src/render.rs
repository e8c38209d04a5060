//! Edit script rendering.
//!
//! Serializes an operation list back into HTML, wrapping changed spans in
//! `<ins>`/`<del>` markers. The governing invariant is that a marker never
//! spans a tag boundary it does not fully own: a changed span containing an
//! opening tag whose close lies outside the span (or vice versa) is split
//! into several markers around the bare tag, each with a freshly incremented
//! operation index. Structural integrity of the output takes priority over
//! minimizing marker count.
//!
//! All mutable rendering state (output buffer, open-tag stack, operation
//! counter) lives in a call-scoped context, so concurrent diff calls are
//! independent.

use crate::constants::OPERATION_INDEX_ATTR;
use crate::diff::DiffOperation;
use crate::token::{TagKind, Token, TokenKind};
use crate::DiffOptions;

/// Which marker element a changed span is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Insert,
    Delete,
}

impl MarkerKind {
    fn element(self) -> &'static str {
        match self {
            MarkerKind::Insert => "ins",
            MarkerKind::Delete => "del",
        }
    }
}

/// Call-scoped rendering state.
struct RenderContext<'a> {
    out: String,
    /// Names of tags opened by already-rendered content and not yet closed.
    open_tags: Vec<String>,
    /// Marker counter; the first marker gets index 1.
    op_index: u32,
    options: &'a DiffOptions,
}

impl RenderContext<'_> {
    /// Serializes an equal run verbatim, tracking tag structure.
    fn write_equal(&mut self, tokens: &[Token]) {
        for token in tokens {
            self.out.push_str(token.raw());
            self.track_tag(token);
        }
    }

    /// Updates the open-tag stack for a tag rendered outside any marker.
    /// Mismatched closing tags pass through without mutating the stack.
    fn track_tag(&mut self, token: &Token) {
        match token.kind() {
            TokenKind::Tag {
                name,
                kind: TagKind::Opening,
            } => self.open_tags.push(name.clone()),
            TokenKind::Tag {
                name,
                kind: TagKind::Closing,
            } => {
                if self.open_tags.last() == Some(name) {
                    self.open_tags.pop();
                }
            }
            _ => {}
        }
    }

    /// Serializes a changed span, wrapping owned runs in markers and
    /// emitting unowned tags bare between them.
    fn write_marked(&mut self, kind: MarkerKind, tokens: &[Token]) {
        let owned = owned_tokens(tokens);
        let mut in_marker = false;

        for (token, owned) in tokens.iter().zip(owned) {
            // A closing tag that matches nothing, neither in the span nor
            // in the surrounding document, closes no boundary; it stays
            // inside the marker verbatim.
            let keep_inside = owned || self.is_stray_close(token);

            if keep_inside {
                if !in_marker {
                    self.open_marker(kind);
                    in_marker = true;
                }
                self.out.push_str(token.raw());
            } else {
                if in_marker {
                    self.close_marker(kind);
                    in_marker = false;
                }
                self.out.push_str(token.raw());
                self.track_tag(token);
            }
        }

        if in_marker {
            self.close_marker(kind);
        }
    }

    /// True for a closing tag that does not close the innermost open tag.
    fn is_stray_close(&self, token: &Token) -> bool {
        match token.kind() {
            TokenKind::Tag {
                name,
                kind: TagKind::Closing,
            } => self.open_tags.last() != Some(name),
            _ => false,
        }
    }

    fn open_marker(&mut self, kind: MarkerKind) {
        self.op_index += 1;
        self.out.push('<');
        self.out.push_str(kind.element());
        if let Some(class) = &self.options.class_name {
            self.out.push_str(&format!(" class=\"{class}\""));
        }
        let attr = match &self.options.data_prefix {
            Some(prefix) => format!("data-{prefix}-{OPERATION_INDEX_ATTR}"),
            None => format!("data-{OPERATION_INDEX_ATTR}"),
        };
        self.out
            .push_str(&format!(" {attr}=\"{}\"", self.op_index));
        self.out.push('>');
    }

    fn close_marker(&mut self, kind: MarkerKind) {
        self.out.push_str("</");
        self.out.push_str(kind.element());
        self.out.push('>');
    }
}

/// Computes, per token of a changed span, whether the token may sit inside
/// a marker.
///
/// Opening/closing tag pairs balanced within the span are owned; an opening
/// tag whose close lies outside the span, and a closing tag whose open does,
/// are not. Everything else (words, whitespace, self-closing tags, atomic
/// blocks) is owned.
fn owned_tokens(tokens: &[Token]) -> Vec<bool> {
    let mut owned = vec![true; tokens.len()];
    let mut stack: Vec<(usize, &str)> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind() {
            TokenKind::Tag {
                name,
                kind: TagKind::Opening,
            } => {
                // Pessimistic until the matching close shows up.
                owned[i] = false;
                stack.push((i, name.as_str()));
            }
            TokenKind::Tag {
                name,
                kind: TagKind::Closing,
            } => match stack.last() {
                Some(&(open_idx, n)) if n == name.as_str() => {
                    stack.pop();
                    owned[open_idx] = true;
                }
                _ => owned[i] = false,
            },
            _ => {}
        }
    }

    owned
}

/// Renders an edit script as annotated HTML.
pub fn render(
    old: &[Token],
    new: &[Token],
    ops: &[DiffOperation],
    options: &DiffOptions,
) -> String {
    let mut ctx = RenderContext {
        out: String::new(),
        open_tags: Vec::new(),
        op_index: 0,
        options,
    };

    for op in ops {
        match op {
            DiffOperation::Equal { new: range, .. } => ctx.write_equal(&new[range.clone()]),
            DiffOperation::Insert { new: range } => {
                ctx.write_marked(MarkerKind::Insert, &new[range.clone()]);
            }
            DiffOperation::Delete { old: range } => {
                ctx.write_marked(MarkerKind::Delete, &old[range.clone()]);
            }
            DiffOperation::Replace {
                old: old_range,
                new: new_range,
            } => {
                ctx.write_marked(MarkerKind::Delete, &old[old_range.clone()]);
                ctx.write_marked(MarkerKind::Insert, &new[new_range.clone()]);
            }
        }
    }

    tracing::debug!(markers = ctx.op_index, "rendered annotated document");
    ctx.out
}
