//! Token data model.
//!
//! A token is the smallest unit compared by the diff algorithm. Tokens are
//! immutable once produced; equality for matching purposes is exact textual
//! equality of the raw representation (tags compare by full raw text
//! including attributes, atomic blocks by the full serialized subtree).

/// How a tag token relates to the element structure around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// An opening tag that expects a matching closing tag.
    Opening,
    /// A closing tag (`</name>`).
    Closing,
    /// A tag with no children: `<x/>`, a void element, a comment, or a
    /// declaration.
    SelfClosing,
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A single tag. `name` is lowercased; the raw text keeps original case
    /// and attribute text.
    Tag { name: String, kind: TagKind },
    /// A run of word characters.
    Word,
    /// A run of whitespace, or a single punctuation character.
    Whitespace,
    /// An atomic tag together with its entire subtree, as one opaque unit.
    AtomicBlock { name: String },
}

/// An indivisible unit of comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
    kind: TokenKind,
}

impl Token {
    /// Creates a word token.
    pub fn word(raw: impl Into<String>) -> Self {
        Token {
            raw: raw.into(),
            kind: TokenKind::Word,
        }
    }

    /// Creates a whitespace or punctuation token.
    pub fn whitespace(raw: impl Into<String>) -> Self {
        Token {
            raw: raw.into(),
            kind: TokenKind::Whitespace,
        }
    }

    /// Creates a tag token. `name` must already be lowercased.
    pub fn tag(raw: impl Into<String>, name: impl Into<String>, kind: TagKind) -> Self {
        Token {
            raw: raw.into(),
            kind: TokenKind::Tag {
                name: name.into(),
                kind,
            },
        }
    }

    /// Creates an atomic block token. `name` must already be lowercased.
    pub fn atomic(raw: impl Into<String>, name: impl Into<String>) -> Self {
        Token {
            raw: raw.into(),
            kind: TokenKind::AtomicBlock { name: name.into() },
        }
    }

    /// The exact source text this token covers.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The token's kind.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns true for single tag tokens (not atomic blocks).
    pub fn is_tag(&self) -> bool {
        matches!(self.kind, TokenKind::Tag { .. })
    }

    /// The tag kind, for tag tokens.
    pub fn tag_kind(&self) -> Option<TagKind> {
        match &self.kind {
            TokenKind::Tag { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The lowercased tag name, for tag tokens.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Tag { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_equality_is_textual() {
        let a = Token::tag("<p class=\"x\">", "p", TagKind::Opening);
        let b = Token::tag("<p class=\"x\">", "p", TagKind::Opening);
        let c = Token::tag("<p class=\"y\">", "p", TagKind::Opening);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tag_accessors() {
        let t = Token::tag("</DIV>", "div", TagKind::Closing);
        assert!(t.is_tag());
        assert_eq!(t.tag_name(), Some("div"));
        assert_eq!(t.tag_kind(), Some(TagKind::Closing));
        assert_eq!(t.raw(), "</DIV>");

        let w = Token::word("hello");
        assert!(!w.is_tag());
        assert_eq!(w.tag_name(), None);
    }
}
