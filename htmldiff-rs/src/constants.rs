//! Constants shared by the tokenizer and renderer.

/// Tags whose entire subtree is treated as one indivisible comparison unit.
///
/// Used when the caller does not supply an atomic tag list of their own.
/// A caller-supplied list replaces this set wholesale; there is no merging.
pub const DEFAULT_ATOMIC_TAGS: &[&str] = &[
    "iframe", "object", "math", "svg", "script", "video", "head", "style",
];

/// HTML void elements: tags that never have children or a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Name of the marker index attribute, without the `data-` / prefix parts.
pub const OPERATION_INDEX_ATTR: &str = "operation-index";

/// Returns true if `name` (lowercase) is an HTML void element.
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}
