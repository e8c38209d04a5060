//! Edit script computation.
//!
//! Divide-and-conquer over the two token sequences: find the best shared run,
//! then split on it and process the segments on either side. The recursion is
//! driven by an explicit work-list so pathological inputs (long documents
//! with no common tokens) cannot overflow the call stack.

use std::ops::Range;

use crate::matching::find_best_match;
use crate::token::Token;

/// One step of the edit script, carrying token-index ranges into the old
/// and/or new sequence.
///
/// Concatenating the old-side ranges (Equal, Delete, Replace) in order
/// reconstructs the old document; the new-side ranges (Equal, Insert,
/// Replace) reconstruct the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOperation {
    /// A run of tokens present in both documents.
    Equal {
        old: Range<usize>,
        new: Range<usize>,
    },
    /// Tokens present only in the new document.
    Insert { new: Range<usize> },
    /// Tokens present only in the old document.
    Delete { old: Range<usize> },
    /// A span with no shared tokens, substituted wholesale.
    Replace {
        old: Range<usize>,
        new: Range<usize>,
    },
}

/// Work items for the explicit divide-and-conquer stack.
enum WorkItem {
    /// A pair of segments still to be diffed.
    Segment(Range<usize>, Range<usize>),
    /// An operation ready to be emitted.
    Emit(DiffOperation),
}

/// Computes the ordered edit script between two token sequences.
pub fn diff(old: &[Token], new: &[Token]) -> Vec<DiffOperation> {
    let mut ops = Vec::new();
    let mut stack = vec![WorkItem::Segment(0..old.len(), 0..new.len())];

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Emit(op) => ops.push(op),
            WorkItem::Segment(old_range, new_range) => {
                if old_range.is_empty() && new_range.is_empty() {
                    continue;
                }

                match find_best_match(old, new, old_range.clone(), new_range.clone()) {
                    Some(m) => {
                        // Pushed in reverse so the before-segment is diffed
                        // first and operations come out in document order.
                        stack.push(WorkItem::Segment(
                            m.end_old()..old_range.end,
                            m.end_new()..new_range.end,
                        ));
                        stack.push(WorkItem::Emit(DiffOperation::Equal {
                            old: m.start_old..m.end_old(),
                            new: m.start_new..m.end_new(),
                        }));
                        stack.push(WorkItem::Segment(
                            old_range.start..m.start_old,
                            new_range.start..m.start_new,
                        ));
                    }
                    None => {
                        let op = if new_range.is_empty() {
                            DiffOperation::Delete { old: old_range }
                        } else if old_range.is_empty() {
                            DiffOperation::Insert { new: new_range }
                        } else {
                            // No shared token: the whole remainder is one
                            // substitution rather than a finer word-level
                            // replacement.
                            DiffOperation::Replace {
                                old: old_range,
                                new: new_range,
                            }
                        };
                        ops.push(op);
                    }
                }
            }
        }
    }

    tracing::debug!(operations = ops.len(), "computed edit script");
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn tokens(html: &str) -> Vec<Token> {
        Tokenizer::new().tokenize(html)
    }

    /// Concatenates the old-side raw text covered by the operations.
    fn old_side(old: &[Token], ops: &[DiffOperation]) -> String {
        let mut out = String::new();
        for op in ops {
            let range = match op {
                DiffOperation::Equal { old, .. }
                | DiffOperation::Delete { old }
                | DiffOperation::Replace { old, .. } => old.clone(),
                DiffOperation::Insert { .. } => continue,
            };
            for token in &old[range] {
                out.push_str(token.raw());
            }
        }
        out
    }

    /// Concatenates the new-side raw text covered by the operations.
    fn new_side(new: &[Token], ops: &[DiffOperation]) -> String {
        let mut out = String::new();
        for op in ops {
            let range = match op {
                DiffOperation::Equal { new, .. }
                | DiffOperation::Insert { new }
                | DiffOperation::Replace { new, .. } => new.clone(),
                DiffOperation::Delete { .. } => continue,
            };
            for token in &new[range] {
                out.push_str(token.raw());
            }
        }
        out
    }

    #[test]
    fn test_identical_documents_yield_single_equal() {
        let old = tokens("<p>same</p>");
        let new = tokens("<p>same</p>");
        let ops = diff(&old, &new);
        assert_eq!(
            ops,
            vec![DiffOperation::Equal {
                old: 0..old.len(),
                new: 0..new.len(),
            }]
        );
    }

    #[test]
    fn test_pure_insertion() {
        let old = tokens("Hello world");
        let new = tokens("Hello cruel world");
        let ops = diff(&old, &new);
        assert!(ops
            .iter()
            .any(|op| matches!(op, DiffOperation::Insert { .. })));
        assert!(!ops
            .iter()
            .any(|op| matches!(op, DiffOperation::Delete { .. })));
    }

    #[test]
    fn test_pure_deletion() {
        let old = tokens("Hello cruel world");
        let new = tokens("Hello world");
        let ops = diff(&old, &new);
        assert!(ops
            .iter()
            .any(|op| matches!(op, DiffOperation::Delete { .. })));
        assert!(!ops
            .iter()
            .any(|op| matches!(op, DiffOperation::Insert { .. })));
    }

    #[test]
    fn test_disjoint_documents_yield_replace() {
        let old = tokens("abc");
        let new = tokens("xyz");
        let ops = diff(&old, &new);
        assert_eq!(
            ops,
            vec![DiffOperation::Replace {
                old: 0..old.len(),
                new: 0..new.len(),
            }]
        );
    }

    #[test]
    fn test_operations_reconstruct_both_documents() {
        let before = "<p>The quick brown fox</p><ul><li>one</li><li>two</li></ul>";
        let after = "<p>The slow brown cat</p><ul><li>one</li><li>three</li></ul>";
        let old = tokens(before);
        let new = tokens(after);
        let ops = diff(&old, &new);
        assert_eq!(old_side(&old, &ops), before);
        assert_eq!(new_side(&new, &ops), after);
    }

    #[test]
    fn test_empty_old_document() {
        let old = tokens("");
        let new = tokens("x");
        let ops = diff(&old, &new);
        assert_eq!(ops, vec![DiffOperation::Insert { new: 0..1 }]);
    }

    #[test]
    fn test_ordering_interleaves_changes_in_document_order() {
        let old = tokens("a b c");
        let new = tokens("a x c");
        let ops = diff(&old, &new);
        // equal "a ", replace b/x, equal " c" -- replace sits between the
        // surrounding equal runs.
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], DiffOperation::Equal { .. }));
        assert!(matches!(ops[1], DiffOperation::Replace { .. }));
        assert!(matches!(ops[2], DiffOperation::Equal { .. }));
    }
}
