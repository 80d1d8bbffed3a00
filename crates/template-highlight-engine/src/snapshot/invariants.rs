use crate::markup::{NodeKind, RenderNode};

/// Validates that `nodes` partition `text`.
///
/// Asserts that:
/// - Nodes are non-empty, start at 0, and each starts where the previous ended
/// - The last node ends at `text.len()` (an empty text has no nodes)
/// - Every node's content equals the text sliced by its span
/// - Highlighted nodes open and close with their kind's delimiters
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, nodes: &[RenderNode]) {
    let mut expected_start = 0;
    for (i, n) in nodes.iter().enumerate() {
        assert!(
            n.span.start == expected_start,
            "node {i} starts at {} but previous node ended at {expected_start}",
            n.span.start
        );
        assert!(
            !n.span.is_empty() && n.span.end <= text.len(),
            "node {i} span out of bounds: {:?} (text len: {})",
            n.span,
            text.len()
        );
        assert!(
            n.content == n.span.slice(text),
            "node {i} content {:?} does not match text at {:?}",
            n.content,
            n.span
        );
        if let NodeKind::Highlighted(kind) = n.kind {
            let bytes = n.content.as_bytes();
            assert!(
                bytes.len() >= 2
                    && bytes[0] == kind.open()
                    && bytes[bytes.len() - 1] == kind.close(),
                "node {i} highlighted as {kind} but content is {:?}",
                n.content
            );
        }
        expected_start = n.span.end;
    }
    assert!(
        expected_start == text.len(),
        "nodes cover 0..{expected_start} but text len is {}",
        text.len()
    );
}
