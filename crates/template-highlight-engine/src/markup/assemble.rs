use crate::{extract::HighlightSpan, span::Span};

use super::types::RenderNode;

/// Builds the render-node list for `text` from resolved spans.
///
/// `spans` must be ordered and non-overlapping, as returned by
/// [`resolve_overlaps`](crate::resolve::resolve_overlaps). Text between
/// spans becomes `Plain` nodes; empty gaps produce no node. Each span becomes
/// exactly one `Highlighted` node, so concatenating all contents gives back
/// `text` unchanged.
pub fn assemble(text: &str, spans: Vec<HighlightSpan>) -> Vec<RenderNode> {
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut text_start = 0;

    // Helper to flush a gap as a Plain node
    fn flush_text(out: &mut Vec<RenderNode>, text: &str, start: usize, end: usize) {
        let gap = Span::new(start, end);
        if !gap.is_empty() {
            out.push(RenderNode::plain(text, gap));
        }
    }

    for s in spans {
        flush_text(&mut out, text, text_start, s.span.start);
        text_start = s.span.end;
        out.push(RenderNode::highlighted(s.kind, s.span, s.text));
    }

    flush_text(&mut out, text, text_start, text.len());
    out
}
