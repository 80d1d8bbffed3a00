//! # Overlap Resolution
//!
//! Merges the per-kind span sets into one ordered, non-overlapping set.
//!
//! Policy is greedy interval scheduling by earliest start: no delimiter kind
//! outranks another, and spans are only ever kept whole or dropped whole.

use crate::extract::HighlightSpan;

/// Resolves overlapping spans from several extraction passes.
///
/// `spans` must list each pass's output in scan order; the stable sort keeps
/// that order for equal starts. A span is accepted when it starts at or after
/// the end of the last accepted span, otherwise it is dropped.
pub fn resolve_overlaps(mut spans: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    spans.sort_by_key(|s| s.span.start);

    let mut last_end = 0;
    let mut out = Vec::with_capacity(spans.len());
    for s in spans {
        if s.span.start >= last_end {
            last_end = s.span.end;
            out.push(s);
        } else {
            log::trace!(
                "dropping {} span {}..{} overlapping accepted span ending at {}",
                s.kind,
                s.span.start,
                s.span.end,
                last_end
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        extract::extract_spans,
        grammar::DelimiterKind::{self, Curly, Round, Square},
        span::Span,
    };

    fn span(kind: DelimiterKind, start: usize, end: usize) -> HighlightSpan {
        HighlightSpan {
            kind,
            span: Span::new(start, end),
            text: String::new(),
        }
    }

    fn all_kinds(text: &str) -> Vec<HighlightSpan> {
        DelimiterKind::ALL
            .into_iter()
            .flat_map(|k| extract_spans(text, k))
            .collect()
    }

    #[test]
    fn earliest_start_wins_across_kinds() {
        let resolved = resolve_overlaps(all_kinds("{a[b}c]"));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, Curly);
        assert_eq!(resolved[0].text, "{a[b}");
    }

    #[test]
    fn enclosing_span_swallows_inner_spans() {
        let resolved = resolve_overlaps(all_kinds("[({})]"));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, Square);
        assert_eq!(resolved[0].span, Span::new(0, 6));
    }

    #[test]
    fn adjacent_spans_are_both_kept() {
        let resolved = resolve_overlaps(all_kinds("(a)[b]{c}"));
        let kinds: Vec<_> = resolved.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![Round, Square, Curly]);
    }

    #[test]
    fn output_is_sorted_even_when_input_is_not() {
        let resolved = resolve_overlaps(vec![span(Round, 10, 12), span(Curly, 0, 3)]);
        assert_eq!(resolved[0].span.start, 0);
        assert_eq!(resolved[1].span.start, 10);
    }

    #[test]
    fn equal_starts_keep_input_order() {
        // cannot arise from real text since openers differ, but stays deterministic
        let resolved = resolve_overlaps(vec![span(Square, 2, 5), span(Curly, 2, 9)]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].kind, Square);
    }

    #[test]
    fn dropped_span_does_not_extend_the_window() {
        // [1,4) accepted; [3,9) dropped; [5,7) must still be accepted
        let resolved = resolve_overlaps(vec![
            span(Curly, 1, 4),
            span(Square, 3, 9),
            span(Round, 5, 7),
        ]);
        let starts: Vec<_> = resolved.iter().map(|s| s.span.start).collect();
        assert_eq!(starts, vec![1, 5]);
    }

    #[test]
    fn empty_input() {
        assert!(resolve_overlaps(vec![]).is_empty());
    }
}
