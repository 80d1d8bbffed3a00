use crate::{
    caret::{self, NodePosition},
    extract::{HighlightSpan, extract_spans},
    grammar::DelimiterKind,
    markup::{RenderNode, assemble},
    resolve::resolve_overlaps,
};

/// Result of one highlight cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Render nodes partitioning the raw text.
    pub nodes: Vec<RenderNode>,
    /// The caret, translated against `nodes`.
    pub caret: NodePosition,
}

/// Runs the extract → resolve → assemble pipeline.
///
/// The only configuration is the scan order: kinds are extracted in this
/// order, which also breaks ties between spans starting at the same offset.
/// A kind absent from the scan order is never highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    scan_order: Vec<DelimiterKind>,
}

impl Highlighter {
    /// Highlighter scanning curly, then square, then round.
    pub fn new() -> Self {
        Self {
            scan_order: DelimiterKind::ALL.to_vec(),
        }
    }

    /// Highlighter with a custom scan order. Repeated kinds are ignored.
    pub fn with_scan_order(kinds: impl IntoIterator<Item = DelimiterKind>) -> Self {
        let mut scan_order = Vec::with_capacity(DelimiterKind::ALL.len());
        for kind in kinds {
            if !scan_order.contains(&kind) {
                scan_order.push(kind);
            }
        }
        Self { scan_order }
    }

    pub fn scan_order(&self) -> &[DelimiterKind] {
        &self.scan_order
    }

    /// Extracts spans of every configured kind, pass by pass in scan order.
    ///
    /// The result may contain overlapping spans of different kinds.
    pub fn extract_all(&self, text: &str) -> Vec<HighlightSpan> {
        let mut spans = vec![];
        for &kind in &self.scan_order {
            let found = extract_spans(text, kind);
            log::trace!("{kind}: {} span(s)", found.len());
            spans.extend(found);
        }
        spans
    }

    /// Segments `text` into render nodes.
    pub fn highlight(&self, text: &str) -> Vec<RenderNode> {
        let resolved = resolve_overlaps(self.extract_all(text));
        assemble(text, resolved)
    }

    /// Runs one full highlight cycle.
    ///
    /// `caret` is the raw-text offset captured before re-rendering; it is
    /// clamped into the text and returned as a position in the new nodes.
    pub fn cycle(&self, text: &str, caret: usize) -> Cycle {
        let nodes = self.highlight(text);
        let caret = caret::locate(&nodes, caret);
        log::debug!(
            "highlight cycle: {} byte(s), {} node(s), caret at node {} +{}",
            text.len(),
            nodes.len(),
            caret.node_index,
            caret.local_offset
        );
        Cycle { nodes, caret }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Segments `text` with the default scan order.
pub fn highlight(text: &str) -> Vec<RenderNode> {
    Highlighter::new().highlight(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        grammar::DelimiterKind::{Curly, Round, Square},
        markup::NodeKind,
        span::Span,
    };

    #[test]
    fn default_scan_order() {
        assert_eq!(Highlighter::new().scan_order(), &[Curly, Square, Round]);
        assert_eq!(Highlighter::default(), Highlighter::new());
    }

    #[test]
    fn scan_order_drops_repeats() {
        let h = Highlighter::with_scan_order([Round, Curly, Round, Curly]);
        assert_eq!(h.scan_order(), &[Round, Curly]);
    }

    #[test]
    fn kinds_outside_scan_order_stay_plain() {
        let h = Highlighter::with_scan_order([Curly]);
        let nodes = h.highlight("{a} [b] (c)");
        let highlighted: Vec<_> = nodes.iter().filter_map(|n| n.delimiter()).collect();
        assert_eq!(highlighted, vec![Curly]);
    }

    #[test]
    fn no_same_kind_nesting() {
        let nodes = highlight("{a{b}c}");
        let contents: Vec<_> = nodes.iter().map(|n| (n.kind, n.content.as_str())).collect();
        assert_eq!(
            contents,
            vec![
                (NodeKind::Plain, "{a"),
                (NodeKind::Highlighted(Curly), "{b}"),
                (NodeKind::Plain, "c}"),
            ]
        );
    }

    #[test]
    fn cross_kind_overlap_keeps_earliest_whole() {
        let nodes = highlight("{a[b}c]");
        assert_eq!(
            nodes,
            vec![
                RenderNode::highlighted(Curly, Span::new(0, 5), "{a[b}".to_string()),
                RenderNode::plain("{a[b}c]", Span::new(5, 7)),
            ]
        );
    }

    #[test]
    fn empty_content_span() {
        let nodes = highlight("{}");
        assert_eq!(
            nodes,
            vec![RenderNode::highlighted(Curly, Span::new(0, 2), "{}".to_string())]
        );
    }

    #[rstest]
    #[case::unclosed("{abc")]
    #[case::only_openers("{[({[(")]
    #[case::only_closers(")]}")]
    #[case::mismatched("{a]b)c")]
    #[case::deep_nesting("{{{{{{a")]
    fn malformed_input_is_one_plain_node(#[case] text: &str) {
        let nodes = highlight(text);
        assert_eq!(nodes, vec![RenderNode::plain(text, Span::new(0, text.len()))]);
    }

    #[test]
    fn empty_text() {
        let cycle = Highlighter::new().cycle("", 0);
        assert!(cycle.nodes.is_empty());
        assert_eq!(cycle.caret, NodePosition::START);
    }

    #[test]
    fn cycle_is_idempotent() {
        let text = "Hi. {AliasRepName} here. [I'd like to buy/I want to acquire] {PropertyAddress}.";
        let h = Highlighter::new();
        assert_eq!(h.cycle(text, 30), h.cycle(text, 30));
    }

    #[test]
    fn cycle_translates_caret_into_new_nodes() {
        let cycle = Highlighter::new().cycle("Hi {Name}!", 6);
        assert_eq!(
            cycle.caret,
            NodePosition {
                node_index: 1,
                local_offset: 3
            }
        );
        assert_eq!(caret::resolve(&cycle.nodes, cycle.caret), 6);
    }

    #[test]
    fn cycle_clamps_out_of_range_caret() {
        let cycle = Highlighter::new().cycle("ab", 50);
        assert_eq!(caret::resolve(&cycle.nodes, cycle.caret), 2);
    }
}
