use crate::{grammar::DelimiterKind, span::Span};

/// How a render node is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Text outside any recognized span, drawn unstyled.
    Plain,
    /// One whole span of the given kind, drawn in that kind's color.
    Highlighted(DelimiterKind),
}

/// A contiguous run of the displayed text.
///
/// A node list from [`assemble`](super::assemble) partitions the raw text:
/// spans are ordered, touch end to start, and `content` is the raw text
/// sliced by `span`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub kind: NodeKind,
    pub span: Span,
    pub content: String,
}

impl RenderNode {
    pub fn plain(text: &str, span: Span) -> Self {
        Self {
            kind: NodeKind::Plain,
            span,
            content: span.slice(text).to_string(),
        }
    }

    pub fn highlighted(kind: DelimiterKind, span: Span, content: String) -> Self {
        Self {
            kind: NodeKind::Highlighted(kind),
            span,
            content,
        }
    }

    /// The delimiter kind if this node is highlighted.
    pub fn delimiter(&self) -> Option<DelimiterKind> {
        match self.kind {
            NodeKind::Plain => None,
            NodeKind::Highlighted(k) => Some(k),
        }
    }
}
