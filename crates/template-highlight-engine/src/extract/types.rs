use crate::{grammar::DelimiterKind, span::Span};

/// A matched open/close pair of one delimiter kind and the text it encloses.
///
/// `text` always starts with `kind.open()` and ends with `kind.close()`, and
/// equals the raw text sliced by `span`. Spans live for a single highlight
/// cycle: produced by the extractor, consumed by the overlap resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: DelimiterKind,
    /// Full span including both delimiters.
    pub span: Span,
    pub text: String,
}
