use crate::{grammar::DelimiterKind, span::Span};

use super::{cursor::Cursor, types::HighlightSpan};

/// Extracts every span of one delimiter kind from `text`.
///
/// A span runs from an opener to the nearest following closer of the same
/// kind. Same-kind spans never nest: an opener followed by another opener of
/// its kind is abandoned and scanning restarts at the later one. Delimiters
/// of other kinds are ordinary content here. An opener that is never closed
/// ends the scan, and stray closers are skipped.
///
/// Spans are returned in ascending, non-overlapping order.
pub fn extract_spans(text: &str, kind: DelimiterKind) -> Vec<HighlightSpan> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while cur.skip_to_any(&[kind.open()]).is_some() {
        match try_parse_span(&mut cur, kind) {
            Some(span) => out.push(HighlightSpan {
                kind,
                span,
                text: span.slice(text).to_string(),
            }),
            None if cur.eof() => break,
            None => {}
        }
    }

    out
}

/// Attempts to close the span whose opener is under the cursor.
///
/// On success the cursor sits just past the closer. On a nested opener the
/// cursor is left on that opener so the caller restarts from it; on an
/// unclosed opener the cursor is at end of input.
fn try_parse_span(cur: &mut Cursor<'_>, kind: DelimiterKind) -> Option<Span> {
    let start = cur.pos();
    cur.bump(); // opener

    match cur.skip_to_any(&[kind.open(), kind.close()]) {
        Some(b) if b == kind.close() => {
            cur.bump(); // closer
            Some(Span::new(start, cur.pos()))
        }
        _ => None,
    }
}
