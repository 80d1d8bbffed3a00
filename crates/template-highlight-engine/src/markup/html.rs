use html_escape::encode_text_to_string;

use crate::grammar::Palette;

use super::types::{NodeKind, RenderNode};

/// Renders nodes as HTML for a content-editable host.
///
/// Plain nodes become escaped text; highlighted nodes become
/// `<span class="highlight-{color}">…</span>` with escaped content. Each node
/// maps to exactly one top-level DOM child (a text node or a span), which is
/// what the caret mapper's node indices refer to.
pub fn render_html(nodes: &[RenderNode], palette: &Palette) -> String {
    let mut out = String::new();
    for node in nodes {
        match node.kind {
            NodeKind::Plain => {
                encode_text_to_string(&node.content, &mut out);
            }
            NodeKind::Highlighted(kind) => {
                out.push_str("<span class=\"highlight-");
                out.push_str(palette.color_of(kind).as_str());
                out.push_str("\">");
                encode_text_to_string(&node.content, &mut out);
                out.push_str("</span>");
            }
        }
    }
    out
}
