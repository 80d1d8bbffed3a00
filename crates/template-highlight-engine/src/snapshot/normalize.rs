use crate::markup::{NodeKind, RenderNode};

/// Renders nodes one per line as `kind start..end "content"`.
///
/// Highlighted nodes show their delimiter kind (`curly`, `square`, `round`),
/// everything else shows `plain`. Used as stable snapshot text for `insta`.
pub fn describe(nodes: &[RenderNode]) -> String {
    nodes
        .iter()
        .map(|n| {
            let kind = match n.kind {
                NodeKind::Plain => "plain",
                NodeKind::Highlighted(k) => k.name(),
            };
            format!("{kind} {}..{} {:?}", n.span.start, n.span.end, n.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
