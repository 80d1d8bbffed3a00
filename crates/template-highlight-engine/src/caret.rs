//! # Caret Mapping
//!
//! Translates the caret between a flat offset into the raw text and a
//! position inside a rendered node list.
//!
//! A host captures the caret before re-rendering (as a raw offset, or as a
//! node position against the *old* list that [`resolve`] flattens), runs a
//! cycle, then calls [`locate`] against the *new* list to put the caret back.
//! Re-rendering never changes the text itself, so the raw offset is the
//! invariant that survives the round trip.
//!
//! All offsets are UTF-8 byte offsets. Hosts that count characters convert
//! with [`char_to_byte_offset`] and [`byte_to_char_offset`].

use crate::markup::RenderNode;

/// A caret position relative to a render-node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodePosition {
    /// Index into the node list.
    pub node_index: usize,
    /// Byte offset within that node's content.
    pub local_offset: usize,
}

impl NodePosition {
    pub const START: NodePosition = NodePosition {
        node_index: 0,
        local_offset: 0,
    };
}

/// Maps a raw-text caret offset to a position in `nodes`.
///
/// The offset is clamped to the total text length and floored to a char
/// boundary. The node whose `[start, end)` range contains it is chosen, so an
/// offset on a boundary belongs to the node that starts there. The end of
/// the text maps to the last node at its own length. An empty list yields
/// [`NodePosition::START`].
pub fn locate(nodes: &[RenderNode], offset: usize) -> NodePosition {
    let Some(last) = nodes.last() else {
        return NodePosition::START;
    };

    let total = last.span.end;
    let offset = floor_char_boundary_in(nodes, offset.min(total));

    // Nodes are ordered and contiguous: binary search on start offsets
    let node_index = nodes
        .partition_point(|n| n.span.start <= offset)
        .saturating_sub(1);
    let node = &nodes[node_index];

    NodePosition {
        node_index,
        local_offset: offset - node.span.start,
    }
}

/// Maps a node position back to a raw-text offset.
///
/// The local offset is clamped to the node's end. A node index past the end
/// of the list clamps to the end of the text.
pub fn resolve(nodes: &[RenderNode], pos: NodePosition) -> usize {
    match nodes.get(pos.node_index) {
        Some(node) => (node.span.start + pos.local_offset).min(node.span.end),
        None => nodes.last().map_or(0, |n| n.span.end),
    }
}

/// Converts a count of chars from the start of `text` to a byte offset.
///
/// Counts past the end clamp to `text.len()`.
pub fn char_to_byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Converts a byte offset into `text` to a count of chars.
///
/// Offsets past the end clamp to the char count of `text`; offsets inside a
/// multi-byte char count only the chars that end before them.
pub fn byte_to_char_offset(text: &str, byte: usize) -> usize {
    let byte = byte.min(text.len());
    text.char_indices().take_while(|(i, _)| *i < byte).count()
        - usize::from(!text.is_char_boundary(byte))
}

/// Floors `offset` to a char boundary of the node containing it.
fn floor_char_boundary_in(nodes: &[RenderNode], offset: usize) -> usize {
    let index = nodes
        .partition_point(|n| n.span.start <= offset)
        .saturating_sub(1);
    let node = &nodes[index];
    let mut local = offset.saturating_sub(node.span.start).min(node.content.len());
    while !node.content.is_char_boundary(local) {
        local -= 1;
    }
    node.span.start + local
}
