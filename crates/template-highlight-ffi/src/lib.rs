//! UniFFI bindings for template-highlight mobile hosts
//!
//! Exposes the highlight cycle to Kotlin and Swift editors. Every offset that
//! crosses this boundary counts characters rather than UTF-8 bytes, matching
//! how the host text widgets report their selection.

use std::sync::Mutex;

use template_highlight_engine::{
    DelimiterKind, Highlighter, NodeKind, NodePosition, Palette, RenderNode, caret, markup,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Unknown delimiter: {reason}")]
    UnknownDelimiter { reason: String },
}

// ============ Highlighter Handle ============

struct HandleState {
    highlighter: Highlighter,
    /// Text of the last cycle; node offsets are relative to it.
    text: String,
    nodes: Vec<RenderNode>,
}

/// A highlighter plus the node list from its most recent cycle.
///
/// The host calls [`capture_caret`](Self::capture_caret) against the stored
/// nodes before it re-renders, then [`run_cycle`](Self::run_cycle) with the
/// captured offset to get the new nodes and the caret position within them.
#[derive(uniffi::Object)]
pub struct HighlighterHandle {
    inner: Mutex<HandleState>,
}

#[uniffi::export]
impl HighlighterHandle {
    /// Create a handle scanning every delimiter kind in the default order.
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::from_highlighter(Highlighter::new())
    }

    /// Create a handle with an explicit scan order, e.g. `["square", "curly"]`.
    #[uniffi::constructor]
    pub fn with_scan_order(names: Vec<String>) -> Result<Self, FfiError> {
        let kinds = names
            .iter()
            .map(|name| name.parse::<DelimiterKind>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FfiError::UnknownDelimiter {
                reason: e.to_string(),
            })?;
        Ok(Self::from_highlighter(Highlighter::with_scan_order(kinds)))
    }

    /// Re-highlight `text` and place a caret given in characters.
    pub fn run_cycle(&self, text: String, caret_chars: u32) -> CycleDto {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let caret = caret::char_to_byte_offset(&text, caret_chars as usize);
        let cycle = state.highlighter.cycle(&text, caret);

        let dto = CycleDto::from_engine(&cycle.nodes, cycle.caret);
        state.text = text;
        state.nodes = cycle.nodes;
        dto
    }

    /// Flatten a caret reported against the stored nodes to a character offset.
    pub fn capture_caret(&self, node_index: u32, local_offset: u32) -> u32 {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let local_offset = state
            .nodes
            .get(node_index as usize)
            .map_or(0, |node| {
                caret::char_to_byte_offset(&node.content, local_offset as usize)
            });
        let byte = caret::resolve(
            &state.nodes,
            NodePosition {
                node_index: node_index as usize,
                local_offset,
            },
        );
        to_u32(caret::byte_to_char_offset(&state.text, byte))
    }

    /// HTML for the stored nodes, colored with the default palette.
    pub fn render_html(&self) -> String {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        markup::render_html(&state.nodes, &Palette::default())
    }
}

impl HighlighterHandle {
    fn from_highlighter(highlighter: Highlighter) -> Self {
        Self {
            inner: Mutex::new(HandleState {
                highlighter,
                text: String::new(),
                nodes: Vec::new(),
            }),
        }
    }
}

impl Default for HighlighterHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ============ DTOs ============

/// Result of one highlight cycle.
#[derive(uniffi::Record)]
pub struct CycleDto {
    pub nodes: Vec<RenderNodeDto>,
    /// Node holding the caret
    pub node_index: u32,
    /// Caret offset within that node, in characters
    pub local_offset: u32,
}

impl CycleDto {
    fn from_engine(nodes: &[RenderNode], pos: NodePosition) -> Self {
        let local_offset = nodes.get(pos.node_index).map_or(0, |node| {
            caret::byte_to_char_offset(&node.content, pos.local_offset)
        });
        Self {
            nodes: node_dtos(nodes),
            node_index: to_u32(pos.node_index),
            local_offset: to_u32(local_offset),
        }
    }
}

/// A single run of displayed text.
#[derive(uniffi::Record)]
pub struct RenderNodeDto {
    /// "plain", "curly", "square" or "round"
    pub kind: String,
    /// Color tag for highlighted nodes, None for plain text
    pub color: Option<String>,
    /// Start offset in the full text, in characters
    pub start: u32,
    /// End offset in the full text, in characters (exclusive)
    pub end: u32,
    pub content: String,
}

impl RenderNodeDto {
    fn from_engine(node: &RenderNode, start: usize, end: usize) -> Self {
        let (kind, color) = match node.kind {
            NodeKind::Plain => ("plain".to_string(), None),
            NodeKind::Highlighted(kind) => (
                kind.name().to_string(),
                Some(Palette::default().color_of(kind).to_string()),
            ),
        };
        Self {
            kind,
            color,
            start: to_u32(start),
            end: to_u32(end),
            content: node.content.clone(),
        }
    }
}

/// Converts a node list to DTOs with character offsets.
///
/// Nodes partition the text from offset 0, so each node starts where the
/// previous one ended and only its own content needs counting.
fn node_dtos(nodes: &[RenderNode]) -> Vec<RenderNodeDto> {
    let mut chars = 0;
    nodes
        .iter()
        .map(|node| {
            let start = chars;
            chars += node.content.chars().count();
            RenderNodeDto::from_engine(node, start, chars)
        })
        .collect()
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

// ============ Standalone Functions ============

/// Highlight `text` with the default scan order.
#[uniffi::export]
pub fn highlight_text(text: String) -> Vec<RenderNodeDto> {
    node_dtos(&template_highlight_engine::highlight(&text))
}

/// Highlight `text` and return it as HTML with the default palette.
#[uniffi::export]
pub fn highlight_html(text: String) -> String {
    let nodes = template_highlight_engine::highlight(&text);
    markup::render_html(&nodes, &Palette::default())
}
