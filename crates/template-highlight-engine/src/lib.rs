//! # Template Highlight Engine
//!
//! Segments editable template text into plain and highlighted runs, and maps
//! the user's caret between the flat text and the rendered node list.
//!
//! ## Pipeline
//!
//! 1. **`extract`**: one independent scan per delimiter kind, producing
//!    non-nested spans of that kind
//! 2. **`resolve`**: greedy earliest-start-wins merge of all kinds into one
//!    non-overlapping, ordered set
//! 3. **`markup`**: render nodes partitioning the whole input, plus HTML output
//! 4. **`caret`**: raw offset <-> (node index, local offset)
//!
//! [`Highlighter::cycle`] runs all four for a single re-render. Every step is a
//! pure function of its input; nothing is retained between cycles.
//!
//! ```rust
//! use template_highlight_engine::{Highlighter, NodeKind, DelimiterKind};
//!
//! let cycle = Highlighter::new().cycle("Hi {Name}!", 5);
//! assert_eq!(cycle.nodes.len(), 3);
//! assert_eq!(cycle.nodes[1].kind, NodeKind::Highlighted(DelimiterKind::Curly));
//! assert_eq!(cycle.caret.node_index, 1);
//! assert_eq!(cycle.caret.local_offset, 2);
//! ```

pub mod caret;
pub mod extract;
pub mod grammar;
pub mod highlighter;
pub mod markup;
pub mod resolve;
pub mod snapshot;
pub mod span;

// Re-export key types for easier usage
pub use caret::NodePosition;
pub use extract::HighlightSpan;
pub use grammar::{DelimiterKind, HighlightColor, Palette};
pub use highlighter::{Cycle, Highlighter, highlight};
pub use markup::{NodeKind, RenderNode};
pub use span::Span;
