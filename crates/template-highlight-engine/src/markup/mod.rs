//! # Markup Assembly
//!
//! Turns text plus resolved spans into the node list a host renders.
//!
//! ## Modules
//!
//! - **`types`**: `RenderNode` and `NodeKind` (Plain / Highlighted)
//! - **`assemble`**: `assemble()` producing nodes that partition the text
//! - **`html`**: `render_html()` producing escaped, class-tagged markup

pub mod assemble;
pub mod html;
pub mod types;

pub use assemble::assemble;
pub use html::render_html;
pub use types::{NodeKind, RenderNode};
