//! # Highlight Extraction
//!
//! Cursor-based scan for one delimiter kind at a time.
//!
//! ## Modules
//!
//! - **`types`**: `HighlightSpan` (kind, full span, text)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`scanner`**: `extract_spans()` entry point
//!
//! Each kind is scanned independently over the same text, so spans of
//! different kinds may overlap (`{a[b}c]`). The resolver settles that.

pub mod cursor;
pub mod scanner;
pub mod types;

pub use scanner::extract_spans;
pub use types::HighlightSpan;
