//! # Delimiter Grammar
//!
//! The three delimiter kinds and the colors they render in.
//!
//! ## Types
//!
//! - **`DelimiterKind`**: `Curly` (`{}`), `Square` (`[]`), `Round` (`()`)
//! - **`HighlightColor`**: named display colors
//! - **`Palette`**: the color each kind renders in
//!
//! Every delimiter character lives on `DelimiterKind`. The scanner and the
//! hosts ask the kind for its characters; they never hardcode `{` or `]`.

pub mod kinds;
pub mod palette;

pub use kinds::DelimiterKind;
pub use palette::{HighlightColor, Palette};
