//! # Snapshot Testing Support
//!
//! Utilities for testing the highlighter via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a node list as stable, line-per-node text for
//!   `insta` snapshots
//! - **`invariants`**: runtime checks for the partition invariant (nodes in
//!   order, no gaps, no overlaps, contents matching the text)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::describe;
