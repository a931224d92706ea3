//! # Path Search
//!
//! Recursive search over a parsed JSON document for scalar values matching a
//! text pattern:
//! - Objects are walked in document order, arrays by ascending index
//! - Every string, number, boolean, and null leaf is stringified and tested
//! - Each hit is reported with the dotted/bracketed path leading to it

pub mod engine;
pub mod path;
pub mod pattern;

// Re-exports
pub use engine::*;
pub use path::*;
pub use pattern::*;
