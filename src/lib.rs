/*!
# `jsonsift` Library

Search the scalar values of a JSON document for a pattern and report the
path to every match.
*/

pub mod commands;
pub mod output;
pub mod search;
pub mod source;

pub use search::{Match, PathSearcher, Pattern, PatternOptions, search};
pub use source::Source;
