//! Subcommands that do not run a search.
pub mod generate;
