//! Writing search results.

use anyhow::Context as _;
use colored::Colorize;
use std::io::{self, ErrorKind, Write};

use crate::search::Match;

/// Line printed when a search finds nothing.
pub const NO_MATCHES: &str = "No matches found.";

/// Write one `<path>: <value>` line per match to `writer`, or [`NO_MATCHES`]
/// if `matches` is empty. With `color` set, paths are highlighted.
///
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_matches<W: Write>(
    writer: &mut W,
    matches: &[Match],
    color: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        if matches.is_empty() {
            writeln!(writer, "{NO_MATCHES}")?;
        }
        for found in matches {
            if color {
                writeln!(writer, "{}: {}", found.path.bold().magenta(), found.value)?;
            } else {
                writeln!(writer, "{found}")?;
            }
        }
        writer.flush()
    })();

    ignore_broken_pipe(result).context("write matches to stdout")
}

/// Write the `Found matches: N` summary line.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_count<W: Write>(writer: &mut W, count: usize) -> anyhow::Result<()> {
    let result = writeln!(writer, "Found matches: {count}");
    ignore_broken_pipe(result).context("write match count to stdout")
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
