/*!
Main binary for jsonsift.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;
use std::io::{IsTerminal, stdout};
use std::path::PathBuf;
use std::time::Duration;

use jsonsift::commands;
use jsonsift::output::{write_count, write_matches};
use jsonsift::search::{PathSearcher, Pattern, PatternOptions};
use jsonsift::source::{DEFAULT_URL, Source};

/// Download a JSON document and print the path of every value matching a
/// pattern.
#[derive(Parser)]
#[command(name = "jsonsift", version, about, long_about = None)]
struct Args {
    /// Regular expression searched for in every value (case-insensitive)
    #[arg(default_value = "facilis")]
    pattern: String,
    /// URL of the JSON document to search
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// Search a local JSON file instead of downloading one
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,
    /// Match case exactly
    #[arg(short = 's', long, action = ArgAction::SetTrue)]
    case_sensitive: bool,
    /// Treat the pattern as a literal string rather than a regex
    #[arg(short = 'F', long, action = ArgAction::SetTrue)]
    fixed_strings: bool,
    /// Display count of number of matches
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// When to highlight match paths
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Print shell completions for the given shell to stdout and exit
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    generate_shell: Option<clap_complete::Shell>,
    /// Write man pages to DIR (default: the current directory) and exit
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = ".",
        exclusive = true
    )]
    generate_man: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Highlight when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            Self::Auto => stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl Args {
    fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Url {
                url: self.url.clone(),
                timeout: Duration::from_secs(self.timeout),
            },
        }
    }
}

/// Entry point for main binary.
///
/// The pattern is compiled before anything is downloaded, so a malformed
/// pattern fails without touching the network. Matches go to STDOUT; progress
/// is logged to STDERR at `info` level (`-v`).
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    if let Some(shell) = args.generate_shell {
        let mut cmd = Args::command();
        commands::generate::write_completions(
            shell,
            &mut cmd,
            &mut stdout().lock(),
        );
        return Ok(());
    }

    if let Some(output_dir) = args.generate_man.clone() {
        for page in commands::generate::generate_man_pages(
            &Args::command(),
            Some(output_dir),
        )? {
            println!("Generated: {}", page.display());
        }
        return Ok(());
    }

    let options = PatternOptions {
        case_sensitive: args.case_sensitive,
        literal: args.fixed_strings,
    };
    let pattern = Pattern::with_options(&args.pattern, options)
        .with_context(|| "Failed to compile pattern")?;

    let source = args.source();
    let json = source
        .load()
        .with_context(|| format!("Failed to load JSON from {source}"))?;

    info!("Searching for pattern '{pattern}' ...");
    let matches = PathSearcher::new(pattern).search(&json);

    let color = args.color.enabled();
    colored::control::set_override(color);

    let mut out = stdout().lock();
    if args.count {
        write_count(&mut out, matches.len())?;
    }
    write_matches(&mut out, &matches, color)?;

    Ok(())
}
