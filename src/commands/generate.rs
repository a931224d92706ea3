//! `generate` subcommand: shell completions and man pages.
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write completions for `shell` to `writer`.
pub fn write_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Render the man page for `cmd`, plus one page per subcommand named
/// `<cmd>-<subcommand>.1`, into `output_dir` (the current directory if
/// unset). Returns the paths written.
///
/// # Errors
///
/// Returns an error if the output directory or a page cannot be written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = Vec::new();
    render_page(cmd.clone(), &output_dir, cmd.get_name(), &mut written)?;

    for subcmd in cmd.get_subcommands() {
        let page_name = format!("{}-{}", cmd.get_name(), subcmd.get_name());
        // clap_mangen takes the page title from the command name, which
        // must be 'static.
        let leaked: &'static str = Box::leak(page_name.clone().into_boxed_str());
        let renamed = subcmd.clone().name(leaked).disable_help_subcommand(true);
        render_page(renamed, &output_dir, &page_name, &mut written)?;
    }

    Ok(written)
}

fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    page_name: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = output_dir.join(format!("{page_name}.1"));
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd).render(&mut file)?;
    log::debug!("Generated: {}", path.display());
    written.push(path);
    Ok(())
}
