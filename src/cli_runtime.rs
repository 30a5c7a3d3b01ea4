use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tuxedo_edit::Profile;
use tuxedo_edit::config::EditorConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "tuxedo-edit")]
#[command(about = "Edit Tuxedo/Portfolio manifest JSON", long_about = None)]
pub(crate) struct Cli {
    /// Editor config file (JSON)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Document profile (overrides the config file)
    #[arg(long, value_enum, global = true)]
    profile: Option<Profile>,

    /// Where downloads are written (overrides the config file)
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Append a JSON Lines trace of the TUI session to PATH
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Preload the input tab from a file
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = EditorConfig::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.profile, cli.download_dir);

    match cli.command {
        None => {
            let initial_input = match &cli.input {
                Some(path) => Some(
                    fs::read_to_string(path)
                        .with_context(|| format!("read input {}", path.display()))?,
                ),
                None => None,
            };
            tuxedo_edit::tui::run_with_options(tuxedo_edit::tui::TuiRunOptions {
                config,
                initial_input,
                trace: cli.trace,
            })?;
        }
        Some(command) => {
            if cli.trace.is_some() || cli.input.is_some() {
                anyhow::bail!(
                    "`--trace` and `--input` are only supported when running the TUI (no subcommand)"
                );
            }
            crate::cli_exec::handle_command(&config, command)?
        }
    }

    Ok(())
}
