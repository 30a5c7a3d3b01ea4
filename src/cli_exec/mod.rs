use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use tuxedo_edit::config::EditorConfig;

use crate::Commands;

mod pipeline;

pub(super) fn handle_command(config: &EditorConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => {
            pipeline::handle_generate_command(config, args.file.as_deref(), args.out.as_deref())?
        }
        Commands::New => pipeline::handle_new_command(config)?,
        Commands::ExtractCode(args) => pipeline::handle_extract_code_command(args.file.as_deref())?,
        Commands::Deps(args) => pipeline::handle_deps_command(&args.command, args.json)?,
    }
    Ok(())
}

/// Reads a file, or stdin for `-` / no path.
fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}
