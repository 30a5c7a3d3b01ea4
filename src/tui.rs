use std::path::PathBuf;

use anyhow::Result;

use crate::config::EditorConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: EditorConfig,
    /// Text placed in the input tab at startup.
    pub initial_input: Option<String>,
    /// JSON Lines trace of the session.
    pub trace: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run()
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
