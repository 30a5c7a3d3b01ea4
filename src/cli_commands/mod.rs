use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse a document and print it re-serialized
    Generate(GenerateArgs),

    /// Print a new document with every field at its default
    New,

    /// Print the decoded code of a generated document
    #[command(name = "extract-code")]
    ExtractCode(ExtractCodeArgs),

    /// Print the dependency list derived from an install command
    Deps(DepsArgs),
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Input document (`-` or omitted reads stdin)
    pub(crate) file: Option<PathBuf>,
    /// Write the output here instead of stdout
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ExtractCodeArgs {
    /// Generated document (`-` or omitted reads stdin)
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DepsArgs {
    /// Emit JSON (must come before the command)
    #[arg(long)]
    pub(crate) json: bool,
    /// Install command, e.g. `npm install -D react zod`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) command: Vec<String>,
}
