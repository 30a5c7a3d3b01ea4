use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EditorError;
use crate::profile::Profile;

/// Saves generated output under the profile's fixed download name.
pub fn download(dir: &Path, profile: Profile, output: &str) -> Result<PathBuf, EditorError> {
    let path = dir.join(profile.download_file_name());
    write_atomic(&path, output.as_bytes()).map_err(|source| EditorError::Export {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Writes through a temp file in the same directory, then renames over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}
