use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::profile::Profile;

fn default_notification_ms() -> u64 {
    3000
}

/// Editor settings, read from a JSON file and overridden by CLI flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub profile: Profile,

    /// Where downloads land. Defaults to the working directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            download_dir: None,
            notification_ms: default_notification_ms(),
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, profile: Option<Profile>, download_dir: Option<PathBuf>) -> Self {
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if download_dir.is_some() {
            self.download_dir = download_dir;
        }
        self
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn resolve_download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("get current dir"),
        }
    }
}
