use serde::{Deserialize, Serialize};

use crate::model::{Field, Manifest, Port};

pub const DEFAULT_TEMPLATE: &str = "nextjs-developer";
pub const DEFAULT_PORT: u64 = 3000;
pub const DEFAULT_FILE_PATH: &str = "app/page.tsx";

/// Which flavour of manifest is being edited.
///
/// The constrained profiles pin template, port and file path; `General` lets
/// the user edit all three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Tuxedo,
    Portfolio,
    General,
}

impl Profile {
    pub fn label(self) -> &'static str {
        match self {
            Profile::Tuxedo => "Tuxedo",
            Profile::Portfolio => "Portfolio",
            Profile::General => "Manifest",
        }
    }

    /// Fixed name used by the download action.
    pub fn download_file_name(self) -> &'static str {
        match self {
            Profile::Tuxedo => "updated-tuxedo.json",
            Profile::Portfolio => "updated-portfolio.json",
            Profile::General => "updated-manifest.json",
        }
    }

    pub fn default_port(self) -> Port {
        match self {
            Profile::Tuxedo => Port::Text(DEFAULT_PORT.to_string()),
            Profile::Portfolio | Profile::General => Port::Number(DEFAULT_PORT),
        }
    }

    pub fn default_file_path(self) -> &'static str {
        match self {
            Profile::Tuxedo | Profile::Portfolio => DEFAULT_FILE_PATH,
            Profile::General => "",
        }
    }

    pub fn is_read_only(self, field: Field) -> bool {
        match self {
            Profile::Tuxedo | Profile::Portfolio => {
                matches!(field, Field::Template | Field::Port | Field::FilePath)
            }
            Profile::General => false,
        }
    }

    /// Paste-into-code and the changed-lines summary.
    pub fn tracks_code_changes(self) -> bool {
        matches!(self, Profile::Portfolio)
    }

    /// The all-defaults manifest used for new documents and for fields
    /// missing from parsed input.
    pub fn default_manifest(self) -> Manifest {
        Manifest {
            commentary: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            title: String::new(),
            description: String::new(),
            additional_dependencies: Vec::new(),
            has_additional_dependencies: false,
            install_dependencies_command: String::new(),
            port: self.default_port(),
            file_path: self.default_file_path().to_string(),
            code: String::new(),
        }
    }
}
