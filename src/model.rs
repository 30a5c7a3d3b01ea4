use std::fmt;

use serde::Serialize;

/// Project port. Some profiles persist it as a JSON string, others as a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Port {
    Number(u64),
    Text(String),
}

impl Port {
    /// Interprets text typed into the port field. Leading digits become a
    /// number, stopping before a digit that would overflow; text without
    /// them clears the port.
    pub fn from_input(raw: &str) -> Self {
        let mut value: Option<u64> = None;
        for d in raw.trim_start().chars().map_while(|c| c.to_digit(10)) {
            let Some(next) = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(d)))
            else {
                break;
            };
            value = Some(next);
        }
        match value {
            Some(n) => Port::Number(n),
            None => Port::Text(String::new()),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => write!(f, "{}", n),
            Port::Text(s) => f.write_str(s),
        }
    }
}

/// The edited record. `code` holds real line breaks while in memory.
///
/// Field order is the key order of the serialized document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub commentary: String,
    pub template: String,
    pub title: String,
    pub description: String,
    pub additional_dependencies: Vec<String>,
    pub has_additional_dependencies: bool,
    pub install_dependencies_command: String,
    pub port: Port,
    pub file_path: String,
    pub code: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Template,
    Port,
    FilePath,
    Description,
    Commentary,
    HasAdditionalDependencies,
    InstallDependenciesCommand,
    Code,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Template,
        Field::Port,
        Field::FilePath,
        Field::Description,
        Field::Commentary,
        Field::HasAdditionalDependencies,
        Field::InstallDependenciesCommand,
        Field::Code,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Template => "template",
            Field::Port => "port",
            Field::FilePath => "file_path",
            Field::Description => "description",
            Field::Commentary => "commentary",
            Field::HasAdditionalDependencies => "has_additional_dependencies",
            Field::InstallDependenciesCommand => "install_dependencies_command",
            Field::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Template => "Template",
            Field::Port => "Port",
            Field::FilePath => "File Path",
            Field::Description => "Description",
            Field::Commentary => "Commentary",
            Field::HasAdditionalDependencies => "Has Additional Dependencies",
            Field::InstallDependenciesCommand => "Install Dependencies Command",
            Field::Code => "Code",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Description | Field::Commentary | Field::Code)
    }
}

/// A replacement value for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Template(String),
    Port(Port),
    FilePath(String),
    Description(String),
    Commentary(String),
    HasAdditionalDependencies(bool),
    InstallDependenciesCommand(String),
    Code(String),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Title(_) => Field::Title,
            FieldUpdate::Template(_) => Field::Template,
            FieldUpdate::Port(_) => Field::Port,
            FieldUpdate::FilePath(_) => Field::FilePath,
            FieldUpdate::Description(_) => Field::Description,
            FieldUpdate::Commentary(_) => Field::Commentary,
            FieldUpdate::HasAdditionalDependencies(_) => Field::HasAdditionalDependencies,
            FieldUpdate::InstallDependenciesCommand(_) => Field::InstallDependenciesCommand,
            FieldUpdate::Code(_) => Field::Code,
        }
    }

    /// Builds an update for a text-valued field from what the user typed.
    /// Returns `None` for the boolean flag.
    pub fn from_text(field: Field, text: String) -> Option<Self> {
        let update = match field {
            Field::Title => FieldUpdate::Title(text),
            Field::Template => FieldUpdate::Template(text),
            Field::Port => FieldUpdate::Port(Port::from_input(&text)),
            Field::FilePath => FieldUpdate::FilePath(text),
            Field::Description => FieldUpdate::Description(text),
            Field::Commentary => FieldUpdate::Commentary(text),
            Field::InstallDependenciesCommand => FieldUpdate::InstallDependenciesCommand(text),
            Field::Code => FieldUpdate::Code(text),
            Field::HasAdditionalDependencies => return None,
        };
        Some(update)
    }
}

impl Manifest {
    /// Current value of a field rendered as editable text.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Template => self.template.clone(),
            Field::Port => self.port.to_string(),
            Field::FilePath => self.file_path.clone(),
            Field::Description => self.description.clone(),
            Field::Commentary => self.commentary.clone(),
            Field::HasAdditionalDependencies => self.has_additional_dependencies.to_string(),
            Field::InstallDependenciesCommand => self.install_dependencies_command.clone(),
            Field::Code => self.code.clone(),
        }
    }
}
