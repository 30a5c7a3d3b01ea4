//! Edit-stage transitions.
//!
//! Every function takes the current manifest and returns the next one. No
//! field value is rejected.

use crate::model::{FieldUpdate, Manifest};

const COMMAND_PREFIX: &str = "npm install";

/// Install-command prefixes recognized when deriving the dependency list.
const KNOWN_PREFIXES: [&str; 4] = ["npm install", "npm i", "yarn add", "pnpm add"];

/// Dependency tokens named by an install command.
///
/// Works on the trimmed, lowercased text: after a known prefix the rest is
/// split on whitespace and flag-like tokens (leading `-`) are dropped.
/// Unrecognized commands yield an empty list.
pub fn derive_list_from_command(command: &str) -> Vec<String> {
    let lowered = command.trim().to_lowercase();

    let Some(rest) = KNOWN_PREFIXES
        .iter()
        .find_map(|p| strip_command_prefix(&lowered, p))
    else {
        return Vec::new();
    };

    rest.split_whitespace()
        .filter(|tok| !tok.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// `npm install a b ...` for a non-empty list, empty otherwise.
pub fn derive_command_from_list(deps: &[String]) -> String {
    if deps.is_empty() {
        return String::new();
    }
    format!("{} {}", COMMAND_PREFIX, deps.join(" "))
}

// `npm install` must not match `npm installer`, and `npm i` must not match
// `npm install`.
fn strip_command_prefix<'a>(lowered: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = lowered.strip_prefix(prefix)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

pub fn set_field(current: &Manifest, update: FieldUpdate) -> Manifest {
    let mut next = current.clone();
    match update {
        FieldUpdate::Title(v) => next.title = v,
        FieldUpdate::Template(v) => next.template = v,
        FieldUpdate::Port(v) => next.port = v,
        FieldUpdate::FilePath(v) => next.file_path = v,
        FieldUpdate::Description(v) => next.description = v,
        FieldUpdate::Commentary(v) => next.commentary = v,
        FieldUpdate::Code(v) => next.code = v,
        FieldUpdate::HasAdditionalDependencies(enabled) => {
            next.has_additional_dependencies = enabled;
            if !enabled {
                next.additional_dependencies.clear();
                next.install_dependencies_command.clear();
            }
        }
        FieldUpdate::InstallDependenciesCommand(command) => {
            let deps = derive_list_from_command(&command);
            if !deps.is_empty() {
                next.has_additional_dependencies = true;
            }
            next.additional_dependencies = deps;
            next.install_dependencies_command = command;
        }
    }
    next
}

/// Appends an empty entry. The command is left as it is.
pub fn add_dependency(current: &Manifest) -> Manifest {
    let mut next = current.clone();
    next.additional_dependencies.push(String::new());
    next
}

/// Replaces one entry and regenerates the install command.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn set_dependency(current: &Manifest, index: usize, value: String) -> Manifest {
    let mut next = current.clone();
    next.additional_dependencies[index] = value;
    next.install_dependencies_command = derive_command_from_list(&next.additional_dependencies);
    next
}

/// Removes one entry and regenerates the install command.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn remove_dependency(current: &Manifest, index: usize) -> Manifest {
    let mut next = current.clone();
    next.additional_dependencies.remove(index);
    next.install_dependencies_command = derive_command_from_list(&next.additional_dependencies);
    next
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
