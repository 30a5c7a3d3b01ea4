use crate::model::{Field, Manifest};
use crate::profile::Profile;

/// A focusable row of the edit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormRow {
    Field(Field),
    Dependency(usize),
    AddDependency,
}

impl FormRow {
    pub(super) fn is_text(self) -> bool {
        match self {
            FormRow::Field(field) => field != Field::HasAdditionalDependencies,
            FormRow::Dependency(_) => true,
            FormRow::AddDependency => false,
        }
    }

    pub(super) fn is_multiline(self) -> bool {
        matches!(self, FormRow::Field(field) if field.is_multiline())
    }

    pub(super) fn is_editable(self, profile: Profile) -> bool {
        match self {
            FormRow::Field(field) => self.is_text() && !profile.is_read_only(field),
            FormRow::Dependency(_) => true,
            FormRow::AddDependency => false,
        }
    }

    pub(super) fn label(self) -> String {
        match self {
            FormRow::Field(field) => field.label().to_string(),
            FormRow::Dependency(i) => format!("Dependency {}", i + 1),
            FormRow::AddDependency => "Add Dependency".to_string(),
        }
    }

    /// Text shown in the row's editor.
    pub(super) fn text(self, manifest: &Manifest) -> String {
        match self {
            FormRow::Field(field) => manifest.text(field),
            FormRow::Dependency(i) => manifest
                .additional_dependencies
                .get(i)
                .cloned()
                .unwrap_or_default(),
            FormRow::AddDependency => String::new(),
        }
    }
}

/// Rows in focus order. The dependency rows only exist while the flag is on.
pub(super) fn form_rows(manifest: &Manifest) -> Vec<FormRow> {
    let mut rows = vec![
        FormRow::Field(Field::Title),
        FormRow::Field(Field::Template),
        FormRow::Field(Field::Port),
        FormRow::Field(Field::FilePath),
        FormRow::Field(Field::Description),
        FormRow::Field(Field::Commentary),
        FormRow::Field(Field::HasAdditionalDependencies),
    ];
    if manifest.has_additional_dependencies {
        rows.extend((0..manifest.additional_dependencies.len()).map(FormRow::Dependency));
        rows.push(FormRow::AddDependency);
        rows.push(FormRow::Field(Field::InstallDependenciesCommand));
    }
    rows.push(FormRow::Field(Field::Code));
    rows
}

/// Keeps focus on a row that still exists: a vanished dependency row falls
/// back to its predecessor, anything else to the flag row.
pub(super) fn settle_focus(rows: &[FormRow], focus: FormRow) -> FormRow {
    if rows.contains(&focus) {
        return focus;
    }
    match focus {
        FormRow::Dependency(i) if i > 0 && rows.contains(&FormRow::Dependency(i - 1)) => {
            FormRow::Dependency(i - 1)
        }
        FormRow::Dependency(_) if rows.contains(&FormRow::AddDependency) => FormRow::AddDependency,
        _ => FormRow::Field(Field::HasAdditionalDependencies),
    }
}

pub(super) fn step_focus(rows: &[FormRow], focus: FormRow, forward: bool) -> FormRow {
    let Some(pos) = rows.iter().position(|r| *r == focus) else {
        return rows.first().copied().unwrap_or(focus);
    };
    let n = rows.len();
    let next = if forward { (pos + 1) % n } else { (pos + n - 1) % n };
    rows[next]
}
