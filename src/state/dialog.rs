use crate::entities::{Project, ProjectDraft, ProjectId};

/// The modal currently open, with the scratch data it edits.
///
/// Drafts live here so that opening a dialog starts from a fresh value and
/// closing it without committing drops the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    AdminLogin { password: String },
    AddProject { draft: ProjectDraft },
    EditProject { id: ProjectId, draft: ProjectDraft },
    DeleteConfirmation { project: Project },
    Help,
    Logs,
}

impl Dialog {
    pub fn draft(&self) -> Option<&ProjectDraft> {
        match self {
            Dialog::AddProject { draft } | Dialog::EditProject { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProjectDraft> {
        match self {
            Dialog::AddProject { draft } | Dialog::EditProject { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Whether this dialog takes text input (as opposed to a viewer)
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Dialog::AdminLogin { .. } | Dialog::AddProject { .. } | Dialog::EditProject { .. }
        )
    }
}
