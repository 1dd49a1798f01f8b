use crate::entities::{Category, ProjectDraft, ProjectId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectCategory(Category),
    ToggleMenu,
    CloseMenu,
    NextProject,
    PreviousProject,

    // Admin mode
    ToggleAdmin,
    SubmitPassword(String),

    // Project operations
    OpenAddDialog,
    SubmitAdd(ProjectDraft),
    OpenEditDialog(ProjectId),
    SubmitEdit(ProjectDraft),
    RequestDelete(ProjectId),
    ConfirmDelete,
    RandomizeImage,

    // Description generation
    EnhanceDescription(ProjectId),
    DescriptionGenerated {
        project_id: ProjectId,
        description: String,
    },

    // UI operations
    ShowHelp,
    ShowLogs,
    HideDialog,
    DismissAlert,

    // App control
    Quit,
    None,
}
