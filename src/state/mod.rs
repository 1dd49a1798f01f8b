//! Application state and the operations that mutate it.
//!
//! [`AppState`] owns the project collection, the active category tab, the
//! admin flag, the open dialog with its drafts, the blocking alert and the
//! set of projects with a description generation in flight. Rendering code
//! only reads it; every change goes through one of the named operations
//! below so that id assignment and required-field checks stay in one place.

mod dialog;

pub use dialog::Dialog;

use crate::admin::AdminGate;
use crate::constants::{ALERT_INCORRECT_PASSWORD, ALERT_MISSING_FIELDS, NEW_PROJECT_DESCRIPTION};
use crate::entities::{random_image_url, Category, Project, ProjectDraft, ProjectId};
use crate::storage::ProjectStore;
use std::collections::BTreeSet;

/// Rejections surfaced to the user as a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{}", ALERT_INCORRECT_PASSWORD)]
    IncorrectPassword,
    #[error("{}", ALERT_MISSING_FIELDS)]
    MissingFields,
    #[error("no dialog is open for this operation")]
    NoActiveDialog,
}

/// What a started generation needs to call the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceRequest {
    pub project_id: ProjectId,
    pub title: String,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct AppState {
    store: ProjectStore,
    active_tab: Category,
    admin_mode: bool,
    admin_gate: AdminGate,
    dialog: Option<Dialog>,
    alert: Option<String>,
    generating: BTreeSet<ProjectId>,
    menu_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProjectStore::seeded(), AdminGate::default())
    }
}

impl AppState {
    pub fn new(store: ProjectStore, admin_gate: AdminGate) -> Self {
        Self {
            store,
            active_tab: Category::All,
            admin_mode: false,
            admin_gate,
            dialog: None,
            alert: None,
            generating: BTreeSet::new(),
            menu_open: false,
        }
    }

    // ---- read access -------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        self.store.all()
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.store.get(id)
    }

    pub fn active_tab(&self) -> Category {
        self.active_tab
    }

    pub fn is_admin(&self) -> bool {
        self.admin_mode
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Mutable access for dialog input handling; drafts are edited in place.
    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_generating(&self, id: ProjectId) -> bool {
        self.generating.contains(&id)
    }

    pub fn generating(&self) -> &BTreeSet<ProjectId> {
        &self.generating
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Projects shown under the active tab, in insertion order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.store.filter(self.active_tab)
    }

    // ---- navigation --------------------------------------------------------

    pub fn set_active_tab(&mut self, category: Category) {
        self.active_tab = category;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // ---- admin mode --------------------------------------------------------

    /// Leave admin mode, or open the password prompt when not in it.
    pub fn toggle_admin(&mut self) {
        if self.admin_mode {
            self.admin_mode = false;
            log::info!("Admin: left admin mode");
        } else {
            self.dialog = Some(Dialog::AdminLogin {
                password: String::new(),
            });
        }
    }

    pub fn submit_password(&mut self, input: &str) -> Result<(), StateError> {
        if self.admin_gate.verify(input) {
            self.admin_mode = true;
            self.close_dialog();
            log::info!("Admin: entered admin mode");
            Ok(())
        } else {
            log::warn!("Admin: incorrect password");
            Err(StateError::IncorrectPassword)
        }
    }

    // ---- dialogs -----------------------------------------------------------

    /// Single cleanup path for every way a dialog can be dismissed.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn show_help(&mut self) {
        self.dialog = Some(Dialog::Help);
    }

    pub fn show_logs(&mut self) {
        self.dialog = Some(Dialog::Logs);
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // ---- add / edit --------------------------------------------------------

    pub fn open_add_dialog(&mut self) {
        self.dialog = Some(Dialog::AddProject {
            draft: ProjectDraft::default(),
        });
    }

    pub fn submit_add(&mut self, mut draft: ProjectDraft) -> Result<ProjectId, StateError> {
        if !draft.has_required_fields() {
            return Err(StateError::MissingFields);
        }
        if !draft.category.is_assignable() {
            draft.category = ProjectDraft::default().category;
        }
        if draft.description.is_empty() {
            draft.description = NEW_PROJECT_DESCRIPTION.to_string();
        }
        let title = draft.title.clone();
        let id = self.store.insert(draft);
        self.close_dialog();
        log::info!("Project: created {} '{}'", id, title);
        Ok(id)
    }

    /// Open the edit dialog pre-filled from the project. Unknown ids are ignored.
    pub fn open_edit_dialog(&mut self, id: ProjectId) {
        if let Some(project) = self.store.get(id) {
            self.dialog = Some(Dialog::EditProject {
                id,
                draft: ProjectDraft::from_project(project),
            });
        }
    }

    pub fn submit_edit(&mut self, mut draft: ProjectDraft) -> Result<(), StateError> {
        let Some(Dialog::EditProject { id, .. }) = self.dialog else {
            return Err(StateError::NoActiveDialog);
        };
        if !draft.has_required_fields() {
            return Err(StateError::MissingFields);
        }
        if !draft.category.is_assignable() {
            if let Some(project) = self.store.get(id) {
                draft.category = project.category;
            }
        }
        if !self.store.update(id, draft) {
            log::warn!("Project: edit target {} no longer exists", id);
        }
        self.close_dialog();
        log::info!("Project: updated {}", id);
        Ok(())
    }

    /// Fill the open draft's image with a random placeholder URL.
    pub fn randomize_draft_image(&mut self) {
        if let Some(draft) = self.dialog.as_mut().and_then(Dialog::draft_mut) {
            draft.image = random_image_url();
        }
    }

    // ---- delete ------------------------------------------------------------

    /// Stage a project for deletion and ask for confirmation.
    pub fn request_delete(&mut self, id: ProjectId) {
        if let Some(project) = self.store.get(id) {
            self.dialog = Some(Dialog::DeleteConfirmation {
                project: project.clone(),
            });
        }
    }

    /// Remove the staged project. Returns it when something was removed.
    pub fn confirm_delete(&mut self) -> Option<Project> {
        let staged = match self.dialog.take() {
            Some(Dialog::DeleteConfirmation { project }) => project,
            other => {
                self.dialog = other;
                return None;
            }
        };
        let removed = self.store.remove(staged.id);
        match &removed {
            Some(project) => log::info!("Project: deleted {} '{}'", project.id, project.title),
            None => log::debug!("Project: delete of {} matched nothing", staged.id),
        }
        removed
    }

    // ---- description generation -------------------------------------------

    /// Mark `id` as generating. Refused when it already is or does not exist.
    pub fn begin_enhance(&mut self, id: ProjectId) -> Option<EnhanceRequest> {
        if self.generating.contains(&id) {
            log::debug!("Enhance: {} already in flight", id);
            return None;
        }
        let project = self.store.get(id)?;
        let request = EnhanceRequest {
            project_id: id,
            title: project.title.clone(),
            category: project.category,
        };
        self.generating.insert(id);
        Some(request)
    }

    /// Apply a generation result. The marker is cleared whatever happened to
    /// the project meanwhile; a deleted project is not brought back.
    pub fn finish_enhance(&mut self, id: ProjectId, description: String) {
        if !self.store.patch_description(id, description) {
            log::debug!("Enhance: project {} is gone, result dropped", id);
        }
        self.generating.remove(&id);
    }
}
