//! Modal dialog host.
//!
//! The open dialog and its drafts live in [`crate::state::AppState`]; this
//! component keeps only presentation state (field focus, scroll position,
//! where the modal was drawn) and edits the draft it is handed. Every way of
//! dismissing a dialog (`Esc`, clicking the backdrop) produces the same
//! [`Action::HideDialog`].

use crate::constants::{DIALOG_TITLE_ADD, DIALOG_TITLE_EDIT};
use crate::entities::ProjectDraft;
use crate::icons::IconService;
use crate::state::Dialog;
use crate::ui::components::dialogs::{project_dialogs, system_dialogs, DialogScroll, FormField};
use crate::ui::core::actions::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct DialogComponent {
    pub focus: FormField,
    pub icons: IconService,
    pub logs: Vec<String>,
    scroll: DialogScroll,
    modal_area: Option<Rect>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for the log viewer, newest first
    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    /// Reset presentation state for a freshly opened dialog
    fn reset(&mut self) {
        self.focus = FormField::default();
        self.scroll.reset();
        self.modal_area = None;
    }

    /// Route a key to the open dialog, editing its draft in place.
    pub fn handle_dialog_key(&mut self, key: KeyEvent, dialog: &mut Dialog) -> Action {
        match dialog {
            Dialog::AdminLogin { password } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => Action::SubmitPassword(password.clone()),
                KeyCode::Backspace => {
                    password.pop();
                    Action::None
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    password.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            Dialog::AddProject { draft } => self.handle_form_key(key, true, draft),
            Dialog::EditProject { draft, .. } => self.handle_form_key(key, false, draft),
            Dialog::DeleteConfirmation { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::ConfirmDelete,
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Dialog::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Dialog::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, is_add: bool, draft: &mut ProjectDraft) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                if is_add {
                    Action::SubmitAdd(draft.clone())
                } else {
                    Action::SubmitEdit(draft.clone())
                }
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::RandomizeImage,
            KeyCode::Left if self.focus == FormField::Category => {
                draft.category = draft.category.previous_assignable();
                Action::None
            }
            KeyCode::Right if self.focus == FormField::Category => {
                draft.category = draft.category.next_assignable();
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(text) = project_dialogs::field_text_mut(draft, self.focus) {
                    text.pop();
                }
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = project_dialogs::field_text_mut(draft, self.focus) {
                    text.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Clicks outside the modal dismiss it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        match (mouse.kind, self.modal_area) {
            (MouseEventKind::Down(MouseButton::Left), Some(area))
                if !LayoutManager::contains(area, mouse.column, mouse.row) =>
            {
                Action::HideDialog
            }
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleAdmin
            | Action::OpenAddDialog
            | Action::OpenEditDialog(_)
            | Action::RequestDelete(_)
            | Action::ShowHelp
            | Action::ShowLogs
            | Action::HideDialog => {
                self.reset();
                action
            }
            _ => action,
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, dialog: &Dialog) {
        let modal_area = match dialog {
            Dialog::AdminLogin { password } => system_dialogs::render_admin_login(f, rect, &self.icons, password),
            Dialog::AddProject { draft } => {
                project_dialogs::render_project_form(f, rect, DIALOG_TITLE_ADD, draft, self.focus)
            }
            Dialog::EditProject { draft, .. } => {
                project_dialogs::render_project_form(f, rect, DIALOG_TITLE_EDIT, draft, self.focus)
            }
            Dialog::DeleteConfirmation { project } => {
                project_dialogs::render_delete_confirmation(f, rect, &self.icons, project)
            }
            Dialog::Help => system_dialogs::render_help(f, rect, &mut self.scroll),
            Dialog::Logs => system_dialogs::render_logs(f, rect, &self.logs, &mut self.scroll),
        };
        self.modal_area = Some(modal_area);
    }

    pub fn render_alert(&self, f: &mut Frame, rect: Rect, message: &str) {
        system_dialogs::render_alert(f, rect, &self.icons, message);
    }
}
