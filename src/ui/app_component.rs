use crate::admin::AdminGate;
use crate::config::Config;
use crate::constants::APP_TITLE;
use crate::generator::DescriptionService;
use crate::icons::IconService;
use crate::logger::LogBuffer;
use crate::state::{AppState, Dialog};
use crate::storage::ProjectStore;
use crate::ui::components::{DialogComponent, GalleryComponent, SidebarComponent};
use crate::ui::core::{actions::Action, event_handler::EventType, task_manager::TaskManager, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    gallery: GalleryComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    generator: DescriptionService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    log_buffer: LogBuffer,

    // Layout
    sidebar_width: u16,
    compact_width: u16,
    sidebar_area: Option<Rect>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, generator: DescriptionService, log_buffer: LogBuffer) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut state = AppState::new(ProjectStore::seeded(), AdminGate::new(config.admin.password.clone()));
        state.set_active_tab(config.ui.start_category());

        let icons = IconService::new(config.ui.icon_theme);
        let mut sidebar = SidebarComponent::new();
        sidebar.icons = icons.clone();
        let mut gallery = GalleryComponent::new();
        gallery.icons = icons.clone();
        let mut dialog = DialogComponent::new();
        dialog.icons = icons;

        let mut app = Self {
            sidebar,
            gallery,
            dialog,
            state,
            generator,
            task_manager,
            background_action_rx,
            log_buffer,
            sidebar_width: config.ui.sidebar_width,
            compact_width: config.ui.compact_width,
            sidebar_area: None,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        !self.state.generating().is_empty()
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Hand fresh copies of the state to every component
    fn sync_component_data(&mut self) {
        self.sidebar.update_data(self.state.active_tab(), self.state.is_admin());
        self.gallery.update_data(
            self.state.visible_projects().into_iter().cloned().collect(),
            self.state.active_tab(),
            self.state.is_admin(),
            self.state.generating().clone(),
        );
        if matches!(self.state.dialog(), Some(Dialog::Logs)) {
            self.dialog.update_logs(self.log_buffer.entries());
        }
    }

    fn is_compact(&self, width: u16) -> bool {
        width < self.compact_width
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Esc => {
                if self.state.is_menu_open() {
                    Action::CloseMenu
                } else {
                    log::info!("Global key: Esc - quitting application");
                    Action::Quit
                }
            }
            KeyCode::Char('?') => Action::ShowHelp,
            KeyCode::Char('G') => Action::ShowLogs,
            KeyCode::Char('m') => Action::ToggleMenu,
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.state.alert().is_some() {
            return Action::DismissAlert;
        }

        // Dialog has priority when visible
        if let Some(dialog) = self.state.dialog_mut() {
            return self.dialog.handle_dialog_key(key, dialog);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if sidebar_action != Action::None {
            return sidebar_action;
        }

        let gallery_action = self.gallery.handle_key_events(key);
        if gallery_action != Action::None {
            return gallery_action;
        }

        self.handle_global_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.state.alert().is_some() {
            return match mouse.kind {
                crossterm::event::MouseEventKind::Down(_) => Action::DismissAlert,
                _ => Action::None,
            };
        }
        if self.state.dialog().is_some() {
            return self.dialog.handle_mouse(mouse);
        }
        if let Some(area) = self.sidebar_area {
            if LayoutManager::contains(area, mouse.column, mouse.row) {
                return self.sidebar.handle_mouse(mouse);
            }
        }
        // The open menu overlay swallows clicks on the backdrop
        if self.state.is_menu_open() {
            return match mouse.kind {
                crossterm::event::MouseEventKind::Down(_) => Action::CloseMenu,
                _ => Action::None,
            };
        }
        self.gallery.handle_mouse(mouse)
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                if self.active_task_count() > 0 {
                    log::info!("Quit: cancelling {} background generations", self.active_task_count());
                }
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
            }
            Action::SelectCategory(category) => {
                log::debug!("Navigation: category {}", category);
                self.state.set_active_tab(category);
                self.state.close_menu();
            }
            Action::ToggleMenu => self.state.toggle_menu(),
            Action::CloseMenu => self.state.close_menu(),
            Action::ToggleAdmin => {
                self.state.close_menu();
                self.state.toggle_admin();
            }
            Action::SubmitPassword(password) => {
                if let Err(e) = self.state.submit_password(&password) {
                    self.state.raise_alert(e.to_string());
                }
            }
            Action::OpenAddDialog if self.state.is_admin() => self.state.open_add_dialog(),
            Action::OpenEditDialog(id) if self.state.is_admin() => self.state.open_edit_dialog(id),
            Action::RequestDelete(id) if self.state.is_admin() => self.state.request_delete(id),
            Action::SubmitAdd(draft) => {
                if let Err(e) = self.state.submit_add(draft) {
                    self.state.raise_alert(e.to_string());
                }
            }
            Action::SubmitEdit(draft) => {
                if let Err(e) = self.state.submit_edit(draft) {
                    self.state.raise_alert(e.to_string());
                }
            }
            Action::RandomizeImage => self.state.randomize_draft_image(),
            Action::ConfirmDelete => {
                self.state.confirm_delete();
            }
            Action::EnhanceDescription(id) if self.state.is_admin() => {
                if let Some(request) = self.state.begin_enhance(id) {
                    log::info!("Enhance: generating description for '{}'", request.title);
                    self.task_manager.spawn_generation(self.generator.clone(), request);
                }
            }
            Action::DescriptionGenerated {
                project_id,
                description,
            } => {
                log::info!("Enhance: description ready for {}", project_id);
                self.state.finish_enhance(project_id, description);
            }
            Action::ShowHelp => self.state.show_help(),
            Action::ShowLogs => self.state.show_logs(),
            Action::HideDialog => self.state.close_dialog(),
            Action::DismissAlert => self.state.dismiss_alert(),
            Action::OpenAddDialog
            | Action::OpenEditDialog(_)
            | Action::RequestDelete(_)
            | Action::EnhanceDescription(_) => {
                log::debug!("Ignoring {:?} outside admin mode", action);
            }
            Action::NextProject | Action::PreviousProject | Action::None => {}
        }

        self.sync_component_data();
        Action::None
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: Received action {:?}", action);
            actions.push(action);
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            log::debug!("Background: Cleaned up {} finished tasks", cleaned);
        }

        actions
    }

    /// Advance animations. Returns whether a redraw is needed.
    pub fn on_tick(&mut self) -> bool {
        if self.is_busy() {
            self.gallery.tick();
            true
        } else {
            false
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        Action::None
    }

    fn render_compact_header(&self, f: &mut Frame, rect: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", self.sidebar.icons.menu()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(APP_TITLE, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}  (m: menu)", self.state.active_tab()),
                Style::default().fg(Color::Gray),
            ),
        ]);
        f.render_widget(Paragraph::new(line), rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Direct calls route through the same path as terminal events
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.gallery.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.is_compact(rect.width) {
            let [header_area, gallery_area] = LayoutManager::compact_layout(rect);
            self.render_compact_header(f, header_area);
            self.gallery.render(f, gallery_area);

            if self.state.is_menu_open() {
                let width = LayoutManager::sidebar_width(rect.width, self.sidebar_width).max(rect.width / 2);
                let menu_area = Rect::new(gallery_area.x, gallery_area.y, width.min(rect.width), gallery_area.height);
                f.render_widget(Clear, menu_area);
                self.sidebar.render(f, menu_area);
                self.sidebar_area = Some(menu_area);
            } else {
                self.sidebar_area = None;
            }
        } else {
            let [sidebar_area, gallery_area] = LayoutManager::main_layout(rect, self.sidebar_width);
            self.sidebar.render(f, sidebar_area);
            self.gallery.render(f, gallery_area);
            self.sidebar_area = Some(sidebar_area);
        }

        // Render dialog on top if visible
        if let Some(dialog) = self.state.dialog() {
            self.dialog.render(f, rect, dialog);
        }

        if let Some(message) = self.state.alert() {
            self.dialog.render_alert(f, rect, message);
        }
    }
}
