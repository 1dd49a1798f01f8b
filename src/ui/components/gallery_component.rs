//! Project gallery for the active category tab.
//!
//! Cards show category, title, description and image URL. In admin mode each
//! card carries its action hints, a spinner replaces them while a description
//! is being generated, and a trailing entry opens the add dialog.

use crate::constants::{ADD_PROJECT_ENTRY, EMPTY_CATEGORY, GENERATING, HEADER_ALL_PROJECTS, NO_DESCRIPTION};
use crate::entities::{Category, Project, ProjectId};
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::BTreeSet;

pub struct GalleryComponent {
    pub projects: Vec<Project>,
    pub active: Category,
    pub admin: bool,
    pub generating: BTreeSet<ProjectId>,
    pub selected_index: usize,
    pub icons: IconService,
    list_state: ListState,
    list_area: Rect,
    spinner_step: usize,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for GalleryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            active: Category::All,
            admin: false,
            generating: BTreeSet::new(),
            selected_index: 0,
            icons: IconService::default(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            spinner_step: 0,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(
        &mut self,
        projects: Vec<Project>,
        active: Category,
        admin: bool,
        generating: BTreeSet<ProjectId>,
    ) {
        self.projects = projects;
        self.active = active;
        self.admin = admin;
        self.generating = generating;
        self.update_list_state();
    }

    /// Advance the spinner animation
    pub fn tick(&mut self) {
        self.spinner_step = self.spinner_step.wrapping_add(1);
    }

    /// Cards plus the add entry in admin mode
    pub fn entry_count(&self) -> usize {
        self.projects.len() + usize::from(self.admin)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_index)
    }

    pub fn is_add_entry_selected(&self) -> bool {
        self.admin && self.selected_index == self.projects.len()
    }

    pub fn header(&self) -> &'static str {
        match self.active {
            Category::All => HEADER_ALL_PROJECTS,
            other => other.label(),
        }
    }

    fn update_list_state(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn card_height(&self) -> usize {
        // category, title, description, image, spacer, and the hint line in admin mode
        if self.admin {
            6
        } else {
            5
        }
    }

    fn create_card(&self, project: &Project) -> ListItem<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                project.category.label().to_uppercase(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                project.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ];

        let description = match project.display_description() {
            Some(text) => Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
            None => Span::styled(
                NO_DESCRIPTION,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ),
        };
        lines.push(Line::from(description));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", self.icons.image()), Style::default().fg(Color::DarkGray)),
            Span::styled(project.image.clone(), Style::default().fg(Color::Blue)),
        ]));

        if self.admin {
            lines.push(self.create_admin_line(project.id));
        }
        lines.push(Line::from(""));

        ListItem::new(lines)
    }

    fn create_admin_line(&self, id: ProjectId) -> Line<'static> {
        if self.generating.contains(&id) {
            return Line::from(Span::styled(
                format!("{} {}", self.icons.spinner_frame(self.spinner_step), GENERATING),
                Style::default().fg(Color::Yellow),
            ));
        }

        let hint = |icon: &str, key: &str, label: &str, color: Color| {
            vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(key.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}   ", label), Style::default().fg(Color::Gray)),
            ]
        };

        let mut spans = hint(self.icons.enhance(), "a", "AI enhance", Color::Magenta);
        spans.extend(hint(self.icons.edit(), "e", "edit", Color::Cyan));
        spans.extend(hint(self.icons.delete(), "d", "delete", Color::Red));
        Line::from(spans)
    }

    fn create_add_entry(&self) -> ListItem<'static> {
        ListItem::new(Line::from(Span::styled(
            ADD_PROJECT_ENTRY,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
    }

    /// Handle mouse events against the area the cards were last drawn in
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.list_area;
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let local_row = (mouse.row - area.y) as usize;
                let clicked_index = self.list_state.offset() + local_row / self.card_height();
                if clicked_index < self.projects.len() {
                    self.selected_index = clicked_index;
                    self.update_list_state();
                    Action::None
                } else if self.admin && clicked_index == self.projects.len() {
                    Action::OpenAddDialog
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => Action::PreviousProject,
            MouseEventKind::ScrollDown => Action::NextProject,
            _ => Action::None,
        }
    }
}

impl Component for GalleryComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousProject,
            KeyCode::Down | KeyCode::Char('j') => Action::NextProject,
            _ if !self.admin => Action::None,
            KeyCode::Char('n') => Action::OpenAddDialog,
            KeyCode::Enter if self.is_add_entry_selected() => Action::OpenAddDialog,
            KeyCode::Char('a') => match self.selected_project() {
                Some(project) if !self.generating.contains(&project.id) => Action::EnhanceDescription(project.id),
                _ => Action::None,
            },
            KeyCode::Char('e') | KeyCode::Enter => self
                .selected_project()
                .map(|project| Action::OpenEditDialog(project.id))
                .unwrap_or(Action::None),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_project()
                .map(|project| Action::RequestDelete(project.id))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextProject => {
                let count = self.entry_count();
                if count > 0 {
                    self.selected_index = (self.selected_index + 1) % count;
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousProject => {
                let count = self.entry_count();
                if count > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        count - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::SelectCategory(_) => {
                self.selected_index = 0;
                self.list_state = ListState::default();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.header())
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
        let count = Paragraph::new(Line::from(Span::styled(
            format!("{} Projects", self.projects.len()),
            Style::default().fg(Color::Gray),
        )));
        f.render_widget(count, chunks[0]);

        self.list_area = chunks[1];

        if self.projects.is_empty() && !self.admin {
            let empty = Paragraph::new(EMPTY_CATEGORY).style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, chunks[1]);
            return;
        }

        let mut items: Vec<ListItem> = self.projects.iter().map(|project| self.create_card(project)).collect();
        if self.admin {
            items.push(self.create_add_entry());
        }

        let total_lines = self.projects.len() * self.card_height() + usize::from(self.admin);
        let viewport = chunks[1].height as usize;
        let (list_area, scrollbar_area) = if ScrollbarHelper::needs_scrollbar(total_lines, viewport) {
            let [content, bar] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(chunks[1]);
            (content, Some(bar))
        } else {
            (chunks[1], None)
        };

        let list = List::new(items)
            .highlight_symbol("▌")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        self.scrollbar_helper
            .update_state(self.entry_count(), self.selected_index, None);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
