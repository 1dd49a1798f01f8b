//! Category navigation sidebar.
//!
//! Shows the portfolio title block, one row per category tab and the admin
//! toggle row underneath. Handles keyboard and mouse selection; the app
//! component applies the resulting actions to the application state.

use crate::constants::{ADMIN_ACTIVE, ADMIN_LOGIN, APP_SUBTITLE, APP_TITLE};
use crate::entities::Category;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Rows below the category tabs: a spacer and the admin toggle
const ADMIN_ROW_OFFSET: usize = 1;

/// Navigation sidebar for switching category tabs and toggling admin mode.
pub struct SidebarComponent {
    pub active: Category,
    pub admin: bool,
    pub icons: IconService,
    list_state: ListState,
    list_area: Rect,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            active: Category::All,
            admin: false,
            icons: IconService::default(),
            list_state,
            list_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, active: Category, admin: bool) {
        self.active = active;
        self.admin = admin;
        self.list_state.select(Some(active.tab_index()));
    }

    fn admin_row_index() -> usize {
        Category::TABS.len() + ADMIN_ROW_OFFSET
    }

    fn next_tab(&self) -> Category {
        let index = (self.active.tab_index() + 1) % Category::TABS.len();
        Category::TABS[index]
    }

    fn previous_tab(&self) -> Category {
        let len = Category::TABS.len();
        let index = (self.active.tab_index() + len - 1) % len;
        Category::TABS[index]
    }

    /// Handle mouse events against the area the list was last drawn in
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
                let clicked_index = self.list_state.offset() + (mouse.row - area.y) as usize;
                if let Some(category) = Category::TABS.get(clicked_index) {
                    Action::SelectCategory(*category)
                } else if clicked_index == Self::admin_row_index() {
                    Action::ToggleAdmin
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => Action::SelectCategory(self.previous_tab()),
            MouseEventKind::ScrollDown => Action::SelectCategory(self.next_tab()),
            _ => Action::None,
        }
    }

    fn admin_row(&self) -> ListItem<'static> {
        let (icon, label, color) = if self.admin {
            (self.icons.admin_unlocked(), ADMIN_ACTIVE, Color::Green)
        } else {
            (self.icons.admin_locked(), ADMIN_LOGIN, Color::DarkGray)
        };
        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(label, Style::default().fg(color)),
            Span::styled(" (L)", Style::default().fg(Color::DarkGray)),
        ]))
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => Action::SelectCategory(self.next_tab()),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => Action::SelectCategory(self.next_tab()),
            KeyCode::Char('K') => Action::SelectCategory(self.previous_tab()),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => Action::SelectCategory(self.previous_tab()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                Category::TABS
                    .get(index)
                    .map(|category| Action::SelectCategory(*category))
                    .unwrap_or(Action::None)
            }
            KeyCode::Char('L') => Action::ToggleAdmin,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectCategory(category) => {
                self.active = category;
                self.list_state.select(Some(category.tab_index()));
                // Pass through so the app updates its state too
                Action::SelectCategory(category)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(APP_TITLE)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            APP_SUBTITLE,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )));
        f.render_widget(subtitle, chunks[0]);

        let mut items: Vec<ListItem> = Category::TABS
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let is_active = *category == self.active;
                let marker = if is_active { "▸ " } else { "  " };
                let style = if is_active {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(category.label(), style),
                    Span::styled(format!(" {}", index + 1), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        items.push(ListItem::new(""));
        items.push(self.admin_row());

        self.list_area = chunks[1];
        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .style(Style::default().fg(Color::White));
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
