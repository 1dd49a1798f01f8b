use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE: usize = 10;

/// Scroll position for the help and log viewers.
///
/// The offset is clamped against the content when rendered, so `End` can
/// park it at `usize::MAX` without knowing the content length.
#[derive(Debug, Default)]
pub struct DialogScroll {
    offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Apply a scrolling key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE),
            KeyCode::PageDown => self.offset.saturating_add(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        true
    }

    /// Clamp to the content and sync the scrollbar. Returns the effective offset.
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }
}
