//! Scrollbar shared by the gallery and the scrollable dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the one rendering style used across the app.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_items` - Total number of items in the scrollable content
    /// * `current_position` - Current selected/visible position (0-based index)
    /// * `viewport_height` - Optional viewport height for better scrollbar sizing
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_lines: usize, available_height: usize) -> bool {
        total_lines > available_height
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            render_scrollbar(f, area, &mut self.state);
        }
    }
}

/// Draw a vertical scrollbar for an externally owned state
pub fn render_scrollbar(f: &mut Frame, area: Rect, state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("█")
        .style(Style::default().fg(Color::DarkGray))
        .thumb_style(Style::default().fg(Color::DarkGray));

    f.render_stateful_widget(scrollbar, area, state);
}
