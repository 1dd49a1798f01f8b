use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Shape of a modal: the single shell every dialog is drawn in.
#[derive(Debug, Clone, Copy)]
pub struct ModalShape<'a> {
    pub title: &'a str,
    pub theme_color: Color,
    pub width_percent: u16,
    pub height_lines: u16,
}

/// Clear a centered area, draw the modal frame and return `(modal, inner)`.
///
/// The modal rect is what backdrop clicks are tested against.
pub fn render_modal(f: &mut Frame, area: Rect, shape: ModalShape) -> (Rect, Rect) {
    let height = shape.height_lines.min(area.height);
    let modal_area = LayoutManager::centered_rect_lines(shape.width_percent, height, area);
    f.render_widget(Clear, modal_area);

    let block = create_dialog_block(shape.title, shape.theme_color);
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);
    (modal_area, inner)
}

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .border_style(Style::default().fg(border_color))
}

/// Creates an input field block; the focused field shows a block cursor
pub fn create_input_paragraph(value: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    Paragraph::new(display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field cycled with the arrow keys
pub fn create_selection_paragraph(value: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
        Span::styled(" ▶", arrow_style),
    ]);

    Paragraph::new(line).block(field_block(field_title, focused))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CATEGORY: InstructionShortcut = ("←/→", Color::Cyan, " Category");
    pub const CTRL_R_IMAGE: InstructionShortcut = ("Ctrl+R", Color::Magenta, " Random image");
}
