use super::common::{
    create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, render_modal, shortcuts,
    ModalShape,
};
use crate::constants::DIALOG_TITLE_DELETE;
use crate::entities::{Project, ProjectDraft};
use crate::icons::IconService;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Focusable fields of the add/edit form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Category,
    Image,
    Description,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Title,
        FormField::Category,
        FormField::Image,
        FormField::Description,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + len - 1) % len]
    }
}

/// Text of the focused field, or `None` for the category selector
pub fn field_text_mut(draft: &mut ProjectDraft, field: FormField) -> Option<&mut String> {
    match field {
        FormField::Title => Some(&mut draft.title),
        FormField::Image => Some(&mut draft.image),
        FormField::Description => Some(&mut draft.description),
        FormField::Category => None,
    }
}

pub fn render_project_form(f: &mut Frame, area: Rect, title: &str, draft: &ProjectDraft, focus: FormField) -> Rect {
    let (modal_area, inner) = render_modal(
        f,
        area,
        ModalShape {
            title,
            theme_color: Color::White,
            width_percent: 70,
            height_lines: 17,
        },
    );

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);

    f.render_widget(
        create_input_paragraph(&draft.title, "Title", focus == FormField::Title),
        chunks[0],
    );
    f.render_widget(
        create_selection_paragraph(draft.category.label(), "Category", focus == FormField::Category),
        chunks[1],
    );
    f.render_widget(
        create_input_paragraph(&draft.image, "Image URL", focus == FormField::Image),
        chunks[2],
    );
    f.render_widget(
        create_input_paragraph(&draft.description, "Description", focus == FormField::Description)
            .wrap(Wrap { trim: false }),
        chunks[3],
    );

    let instructions = create_instructions_paragraph(&[
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ARROWS_CATEGORY,
        shortcuts::SEPARATOR,
        shortcuts::CTRL_R_IMAGE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[5]);

    modal_area
}

pub fn render_delete_confirmation(f: &mut Frame, area: Rect, icons: &IconService, project: &Project) -> Rect {
    let title = format!("{} {}", icons.warning(), DIALOG_TITLE_DELETE);
    let (modal_area, inner) = render_modal(
        f,
        area,
        ModalShape {
            title: &title,
            theme_color: Color::Red,
            width_percent: 50,
            height_lines: 7,
        },
    );

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let instructions = create_instructions_paragraph(&[
        ("Enter/y", Color::Red, " Delete"),
        shortcuts::SEPARATOR,
        ("Esc/n", Color::Gray, " Cancel"),
    ]);
    f.render_widget(instructions, chunks[2]);

    modal_area
}
