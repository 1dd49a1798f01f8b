use super::common::{create_input_paragraph, create_instructions_paragraph, render_modal, shortcuts, ModalShape};
use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_TITLE_ADMIN, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::render_scrollbar;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
FOLIO - Architectural Portfolio
===============================

NAVIGATION
----------
J/K         Previous/next category
1-7         Jump to category
j/k         Move between projects
m           Toggle the category menu (narrow terminals)
Mouse       Click a category, a card or the admin row

ADMIN MODE
----------
L           Admin login / leave admin mode
n           Add a new project
Enter       Edit the selected project, or add on '+ Add New Project'
e           Edit the selected project
d / Del     Delete the selected project (with confirmation)
a           AI enhance the selected project's description

FORMS
-----
Tab         Next field (Shift+Tab: previous)
←/→         Change category
Ctrl+R      Fill a random image URL
Enter       Submit
Esc         Cancel

GENERAL
-------
?           Toggle this help
G           Show logs
q / Esc     Quit
Ctrl+C      Quit

Press 'Esc', '?' or 'q' to close this help
";

pub fn render_admin_login(f: &mut Frame, area: Rect, icons: &IconService, password: &str) -> Rect {
    let title = format!("{} {}", icons.admin_locked(), DIALOG_TITLE_ADMIN);
    let (modal_area, inner) = render_modal(
        f,
        area,
        ModalShape {
            title: &title,
            theme_color: Color::Yellow,
            width_percent: 40,
            height_lines: 7,
        },
    );

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(inner);

    let masked = "•".repeat(password.chars().count());
    f.render_widget(create_input_paragraph(&masked, "Password", true), chunks[0]);

    let instructions =
        create_instructions_paragraph(&[shortcuts::ENTER_SUBMIT, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    f.render_widget(instructions, chunks[2]);

    modal_area
}

/// Blocking alert drawn over everything else
pub fn render_alert(f: &mut Frame, area: Rect, icons: &IconService, message: &str) {
    let alert_area = LayoutManager::centered_rect_lines(40, 5, area);
    f.render_widget(Clear, alert_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} Alert ", icons.warning()))
        .style(Style::default().fg(Color::Red));
    let inner = block.inner(alert_area);
    f.render_widget(block, alert_area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(inner);
    let message = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = Paragraph::new("Press any key to continue")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(message, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_help(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) -> Rect {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_text_viewer(f, area, DIALOG_TITLE_HELP, &lines, scroll)
}

pub fn render_logs(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll) -> Rect {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No logs yet"]
    } else {
        logs.iter().map(String::as_str).collect()
    };
    render_text_viewer(f, area, DIALOG_TITLE_LOGS, &lines, scroll)
}

fn render_text_viewer(f: &mut Frame, area: Rect, title: &str, lines: &[&str], scroll: &mut DialogScroll) -> Rect {
    let viewer_area = LayoutManager::centered_rect(90, 90, area);
    let (modal_area, inner) = render_modal(
        f,
        area,
        ModalShape {
            title,
            theme_color: Color::White,
            width_percent: 90,
            height_lines: viewer_area.height,
        },
    );

    let visible_height = inner.height as usize;
    let offset = scroll.clamp(lines.len(), visible_height);
    let text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, inner);

    if lines.len() > visible_height {
        render_scrollbar(f, inner, &mut scroll.scrollbar_state);
    }

    modal_area
}
