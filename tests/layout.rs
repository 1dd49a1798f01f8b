use crossterm::event::KeyCode;
use folio::ui::components::dialogs::{DialogScroll, FormField};
use folio::ui::components::scrollbar_helper::ScrollbarHelper;
use folio::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_sidebar_width_bounds() {
    // A third of the screen, capped by the configured width
    assert_eq!(LayoutManager::sidebar_width(120, 30), 30);
    assert_eq!(LayoutManager::sidebar_width(60, 30), 20);
    // Never narrower than the minimum unless the screen is
    assert_eq!(LayoutManager::sidebar_width(30, 30), 15);
    assert_eq!(LayoutManager::sidebar_width(10, 30), 10);
    // Configured values outside the bounds are clamped
    assert_eq!(LayoutManager::sidebar_width(300, 80), 50);
    assert_eq!(LayoutManager::sidebar_width(300, 5), 15);
}

#[test]
fn test_main_layout_splits_width() {
    let area = Rect::new(0, 0, 120, 40);
    let [sidebar, gallery] = LayoutManager::main_layout(area, 30);

    assert_eq!(sidebar.width, 30);
    assert_eq!(gallery.x, 30);
    assert_eq!(gallery.width, 90);
    assert_eq!(sidebar.height, 40);
}

#[test]
fn test_compact_layout_header() {
    let area = Rect::new(0, 0, 60, 20);
    let [header, gallery] = LayoutManager::compact_layout(area);
    assert_eq!(header.height, 1);
    assert_eq!(gallery.y, 1);
    assert_eq!(gallery.height, 19);
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 40);
    let rect = LayoutManager::centered_rect_lines(50, 10, area);
    assert_eq!(rect.height, 10);
    assert_eq!(rect.width, 50);
    assert!(LayoutManager::contains(area, rect.x, rect.y));
    assert!(!LayoutManager::contains(rect, 0, 0));
    assert!(LayoutManager::contains(rect, rect.x + rect.width - 1, rect.y + rect.height - 1));
    assert!(!LayoutManager::contains(rect, rect.x + rect.width, rect.y));
}

#[test]
fn test_scrollbar_detection() {
    assert!(ScrollbarHelper::needs_scrollbar(10, 5));
    assert!(!ScrollbarHelper::needs_scrollbar(5, 5));
    assert!(!ScrollbarHelper::needs_scrollbar(0, 0));
}

#[test]
fn test_dialog_scroll_keys() {
    let mut scroll = DialogScroll::new();
    assert!(scroll.handle_key(KeyCode::Down));
    assert!(scroll.handle_key(KeyCode::Char('j')));
    assert_eq!(scroll.offset(), 2);

    assert!(scroll.handle_key(KeyCode::PageDown));
    assert_eq!(scroll.offset(), 12);
    assert!(scroll.handle_key(KeyCode::PageUp));
    assert!(scroll.handle_key(KeyCode::Up));
    assert_eq!(scroll.offset(), 1);

    assert!(!scroll.handle_key(KeyCode::Char('x')));
    assert_eq!(scroll.offset(), 1);

    assert!(scroll.handle_key(KeyCode::Home));
    assert_eq!(scroll.offset(), 0);
    assert!(scroll.handle_key(KeyCode::Up));
    assert_eq!(scroll.offset(), 0);
}

#[test]
fn test_dialog_scroll_clamps_to_content() {
    let mut scroll = DialogScroll::new();
    scroll.handle_key(KeyCode::End);
    assert_eq!(scroll.clamp(30, 10), 20);
    assert_eq!(scroll.offset(), 20);

    // Content shorter than the viewport never scrolls
    assert_eq!(scroll.clamp(5, 10), 0);

    scroll.handle_key(KeyCode::PageDown);
    scroll.reset();
    assert_eq!(scroll.offset(), 0);
}

#[test]
fn test_form_field_focus_cycle() {
    let field = FormField::default();
    assert_eq!(field, FormField::Title);
    assert_eq!(field.next(), FormField::Category);
    assert_eq!(FormField::Description.next(), FormField::Title);
    assert_eq!(FormField::Title.previous(), FormField::Description);
}
