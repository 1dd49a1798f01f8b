use folio::admin::AdminGate;
use folio::constants::{GENERATOR_MISSING_KEY, NEW_PROJECT_DESCRIPTION};
use folio::entities::{Category, ProjectDraft};
use folio::generator::DescriptionService;
use folio::state::{AppState, Dialog, StateError};
use folio::storage::ProjectStore;

fn sky_deck() -> ProjectDraft {
    ProjectDraft {
        title: "Sky Deck".to_string(),
        category: Category::Pavilion,
        image: "https://x/y.jpg".to_string(),
        description: String::new(),
    }
}

fn admin_state() -> AppState {
    let mut state = AppState::default();
    state.toggle_admin();
    state.submit_password("1234").unwrap();
    state
}

#[test]
fn test_initial_state() {
    let state = AppState::default();
    assert_eq!(state.projects().len(), 5);
    assert_eq!(state.active_tab(), Category::All);
    assert!(!state.is_admin());
    assert!(state.dialog().is_none());
    assert!(state.alert().is_none());
    assert!(state.generating().is_empty());
}

#[test]
fn test_visible_projects_follow_active_tab() {
    let mut state = AppState::default();
    assert_eq!(state.visible_projects().len(), 5);

    for category in Category::ASSIGNABLE {
        state.set_active_tab(category);
        let visible = state.visible_projects();
        assert!(visible.iter().all(|p| p.category == category));
        let expected = state.projects().iter().filter(|p| p.category == category).count();
        assert_eq!(visible.len(), expected);
    }

    state.set_active_tab(Category::DesignerProfile);
    assert!(state.visible_projects().is_empty());
}

#[test]
fn test_admin_login_with_correct_password() {
    let mut state = AppState::default();
    state.toggle_admin();
    assert_eq!(
        state.dialog(),
        Some(&Dialog::AdminLogin {
            password: String::new()
        })
    );

    assert!(state.submit_password("1234").is_ok());
    assert!(state.is_admin());
    assert!(state.dialog().is_none());

    // Toggling again leaves admin mode without a prompt
    state.toggle_admin();
    assert!(!state.is_admin());
    assert!(state.dialog().is_none());
}

#[test]
fn test_admin_login_with_wrong_password() {
    let mut state = AppState::default();
    state.toggle_admin();

    for attempt in ["", "12345", "0000", " 1234"] {
        let err = state.submit_password(attempt).unwrap_err();
        assert_eq!(err, StateError::IncorrectPassword);
        assert_eq!(err.to_string(), "Incorrect password");
        assert!(!state.is_admin());
    }
    // The prompt stays open for another try
    assert!(matches!(state.dialog(), Some(Dialog::AdminLogin { .. })));
}

#[test]
fn test_configured_password() {
    let mut state = AppState::new(ProjectStore::seeded(), AdminGate::new("studio"));
    state.toggle_admin();
    assert!(state.submit_password("1234").is_err());
    assert!(state.submit_password("studio").is_ok());
    assert!(state.is_admin());
}

#[test]
fn test_add_project_uses_placeholder_description() {
    let mut state = admin_state();
    state.open_add_dialog();
    assert_eq!(state.dialog().and_then(Dialog::draft), Some(&ProjectDraft::default()));

    let id = state.submit_add(sky_deck()).unwrap();
    assert_eq!(id, 6);
    assert!(state.dialog().is_none());

    let project = state.projects().last().unwrap();
    assert_eq!(project.id, 6);
    assert_eq!(project.title, "Sky Deck");
    assert_eq!(project.category, Category::Pavilion);
    assert_eq!(project.image, "https://x/y.jpg");
    assert_eq!(project.description.as_deref(), Some(NEW_PROJECT_DESCRIPTION));
}

#[test]
fn test_add_project_keeps_given_description() {
    let mut state = admin_state();
    state.open_add_dialog();
    let mut draft = sky_deck();
    draft.description = "Timber roof over the harbour.".to_string();
    let id = state.submit_add(draft).unwrap();
    assert_eq!(
        state.project(id).unwrap().description.as_deref(),
        Some("Timber roof over the harbour.")
    );
}

#[test]
fn test_add_project_missing_fields_keeps_dialog_open() {
    let mut state = admin_state();
    state.open_add_dialog();

    let mut draft = sky_deck();
    draft.title = String::new();
    assert_eq!(state.submit_add(draft).unwrap_err(), StateError::MissingFields);

    let mut draft = sky_deck();
    draft.image = String::new();
    let err = state.submit_add(draft).unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all fields");

    assert_eq!(state.projects().len(), 5);
    assert!(matches!(state.dialog(), Some(Dialog::AddProject { .. })));
}

#[test]
fn test_ids_are_max_plus_one_after_deletes() {
    let mut state = admin_state();
    state.request_delete(5);
    state.confirm_delete();
    state.open_add_dialog();
    assert_eq!(state.submit_add(sky_deck()).unwrap(), 5);

    state.request_delete(2);
    state.confirm_delete();
    state.open_add_dialog();
    assert_eq!(state.submit_add(sky_deck()).unwrap(), 6);
}

#[test]
fn test_edit_project_preserves_id() {
    let mut state = admin_state();
    state.open_edit_dialog(3);

    let draft = state.dialog().and_then(Dialog::draft).cloned().unwrap();
    assert_eq!(draft.title, "Bamboo Pavilion");
    assert_eq!(draft.category, Category::Pavilion);

    let edited = ProjectDraft {
        title: "Reed Pavilion".to_string(),
        ..draft
    };
    state.submit_edit(edited).unwrap();
    assert!(state.dialog().is_none());

    let project = state.project(3).unwrap();
    assert_eq!(project.title, "Reed Pavilion");
    assert_eq!(project.category, Category::Pavilion);
    assert_eq!(state.projects().len(), 5);
    assert_eq!(state.projects()[2].id, 3);
}

#[test]
fn test_edit_project_missing_fields_and_no_dialog() {
    let mut state = admin_state();
    assert_eq!(state.submit_edit(sky_deck()).unwrap_err(), StateError::NoActiveDialog);

    state.open_edit_dialog(1);
    let mut draft = state.dialog().and_then(Dialog::draft).cloned().unwrap();
    draft.image.clear();
    assert_eq!(state.submit_edit(draft).unwrap_err(), StateError::MissingFields);
    assert_eq!(state.project(1).unwrap().title, "Minimalist Loft");
    assert!(matches!(state.dialog(), Some(Dialog::EditProject { id: 1, .. })));

    // Unknown ids open nothing
    state.close_dialog();
    state.open_edit_dialog(99);
    assert!(state.dialog().is_none());
}

#[test]
fn test_randomize_draft_image() {
    let mut state = admin_state();
    state.open_add_dialog();
    state.randomize_draft_image();

    let image = state.dialog().and_then(Dialog::draft).unwrap().image.clone();
    assert!(image.starts_with("https://picsum.photos/800/600?random="));

    // Ignored when no form is open
    state.close_dialog();
    state.randomize_draft_image();
    assert!(state.dialog().is_none());
}

#[test]
fn test_delete_requires_confirmation() {
    let mut state = admin_state();
    state.request_delete(2);
    assert!(matches!(
        state.dialog(),
        Some(Dialog::DeleteConfirmation { project }) if project.id == 2
    ));
    assert_eq!(state.projects().len(), 5);

    let removed = state.confirm_delete().unwrap();
    assert_eq!(removed.title, "Future Tech Expo");
    assert!(state.project(2).is_none());
    assert!(state.dialog().is_none());
    let ids: Vec<u64> = state.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[test]
fn test_dismissed_delete_keeps_project() {
    let mut state = admin_state();
    state.request_delete(4);
    state.close_dialog();
    assert!(state.dialog().is_none());
    assert!(state.project(4).is_some());

    // Nothing staged
    assert!(state.confirm_delete().is_none());
    assert_eq!(state.projects().len(), 5);
}

#[test]
fn test_delete_nonexistent_is_no_op() {
    let mut state = admin_state();
    let before = state.projects().to_vec();

    state.request_delete(42);
    assert!(state.dialog().is_none());
    assert!(state.confirm_delete().is_none());
    assert_eq!(state.projects(), before.as_slice());
}

#[test]
fn test_confirm_delete_only_removes_once() {
    let mut state = admin_state();
    state.request_delete(1);
    assert_eq!(state.confirm_delete().map(|p| p.id), Some(1));
    assert!(state.confirm_delete().is_none());
    assert!(state.dialog().is_none());
    assert_eq!(state.projects().len(), 4);
}

#[test]
fn test_begin_enhance_marks_and_refuses_duplicates() {
    let mut state = admin_state();
    let request = state.begin_enhance(4).unwrap();
    assert_eq!(request.project_id, 4);
    assert_eq!(request.title, "Ergo Chair V1");
    assert_eq!(request.category, Category::Furniture);
    assert!(state.is_generating(4));

    assert!(state.begin_enhance(4).is_none());
    // Other projects can generate concurrently
    assert!(state.begin_enhance(1).is_some());
    assert_eq!(state.generating().len(), 2);

    assert!(state.begin_enhance(77).is_none());
    assert!(!state.is_generating(77));
}

#[tokio::test]
async fn test_enhance_without_api_key_uses_placeholder() {
    let mut state = admin_state();
    let request = state.begin_enhance(3).unwrap();

    let service = DescriptionService::unavailable();
    let text = service.describe(&request.title, request.category).await;
    state.finish_enhance(request.project_id, text);

    assert!(!state.is_generating(3));
    assert_eq!(state.project(3).unwrap().description.as_deref(), Some(GENERATOR_MISSING_KEY));
}

#[test]
fn test_finish_enhance_after_delete_does_not_resurrect() {
    let mut state = admin_state();
    state.begin_enhance(5).unwrap();
    state.request_delete(5);
    state.confirm_delete().unwrap();

    state.finish_enhance(5, "A late description.".to_string());
    assert!(!state.is_generating(5));
    assert!(state.project(5).is_none());
    assert_eq!(state.projects().len(), 4);
}

#[test]
fn test_alerts_and_menus() {
    let mut state = AppState::default();
    state.raise_alert("Incorrect password");
    assert_eq!(state.alert(), Some("Incorrect password"));
    state.dismiss_alert();
    assert!(state.alert().is_none());

    state.toggle_menu();
    assert!(state.is_menu_open());
    state.close_menu();
    assert!(!state.is_menu_open());

    state.show_help();
    assert_eq!(state.dialog(), Some(&Dialog::Help));
    state.show_logs();
    assert_eq!(state.dialog(), Some(&Dialog::Logs));
    assert!(!Dialog::Logs.is_form());
}
