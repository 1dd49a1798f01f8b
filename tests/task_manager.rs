use folio::constants::GENERATOR_MISSING_KEY;
use folio::entities::Category;
use folio::generator::{DescriptionGenerator, DescriptionService, GeneratorError};
use folio::state::AppState;
use folio::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

struct SlowGenerator {
    delay: Duration,
}

#[async_trait::async_trait]
impl DescriptionGenerator for SlowGenerator {
    async fn generate(&self, title: &str, category: Category) -> Result<String, GeneratorError> {
        tokio::time::sleep(self.delay).await;
        Ok(format!("{} in {}.", title, category))
    }
}

async fn next_action(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>) -> Action {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("action within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn test_generation_result_arrives_on_channel() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut state = AppState::default();

    let request = state.begin_enhance(2).unwrap();
    manager.spawn_generation(DescriptionService::unavailable(), request);
    assert_eq!(manager.task_count(), 1);

    match next_action(&mut rx).await {
        Action::DescriptionGenerated {
            project_id,
            description,
        } => {
            assert_eq!(project_id, 2);
            assert_eq!(description, GENERATOR_MISSING_KEY);
            state.finish_enhance(project_id, description);
        }
        other => panic!("unexpected action {:?}", other),
    }

    assert!(!state.is_generating(2));
    assert_eq!(state.project(2).unwrap().description.as_deref(), Some(GENERATOR_MISSING_KEY));
}

#[tokio::test]
async fn test_concurrent_generations_for_different_projects() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut state = AppState::default();
    let service = DescriptionService::new(Arc::new(SlowGenerator {
        delay: Duration::from_millis(20),
    }));

    for id in [1, 3] {
        let request = state.begin_enhance(id).unwrap();
        manager.spawn_generation(service.clone(), request);
    }
    assert_eq!(state.generating().len(), 2);

    for _ in 0..2 {
        if let Action::DescriptionGenerated {
            project_id,
            description,
        } = next_action(&mut rx).await
        {
            state.finish_enhance(project_id, description);
        }
    }

    assert!(state.generating().is_empty());
    assert_eq!(
        state.project(1).unwrap().description.as_deref(),
        Some("Minimalist Loft in Interior.")
    );
    assert_eq!(
        state.project(3).unwrap().description.as_deref(),
        Some("Bamboo Pavilion in Pavilion.")
    );
}

#[tokio::test]
async fn test_delete_during_generation_drops_result() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut state = AppState::default();
    let service = DescriptionService::new(Arc::new(SlowGenerator {
        delay: Duration::from_millis(50),
    }));

    let request = state.begin_enhance(4).unwrap();
    manager.spawn_generation(service, request);
    assert!(manager.is_running(4));

    state.request_delete(4);
    state.confirm_delete().unwrap();

    if let Action::DescriptionGenerated {
        project_id,
        description,
    } = next_action(&mut rx).await
    {
        state.finish_enhance(project_id, description);
    }

    assert!(state.project(4).is_none());
    assert!(!state.is_generating(4));
    assert_eq!(state.projects().len(), 4);
}

#[tokio::test]
async fn test_cleanup_and_cancel() {
    let (mut manager, mut rx) = TaskManager::new();
    let mut state = AppState::default();

    let request = state.begin_enhance(1).unwrap();
    manager.spawn_generation(DescriptionService::unavailable(), request);
    next_action(&mut rx).await;

    // The task sends its result as its last step
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(manager.cleanup_finished_tasks(), 1);
    assert_eq!(manager.task_count(), 0);

    let service = DescriptionService::new(Arc::new(SlowGenerator {
        delay: Duration::from_secs(60),
    }));
    let request = state.begin_enhance(2).unwrap();
    manager.spawn_generation(service, request);
    assert!(manager.is_running(2));

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_running(2));
}
