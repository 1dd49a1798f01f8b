use super::actions::Action;
use crate::entities::ProjectId;
use crate::generator::DescriptionService;
use crate::state::EnhanceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct BackgroundTask {
    pub project_id: ProjectId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Runs description generations off the UI task, one per project id.
///
/// Results come back as [`Action::DescriptionGenerated`] on the channel
/// returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<ProjectId, BackgroundTask>,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a generation for `request`.
    ///
    /// Duplicate requests are refused upstream by the application state. A
    /// previous task for the same project may still be winding down after
    /// its result was delivered; it is left to finish.
    pub fn spawn_generation(&mut self, service: DescriptionService, request: EnhanceRequest) {
        if self.is_running(request.project_id) {
            log::debug!("Background: previous generation for {} still settling", request.project_id);
        }

        let project_id = request.project_id;
        let action_sender = self.action_sender.clone();
        let description = format!("Generate description for '{}'", request.title);

        let handle = tokio::spawn(async move {
            let text = service.describe(&request.title, request.category).await;
            // Receiver gone means the app is shutting down
            let _ = action_sender.send(Action::DescriptionGenerated {
                project_id,
                description: text,
            });
        });

        log::debug!("Background: spawned '{}'", description);
        self.tasks.insert(
            project_id,
            BackgroundTask {
                project_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
    }

    pub fn is_running(&self, project_id: ProjectId) -> bool {
        self.tasks
            .get(&project_id)
            .map(|task| !task.handle.is_finished())
            .unwrap_or(false)
    }

    /// Drop bookkeeping for finished tasks and return how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| {
            let finished = task.handle.is_finished();
            if finished {
                log::debug!("Background: '{}' finished after {:?}", task.description, task.elapsed());
            }
            !finished
        });
        before - self.tasks.len()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
