use super::actions::{Action, Mutation};
use crate::client::RosterApi;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    RosterLoad,
    Mutation,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub kind: TaskKind,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs roster requests off the UI loop and reports back through an action channel.
///
/// Each request is its own task; results arrive in completion order, not
/// in the order the requests were made.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background roster fetch
    pub fn spawn_roster_load(&mut self, api: Arc<dyn RosterApi>, is_initial_load: bool) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = if is_initial_load {
            "Initial roster load".to_string()
        } else {
            "Roster refresh".to_string()
        };

        let handle = tokio::spawn(async move {
            let action = match (api.list_activities().await, is_initial_load) {
                (Ok(roster), true) => Action::InitialRosterLoaded(roster),
                (Ok(roster), false) => Action::RosterLoaded(roster),
                (Err(e), true) => Action::InitialLoadFailed(e),
                (Err(e), false) => Action::RosterRefreshFailed(e),
            };
            let _ = action_sender.send(action);
        });

        self.track(TaskKind::RosterLoad, handle, description)
    }

    /// Spawn a background signup or removal
    pub fn spawn_mutation(&mut self, api: Arc<dyn RosterApi>, mutation: Mutation) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = mutation.describe();

        let handle = tokio::spawn(async move {
            let result = match &mutation {
                Mutation::Signup { activity, email } => api.signup(activity, email).await,
                Mutation::Remove(target) => api.remove_participant(&target.activity, &target.email).await,
            };
            let action = match result {
                Ok(receipt) => Action::MutationSucceeded { mutation, receipt },
                Err(error) => Action::MutationFailed { mutation, error },
            };
            let _ = action_sender.send(action);
        });

        self.track(TaskKind::Mutation, handle, description)
    }

    fn track(&mut self, kind: TaskKind, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        log::debug!("Background: spawned task #{} '{}'", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                kind,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Forget tasks whose handles have finished. Their results already went through the channel.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background: task #{} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Check if a roster fetch is currently running
    pub fn is_loading(&self) -> bool {
        self.tasks.values().any(|task| task.kind == TaskKind::RosterLoad && !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
