use super::actions::Action;
use crate::constants::COUNTDOWN_TICK_SECS;
use crate::source::EventSource;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

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

    /// Spawn a background load of the events feed.
    ///
    /// The result comes back through the action channel as either
    /// `EventsLoaded` or `EventsLoadFailed`; the task itself never panics
    /// the UI.
    pub fn spawn_events_load(&mut self, source: Arc<dyn EventSource>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Loading events ({})", source.source_type());

        let handle = tokio::spawn(async move {
            match source.load_events().await {
                Ok(events) => {
                    let _ = action_sender.send(Action::EventsLoaded(events));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::EventsLoadFailed(e.to_string()));
                }
            }
        });

        self.insert_task(task_id, handle, description);
        task_id
    }

    /// Spawn the once-a-second countdown ticker.
    ///
    /// The first tick fires immediately so the countdown line is populated
    /// on the very next frame. The ticker runs until cancelled by id or
    /// until the receiving side goes away.
    pub fn spawn_countdown_ticker(&mut self) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Countdown ticker".to_string();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(COUNTDOWN_TICK_SECS));
            loop {
                ticker.tick().await;
                if action_sender.send(Action::CountdownTick).is_err() {
                    break;
                }
            }
        });

        self.insert_task(task_id, handle, description);
        task_id
    }

    fn insert_task(&mut self, task_id: TaskId, handle: JoinHandle<()>, description: String) {
        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
    }

    /// Abort a single task by id.
    ///
    /// Returns `false` when no task with that id is still tracked.
    pub fn cancel_task(&mut self, task_id: TaskId) -> bool {
        if let Some(task) = self.tasks.remove(&task_id) {
            task.handle.abort();
            true
        } else {
            false
        }
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let mut to_remove = Vec::new();

        for (task_id, task) in &self.tasks {
            if task.handle.is_finished() {
                to_remove.push(*task_id);
            }
        }

        let mut completed = Vec::new();
        for task_id in to_remove {
            if let Some(task) = self.tasks.remove(&task_id) {
                log::debug!(
                    "Background task '{}' finished after {:?}",
                    task.description,
                    task.started_at.elapsed()
                );
                completed.push((task_id, task.description));
            }
        }

        completed
    }

    /// Check if the events feed is still being loaded
    pub fn is_loading(&self) -> bool {
        self.tasks.values().any(|task| task.description.starts_with("Loading"))
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
