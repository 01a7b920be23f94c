use crate::error::AppError;
use crate::model::Task;
use crate::storage::json_store;
use std::path::Path;
use time::OffsetDateTime;

/// Ordered collection of tasks. Task numbers shown to the user are
/// 1-based positions in this list and shift down when an earlier task
/// is deleted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from the file at `path`. A missing path or an empty
    /// file yields an empty list.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        Ok(Self {
            tasks: json_store::load_tasks(path)?,
        })
    }

    /// Writes the full list to `path`, replacing prior contents. Saving
    /// is always explicit; mutations never touch the file on their own.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        json_store::save_tasks(path, &self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new pending task. Text validation belongs to the caller.
    pub fn add(&mut self, text: &str) {
        self.tasks.push(Task::new(text));
    }

    /// Marks task `number` (1-based) as done and stamps the completion
    /// time. Completing an already-done task just refreshes the stamp.
    pub fn complete(&mut self, number: usize) -> Result<(), AppError> {
        if number == 0 || number > self.tasks.len() {
            return Err(AppError::index(number));
        }

        let task = &mut self.tasks[number - 1];
        task.done = true;
        task.completed_at = Some(OffsetDateTime::now_utc());

        Ok(())
    }

    /// Removes task `number` (1-based); every later task moves up one
    /// position.
    pub fn delete(&mut self, number: usize) -> Result<Task, AppError> {
        if number == 0 || number > self.tasks.len() {
            return Err(AppError::index(number));
        }

        Ok(self.tasks.remove(number - 1))
    }

    /// Renders the full list, one line per task: `  {n}: {text}` when
    /// pending, `X {n}: {text}` when done.
    pub fn render(&self) -> String {
        let mut formatted = String::new();
        for (position, task) in self.tasks.iter().enumerate() {
            let prefix = if task.done { "X " } else { "  " };
            formatted.push_str(&format!("{}{}: {}\n", prefix, position + 1, task.text));
        }
        formatted
    }

    /// Renders only pending tasks, numbered by their position in the
    /// full list rather than renumbered.
    pub fn incomplete(&self) -> String {
        let mut formatted = String::new();
        for (position, task) in self.tasks.iter().enumerate() {
            if task.done {
                continue;
            }
            formatted.push_str(&format!("  {}: {}\n", position + 1, task.text));
        }
        formatted
    }
}
