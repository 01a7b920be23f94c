use crate::error::AppError;
use crate::model::Task;
use std::path::Path;

/// Reads the stored task array. A missing path or an empty file is an
/// empty list, not an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    if content.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|err| AppError::format(err.to_string()))
}

/// Overwrites the file at `path` with the full task array.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| AppError::format(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))
}
