//! Upload domain: file guarding, deletion deadlines, categories

mod category;
mod deadline;
mod guard;

pub use category::Category;
pub use deadline::{
    deletion_deadline, deletion_penalty, hours_remaining, FREE_DELETION_WINDOW_HOURS,
    MAX_PENALTY_XP, PENALTY_XP_PER_HOUR,
};
pub use guard::{format_file_size, FileUploadGuard, FileValidation};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// A file picked through the dialog or dropped onto the upload zone
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Full path on disk
    pub path: PathBuf,
    /// File name shown in the UI
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedFile {
    /// Stat a path into a selection candidate
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }

    /// Category inferred from the file name
    pub fn category(&self) -> Category {
        Category::from_file_name(&self.name)
    }
}
