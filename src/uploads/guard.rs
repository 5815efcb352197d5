//! Upload file guard
//!
//! Validates a selected file against the configured size cap and extension
//! allow-list before the form is allowed to submit it. Rejections clear the
//! selection; the caller surfaces the message inline.

use crate::config::AppConfig;

/// Size units, base 1024
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Outcome of checking one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileValidation {
    /// Whether the file may be submitted
    pub valid: bool,
    /// Rejection message for invalid files
    pub message: Option<String>,
}

impl FileValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Validates selected or dropped files before submission
#[derive(Debug, Clone)]
pub struct FileUploadGuard {
    max_file_size: u64,
    allowed_extensions: Vec<String>,
}

impl FileUploadGuard {
    /// Build a guard from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    /// Validate a file by name and byte size
    pub fn validate(&self, file_name: &str, size: u64) -> FileValidation {
        if size > self.max_file_size {
            return FileValidation::rejected(format!(
                "File size exceeds the {} limit. Selected file is {}.",
                format_file_size(self.max_file_size),
                format_file_size(size)
            ));
        }

        let extension = extension_of(file_name).to_lowercase();
        if !self.allowed_extensions.contains(&extension) {
            return FileValidation::rejected(format!(
                "File type not allowed. Allowed types: {}",
                self.allowed_extensions.join(", ")
            ));
        }

        FileValidation::ok()
    }
}

/// The last dot-separated segment of a file name. A name without a dot
/// yields the whole name, which then fails the allow-list check.
fn extension_of(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Human-readable file size: base-1024 units with one decimal place,
/// trailing `.0` dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded.trunc() as u64, SIZE_UNITS[exponent])
    } else {
        format!("{:.1} {}", rounded, SIZE_UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> FileUploadGuard {
        FileUploadGuard::new(&AppConfig::default())
    }

    #[test]
    fn test_rejects_oversized_file() {
        let verdict = guard().validate("big.mp4", 501 * 1024 * 1024);
        assert!(!verdict.valid);
        assert!(verdict.message.unwrap().contains("File size exceeds"));
    }

    #[test]
    fn test_rejects_disallowed_extension_regardless_of_size() {
        let verdict = guard().validate("tiny.exe", 12);
        assert!(!verdict.valid);
        assert!(verdict.message.unwrap().contains("File type not allowed"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(guard().validate("clip.MP4", 1024).valid);
        assert!(guard().validate("photo.JPeG", 1024).valid);
    }

    #[test]
    fn test_name_without_extension_is_rejected() {
        assert!(!guard().validate("archive", 1024).valid);
    }

    #[test]
    fn test_accepts_file_at_exact_limit() {
        let verdict = guard().validate("movie.mp4", 500 * 1024 * 1024);
        assert!(verdict.valid);
        assert_eq!(verdict.message, None);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
    }
}
