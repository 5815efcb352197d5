// Root module exports
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
pub mod uploads;

// Re-export common items for convenience
pub use api::{ApiClient, UploadStatusPayload};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use logging::init_logger;
pub use ui::{run_ui, AppState, Message};
pub use uploads::{format_file_size, Category, FileUploadGuard};
