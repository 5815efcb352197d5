//! HTTP client for the Alpha Nex server

mod client;

pub use client::{ApiClient, UploadReceipt, UploadStatusPayload, UploadSubmission};
