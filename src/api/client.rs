use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::Result;
use crate::uploads::Category;

/// Status payload for one upload row
///
/// Shape of `GET /api/upload_status/{id}`. All fields are optional; an
/// `error` value means the row should be skipped for this cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadStatusPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<i64>,
}

/// One upload submission from the upload form
#[derive(Debug, Clone)]
pub struct UploadSubmission {
    pub path: PathBuf,
    pub file_name: String,
    pub description: String,
    pub category: Category,
    pub ai_consent: bool,
}

/// What the server handed back for a submission
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    /// Server-assigned upload id, when the response body carried one
    pub upload_id: Option<String>,
}

/// Client for the Alpha Nex HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the status payload for one upload row
    pub async fn fetch_upload_status(&self, upload_id: &str) -> Result<UploadStatusPayload> {
        let url = self.config.upload_status_url(upload_id);
        let payload = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<UploadStatusPayload>()
            .await?;
        Ok(payload)
    }

    /// Submit one upload as a multipart form
    pub async fn submit_upload(&self, submission: UploadSubmission) -> Result<UploadReceipt> {
        let bytes = tokio::fs::read(&submission.path).await?;
        let part = reqwest::multipart::Part::bytes(bytes).file_name(submission.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("description", submission.description.clone())
            .text("category", submission.category.as_form_value())
            .text("ai_consent", if submission.ai_consent { "y" } else { "" });

        let response = self
            .http
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        // The server redirects to the dashboard on success; an id only
        // arrives when the endpoint answers with JSON.
        let body = response.text().await.unwrap_or_default();
        Ok(UploadReceipt {
            upload_id: extract_upload_id(&body),
        })
    }
}

/// Pull an `id` field out of a JSON response body, if there is one
fn extract_upload_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("id")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
