//! Memory gallery endpoints.

use super::{ApiClient, file_part};
use chrono::NaiveDate;
use lovenest_core::error::Result;
use lovenest_core::model::{MemoryPage, MemoryQuery, MemoryResponse, MemoryUpdate, MessageResponse};
use reqwest::Method;
use reqwest::multipart::Form;
use std::path::PathBuf;

/// A photo or video to upload, with its optional metadata.
#[derive(Debug, Clone)]
pub struct MemoryUpload {
    pub file: PathBuf,
    pub caption: Option<String>,
    pub date_taken: Option<NaiveDate>,
}

impl MemoryUpload {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            caption: None,
            date_taken: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_date_taken(mut self, date_taken: NaiveDate) -> Self {
        self.date_taken = Some(date_taken);
        self
    }

    async fn into_form(self) -> Result<Form> {
        let mut form = Form::new().part("file", file_part(&self.file).await?);
        if let Some(caption) = self.caption {
            form = form.text("caption", caption);
        }
        if let Some(date_taken) = self.date_taken {
            form = form.text("dateTaken", date_taken.to_string());
        }
        Ok(form)
    }
}

impl ApiClient {
    /// `GET /memories`
    pub async fn list_memories(&self, query: &MemoryQuery) -> Result<MemoryPage> {
        self.get_json_with("/memories", query).await
    }

    /// `GET /memories/:id`
    pub async fn get_memory(&self, id: &str) -> Result<MemoryResponse> {
        self.get_json(&format!("/memories/{}", id)).await
    }

    /// `POST /memories` - multipart upload of an image or video.
    pub async fn upload_memory(&self, upload: MemoryUpload) -> Result<MemoryResponse> {
        let form = upload.into_form().await?;
        self.send_multipart(Method::POST, "/memories", form).await
    }

    /// `PUT /memories/:id`
    pub async fn update_memory(&self, id: &str, update: &MemoryUpdate) -> Result<MemoryResponse> {
        self.put_json(&format!("/memories/{}", id), update).await
    }

    /// `DELETE /memories/:id`
    pub async fn delete_memory(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/memories/{}", id)).await
    }
}
