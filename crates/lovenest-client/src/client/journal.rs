//! Shared journal endpoints.

use super::ApiClient;
use lovenest_core::error::Result;
use lovenest_core::model::{
    JournalDraft, JournalEntryResponse, JournalPage, JournalQuery, MessageResponse,
};

impl ApiClient {
    /// `GET /journal`
    pub async fn list_journal(&self, query: &JournalQuery) -> Result<JournalPage> {
        self.get_json_with("/journal", query).await
    }

    /// `GET /journal/:id`
    pub async fn get_journal_entry(&self, id: &str) -> Result<JournalEntryResponse> {
        self.get_json(&format!("/journal/{}", id)).await
    }

    /// `POST /journal`
    pub async fn create_journal_entry(&self, draft: &JournalDraft) -> Result<JournalEntryResponse> {
        self.post_json("/journal", draft).await
    }

    /// `PUT /journal/:id`
    pub async fn update_journal_entry(
        &self,
        id: &str,
        draft: &JournalDraft,
    ) -> Result<JournalEntryResponse> {
        self.put_json(&format!("/journal/{}", id), draft).await
    }

    /// `DELETE /journal/:id`
    pub async fn delete_journal_entry(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/journal/{}", id)).await
    }
}
