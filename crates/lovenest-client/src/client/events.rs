//! Shared calendar endpoints.

use super::ApiClient;
use lovenest_core::error::Result;
use lovenest_core::model::{
    EventDraft, EventList, EventQuery, EventResponse, MessageResponse, UpcomingQuery,
};

impl ApiClient {
    /// `GET /events`
    pub async fn list_events(&self, query: &EventQuery) -> Result<EventList> {
        self.get_json_with("/events", query).await
    }

    /// `GET /events/upcoming`
    pub async fn upcoming_events(&self, limit: u32) -> Result<EventList> {
        self.get_json_with("/events/upcoming", &UpcomingQuery { limit })
            .await
    }

    /// `GET /events/:id`
    pub async fn get_event(&self, id: &str) -> Result<EventResponse> {
        self.get_json(&format!("/events/{}", id)).await
    }

    /// `POST /events`
    pub async fn create_event(&self, draft: &EventDraft) -> Result<EventResponse> {
        self.post_json("/events", draft).await
    }

    /// `PUT /events/:id`
    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<EventResponse> {
        self.put_json(&format!("/events/{}", id), draft).await
    }

    /// `DELETE /events/:id`
    pub async fn delete_event(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/events/{}", id)).await
    }
}
