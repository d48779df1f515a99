//! Bucket list endpoints.

use super::ApiClient;
use lovenest_core::error::Result;
use lovenest_core::model::{
    BucketlistDraft, BucketlistItemResponse, BucketlistPage, MessageResponse,
};

impl ApiClient {
    /// `GET /bucketlist` - the full list plus completion stats.
    pub async fn bucketlist(&self) -> Result<BucketlistPage> {
        self.get_json("/bucketlist").await
    }

    /// `GET /bucketlist/personal`
    pub async fn personal_bucketlist(&self) -> Result<BucketlistPage> {
        self.get_json("/bucketlist/personal").await
    }

    /// `GET /bucketlist/shared`
    pub async fn shared_bucketlist(&self) -> Result<BucketlistPage> {
        self.get_json("/bucketlist/shared").await
    }

    /// `POST /bucketlist`
    pub async fn add_bucketlist_item(
        &self,
        draft: &BucketlistDraft,
    ) -> Result<BucketlistItemResponse> {
        self.post_json("/bucketlist", draft).await
    }

    /// `PUT /bucketlist/:id`
    pub async fn update_bucketlist_item(
        &self,
        id: &str,
        draft: &BucketlistDraft,
    ) -> Result<BucketlistItemResponse> {
        self.put_json(&format!("/bucketlist/{}", id), draft).await
    }

    /// `DELETE /bucketlist/:id`
    pub async fn delete_bucketlist_item(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/bucketlist/{}", id)).await
    }

    /// `POST /bucketlist/:id/complete`
    pub async fn complete_bucketlist_item(&self, id: &str) -> Result<BucketlistItemResponse> {
        self.post_empty(&format!("/bucketlist/{}/complete", id)).await
    }

    /// `POST /bucketlist/:id/uncomplete`
    pub async fn uncomplete_bucketlist_item(&self, id: &str) -> Result<BucketlistItemResponse> {
        self.post_empty(&format!("/bucketlist/{}/uncomplete", id))
            .await
    }
}
