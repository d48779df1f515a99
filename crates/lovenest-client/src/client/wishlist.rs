//! Wishlist endpoints.

use super::{ApiClient, file_part};
use lovenest_core::error::Result;
use lovenest_core::model::{MessageResponse, WishDraft, WishlistItemResponse, WishlistPage};
use reqwest::Method;
use reqwest::multipart::Form;
use std::path::Path;

/// Expands a draft into multipart fields alongside an attached image.
async fn wish_form(draft: &WishDraft, image: &Path) -> Result<Form> {
    let mut form = Form::new()
        .part("image", file_part(image).await?)
        .text("title", draft.title.clone())
        .text("priority", draft.priority.to_string());
    if let Some(description) = &draft.description {
        form = form.text("description", description.clone());
    }
    if let Some(link) = &draft.link {
        form = form.text("link", link.clone());
    }
    Ok(form)
}

impl ApiClient {
    /// `GET /wishlist/mine`
    pub async fn my_wishlist(&self) -> Result<WishlistPage> {
        self.get_json("/wishlist/mine").await
    }

    /// `GET /wishlist/partner`
    pub async fn partner_wishlist(&self) -> Result<WishlistPage> {
        self.get_json("/wishlist/partner").await
    }

    /// `POST /wishlist`
    pub async fn add_wishlist_item(&self, draft: &WishDraft) -> Result<WishlistItemResponse> {
        self.post_json("/wishlist", draft).await
    }

    /// `POST /wishlist` - multipart variant carrying an image file.
    pub async fn add_wishlist_item_with_image(
        &self,
        draft: &WishDraft,
        image: &Path,
    ) -> Result<WishlistItemResponse> {
        let form = wish_form(draft, image).await?;
        self.send_multipart(Method::POST, "/wishlist", form).await
    }

    /// `PUT /wishlist/:id`
    pub async fn update_wishlist_item(
        &self,
        id: &str,
        draft: &WishDraft,
    ) -> Result<WishlistItemResponse> {
        self.put_json(&format!("/wishlist/{}", id), draft).await
    }

    /// `PUT /wishlist/:id` - multipart variant carrying a replacement image.
    pub async fn update_wishlist_item_with_image(
        &self,
        id: &str,
        draft: &WishDraft,
        image: &Path,
    ) -> Result<WishlistItemResponse> {
        let form = wish_form(draft, image).await?;
        self.send_multipart(Method::PUT, &format!("/wishlist/{}", id), form)
            .await
    }

    /// `DELETE /wishlist/:id`
    pub async fn delete_wishlist_item(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/wishlist/{}", id)).await
    }

    /// `POST /wishlist/:id/fulfill` - mark the partner's wish as granted.
    pub async fn fulfill_wishlist_item(&self, id: &str) -> Result<WishlistItemResponse> {
        self.post_empty(&format!("/wishlist/{}/fulfill", id)).await
    }

    /// `POST /wishlist/:id/unfulfill`
    pub async fn unfulfill_wishlist_item(&self, id: &str) -> Result<WishlistItemResponse> {
        self.post_empty(&format!("/wishlist/{}/unfulfill", id)).await
    }
}
