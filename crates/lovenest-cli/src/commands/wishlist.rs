//! Wishlist commands.

use super::print_json;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lovenest_client::ApiClient;
use lovenest_core::model::{WishDraft, WishPriority};
use std::path::PathBuf;

#[derive(Args)]
pub struct DraftArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    priority: String,
    /// Image file to attach
    #[arg(long)]
    image: Option<PathBuf>,
}

impl DraftArgs {
    fn split(self) -> Result<(WishDraft, Option<PathBuf>)> {
        let draft = WishDraft {
            title: self.title,
            description: self.description,
            link: self.link,
            image_url: self.image_url,
            priority: self
                .priority
                .parse::<WishPriority>()
                .context("invalid priority, expected low, medium or high")?,
        };
        Ok((draft, self.image))
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// Your own wishlist
    Mine,
    /// Your partner's wishlist
    Partner,
    /// Add a wish
    Add {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Replace a wish's fields
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a wish
    Delete { id: String },
    /// Mark a wish on the partner's list as granted
    Fulfill { id: String },
    /// Undo a fulfillment
    Unfulfill { id: String },
}

pub async fn run(client: &ApiClient, action: Action) -> Result<()> {
    match action {
        Action::Mine => {
            let page = client.my_wishlist().await?;
            print_json(&page.items)
        }
        Action::Partner => {
            let page = client.partner_wishlist().await?;
            print_json(&page.items)
        }
        Action::Add { draft } => {
            let (draft, image) = draft.split()?;
            let response = match image {
                Some(image) => client.add_wishlist_item_with_image(&draft, &image).await?,
                None => client.add_wishlist_item(&draft).await?,
            };
            println!("🎁 Added");
            print_json(&response.item)
        }
        Action::Edit { id, draft } => {
            let (draft, image) = draft.split()?;
            let response = match image {
                Some(image) => {
                    client
                        .update_wishlist_item_with_image(&id, &draft, &image)
                        .await?
                }
                None => client.update_wishlist_item(&id, &draft).await?,
            };
            print_json(&response.item)
        }
        Action::Delete { id } => {
            client.delete_wishlist_item(&id).await?;
            println!("🗑️  Deleted {}", id);
            Ok(())
        }
        Action::Fulfill { id } => {
            let response = client.fulfill_wishlist_item(&id).await?;
            println!("💝 Fulfilled");
            print_json(&response.item)
        }
        Action::Unfulfill { id } => {
            let response = client.unfulfill_wishlist_item(&id).await?;
            print_json(&response.item)
        }
    }
}
