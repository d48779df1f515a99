//! Bucket list commands.

use super::{parse_date, print_json};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lovenest_client::ApiClient;
use lovenest_core::model::{BucketlistDraft, BucketlistKind};

#[derive(Args)]
pub struct DraftArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    /// personal or shared
    #[arg(long, default_value = "shared")]
    kind: String,
    /// Target date as YYYY-MM-DD
    #[arg(long)]
    target_date: Option<String>,
}

impl DraftArgs {
    fn into_draft(self) -> Result<BucketlistDraft> {
        Ok(BucketlistDraft {
            title: self.title,
            description: self.description,
            kind: self
                .kind
                .parse::<BucketlistKind>()
                .context("invalid kind, expected personal or shared")?,
            target_date: self.target_date.as_deref().map(parse_date).transpose()?,
        })
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// The full list with completion stats
    List,
    /// Your personal goals
    Personal,
    /// Goals shared with your partner
    Shared,
    /// Add a goal
    Add {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Replace a goal's fields
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a goal
    Delete { id: String },
    /// Check off a goal
    Complete { id: String },
    /// Un-check a goal
    Uncomplete { id: String },
}

pub async fn run(client: &ApiClient, action: Action) -> Result<()> {
    match action {
        Action::List => {
            let page = client.bucketlist().await?;
            if let Some(stats) = &page.stats {
                println!(
                    "🪣 {}/{} done ({:.0}%)",
                    stats.completed, stats.total, stats.progress
                );
            }
            print_json(&page.items)
        }
        Action::Personal => {
            let page = client.personal_bucketlist().await?;
            print_json(&page.items)
        }
        Action::Shared => {
            let page = client.shared_bucketlist().await?;
            print_json(&page.items)
        }
        Action::Add { draft } => {
            let response = client.add_bucketlist_item(&draft.into_draft()?).await?;
            println!("🪣 Added");
            print_json(&response.item)
        }
        Action::Edit { id, draft } => {
            let response = client
                .update_bucketlist_item(&id, &draft.into_draft()?)
                .await?;
            print_json(&response.item)
        }
        Action::Delete { id } => {
            client.delete_bucketlist_item(&id).await?;
            println!("🗑️  Deleted {}", id);
            Ok(())
        }
        Action::Complete { id } => {
            let response = client.complete_bucketlist_item(&id).await?;
            println!("✅ Done!");
            print_json(&response.item)
        }
        Action::Uncomplete { id } => {
            let response = client.uncomplete_bucketlist_item(&id).await?;
            print_json(&response.item)
        }
    }
}
