//! Memory gallery commands.

use super::{parse_date, print_json};
use anyhow::{Context, Result};
use clap::Subcommand;
use lovenest_client::{ApiClient, MemoryUpload};
use lovenest_core::model::{MediaKind, MemoryQuery, MemoryUpdate};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Action {
    /// List memories, newest first
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Filter by media kind: image or video
        #[arg(long)]
        kind: Option<String>,
    },
    /// Show one memory
    Show { id: String },
    /// Upload a photo or video
    Upload {
        file: PathBuf,
        #[arg(long)]
        caption: Option<String>,
        /// When the photo was taken, as YYYY-MM-DD
        #[arg(long)]
        date_taken: Option<String>,
    },
    /// Edit caption, date or tags
    Edit {
        id: String,
        #[arg(long)]
        caption: Option<String>,
        #[arg(long)]
        date_taken: Option<String>,
        /// Comma-separated tags, replacing the existing set
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// Delete a memory
    Delete { id: String },
}

pub async fn run(client: &ApiClient, action: Action) -> Result<()> {
    match action {
        Action::List { page, limit, kind } => {
            let kind = kind
                .as_deref()
                .map(|k| k.parse::<MediaKind>())
                .transpose()
                .context("invalid kind, expected image or video")?;
            let page = client
                .list_memories(&MemoryQuery { page, limit, kind })
                .await?;
            print_json(&page)
        }
        Action::Show { id } => {
            let response = client.get_memory(&id).await?;
            print_json(&response.memory)
        }
        Action::Upload {
            file,
            caption,
            date_taken,
        } => {
            let mut upload = MemoryUpload::new(file);
            if let Some(caption) = caption {
                upload = upload.with_caption(caption);
            }
            if let Some(date) = date_taken {
                upload = upload.with_date_taken(parse_date(&date)?);
            }
            let response = client.upload_memory(upload).await?;
            println!("📸 Uploaded");
            print_json(&response.memory)
        }
        Action::Edit {
            id,
            caption,
            date_taken,
            tags,
        } => {
            let update = MemoryUpdate {
                caption,
                date_taken: date_taken.as_deref().map(parse_date).transpose()?,
                tags,
            };
            let response = client.update_memory(&id, &update).await?;
            print_json(&response.memory)
        }
        Action::Delete { id } => {
            client.delete_memory(&id).await?;
            println!("🗑️  Deleted {}", id);
            Ok(())
        }
    }
}
