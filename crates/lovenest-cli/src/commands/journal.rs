//! Shared journal commands.

use super::{parse_date, print_json};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lovenest_client::ApiClient;
use lovenest_core::model::{JournalDraft, JournalQuery, Mood};

#[derive(Args)]
pub struct DraftArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    /// happy, love, neutral, sad or custom
    #[arg(long)]
    mood: Option<String>,
    /// Free-form emoji shown when mood is custom
    #[arg(long)]
    mood_emoji: Option<String>,
    #[arg(long)]
    mood_scale: Option<u8>,
    /// Entry date as YYYY-MM-DD, defaulting to today on the server
    #[arg(long)]
    date: Option<String>,
}

impl DraftArgs {
    fn into_draft(self) -> Result<JournalDraft> {
        Ok(JournalDraft {
            title: self.title,
            content: self.content,
            mood: self
                .mood
                .as_deref()
                .map(|m| m.parse::<Mood>())
                .transpose()
                .context("invalid mood")?,
            mood_emoji: self.mood_emoji,
            mood_scale: self.mood_scale,
            date: self.date.as_deref().map(parse_date).transpose()?,
            attachments: None,
        })
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// List entries, newest first
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Restrict to one author's entries
        #[arg(long)]
        author: Option<String>,
    },
    /// Show one entry
    Show { id: String },
    /// Write an entry
    Add {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Replace an entry's fields
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete an entry
    Delete { id: String },
}

pub async fn run(client: &ApiClient, action: Action) -> Result<()> {
    match action {
        Action::List {
            page,
            limit,
            author,
        } => {
            let response = client
                .list_journal(&JournalQuery {
                    page,
                    limit,
                    author,
                })
                .await?;
            print_json(&response.entries)
        }
        Action::Show { id } => {
            let response = client.get_journal_entry(&id).await?;
            print_json(&response.entry)
        }
        Action::Add { draft } => {
            let response = client.create_journal_entry(&draft.into_draft()?).await?;
            println!("📖 Added");
            print_json(&response.entry)
        }
        Action::Edit { id, draft } => {
            let response = client
                .update_journal_entry(&id, &draft.into_draft()?)
                .await?;
            print_json(&response.entry)
        }
        Action::Delete { id } => {
            client.delete_journal_entry(&id).await?;
            println!("🗑️  Deleted {}", id);
            Ok(())
        }
    }
}
