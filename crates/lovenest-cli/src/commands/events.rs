//! Shared calendar commands.

use super::{parse_date, print_json};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lovenest_client::ApiClient;
use lovenest_core::model::{EventDraft, EventQuery, EventType};

#[derive(Args)]
pub struct DraftArgs {
    #[arg(long)]
    title: String,
    /// Event date as YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Wall-clock time as HH:MM
    #[arg(long)]
    time: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    all_day: bool,
    /// date, birthday, anniversary or custom
    #[arg(long, default_value = "custom")]
    event_type: String,
}

impl DraftArgs {
    fn into_draft(self) -> Result<EventDraft> {
        Ok(EventDraft {
            title: self.title,
            description: self.description,
            date: parse_date(&self.date)?,
            time: self.time,
            location: self.location,
            is_all_day: self.all_day,
            event_type: self
                .event_type
                .parse::<EventType>()
                .context("invalid event type")?,
        })
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// List events for a month
    List {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        event_type: Option<String>,
    },
    /// Next few events
    Upcoming {
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
    /// Show one event
    Show { id: String },
    /// Add an event
    Add {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Replace an event's fields
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete an event
    Delete { id: String },
}

pub async fn run(client: &ApiClient, action: Action) -> Result<()> {
    match action {
        Action::List {
            month,
            year,
            event_type,
        } => {
            let event_type = event_type
                .as_deref()
                .map(|t| t.parse::<EventType>())
                .transpose()
                .context("invalid event type")?;
            let list = client
                .list_events(&EventQuery {
                    month,
                    year,
                    event_type,
                })
                .await?;
            print_json(&list.events)
        }
        Action::Upcoming { limit } => {
            let list = client.upcoming_events(limit).await?;
            print_json(&list.events)
        }
        Action::Show { id } => {
            let response = client.get_event(&id).await?;
            print_json(&response.event)
        }
        Action::Add { draft } => {
            let response = client.create_event(&draft.into_draft()?).await?;
            println!("📅 Added");
            print_json(&response.event)
        }
        Action::Edit { id, draft } => {
            let response = client.update_event(&id, &draft.into_draft()?).await?;
            print_json(&response.event)
        }
        Action::Delete { id } => {
            client.delete_event(&id).await?;
            println!("🗑️  Deleted {}", id);
            Ok(())
        }
    }
}
