use anyhow::Result;
use clap::{Parser, Subcommand};
use lovenest_client::{ApiClient, ClientConfig, FileTokenStore};
use lovenest_core::token::TokenStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lovenest")]
#[command(about = "LoveNest - shared memories, calendar, wishlists and journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login(commands::auth::LoginArgs),
    /// Create a new account
    Register(commands::auth::RegisterArgs),
    /// End the current session
    Logout,
    /// Show who is logged in
    Status,
    /// Partner invites
    Invite {
        #[command(subcommand)]
        action: commands::auth::InviteAction,
    },
    /// Update your profile
    Profile {
        #[command(subcommand)]
        action: commands::auth::ProfileAction,
    },
    /// Couple settings
    Couple {
        #[command(subcommand)]
        action: commands::auth::CoupleAction,
    },
    /// Photo and video memories
    Memories {
        #[command(subcommand)]
        action: commands::memories::Action,
    },
    /// Shared calendar
    Events {
        #[command(subcommand)]
        action: commands::events::Action,
    },
    /// Wishlists
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::Action,
    },
    /// Bucket list
    Bucketlist {
        #[command(subcommand)]
        action: commands::bucketlist::Action,
    },
    /// Shared journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::Action,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::default_location()?);
    let client = ApiClient::new(&ClientConfig::from_env(), tokens.clone())?;

    match cli.command {
        Commands::Login(args) => commands::auth::login(&client, tokens, args).await,
        Commands::Register(args) => commands::auth::register(&client, tokens, args).await,
        Commands::Logout => commands::auth::logout(&client, tokens).await,
        Commands::Status => commands::auth::status(&client, tokens).await,
        Commands::Invite { action } => commands::auth::invite(&client, action).await,
        Commands::Profile { action } => commands::auth::profile(&client, action).await,
        Commands::Couple { action } => commands::auth::couple(&client, action).await,
        Commands::Memories { action } => commands::memories::run(&client, action).await,
        Commands::Events { action } => commands::events::run(&client, action).await,
        Commands::Wishlist { action } => commands::wishlist::run(&client, action).await,
        Commands::Bucketlist { action } => commands::bucketlist::run(&client, action).await,
        Commands::Journal { action } => commands::journal::run(&client, action).await,
    }
}
