//! Account, invite and couple commands.

use super::{parse_date, print_json};
use anyhow::Result;
use clap::{Args, Subcommand};
use lovenest_client::{ApiClient, SessionContext};
use lovenest_core::model::{CoupleUpdate, LoginRequest, ProfileUpdate, RegisterRequest};
use lovenest_core::token::TokenStore;
use std::sync::Arc;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    display_name: String,
    #[arg(long)]
    nickname: Option<String>,
    /// Birthday as YYYY-MM-DD
    #[arg(long)]
    birthday: Option<String>,
}

#[derive(Subcommand)]
pub enum InviteAction {
    /// Invite your partner by email
    Send {
        #[arg(long)]
        email: String,
    },
    /// Show who sent an invite
    Show { token: String },
    /// Accept an invite and create the linked account
    Accept {
        token: String,
        #[command(flatten)]
        registration: RegisterArgs,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Change profile fields; absent flags are left unchanged
    Update {
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
        /// Birthday as YYYY-MM-DD
        #[arg(long)]
        birthday: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CoupleAction {
    /// Change couple settings; absent flags are left unchanged
    Update {
        #[arg(long)]
        couple_name: Option<String>,
        /// Anniversary as YYYY-MM-DD
        #[arg(long)]
        anniversary: Option<String>,
        #[arg(long)]
        partner1_nickname: Option<String>,
        #[arg(long)]
        partner2_nickname: Option<String>,
    },
}

impl RegisterArgs {
    fn into_request(self) -> Result<RegisterRequest> {
        Ok(RegisterRequest {
            email: self.email,
            password: self.password,
            display_name: self.display_name,
            nickname: self.nickname,
            birthday: self.birthday.as_deref().map(parse_date).transpose()?,
        })
    }
}

fn session(client: &ApiClient, tokens: Arc<dyn TokenStore>) -> SessionContext {
    SessionContext::new(Arc::new(client.clone()), tokens)
}

pub async fn login(
    client: &ApiClient,
    tokens: Arc<dyn TokenStore>,
    args: LoginArgs,
) -> Result<()> {
    let ctx = session(client, tokens);
    let identity = ctx
        .login(&LoginRequest {
            email: args.email,
            password: args.password,
        })
        .await?;

    println!("💕 Logged in as {}", identity.user.display_name);
    if let Some(partner) = identity.partner {
        println!("   Linked with {}", partner.display_name);
    }
    Ok(())
}

pub async fn register(
    client: &ApiClient,
    tokens: Arc<dyn TokenStore>,
    args: RegisterArgs,
) -> Result<()> {
    let ctx = session(client, tokens);
    let identity = ctx.register(&args.into_request()?).await?;

    println!("💕 Welcome, {}!", identity.user.display_name);
    println!("   Invite your partner with: lovenest invite send --email <their email>");
    Ok(())
}

pub async fn logout(client: &ApiClient, tokens: Arc<dyn TokenStore>) -> Result<()> {
    let ctx = session(client, tokens);
    ctx.logout().await;
    println!("👋 Logged out");
    Ok(())
}

pub async fn status(client: &ApiClient, tokens: Arc<dyn TokenStore>) -> Result<()> {
    let ctx = session(client, tokens);
    ctx.initialize().await;

    match ctx.identity().await {
        Some(identity) => {
            println!(
                "💕 Logged in as {} <{}>",
                identity.user.display_name, identity.user.email
            );
            match identity.partner {
                Some(partner) => println!("   Linked with {}", partner.display_name),
                None => println!("   No partner linked yet"),
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

pub async fn invite(client: &ApiClient, action: InviteAction) -> Result<()> {
    match action {
        InviteAction::Send { email } => {
            let response = client.send_invite(&email).await?;
            if response.email_sent {
                println!("✉️  Invitation sent to {}", email);
            } else if let Some(url) = response.invite_url {
                println!("✉️  Mail delivery failed; share this link instead:");
                println!("   {}", url);
            } else if let Some(message) = response.message {
                println!("{}", message);
            }
            Ok(())
        }
        InviteAction::Show { token } => {
            let preview = client.check_invite(&token).await?;
            println!(
                "💌 Invite from {}",
                preview.inviter.display_name
            );
            Ok(())
        }
        InviteAction::Accept {
            token,
            registration,
        } => {
            let response = client
                .accept_invite(&token, &registration.into_request()?)
                .await?;
            println!("💕 Welcome, {}! You are now linked.", response.user.display_name);
            Ok(())
        }
    }
}

pub async fn profile(client: &ApiClient, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Update {
            display_name,
            nickname,
            birthday,
            avatar,
        } => {
            let update = ProfileUpdate {
                display_name,
                nickname,
                birthday: birthday.as_deref().map(parse_date).transpose()?,
                avatar,
            };
            let response = client.update_profile(&update).await?;
            print_json(&response.user)
        }
    }
}

pub async fn couple(client: &ApiClient, action: CoupleAction) -> Result<()> {
    match action {
        CoupleAction::Update {
            couple_name,
            anniversary,
            partner1_nickname,
            partner2_nickname,
        } => {
            let update = CoupleUpdate {
                couple_name,
                anniversary: anniversary.as_deref().map(parse_date).transpose()?,
                partner1_nickname,
                partner2_nickname,
            };
            let response = client.update_couple(&update).await?;
            print_json(&response.couple)
        }
    }
}
