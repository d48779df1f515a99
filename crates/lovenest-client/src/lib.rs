//! HTTP client, token persistence and session state for the LoveNest API.

pub mod client;
pub mod config;
pub mod session;
pub mod token_store;

pub use client::{ApiClient, MemoryUpload};
pub use config::ClientConfig;
pub use session::{SessionContext, SessionIdentity, SessionState};
pub use token_store::FileTokenStore;
