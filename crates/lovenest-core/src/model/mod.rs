//! Wire types for the LoveNest REST API.
//!
//! Field names follow the server's JSON (camelCase, Mongo-style `_id`).
//! Response shapes are owned by the server; these types mirror them and do
//! not reinterpret.

pub mod bucketlist;
pub mod event;
pub mod journal;
pub mod memory;
pub mod user;
pub mod wishlist;

pub use bucketlist::{
    BucketlistDraft, BucketlistItem, BucketlistItemResponse, BucketlistKind, BucketlistPage,
    BucketlistStats,
};
pub use event::{
    CalendarEvent, EventDraft, EventList, EventQuery, EventResponse, EventType, UpcomingQuery,
};
pub use journal::{
    JournalDraft, JournalEntry, JournalEntryResponse, JournalPage, JournalQuery, Mood,
};
pub use memory::{MediaKind, Memory, MemoryPage, MemoryQuery, MemoryResponse, MemoryUpdate};
pub use user::{
    AuthResponse, Couple, CoupleResponse, CoupleUpdate, InvitePreview, InviteRequest,
    InviteResponse, InviteSender, LoginRequest, MeResponse, Partner, ProfileUpdate,
    RegisterRequest, User, UserRef, UserResponse,
};
pub use wishlist::{WishDraft, WishPriority, WishlistItem, WishlistItemResponse, WishlistPage};

use serde::{Deserialize, Serialize};

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

/// Generic acknowledgement body (`{"message": "..."}`), returned by logout
/// and delete endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
