// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL for all Notion API requests.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API version this client is pinned to.
pub const NOTION_VERSION: &str = "2025-09-03";

/// The number of results the Notion API returns per page when no
/// `page_size` is sent.
///
/// Query payloads suppress `page_size` when it equals this default,
/// avoiding a redundant field on the wire.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// The verification statuses the API accepts in a verification filter.
pub const VERIFICATION_STATUSES: &[&str] = &["verified", "expired", "none"];

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
