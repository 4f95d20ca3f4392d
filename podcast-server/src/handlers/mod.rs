//! Request handlers
//!
//! Handlers are thin adapters: parse the body, call the matching generator in
//! `podcast_core`, wrap the payload in an [`Envelope`].

mod gossip;
mod production;
mod system;

pub use gossip::*;
pub use production::*;
pub use system::*;

use crate::error::ApiError;

/// Fallback for unregistered paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
