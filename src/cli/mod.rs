//! # CLI Module
//!
//! This module provides the command-line interface layer: it implements the
//! user-facing commands and coordinates the Spotify API client, the durable
//! state managers, and terminal feedback.
//!
//! ## Commands
//!
//! - [`auth`] - Explicit (re-)authorization via the OAuth authorization-code
//!   flow; the only operation that discards a stored refresh token
//! - [`list_playlists`] - Table of the user's playlists (id and name), the
//!   ids being what sync-pair definitions reference
//! - [`sync_all`] - The default action: synchronize every configured pair,
//!   sequentially, authenticating once up front
//!
//! ## Data Flow
//!
//! A synchronization run proceeds per pair: fetch the complete source and
//! destination collections, diff the source against the pair's ledger
//! sequence, append what is missing from the destination in bounded batches,
//! then persist the advanced ledger. Failures terminate the run with a
//! non-zero exit status through the `error!` macro; nothing is retried.

mod auth;
mod playlists;
mod sync;

pub use auth::auth;
pub use playlists::list_playlists;
pub use sync::SyncError;
pub use sync::sync_all;
