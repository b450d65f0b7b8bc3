//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! synchronization engine: authentication, paginated collection retrieval,
//! and playlist writes. It is the only layer that talks HTTP; everything
//! above it works on materialized Rust values.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code and refresh-token
//! grants for a confidential client:
//! - **Authorization-code flow**: builds the authorization URL with scope and
//!   a random `state` nonce, opens it in the browser, and accepts either the
//!   bare code or the full callback URL pasted into the terminal
//! - **Refresh flow**: exchanges the stored refresh token for a fresh access
//!   token once per run, before any API call
//! - **Basic authentication**: both grants authenticate with an
//!   `Authorization: Basic` header built from the client credentials
//! - **Session handle**: a [`auth::Session`] only exists after a successful
//!   grant, so no request can be issued unauthenticated
//!
//! ### Pagination Module
//!
//! [`pages`] - Follows the `{items, next}` envelope of Spotify's collection
//! endpoints until the `next` link runs out, returning the complete
//! collection eagerly. A failure on any page fails the whole fetch; callers
//! never observe partial collections.
//!
//! ### Playlist and Track Modules
//!
//! [`playlists`] - User playlists and playlist track listings.
//!
//! [`tracks`] - The saved-tracks library and batched playlist additions
//! (at most [`tracks::MAX_TRACKS_PER_ADD`] URIs per write call).
//!
//! ## Error Handling Philosophy
//!
//! No retry logic anywhere: a rejected grant, a failed page, or a failed
//! write is immediately fatal for the affected operation and propagates to
//! the caller. Token refresh is a deliberate once-per-run action, not a
//! per-call recovery mechanism.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization-code and refresh-token grants
//! - `GET /me/playlists` - the user's playlists, paginated
//! - `GET /me/tracks` - the saved-tracks library, paginated
//! - `GET /playlists/{id}/tracks` - playlist membership, paginated
//! - `POST /playlists/{id}/tracks` - append track URIs, bounded batch size
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: every call blocks
//! its caller until response or failure, and no state is shared between
//! requests beyond the session's access token.

pub mod auth;
pub mod pages;
pub mod playlists;
pub mod tracks;
