use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Token pair persisted between runs. Every field is optional so that a
/// missing or partially written token file loads as an empty token instead
/// of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub obtained_at: Option<u64>,
}

/// Response body of the token endpoint. Refresh grants may omit
/// `refresh_token`, in which case the stored one is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrantResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One page of a paginated collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub uri: String,
}

/// Playlist-track and saved-track objects both wrap the track itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// A configured synchronization pair. An empty `source` denotes the user's
/// saved-tracks library; `destination` is always a playlist id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncPair {
    #[serde(default)]
    pub source: String,
    pub destination: String,
}
