use reqwest::Client;

use crate::{
    config,
    spotify::auth::Session,
    spotify::pages::{self, FetchError},
    types::{AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, TrackItem},
};

/// Upper bound on the number of track URIs accepted by a single addition
/// call of the playlist tracks endpoint. Larger sets are fanned out
/// client-side into consecutive calls of at most this size.
pub const MAX_TRACKS_PER_ADD: usize = 100;

/// Retrieves the user's complete saved-tracks library.
///
/// Fetches every page of the `/me/tracks` endpoint. The API returns the
/// most-recently-saved track first; callers that need chronological save
/// order have to reverse the result.
///
/// # Errors
///
/// Any failed page aborts the whole fetch with a `FetchError`.
pub async fn get_saved_tracks(session: &Session) -> Result<Vec<TrackItem>, FetchError> {
    let first_url = format!("{uri}/me/tracks?limit=50", uri = &config::spotify_apiurl());
    pages::fetch_all(session, &first_url).await
}

/// Appends track URIs to a playlist in one write call.
///
/// The caller is responsible for fanning larger sets out into chunks of at
/// most [`MAX_TRACKS_PER_ADD`] URIs; the endpoint rejects bigger arrays.
///
/// # Arguments
///
/// * `session` - Authenticated session supplying the bearer token
/// * `playlist_id` - Spotify ID of the destination playlist
/// * `uris` - Track URIs to append, in the order they should appear
///
/// # Errors
///
/// A non-success status fails the call with the underlying `reqwest::Error`
/// carrying the status; nothing is retried.
pub async fn add_tracks(
    session: &Session,
    playlist_id: &str,
    uris: &[String],
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let request = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(session.bearer_token())
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTrackToPlaylistResponse>().await
}
