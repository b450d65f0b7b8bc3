use crate::{
    config,
    spotify::auth::Session,
    spotify::pages::{self, FetchError},
    types::{Playlist, TrackItem},
};

/// Retrieves all playlists of the authenticated user.
///
/// Fetches every page of the `/me/playlists` endpoint and returns the
/// playlists in API order. Used by the playlist listing command to show the
/// id/name pairs needed for configuring sync pairs.
///
/// # Errors
///
/// Any failed page aborts the whole fetch with a `FetchError`.
pub async fn get_user_playlists(session: &Session) -> Result<Vec<Playlist>, FetchError> {
    let first_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );
    pages::fetch_all(session, &first_url).await
}

/// Retrieves the complete track list of a playlist.
///
/// Fetches every page of the playlist's tracks endpoint in API order. The
/// result is the full membership of the playlist at fetch time; there is no
/// incremental variant.
///
/// # Arguments
///
/// * `session` - Authenticated session supplying the bearer token
/// * `playlist_id` - Spotify ID of the playlist to read
///
/// # Errors
///
/// Any failed page aborts the whole fetch with a `FetchError`.
pub async fn get_playlist_tracks(
    session: &Session,
    playlist_id: &str,
) -> Result<Vec<TrackItem>, FetchError> {
    let first_url = format!(
        "{uri}/playlists/{id}/tracks?limit=50",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    pages::fetch_all(session, &first_url).await
}
