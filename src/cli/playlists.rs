use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify::{auth, playlists},
    types::PlaylistTableRow,
};

/// Lists the authenticated user's playlists as an id/name table, sorted by
/// name. The ids are what goes into the pairs.json definitions.
pub async fn list_playlists() {
    let mut tokens = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!("Failed to load token cache: {}", e),
    };

    let session = match auth::ensure_authenticated(&mut tokens).await {
        Ok(session) => session,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match playlists::get_user_playlists(&session).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let mut sorted_playlists = playlists;
    sorted_playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let table_rows: Vec<PlaylistTableRow> = sorted_playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            id: p.id,
            name: p.name,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
