use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{LedgerError, LedgerManager, PairManager, TokenManager},
    spotify::{
        auth::{self, Session},
        pages::FetchError,
        playlists, tracks,
    },
    success,
    types::SyncPair,
    utils, warning,
};

#[derive(Debug)]
pub enum SyncError {
    Fetch(FetchError),
    Write(reqwest::Error),
    Ledger(LedgerError),
}

impl From<FetchError> for SyncError {
    fn from(err: FetchError) -> Self {
        SyncError::Fetch(err)
    }
}

impl From<LedgerError> for SyncError {
    fn from(err: LedgerError) -> Self {
        SyncError::Ledger(err)
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Fetch(e) => write!(f, "{}", e),
            SyncError::Write(e) => write!(f, "batched addition failed: {}", e),
            SyncError::Ledger(e) => write!(f, "{}", e),
        }
    }
}

/// Runs synchronization for every configured pair, sequentially in name
/// order. Authentication happens once, before the first pair. A pair
/// failure terminates the run; pairs are not isolated from each other.
pub async fn sync_all() {
    let pairs = match PairManager::load().await {
        Ok(pairs) => pairs,
        Err(e) => {
            error!(
                "Failed to load sync pairs: {}\nCreate pairs.json in the spotsyncli data directory (see pairs.json.example).",
                e
            );
        }
    };

    if pairs.is_empty() {
        warning!("No sync pairs configured, nothing to do.");
        return;
    }

    let mut tokens = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!("Failed to load token cache: {}", e),
    };

    let session = match auth::ensure_authenticated(&mut tokens).await {
        Ok(session) => session,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let mut ledger = match LedgerManager::load().await {
        Ok(ledger) => ledger,
        Err(e) => error!("Failed to load sync ledger: {}", e),
    };

    for (name, pair) in pairs.iter() {
        info!("Synchronizing {}...", name);
        match synchronize_pair(&session, &mut ledger, pair).await {
            Ok(count) => success!("Synced {} tracks for {}.", count, name),
            Err(e) => error!("Failed to synchronize {}: {}", name, e),
        }
    }
}

/// Synchronizes one pair: fetch both sides completely, diff against the
/// ledger, append the missing tracks in batches, persist the ledger.
///
/// Returns the number of URIs submitted for addition.
async fn synchronize_pair(
    session: &Session,
    ledger: &mut LedgerManager,
    pair: &SyncPair,
) -> Result<usize, SyncError> {
    let from_library = pair.source.is_empty();

    let pb = spinner("Fetching source tracks...");
    let source_result = if from_library {
        tracks::get_saved_tracks(session).await
    } else {
        playlists::get_playlist_tracks(session, &pair.source).await
    };
    let source_tracks = match source_result {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            return Err(SyncError::Fetch(e));
        }
    };

    pb.set_message("Fetching destination tracks...");
    let destination_tracks = match playlists::get_playlist_tracks(session, &pair.destination).await
    {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            return Err(SyncError::Fetch(e));
        }
    };
    pb.finish_and_clear();

    let key = utils::pair_key(&pair.source, &pair.destination);
    let mut synced = ledger.synced_for(&key).clone();

    let ordered = utils::order_for_processing(source_tracks, from_library);
    let queued = utils::plan_additions(&ordered, &destination_tracks, &mut synced);

    let mut write_failure: Option<reqwest::Error> = None;
    for chunk in queued.chunks(tracks::MAX_TRACKS_PER_ADD) {
        if let Err(e) = tracks::add_tracks(session, &pair.destination, chunk).await {
            write_failure = Some(e);
            break;
        }
    }

    // All queued and skipped ids are already marked in `synced`. A failed
    // batch keeps those markings; recovering un-added tracks requires
    // editing the ledger file, not a plain re-run.
    ledger.record_synced(&key, synced).await?;

    if let Some(e) = write_failure {
        return Err(SyncError::Write(e));
    }

    Ok(queued.len())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
