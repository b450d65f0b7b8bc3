use std::{collections::BTreeMap, path::PathBuf};

use crate::types::SyncPair;

/// Named sync-pair definitions, read once at startup from `pairs.json` in
/// the local data directory.
pub struct PairManager {
    pairs: BTreeMap<String, SyncPair>,
}

impl PairManager {
    pub async fn load() -> Result<Self, String> {
        let path = Self::pairs_path();
        let content = async_fs::read_to_string(&path).await.map_err(|e| {
            format!(
                "cannot read sync pairs from {}: {}",
                path.display(),
                e
            )
        })?;
        let pairs: BTreeMap<String, SyncPair> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;

        for (name, pair) in &pairs {
            if pair.destination.is_empty() {
                return Err(format!(
                    "sync pair '{}' has an empty destination; the saved-tracks library can only be a source",
                    name
                ));
            }
        }

        Ok(Self { pairs })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SyncPair)> {
        self.pairs.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn pairs_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotsyncli/pairs.json");
        path
    }
}
