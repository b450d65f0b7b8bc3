use std::{collections::BTreeMap, io::Error, path::PathBuf};

#[derive(Debug)]
pub enum LedgerError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for LedgerError {
    fn from(err: Error) -> Self {
        LedgerError::IoError(err)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::SerdeError(err)
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::IoError(e) => write!(f, "ledger io error: {}", e),
            LedgerError::SerdeError(e) => write!(f, "ledger format error: {}", e),
        }
    }
}

/// Durable record of the track ids already considered for each sync pair.
///
/// The whole ledger is one JSON document mapping a pair key to the ordered
/// sequence of handled ids. Sequences only ever grow; nothing here reorders
/// or prunes them.
pub struct LedgerManager {
    entries: BTreeMap<String, Vec<String>>,
}

impl LedgerManager {
    /// Loads the ledger document. An absent file is an empty ledger.
    pub async fn load() -> Result<Self, LedgerError> {
        let path = Self::ledger_path();
        let json = match async_fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self {
                    entries: BTreeMap::new(),
                });
            }
            Err(e) => return Err(LedgerError::IoError(e)),
        };
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(&json)?;
        Ok(Self { entries })
    }

    /// Returns the synced sequence for a pair key, creating an empty one in
    /// memory if absent. Nothing is persisted until `record_synced`.
    pub fn synced_for(&mut self, key: &str) -> &Vec<String> {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Replaces the sequence stored for the key and persists the full
    /// ledger document.
    pub async fn record_synced(&mut self, key: &str, ids: Vec<String>) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), ids);
        self.persist().await
    }

    async fn persist(&self) -> Result<(), LedgerError> {
        let path = Self::ledger_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(LedgerError::IoError)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        async_fs::write(path, json)
            .await
            .map_err(LedgerError::IoError)
    }

    fn ledger_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotsyncli/state/ledger.json");
        path
    }
}
