use std::io::ErrorKind;
use std::path::Path;

use rental_ledger::{LedgerError, LedgerSnapshot, PropertyLedger};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot violates ledger invariants: {0}")]
    Ledger(#[from] LedgerError),
}

/// Reads the snapshot at `path`. A missing file means a fresh ledger.
pub async fn load(path: impl AsRef<Path>) -> Result<Option<PropertyLedger>, StoreError> {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No ledger snapshot at {}, starting empty", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let snapshot: LedgerSnapshot = serde_json::from_slice(&bytes)?;
    let ledger = PropertyLedger::restore(snapshot)?;
    log::info!("Loaded ledger snapshot from {}", path.display());
    Ok(Some(ledger))
}

/// Writes the snapshot next to `path` and renames it into place, so a
/// crash mid-write never leaves a truncated file behind.
pub async fn save(path: impl AsRef<Path>, snapshot: &LedgerSnapshot) -> Result<(), StoreError> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(snapshot)?;
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    log::debug!("Wrote ledger snapshot ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}
