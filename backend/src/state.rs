use std::sync::Arc;

use rental_ledger::{CallContext, PropertyLedger, Pubkey};
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store;

/// Identity of an authenticated caller, inserted by the auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct Principal(pub Pubkey);

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Single lock over the whole ledger; every call runs to completion
    /// before the next one starts.
    pub ledger: Arc<Mutex<PropertyLedger>>,
}

impl AppState {
    pub fn new(config: AppConfig, ledger: PropertyLedger) -> Self {
        Self {
            config,
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Runs one ledger operation as `caller` and persists the result.
    ///
    /// The operation runs on a working copy that replaces the shared ledger
    /// only once its snapshot is on disk, so a failed write leaves no trace.
    /// The lock is held throughout and snapshots land in transition order.
    pub async fn mutate<F>(&self, caller: Pubkey, op: F) -> Result<bool, ApiError>
    where
        F: FnOnce(&mut PropertyLedger, &CallContext) -> rental_ledger::Result<bool>,
    {
        let mut ledger = self.ledger.lock().await;
        let ctx = CallContext::new(caller, chrono::Utc::now().timestamp());
        let mut working = ledger.clone();
        let ok = op(&mut working, &ctx)?;
        if let Some(path) = &self.config.ledger_snapshot_path {
            store::save(path, &working.snapshot()).await?;
        }
        *ledger = working;
        Ok(ok)
    }

    /// Runs a read-only query under the lock.
    pub async fn read<T, F>(&self, query: F) -> T
    where
        F: FnOnce(&PropertyLedger) -> T,
    {
        let ledger = self.ledger.lock().await;
        query(&ledger)
    }
}
