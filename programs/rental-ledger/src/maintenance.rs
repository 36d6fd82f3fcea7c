use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::ledger::PropertyLedger;
use crate::state::CallContext;

impl PropertyLedger {
    /// Adds `amount` to the maintenance fund of `owner`.
    ///
    /// Open to any caller, registered property or not. Withdrawals happen
    /// outside the ledger.
    pub fn add_maintenance_fund(&mut self, ctx: &CallContext, owner: Pubkey, amount: u64) -> Result<bool> {
        if amount == 0 {
            log::warn!("Rejected maintenance contribution by {}: zero amount", ctx.caller);
            return Err(LedgerError::InvalidAmount);
        }
        let fund_balance = self
            .get_maintenance_fund(&owner)
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount)?;

        self.maintenance_funds.insert(owner, fund_balance);
        self.emit(LedgerEvent::MaintenanceFunded {
            owner,
            contributor: ctx.caller,
            amount,
            fund_balance,
            timestamp: ctx.timestamp,
        });
        log::info!(
            "{} added {} to maintenance fund of {} (now {})",
            ctx.caller,
            amount,
            owner,
            fund_balance
        );
        Ok(true)
    }

    pub fn get_maintenance_fund(&self, owner: &Pubkey) -> Option<u64> {
        self.maintenance_funds.get(owner).copied()
    }
}
