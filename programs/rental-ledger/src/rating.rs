use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::ledger::PropertyLedger;
use crate::state::{CallContext, RatingSummary};
use crate::{MAX_RATING, MIN_RATING};

impl PropertyLedger {
    /// Records a score from a tenant currently holding tokens of the property.
    pub fn rate_property(&mut self, ctx: &CallContext, owner: Pubkey, score: u64) -> Result<bool> {
        let tenant = ctx.caller;
        if !(MIN_RATING..=MAX_RATING).contains(&score) {
            log::warn!("Rejected rating {} for {} by {}", score, owner, tenant);
            return Err(LedgerError::InvalidRating);
        }
        self.property(&owner)?;
        if self.balance_of(&owner, &tenant) == 0 {
            log::warn!("Rejected rating for {} by {}: not a tenant", owner, tenant);
            return Err(LedgerError::Unauthorized);
        }

        let current = self.get_rating(&owner).unwrap_or_default();
        let updated = RatingSummary {
            sum: current.sum.checked_add(score).ok_or(LedgerError::InvalidAmount)?,
            count: current.count.checked_add(1).ok_or(LedgerError::InvalidAmount)?,
        };

        self.ratings.insert(owner, updated);
        self.emit(LedgerEvent::PropertyRated {
            owner,
            tenant,
            score,
            timestamp: ctx.timestamp,
        });
        log::info!("{} rated {} with {}", tenant, owner, score);
        Ok(true)
    }

    pub fn get_rating(&self, owner: &Pubkey) -> Option<RatingSummary> {
        self.ratings.get(owner).copied()
    }
}
