use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::ledger::PropertyLedger;
use crate::state::CallContext;

impl PropertyLedger {
    /// Moves `amount` tokens out of the unsold pool of `owner`'s property
    /// into the caller's holding.
    ///
    /// Only ledger entries change; paying `amount * price_per_token` is
    /// left to the environment.
    pub fn purchase_tokens(&mut self, ctx: &CallContext, owner: Pubkey, amount: u64) -> Result<bool> {
        let tenant = ctx.caller;
        if amount == 0 {
            log::warn!("Rejected purchase by {}: zero amount", tenant);
            return Err(LedgerError::InvalidAmount);
        }
        let property = self.property(&owner)?;
        if amount > property.available_tokens {
            log::warn!(
                "Rejected purchase of {} tokens from {} by {}: only {} available",
                amount,
                owner,
                tenant,
                property.available_tokens
            );
            return Err(LedgerError::InsufficientSupply);
        }
        let cost = amount
            .checked_mul(property.price_per_token)
            .ok_or(LedgerError::InvalidAmount)?;
        let available_after = property.available_tokens - amount;
        let balance_after = self
            .balance_of(&owner, &tenant)
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount)?;

        if let Some(property) = self.properties.get_mut(&owner) {
            property.available_tokens = available_after;
            property.updated_at = ctx.timestamp;
        }
        self.holdings.insert((owner, tenant), balance_after);
        self.emit(LedgerEvent::TokensPurchased {
            owner,
            tenant,
            amount,
            cost,
            available_tokens: available_after,
            timestamp: ctx.timestamp,
        });
        log::info!(
            "{} bought {} tokens of {} for {}, {} left",
            tenant,
            amount,
            owner,
            cost,
            available_after
        );
        Ok(true)
    }

    /// `None` when `tenant` never held tokens of `owner`'s property.
    pub fn get_tenant_tokens(&self, owner: &Pubkey, tenant: &Pubkey) -> Option<u64> {
        self.holdings.get(&(*owner, *tenant)).copied()
    }

    /// Moves already purchased tokens from the caller to `recipient`.
    ///
    /// Availability is untouched. Sending to oneself debits and credits the
    /// same holding, so the caller still needs `amount` tokens.
    pub fn transfer_rental_tokens(
        &mut self,
        ctx: &CallContext,
        recipient: Pubkey,
        owner: Pubkey,
        amount: u64,
    ) -> Result<bool> {
        let sender = ctx.caller;
        if amount == 0 {
            log::warn!("Rejected transfer by {}: zero amount", sender);
            return Err(LedgerError::InvalidAmount);
        }
        self.property(&owner)?;
        let sender_balance = self.balance_of(&owner, &sender);
        if sender_balance < amount {
            log::warn!(
                "Rejected transfer of {} tokens of {} from {}: balance is {}",
                amount,
                owner,
                sender,
                sender_balance
            );
            return Err(LedgerError::InsufficientBalance);
        }

        let sender_after = sender_balance - amount;
        let recipient_after = if recipient == sender {
            sender_balance
        } else {
            self.balance_of(&owner, &recipient)
                .checked_add(amount)
                .ok_or(LedgerError::InvalidAmount)?
        };

        self.holdings.insert((owner, sender), sender_after);
        self.holdings.insert((owner, recipient), recipient_after);
        self.emit(LedgerEvent::TokensTransferred {
            owner,
            from: sender,
            to: recipient,
            amount,
            timestamp: ctx.timestamp,
        });
        log::info!("{} sent {} tokens of {} to {}", sender, amount, owner, recipient);
        Ok(true)
    }
}
