use std::collections::{BTreeMap, VecDeque};

use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::state::{Property, RatingSummary};
use crate::MAX_RETAINED_EVENTS;

/// State of the rental ledger.
///
/// Operations are grouped by concern: registration and metadata in
/// `registry`, purchases and transfers in `market`, contributions in
/// `maintenance` and ratings in `rating`. Each one validates every
/// precondition before its first write, so a rejected call leaves the
/// ledger untouched.
///
/// Concurrent callers must serialize access (one global lock); the ledger
/// itself performs no synchronization.
///
/// Only the most recent [`MAX_RETAINED_EVENTS`] events are kept.
#[derive(Debug, Clone, Default)]
pub struct PropertyLedger {
    pub(crate) properties: BTreeMap<Pubkey, Property>,
    /// (owner, tenant) -> balance. Entries are never removed, so a balance
    /// that drops to zero still reads as `Some(0)`.
    pub(crate) holdings: BTreeMap<(Pubkey, Pubkey), u64>,
    pub(crate) maintenance_funds: BTreeMap<Pubkey, u64>,
    pub(crate) ratings: BTreeMap<Pubkey, RatingSummary>,
    pub(crate) rental_periods: BTreeMap<Pubkey, u64>,
    pub(crate) events: VecDeque<LedgerEvent>,
}

impl PropertyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn property(&self, owner: &Pubkey) -> Result<&Property> {
        self.properties.get(owner).ok_or(LedgerError::PropertyNotFound)
    }

    pub(crate) fn balance_of(&self, owner: &Pubkey, tenant: &Pubkey) -> u64 {
        self.holdings.get(&(*owner, *tenant)).copied().unwrap_or(0)
    }

    pub(crate) fn emit(&mut self, event: LedgerEvent) {
        if self.events.len() == MAX_RETAINED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Number of registered properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> &VecDeque<LedgerEvent> {
        &self.events
    }

    /// Events recorded for one property, oldest first.
    pub fn events_for<'a>(&'a self, owner: &'a Pubkey) -> impl Iterator<Item = &'a LedgerEvent> + 'a {
        self.events.iter().filter(move |event| event.owner() == owner)
    }

    /// Sum of all tenant balances for a property, `None` if it overflows.
    pub fn held_tokens(&self, owner: &Pubkey) -> Option<u64> {
        self.holdings
            .iter()
            .filter(|((holding_owner, _), _)| holding_owner == owner)
            .try_fold(0u64, |acc, (_, balance)| acc.checked_add(*balance))
    }

    /// Checks that tenant balances plus available tokens equal total supply.
    pub fn verify_conservation(&self, owner: &Pubkey) -> Result<()> {
        let property = self.property(owner)?;
        if property.available_tokens > property.total_tokens {
            return Err(LedgerError::ConservationViolated);
        }
        match self.held_tokens(owner) {
            Some(held) if held == property.sold_tokens() => Ok(()),
            _ => Err(LedgerError::ConservationViolated),
        }
    }

    /// Runs [`verify_conservation`](Self::verify_conservation) for every
    /// property and checks that no holding refers to an unknown property.
    pub fn verify_all(&self) -> Result<()> {
        for owner in self.properties.keys() {
            self.verify_conservation(owner)?;
        }
        if self.holdings.keys().any(|(owner, _)| !self.properties.contains_key(owner)) {
            return Err(LedgerError::ConservationViolated);
        }
        Ok(())
    }
}
