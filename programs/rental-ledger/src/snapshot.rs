//! Serializable copy of the ledger state.
//!
//! Map keys are flattened into entry lists so the document can be written
//! as JSON. [`PropertyLedger::restore`] re-checks the ledger invariants and
//! refuses a snapshot that breaks any of them.

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::ledger::PropertyLedger;
use crate::state::{pubkey_string, Property, RatingSummary};
use crate::{MAX_RATING, MAX_RETAINED_EVENTS, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingEntry {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
    #[serde(with = "pubkey_string")]
    pub tenant: Pubkey,
    pub balance: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerValue<T> {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
    pub value: T,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub properties: Vec<Property>,
    pub holdings: Vec<HoldingEntry>,
    pub maintenance_funds: Vec<OwnerValue<u64>>,
    pub ratings: Vec<OwnerValue<RatingSummary>>,
    pub rental_periods: Vec<OwnerValue<u64>>,
    #[serde(default)]
    pub events: Vec<LedgerEvent>,
}

impl PropertyLedger {
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            properties: self.properties.values().cloned().collect(),
            holdings: self
                .holdings
                .iter()
                .map(|((owner, tenant), balance)| HoldingEntry {
                    owner: *owner,
                    tenant: *tenant,
                    balance: *balance,
                })
                .collect(),
            maintenance_funds: owner_values(&self.maintenance_funds),
            ratings: owner_values(&self.ratings),
            rental_periods: owner_values(&self.rental_periods),
            events: self.events.iter().cloned().collect(),
        }
    }

    /// Rebuilds a ledger from a snapshot, rejecting duplicates and any
    /// property whose supply is not conserved.
    pub fn restore(snapshot: LedgerSnapshot) -> Result<Self> {
        let mut ledger = PropertyLedger::new();

        for property in snapshot.properties {
            if property.total_tokens == 0 || property.available_tokens > property.total_tokens {
                return Err(LedgerError::ConservationViolated);
            }
            if ledger.properties.insert(property.owner, property).is_some() {
                return Err(LedgerError::AlreadyRegistered);
            }
        }
        for entry in snapshot.holdings {
            if ledger
                .holdings
                .insert((entry.owner, entry.tenant), entry.balance)
                .is_some()
            {
                return Err(LedgerError::ConservationViolated);
            }
        }
        for entry in snapshot.maintenance_funds {
            if entry.value == 0 {
                return Err(LedgerError::InvalidAmount);
            }
            ledger.maintenance_funds.insert(entry.owner, entry.value);
        }
        for entry in snapshot.rental_periods {
            if entry.value == 0 {
                return Err(LedgerError::InvalidAmount);
            }
            ledger.rental_periods.insert(entry.owner, entry.value);
        }
        for entry in snapshot.ratings {
            if !rating_in_range(&entry.value) {
                return Err(LedgerError::InvalidRating);
            }
            ledger.ratings.insert(entry.owner, entry.value);
        }
        let dropped = snapshot.events.len().saturating_sub(MAX_RETAINED_EVENTS);
        ledger.events = snapshot.events.into_iter().skip(dropped).collect();

        ledger.verify_all()?;
        log::info!(
            "Restored ledger with {} properties and {} holdings",
            ledger.properties.len(),
            ledger.holdings.len()
        );
        Ok(ledger)
    }
}

/// Every recorded score lies in `MIN_RATING..=MAX_RATING`, so the sum is
/// bounded by the count on both sides.
fn rating_in_range(summary: &RatingSummary) -> bool {
    let (Some(low), Some(high)) = (
        summary.count.checked_mul(MIN_RATING),
        summary.count.checked_mul(MAX_RATING),
    ) else {
        return false;
    };
    summary.count > 0 && (low..=high).contains(&summary.sum)
}

fn owner_values<T: Copy>(map: &std::collections::BTreeMap<Pubkey, T>) -> Vec<OwnerValue<T>> {
    map.iter()
        .map(|(owner, value)| OwnerValue {
            owner: *owner,
            value: *value,
        })
        .collect()
}
