use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::state::pubkey_string;

/// Record of an accepted state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    PropertyRegistered {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        total_tokens: u64,
        price_per_token: u64,
        timestamp: i64,
    },
    PropertyDetailsUpdated {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        description: String,
        location: String,
        timestamp: i64,
    },
    RentalPeriodSet {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        #[serde(with = "pubkey_string")]
        set_by: Pubkey,
        duration: u64,
        timestamp: i64,
    },
    TokensPurchased {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        #[serde(with = "pubkey_string")]
        tenant: Pubkey,
        amount: u64,
        cost: u64,
        available_tokens: u64,
        timestamp: i64,
    },
    TokensTransferred {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        #[serde(with = "pubkey_string")]
        from: Pubkey,
        #[serde(with = "pubkey_string")]
        to: Pubkey,
        amount: u64,
        timestamp: i64,
    },
    MaintenanceFunded {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        #[serde(with = "pubkey_string")]
        contributor: Pubkey,
        amount: u64,
        fund_balance: u64,
        timestamp: i64,
    },
    PropertyRated {
        #[serde(with = "pubkey_string")]
        owner: Pubkey,
        #[serde(with = "pubkey_string")]
        tenant: Pubkey,
        score: u64,
        timestamp: i64,
    },
}

impl LedgerEvent {
    /// Owner of the property the event belongs to.
    pub fn owner(&self) -> &Pubkey {
        match self {
            LedgerEvent::PropertyRegistered { owner, .. }
            | LedgerEvent::PropertyDetailsUpdated { owner, .. }
            | LedgerEvent::RentalPeriodSet { owner, .. }
            | LedgerEvent::TokensPurchased { owner, .. }
            | LedgerEvent::TokensTransferred { owner, .. }
            | LedgerEvent::MaintenanceFunded { owner, .. }
            | LedgerEvent::PropertyRated { owner, .. } => owner,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            LedgerEvent::PropertyRegistered { timestamp, .. }
            | LedgerEvent::PropertyDetailsUpdated { timestamp, .. }
            | LedgerEvent::RentalPeriodSet { timestamp, .. }
            | LedgerEvent::TokensPurchased { timestamp, .. }
            | LedgerEvent::TokensTransferred { timestamp, .. }
            | LedgerEvent::MaintenanceFunded { timestamp, .. }
            | LedgerEvent::PropertyRated { timestamp, .. } => *timestamp,
        }
    }
}
