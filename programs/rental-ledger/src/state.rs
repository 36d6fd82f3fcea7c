use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

/// Caller identity and time of a single invocation, supplied by the
/// environment that dispatches the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Pubkey,
    pub timestamp: i64,
}

impl CallContext {
    pub fn new(caller: Pubkey, timestamp: i64) -> Self {
        Self { caller, timestamp }
    }
}

/// A registered property. One per owner, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
    pub total_tokens: u64,
    pub price_per_token: u64,
    pub available_tokens: u64,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Property {
    pub fn new(owner: Pubkey, total_tokens: u64, price_per_token: u64, timestamp: i64) -> Self {
        Self {
            owner,
            total_tokens,
            price_per_token,
            available_tokens: total_tokens,
            description: None,
            location: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Tokens currently held by tenants.
    pub fn sold_tokens(&self) -> u64 {
        self.total_tokens - self.available_tokens
    }

    pub fn view(&self) -> PropertyView {
        PropertyView {
            owner: self.owner,
            total_tokens: self.total_tokens,
            price_per_token: self.price_per_token,
            available_tokens: self.available_tokens,
        }
    }
}

/// Result of `get-property-details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyView {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
    pub total_tokens: u64,
    pub price_per_token: u64,
    pub available_tokens: u64,
}

/// Descriptive data attached to a property, including the rental period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub description: Option<String>,
    pub location: Option<String>,
    pub rental_period: Option<u64>,
}

/// Aggregated tenant ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub sum: u64,
    pub count: u64,
}

impl RatingSummary {
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum as f64 / self.count as f64)
    }
}

/// Serializes a `Pubkey` as its base58 string instead of a byte array.
pub mod pubkey_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use solana_program::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Pubkey::from_str(&raw).map_err(|e| D::Error::custom(format!("invalid pubkey {raw}: {e}")))
    }
}
