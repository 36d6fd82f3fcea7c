//! Fractional-ownership rental property ledger.
//!
//! A landlord registers a property as a fixed pool of fungible rental tokens.
//! Tenants buy tokens out of the unsold pool and trade them between each
//! other, while maintenance contributions, descriptive metadata, ratings and
//! the rental period attach to the property.
//!
//! Properties are keyed by their owner: one owner, one property. Every
//! mutating operation takes a [`CallContext`] carrying the authenticated
//! caller; the ledger trusts it and never authenticates anyone itself.
//!
//! ```
//! use rental_ledger::{CallContext, PropertyLedger};
//! use solana_program::pubkey::Pubkey;
//!
//! let owner = Pubkey::new_unique();
//! let tenant = Pubkey::new_unique();
//! let mut ledger = PropertyLedger::new();
//!
//! ledger.register_property(&CallContext::new(owner, 0), 100, 10).unwrap();
//! ledger.purchase_tokens(&CallContext::new(tenant, 1), owner, 5).unwrap();
//!
//! assert_eq!(ledger.get_tenant_tokens(&owner, &tenant), Some(5));
//! assert_eq!(ledger.get_property_details(&owner).unwrap().available_tokens, 95);
//! ```

pub mod error;
pub mod events;
mod ledger;
mod maintenance;
mod market;
mod rating;
mod registry;
pub mod snapshot;
pub mod state;

pub use error::{LedgerError, Result};
pub use events::LedgerEvent;
pub use ledger::PropertyLedger;
pub use snapshot::LedgerSnapshot;
pub use state::{CallContext, Property, PropertyMetadata, PropertyView, RatingSummary};

pub use solana_program::pubkey::Pubkey;

/// Maximum length in bytes of a property description.
pub const MAX_DESCRIPTION_LEN: usize = 256;
/// Maximum length in bytes of a property location.
pub const MAX_LOCATION_LEN: usize = 64;
/// Lowest accepted rating score.
pub const MIN_RATING: u64 = 1;
/// Highest accepted rating score.
pub const MAX_RATING: u64 = 5;
/// Number of most recent events a ledger keeps; older ones are dropped.
pub const MAX_RETAINED_EVENTS: usize = 4096;
