use solana_program::pubkey::Pubkey;

use crate::error::{LedgerError, Result};
use crate::events::LedgerEvent;
use crate::ledger::PropertyLedger;
use crate::state::{CallContext, Property, PropertyMetadata, PropertyView};
use crate::{MAX_DESCRIPTION_LEN, MAX_LOCATION_LEN};

impl PropertyLedger {
    /// Registers the caller's property with a fixed token supply.
    ///
    /// Every token starts out available. An owner can register once.
    pub fn register_property(
        &mut self,
        ctx: &CallContext,
        total_tokens: u64,
        price_per_token: u64,
    ) -> Result<bool> {
        let owner = ctx.caller;
        if total_tokens == 0 {
            log::warn!("Rejected registration by {}: zero token supply", owner);
            return Err(LedgerError::InvalidAmount);
        }
        if self.properties.contains_key(&owner) {
            log::warn!("Rejected registration by {}: already registered", owner);
            return Err(LedgerError::AlreadyRegistered);
        }

        self.properties
            .insert(owner, Property::new(owner, total_tokens, price_per_token, ctx.timestamp));
        self.emit(LedgerEvent::PropertyRegistered {
            owner,
            total_tokens,
            price_per_token,
            timestamp: ctx.timestamp,
        });
        log::info!(
            "Registered property for {}: {} tokens at {} each",
            owner,
            total_tokens,
            price_per_token
        );
        Ok(true)
    }

    pub fn get_property_details(&self, owner: &Pubkey) -> Option<PropertyView> {
        self.properties.get(owner).map(Property::view)
    }

    /// Overwrites description and location of the caller's own property.
    pub fn set_property_details(
        &mut self,
        ctx: &CallContext,
        description: String,
        location: String,
    ) -> Result<bool> {
        let owner = ctx.caller;
        let Some(property) = self.properties.get_mut(&owner) else {
            log::warn!("Rejected details update by {}: no registered property", owner);
            return Err(LedgerError::Unauthorized);
        };
        if description.len() > MAX_DESCRIPTION_LEN || location.len() > MAX_LOCATION_LEN {
            return Err(LedgerError::MetadataTooLong);
        }

        property.description = Some(description.clone());
        property.location = Some(location.clone());
        property.updated_at = ctx.timestamp;

        self.emit(LedgerEvent::PropertyDetailsUpdated {
            owner,
            description,
            location,
            timestamp: ctx.timestamp,
        });
        log::info!("Updated details of property {}", owner);
        Ok(true)
    }

    /// Sets the rental period associated with `owner`.
    ///
    /// Any caller may set it and the owner does not need a registered
    /// property; the period belongs to the tenancy rather than the registry.
    pub fn set_rental_period(&mut self, ctx: &CallContext, owner: Pubkey, duration: u64) -> Result<bool> {
        if duration == 0 {
            log::warn!("Rejected rental period for {}: zero duration", owner);
            return Err(LedgerError::InvalidAmount);
        }

        self.rental_periods.insert(owner, duration);
        if let Some(property) = self.properties.get_mut(&owner) {
            property.updated_at = ctx.timestamp;
        }
        self.emit(LedgerEvent::RentalPeriodSet {
            owner,
            set_by: ctx.caller,
            duration,
            timestamp: ctx.timestamp,
        });
        log::info!("Rental period of {} set to {} by {}", owner, duration, ctx.caller);
        Ok(true)
    }

    pub fn get_rental_period(&self, owner: &Pubkey) -> Option<u64> {
        self.rental_periods.get(owner).copied()
    }

    /// Description, location and rental period. `None` when nothing at all
    /// is known about `owner`.
    pub fn get_property_metadata(&self, owner: &Pubkey) -> Option<PropertyMetadata> {
        let property = self.properties.get(owner);
        let rental_period = self.get_rental_period(owner);
        if property.is_none() && rental_period.is_none() {
            return None;
        }
        Some(PropertyMetadata {
            description: property.and_then(|p| p.description.clone()),
            location: property.and_then(|p| p.location.clone()),
            rental_period,
        })
    }
}
