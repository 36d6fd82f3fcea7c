use serde::Serialize;

/// Custom error codes start at the same offset Anchor uses for program errors.
pub const ERROR_CODE_OFFSET: u32 = 6000;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum LedgerError {
    #[error("A property is already registered for this owner")]
    AlreadyRegistered,
    #[error("No property is registered for this owner")]
    PropertyNotFound,
    #[error("Caller is not allowed to perform this operation")]
    Unauthorized,
    #[error("Amount must be greater than zero and must not overflow")]
    InvalidAmount,
    #[error("Requested amount exceeds the available token supply")]
    InsufficientSupply,
    #[error("Caller holds fewer tokens than requested")]
    InsufficientBalance,
    #[error("Rating score must be between 1 and 5")]
    InvalidRating,
    #[error("Description or location exceeds its maximum length")]
    MetadataTooLong,
    #[error("Tenant balances and available tokens do not add up to total supply")]
    ConservationViolated,
}

impl LedgerError {
    pub fn code(&self) -> u32 {
        let index = match self {
            LedgerError::AlreadyRegistered => 0,
            LedgerError::PropertyNotFound => 1,
            LedgerError::Unauthorized => 2,
            LedgerError::InvalidAmount => 3,
            LedgerError::InsufficientSupply => 4,
            LedgerError::InsufficientBalance => 5,
            LedgerError::InvalidRating => 6,
            LedgerError::MetadataTooLong => 7,
            LedgerError::ConservationViolated => 8,
        };
        ERROR_CODE_OFFSET + index
    }

    pub fn name(&self) -> &'static str {
        match self {
            LedgerError::AlreadyRegistered => "AlreadyRegistered",
            LedgerError::PropertyNotFound => "PropertyNotFound",
            LedgerError::Unauthorized => "Unauthorized",
            LedgerError::InvalidAmount => "InvalidAmount",
            LedgerError::InsufficientSupply => "InsufficientSupply",
            LedgerError::InsufficientBalance => "InsufficientBalance",
            LedgerError::InvalidRating => "InvalidRating",
            LedgerError::MetadataTooLong => "MetadataTooLong",
            LedgerError::ConservationViolated => "ConservationViolated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_offset_and_distinct() {
        let all = [
            LedgerError::AlreadyRegistered,
            LedgerError::PropertyNotFound,
            LedgerError::Unauthorized,
            LedgerError::InvalidAmount,
            LedgerError::InsufficientSupply,
            LedgerError::InsufficientBalance,
            LedgerError::InvalidRating,
            LedgerError::MetadataTooLong,
            LedgerError::ConservationViolated,
        ];
        let mut codes: Vec<u32> = all.iter().map(LedgerError::code).collect();
        assert!(codes.iter().all(|c| *c >= ERROR_CODE_OFFSET));
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn name_matches_debug() {
        assert_eq!(LedgerError::InsufficientSupply.name(), format!("{:?}", LedgerError::InsufficientSupply));
    }
}
