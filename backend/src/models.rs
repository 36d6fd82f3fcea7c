use rental_ledger::RatingSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub wallet_address: String,
    pub signature: String, // Base58 signature of `message`
    pub message: String,   // `login to rental ledger as <wallet> at <unix ts>`
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterPropertyRequest {
    pub total_tokens: u64,
    pub price_per_token: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PropertyDetailsRequest {
    pub description: String,
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RateRequest {
    pub score: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RentalPeriodRequest {
    pub duration: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingResponse {
    pub sum: u64,
    pub count: u64,
    pub average: Option<f64>,
}

impl From<RatingSummary> for RatingResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            sum: summary.sum,
            count: summary.count,
            average: summary.average(),
        }
    }
}
