use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use rental_ledger::{LedgerEvent, PropertyMetadata, PropertyView, Pubkey};

use crate::auth;
use crate::error::ApiError;
use crate::models::{
    AmountRequest, LoginRequest, LoginResponse, OkResponse, PropertyDetailsRequest, RateRequest,
    RatingResponse, RegisterPropertyRequest, RentalPeriodRequest, TransferRequest,
};
use crate::state::{AppState, Principal};

fn parse_pubkey(raw: &str) -> Result<Pubkey, ApiError> {
    Pubkey::from_str(raw).map_err(|_| ApiError::InvalidPubkey(raw.to_string()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !auth::verify_wallet_signature(&req.wallet_address, &req.signature, &req.message) {
        log::warn!("Rejected login for {}", req.wallet_address);
        return Err(ApiError::InvalidSignature);
    }
    let now = chrono::Utc::now().timestamp();
    if !auth::check_login_message(
        &req.message,
        &req.wallet_address,
        now,
        state.config.login_window_secs,
    ) {
        log::warn!("Rejected login message for {}", req.wallet_address);
        return Err(ApiError::InvalidLoginMessage);
    }
    let token = auth::create_token(
        &req.wallet_address,
        &state.config.jwt_secret,
        state.config.token_ttl_hours,
    )?;
    log::info!("Issued token for {}", req.wallet_address);
    Ok(Json(LoginResponse { token }))
}

pub async fn get_property_details(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Option<PropertyView>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    Ok(Json(state.read(|ledger| ledger.get_property_details(&owner)).await))
}

pub async fn get_property_metadata(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Option<PropertyMetadata>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    Ok(Json(state.read(|ledger| ledger.get_property_metadata(&owner)).await))
}

pub async fn get_tenant_tokens(
    State(state): State<AppState>,
    Path((owner, tenant)): Path<(String, String)>,
) -> Result<Json<Option<u64>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let tenant = parse_pubkey(&tenant)?;
    Ok(Json(state.read(|ledger| ledger.get_tenant_tokens(&owner, &tenant)).await))
}

pub async fn get_maintenance_fund(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Option<u64>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    Ok(Json(state.read(|ledger| ledger.get_maintenance_fund(&owner)).await))
}

pub async fn get_rating(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Option<RatingResponse>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let rating = state.read(|ledger| ledger.get_rating(&owner)).await;
    Ok(Json(rating.map(RatingResponse::from)))
}

pub async fn get_events(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Vec<LedgerEvent>>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let events: Vec<LedgerEvent> = state
        .read(|ledger| ledger.events_for(&owner).cloned().collect())
        .await;
    Ok(Json(events))
}

pub async fn register_property(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Json(req): Json<RegisterPropertyRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let ok = state
        .mutate(caller, |ledger, ctx| {
            ledger.register_property(ctx, req.total_tokens, req.price_per_token)
        })
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn set_property_details(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Json(req): Json<PropertyDetailsRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let ok = state
        .mutate(caller, |ledger, ctx| {
            ledger.set_property_details(ctx, req.description, req.location)
        })
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn set_rental_period(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Path(owner): Path<String>,
    Json(req): Json<RentalPeriodRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let ok = state
        .mutate(caller, |ledger, ctx| ledger.set_rental_period(ctx, owner, req.duration))
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn purchase_tokens(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Path(owner): Path<String>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let ok = state
        .mutate(caller, |ledger, ctx| ledger.purchase_tokens(ctx, owner, req.amount))
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn transfer_rental_tokens(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Path(owner): Path<String>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let recipient = parse_pubkey(&req.recipient)?;
    let ok = state
        .mutate(caller, |ledger, ctx| {
            ledger.transfer_rental_tokens(ctx, recipient, owner, req.amount)
        })
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn add_maintenance_fund(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Path(owner): Path<String>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let ok = state
        .mutate(caller, |ledger, ctx| ledger.add_maintenance_fund(ctx, owner, req.amount))
        .await?;
    Ok(Json(OkResponse { ok }))
}

pub async fn rate_property(
    State(state): State<AppState>,
    Extension(Principal(caller)): Extension<Principal>,
    Path(owner): Path<String>,
    Json(req): Json<RateRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let owner = parse_pubkey(&owner)?;
    let ok = state
        .mutate(caller, |ledger, ctx| ledger.rate_property(ctx, owner, req.score))
        .await?;
    Ok(Json(OkResponse { ok }))
}
