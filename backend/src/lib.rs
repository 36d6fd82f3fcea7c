//! HTTP environment for the rental ledger: authenticates callers, serializes
//! every call through one lock and persists the ledger after each change.

use std::str::FromStr;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use rental_ledger::Pubkey;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

use error::ApiError;
pub use state::{AppState, Principal};

async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingToken)?;
    let wallet = auth::validate_token(token, &state.config.jwt_secret)
        .map_err(|_| ApiError::InvalidToken)?;
    let caller = Pubkey::from_str(&wallet).map_err(|_| ApiError::InvalidToken)?;
    log::info!("Authenticated caller: {}", caller);
    request.extensions_mut().insert(Principal(caller));
    Ok(next.run(request).await)
}

pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/properties", post(handlers::register_property))
        .route("/property-details", post(handlers::set_property_details))
        .route("/properties/:owner/rental-period", post(handlers::set_rental_period))
        .route("/properties/:owner/purchase", post(handlers::purchase_tokens))
        .route("/properties/:owner/transfer", post(handlers::transfer_rental_tokens))
        .route(
            "/properties/:owner/maintenance-contributions",
            post(handlers::add_maintenance_fund),
        )
        .route("/properties/:owner/rate", post(handlers::rate_property))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/", get(|| async { "Rental ledger is running" }))
        .route("/login", post(handlers::login))
        .route("/properties/:owner", get(handlers::get_property_details))
        .route("/properties/:owner/metadata", get(handlers::get_property_metadata))
        .route("/properties/:owner/tenants/:tenant", get(handlers::get_tenant_tokens))
        .route("/properties/:owner/maintenance-fund", get(handlers::get_maintenance_fund))
        .route("/properties/:owner/rating", get(handlers::get_rating))
        .route("/properties/:owner/events", get(handlers::get_events))
        .merge(protected_routes)
        .with_state(state)
}
