use std::net::SocketAddr;

use rental_ledger::PropertyLedger;
use rental_ledger_backend::{app, config, store, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = config::AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let ledger = match &config.ledger_snapshot_path {
        Some(path) => store::load(path).await?.unwrap_or_default(),
        None => PropertyLedger::new(),
    };
    log::info!("Ledger holds {} properties", ledger.property_count());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("Starting server on {}", addr);

    let app = app(AppState::new(config, ledger));
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}
