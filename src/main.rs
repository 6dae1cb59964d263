//! ClubRoster - Application Entry Point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubroster::{config::CONFIG, create_router, db, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ClubRoster server...");

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    let state = AppState::new(db_pool, CONFIG.clone());
    let app = create_router(state);

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        utc_offset = %CONFIG.club.utc_offset,
        "Server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
