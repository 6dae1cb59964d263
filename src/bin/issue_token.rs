//! Issue an access token for an existing user
//!
//! Usage: `issue_token <username>`

use anyhow::Context;

use clubroster::{config::CONFIG, db, services::{AuthService, UserService}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let username = std::env::args()
        .nth(1)
        .context("usage: issue_token <username>")?;

    let pool = db::create_pool(&CONFIG.database).await?;
    let user = UserService::get_user(&pool, &username).await?;
    let token = AuthService::issue_token(&user, &CONFIG.jwt)?;

    tracing::info!(username = %user.username, is_admin = user.is_admin, "Issued token");
    println!("{token}");

    Ok(())
}
