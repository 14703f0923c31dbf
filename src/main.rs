use std::sync::Arc;

use waitlist_relay::config::TelegramConfig;
use waitlist_relay::relay::Relay;
use waitlist_relay::server::waitlist_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = TelegramConfig::from_env();
    if !config.is_configured() {
        tracing::error!("BOT_TOKEN / CHAT_ID not set; every submission will fail until configured");
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    let app = waitlist_routes(Arc::new(Relay::new(config)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "waitlist relay listening (POST /api/waitlist)");
    axum::serve(listener, app).await?;

    Ok(())
}
