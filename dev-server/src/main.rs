//! Development server for Audioshelf UI development
//!
//! This binary runs the api on a fixed port with an in-memory library that
//! already holds a few playable books, so the shelf has something to show.
//! Set STATIC_DIR to a built UI (`trunk build` output) to serve it from the
//! same origin instead of running `trunk serve`.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use std::path::PathBuf;
use test_helpers::mock::DevDataset;
use tracing::info;

const DEV_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting Audioshelf development server");

    let app = match std::env::var("STATIC_DIR") {
        Ok(dir) => {
            info!("📁 Serving UI from {dir}");
            test_helpers::spawn_app_serving_ui(PathBuf::from(dir)).await
        }
        Err(_) => test_helpers::spawn_app_on_port(DEV_PORT).await,
    };

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Seeding development library...");
    let dataset = DevDataset::create(&app).await;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
