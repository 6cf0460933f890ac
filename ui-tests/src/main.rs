//! This crate uses standard Rust tests with #[tokio::test]
//! Run with: cargo test -p ui-tests -- --ignored
//!
//! For human-in-the-loop debugging, main() seeds a few books and opens a
//! headed browser on the authorized shelf for manual inspection.

use anyhow::Result;
use test_helpers::mock::DevDataset;
use tracing::info;

mod framework;
#[cfg(test)]
mod shelf;
#[cfg(test)]
mod upload;

use crate::framework::TestEnvironment;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing using the same setup as the API
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting UI test environment");

    info!("🔧 Setting up test environment with headed browser");
    let env = TestEnvironment::setup_headed().await?;

    info!("📊 Seeding the library");
    let dataset = DevDataset::create(&env.api).await;

    framework::authorize_in_browser(&env.browser, &env.frontend_url).await?;

    info!("📋 Test Environment Summary:");
    dataset.print_summary();
    info!("");
    info!("🎯 You can now test:");
    info!("   • Playing the seeded books");
    info!("   • Uploading a book and watching the shelf reload");
    info!("   • Signing out and authorizing again");
    info!("");
    let current_url = env.browser.current_url().await?;
    info!("🌐 Browser is now open at: {}", current_url);
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;

    info!("🧹 Cleaning up and closing browser");
    Ok(())
}
