//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,api=info cargo test -p ui-tests -- --ignored --nocapture
//! ```
//!
//! Needs `trunk` and `geckodriver` on the PATH.

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder, Locator};
use rand::Rng;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Where `trunk build` leaves the UI, relative to this crate.
const UI_DIST_DIR: &str = "../ui/dist";

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    #[cfg(test)]
    #[allow(dead_code)]
    pub async fn setup() -> Result<Self> {
        Self::setup_with_options(false).await
    }

    pub async fn setup_headed() -> Result<Self> {
        Self::setup_with_options(true).await
    }

    async fn setup_with_options(headed: bool) -> Result<Self> {
        info!("🔧 Setting up test environment");

        // Step 1: Build the UI so the api can serve it from the same origin
        info!("🎨 Building frontend");
        build_frontend()?;

        // Step 2: Start API server (using test-helpers)
        info!("🚀 Starting API server");
        let api =
            test_helpers::spawn_app_serving_ui(PathBuf::from(UI_DIST_DIR))
                .await;
        let frontend_url = format!("http://localhost:{}", api.port);
        info!("✅ API server running on {}", frontend_url);

        // Step 3: Start geckodriver with retry logic
        info!("🦎 Starting geckodriver");
        let (geckodriver_process, gecko_port) =
            start_geckodriver_with_retry(4444).await?;
        info!("✅ Geckodriver running on port {}", gecko_port);

        // Step 4: Connect to browser
        info!("🌐 Connecting to browser");
        let browser = connect_to_browser(gecko_port, headed).await?;
        info!("✅ Browser connected");

        Ok(TestEnvironment {
            api,
            browser,
            geckodriver_process,
            frontend_url,
        })
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        info!("🧹 Cleaning up test environment");

        if let Err(e) = self.geckodriver_process.kill() {
            warn!("Failed to kill geckodriver process: {}", e);
        }

        info!("✅ Cleanup complete");
    }
}

fn build_frontend() -> Result<()> {
    debug!("Building frontend with trunk build");
    // BACKEND_URL is read at compile time; leaving it unset makes the UI
    // talk to whichever origin served it
    let status = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env_remove("BACKEND_URL")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run trunk build")?;

    anyhow::ensure!(
        status.success(),
        "Frontend build failed with status: {}",
        status
    );
    debug!("Frontend build successful");
    Ok(())
}

async fn start_geckodriver_with_retry(base_port: u16) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!(
            "Attempting to start geckodriver on port {} (attempt {})",
            port, attempt
        );

        match Command::new("geckodriver")
            .arg("--port")
            .arg(port.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;

                // Still running means the port was free
                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!(
                            "Geckodriver exited with status {}, trying different port",
                            status
                        );
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking geckodriver status: {}", e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => {
                debug!("Failed to start geckodriver: {}", e);
            }
        }

        if attempt < 5 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    Err(anyhow::anyhow!(
        "Failed to start geckodriver after 5 attempts"
    ))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let gecko_url = format!("http://localhost:{}", gecko_port);

    let mut caps = serde_json::Map::new();
    let firefox_opts = if headed {
        info!("🖥️ Starting browser in headed mode");
        serde_json::json!({
            "log": {"level": "error"}
        })
    } else {
        info!("👻 Starting browser in headless mode");
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&gecko_url)
        .await
        .context("Failed to connect to geckodriver")?;

    Ok(client)
}

/// Open the app and go through the login button's authorization redirect,
/// ending on the shelf.
pub async fn authorize_in_browser(
    browser: &Client,
    frontend_url: &str,
) -> Result<()> {
    info!("🔐 Authorizing through the login button");

    browser.goto(frontend_url).await?;
    let login_button = browser
        .wait()
        .at_most(Duration::from_secs(10))
        .for_element(Locator::Id("login-button"))
        .await
        .context("Login prompt never appeared")?;
    login_button.click().await?;

    browser
        .wait()
        .at_most(Duration::from_secs(10))
        .for_element(Locator::Id("shelf-container"))
        .await
        .context("Shelf never appeared after authorizing")?;

    info!("✅ Authorized");
    Ok(())
}

#[cfg(test)]
/// Text of the shelf section once it has rendered something.
pub async fn shelf_text(browser: &Client) -> Result<String> {
    // The list arrives after the shelf section mounts
    sleep(Duration::from_millis(500)).await;
    let shelf = browser.find(Locator::Id("shelf-container")).await?;
    Ok(shelf.text().await?)
}

#[cfg(test)]
/// Accept the open alert and return its message.
pub async fn accept_alert(browser: &Client) -> Result<String> {
    for _ in 0..20 {
        if let Ok(text) = browser.get_alert_text().await {
            browser.accept_alert().await?;
            return Ok(text);
        }
        sleep(Duration::from_millis(250)).await;
    }
    Err(anyhow::anyhow!("No alert was shown"))
}
