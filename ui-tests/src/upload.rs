use anyhow::Result;
use fantoccini::Locator;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::framework::{
    TestEnvironment, accept_alert, authorize_in_browser, shelf_text,
};

/// Submitting without a file alerts and never reaches the api.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_upload_without_file_is_refused() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    authorize_in_browser(&env.browser, &env.frontend_url).await?;

    let title = env.browser.find(Locator::Id("book-title")).await?;
    title.send_keys("Middlemarch").await?;
    env.browser
        .find(Locator::Css("#upload-form button[type='submit']"))
        .await?
        .click()
        .await?;

    let message = accept_alert(&env.browser).await?;
    assert_eq!(message, "Please provide both a title and a file.");
    assert_eq!(env.api.library.file_count().await, 0);

    Ok(())
}

/// A successful upload alerts, clears the form, and shows the new book.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_upload_clears_form_and_reloads_shelf() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    authorize_in_browser(&env.browser, &env.frontend_url).await?;

    let path = std::env::temp_dir()
        .join(format!("audioshelf-{}.mp3", rand::random::<u32>()));
    std::fs::write(&path, test_helpers::sample_mp3())?;

    info!("📤 Uploading {}", path.display());
    let title = env.browser.find(Locator::Id("book-title")).await?;
    title.send_keys("Middlemarch").await?;
    let file = env.browser.find(Locator::Id("book-file")).await?;
    file.send_keys(&path.to_string_lossy()).await?;
    env.browser
        .find(Locator::Css("#upload-form button[type='submit']"))
        .await?
        .click()
        .await?;

    let message = accept_alert(&env.browser).await?;
    assert_eq!(message, "File uploaded successfully!");

    // Give the reload a moment to land
    sleep(Duration::from_millis(500)).await;
    let title = env.browser.find(Locator::Id("book-title")).await?;
    assert_eq!(title.prop("value").await?.as_deref(), Some(""));
    let file = env.browser.find(Locator::Id("book-file")).await?;
    assert_eq!(file.prop("value").await?.as_deref(), Some(""));

    let text = shelf_text(&env.browser).await?;
    assert!(text.contains("Middlemarch"), "unexpected shelf text: {text}");
    assert_eq!(env.api.library.file_count().await, 1);

    let _ = std::fs::remove_file(&path);
    Ok(())
}
