use anyhow::Result;
use fantoccini::Locator;
use test_helpers::mock::{DevDataset, SAMPLE_TITLES};
use tracing::info;

use crate::framework::{TestEnvironment, authorize_in_browser, shelf_text};

/// A visitor without credentials sees only the login prompt.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_logged_out_visitor_sees_login_prompt() -> Result<()> {
    let env = TestEnvironment::setup().await?;

    env.browser.goto(&env.frontend_url).await?;
    env.browser
        .wait()
        .for_element(Locator::Id("auth-section"))
        .await?;

    let shelf = env.browser.find(Locator::Id("shelf-container")).await;
    assert!(shelf.is_err(), "shelf shown before authorizing");
    let upload = env.browser.find(Locator::Id("upload-section")).await;
    assert!(upload.is_err(), "upload form shown before authorizing");

    Ok(())
}

/// Authorizing with an empty library shows the placeholder text.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_empty_shelf_shows_placeholder() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    authorize_in_browser(&env.browser, &env.frontend_url).await?;

    let text = shelf_text(&env.browser).await?;
    assert!(
        text.contains("Your shelf is empty. Upload a book to get started!"),
        "unexpected shelf text: {text}"
    );

    Ok(())
}

/// Every stored book gets a title and an audio control.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_seeded_books_render_with_audio() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    DevDataset::create(&env.api).await;
    authorize_in_browser(&env.browser, &env.frontend_url).await?;

    let text = shelf_text(&env.browser).await?;
    info!("Shelf text: {text}");
    for title in SAMPLE_TITLES {
        assert!(text.contains(title), "{title} missing from shelf");
    }

    let audio = env
        .browser
        .find_all(Locator::Css("#shelf-container .book audio"))
        .await?;
    assert_eq!(audio.len(), SAMPLE_TITLES.len());

    Ok(())
}

/// Signing out drops the session and returns to the login prompt.
#[tokio::test]
#[ignore = "needs trunk and geckodriver"]
async fn test_sign_out_returns_to_login_prompt() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    authorize_in_browser(&env.browser, &env.frontend_url).await?;

    env.browser
        .find(Locator::Id("sign-out-button"))
        .await?
        .click()
        .await?;
    env.browser
        .wait()
        .for_element(Locator::Id("login-button"))
        .await?;

    // The session is gone server-side too
    env.browser.refresh().await?;
    env.browser
        .wait()
        .for_element(Locator::Id("login-button"))
        .await?;

    Ok(())
}
