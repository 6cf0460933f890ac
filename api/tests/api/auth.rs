use reqwest::{StatusCode, header};

use test_helpers::spawn_app;

#[tokio::test]
async fn new_session_is_not_authenticated() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert!(!app.client.is_authenticated().await?);

    Ok(())
}

#[tokio::test]
async fn authorize_flow_authenticates_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.authorize().await?;

    assert!(app.client.is_authenticated().await?);

    Ok(())
}

#[tokio::test]
async fn callback_redirects_to_frontend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = &app.client.inner_client;

    let response = client.get(app.client.authorize_url()).send().await?;
    let callback = response.headers()[header::LOCATION].to_str()?.to_string();
    assert!(callback.starts_with("/oauth2callback?state="));

    let response = client
        .get(format!("{}{callback}", app.client.address))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");

    Ok(())
}

#[tokio::test]
async fn callback_with_wrong_state_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = &app.client.inner_client;

    client.get(app.client.authorize_url()).send().await?;
    let response = client
        .get(format!(
            "{}/oauth2callback?state=not-the-state",
            app.client.address
        ))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: payloads::responses::ErrorBody = response.json().await?;
    assert_eq!(body.error, "Authorization state mismatch");
    assert!(!app.client.is_authenticated().await?);

    Ok(())
}

#[tokio::test]
async fn callback_without_authorize_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app
        .client
        .inner_client
        .get(format!("{}/oauth2callback?state=abc", app.client.address))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!app.client.is_authenticated().await?);

    Ok(())
}

#[tokio::test]
async fn clear_removes_credentials() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    app.client.clear_credentials().await?;

    assert!(!app.client.is_authenticated().await?);
    // clearing an unauthenticated session is fine too
    app.client.clear_credentials().await?;

    Ok(())
}
