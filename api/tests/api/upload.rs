use payloads::requests::UploadBook;
use reqwest::multipart::{Form, Part};

use test_helpers::{
    assert_upload_rejected, sample_mp3, sample_upload, spawn_app,
};

#[tokio::test]
async fn upload_requires_authentication() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.upload_book(sample_upload("Emma")).await?;

    assert_upload_rejected(&response, "User not authenticated");
    assert_eq!(app.library.file_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn successful_upload_reports_file_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let response = app.client.upload_book(sample_upload("Emma")).await?;

    assert!(response.success);
    assert_eq!(response.error, None);
    let file_id = response.file_id.unwrap();
    let stored = app.library.get(&file_id).await?;
    assert_eq!(stored.name, "Emma");
    assert_eq!(stored.content_type.as_deref(), Some("audio/mpeg"));

    Ok(())
}

#[tokio::test]
async fn empty_file_name_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let upload = UploadBook {
        file_name: String::new(),
        ..sample_upload("Emma")
    };
    let response = app.client.upload_book(upload).await?;

    assert_upload_rejected(&response, "No selected file");

    Ok(())
}

#[tokio::test]
async fn missing_file_part_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let form = Form::new().text("title", "Emma");
    let response: payloads::responses::UploadResponse = app
        .client
        .inner_client
        .post(format!("{}/api/upload", app.client.address))
        .multipart(form)
        .send()
        .await?
        .json()
        .await?;

    assert_upload_rejected(&response, "No file part in the request");

    Ok(())
}

#[tokio::test]
async fn missing_title_defaults_to_untitled() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let form = Form::new()
        .part("file", Part::bytes(sample_mp3()).file_name("book.mp3"));
    let response: payloads::responses::UploadResponse = app
        .client
        .inner_client
        .post(format!("{}/api/upload", app.client.address))
        .multipart(form)
        .send()
        .await?
        .json()
        .await?;

    assert!(response.success);
    let books = app.client.list_books().await?;
    assert_eq!(books[0].name, "Untitled");

    Ok(())
}
