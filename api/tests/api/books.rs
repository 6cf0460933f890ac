use reqwest::{StatusCode, header};

use test_helpers::{assert_status_code, sample_mp3, spawn_app};

#[tokio::test]
async fn listing_requires_authentication() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.list_books().await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "User not authenticated");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn empty_shelf_lists_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let books = app.client.list_books().await?;
    assert!(books.is_empty());

    Ok(())
}

#[tokio::test]
async fn uploaded_book_is_listed_with_playable_link() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    let file_id = app.upload_sample_book("The Odyssey").await?;

    let books = app.client.list_books().await?;
    assert_eq!(books.len(), 1);
    let book = &books[0];
    assert_eq!(book.name, "The Odyssey");
    assert_eq!(book.id.as_ref(), Some(&file_id));
    let link = book.web_content_link.as_deref().unwrap();
    assert_eq!(
        link,
        format!("{}/media/{file_id}", app.client.address)
    );

    // the link serves the uploaded audio
    let response = app.client.inner_client.get(link).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    assert_eq!(response.bytes().await?.to_vec(), sample_mp3());

    Ok(())
}

#[tokio::test]
async fn listing_is_newest_first_and_paged() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;

    for i in 1..=12 {
        app.upload_sample_book(&format!("Volume {i}")).await?;
    }

    let books = app.client.list_books().await?;
    let names: Vec<_> = books.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names.len(), 10);
    assert_eq!(names.first(), Some(&"Volume 12"));
    assert_eq!(names.last(), Some(&"Volume 3"));
    assert_eq!(app.library.file_count().await, 12);

    Ok(())
}

#[tokio::test]
async fn media_sniffs_missing_content_type() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let file_id = app
        .library
        .insert("Unlabelled".into(), None, sample_mp3().into())
        .await;

    let response = app
        .client
        .inner_client
        .get(format!("{}/media/{file_id}", app.client.address))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");

    Ok(())
}

#[tokio::test]
async fn media_serves_requested_byte_range() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let file_id = app
        .library
        .insert(
            "Seekable".into(),
            Some("audio/mpeg".into()),
            sample_mp3().into(),
        )
        .await;
    let url = format!("{}/media/{file_id}", app.client.address);

    let response = app.client.inner_client.get(&url).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCEPT_RANGES], "bytes");

    let response = app
        .client
        .inner_client
        .get(&url)
        .header(header::RANGE, "bytes=0-9")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.headers()[header::CONTENT_RANGE], "bytes 0-9/256");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    assert_eq!(response.bytes().await?.to_vec(), sample_mp3()[..10]);

    // open-ended ranges run to the end of the file
    let response = app
        .client
        .inner_client
        .get(&url)
        .header(header::RANGE, "bytes=250-")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers()[header::CONTENT_RANGE],
        "bytes 250-255/256"
    );
    assert_eq!(response.bytes().await?.len(), 6);

    Ok(())
}

#[tokio::test]
async fn unsatisfiable_range_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let file_id = app
        .library
        .insert(
            "Short".into(),
            Some("audio/mpeg".into()),
            sample_mp3().into(),
        )
        .await;

    let response = app
        .client
        .inner_client
        .get(format!("{}/media/{file_id}", app.client.address))
        .header(header::RANGE, "bytes=1000-")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
    assert_eq!(response.headers()[header::CONTENT_RANGE], "bytes */256");

    Ok(())
}

#[tokio::test]
async fn unknown_media_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app
        .client
        .inner_client
        .get(format!(
            "{}/media/00000000-0000-0000-0000-000000000000",
            app.client.address
        ))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: payloads::responses::ErrorBody = response.json().await?;
    assert_eq!(body.error, "File not found");

    Ok(())
}

#[tokio::test]
async fn cleared_session_can_no_longer_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.authorize().await?;
    app.client.list_books().await?;

    app.client.clear_credentials().await?;

    assert_status_code(app.client.list_books().await, StatusCode::UNAUTHORIZED);

    Ok(())
}
