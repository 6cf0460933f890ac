pub mod mock;

use anyhow::Context;
use api::store::Library;
use api::{Config, telemetry};
use payloads::{FileId, requests, responses};
use reqwest::{StatusCode, header};
use std::path::PathBuf;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// The server's library, for seeding and inspecting files directly
    pub library: Library,
}

impl TestApp {
    /// Run the authorization redirect flow so the client's session holds
    /// credentials.
    pub async fn authorize(&self) -> anyhow::Result<()> {
        let response = self
            .client
            .inner_client
            .get(self.client.authorize_url())
            .send()
            .await?;
        anyhow::ensure!(
            response.status() == StatusCode::FOUND,
            "authorize returned {}",
            response.status()
        );
        let callback = response
            .headers()
            .get(header::LOCATION)
            .context("authorize didn't redirect")?
            .to_str()?
            .to_string();

        let response = self
            .client
            .inner_client
            .get(format!("{}{callback}", self.client.address))
            .send()
            .await?;
        anyhow::ensure!(
            response.status() == StatusCode::FOUND,
            "callback returned {}",
            response.status()
        );
        Ok(())
    }

    /// Upload a small mp3 with the given title through the API.
    pub async fn upload_sample_book(
        &self,
        title: &str,
    ) -> anyhow::Result<FileId> {
        let response = self.client.upload_book(sample_upload(title)).await?;
        anyhow::ensure!(
            response.success,
            "upload failed: {:?}",
            response.error
        );
        response.file_id.context("upload returned no file id")
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with_config(port, None).await
}

/// Spawn the api serving the built UI from `static_dir`, so the browser and
/// the api share an origin.
pub async fn spawn_app_serving_ui(static_dir: PathBuf) -> TestApp {
    spawn_app_with_config(0, Some(static_dir)).await
}

async fn spawn_app_with_config(
    port: u16,
    static_dir: Option<PathBuf>,
) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let library = Library::new();
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        frontend_url: "/".into(),
        static_dir,
        session_key: None,
    };

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    let server = api::build(&mut config, library.clone()).await.unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
        library,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Assert that an upload was rejected with the given message.
pub fn assert_upload_rejected(
    response: &responses::UploadResponse,
    expected_error: &str,
) {
    assert!(!response.success, "upload unexpectedly succeeded");
    assert_eq!(response.error.as_deref(), Some(expected_error));
    assert_eq!(response.file_id, None);
}

/// Bytes that sniff as an mp3: an ID3v2 header followed by silence.
pub fn sample_mp3() -> Vec<u8> {
    let mut data = b"ID3\x03\x00\x00\x00\x00\x00\x00".to_vec();
    data.resize(256, 0);
    data
}

pub fn sample_upload(title: &str) -> requests::UploadBook {
    requests::UploadBook {
        title: title.to_string(),
        file_name: format!("{}.mp3", title.to_lowercase().replace(' ', "_")),
        mime_type: Some("audio/mpeg".into()),
        data: sample_mp3(),
    }
}
