use crate::{BookRecord, requests, responses};
use reqwest::StatusCode;
use reqwest::multipart::Form;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn multipart_post(&self, path: &str, form: Form) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Check if the current session holds storage credentials.
    pub async fn is_authenticated(&self) -> Result<bool, ClientError> {
        let response = self.empty_get("is_authenticated").await?;
        let status: responses::AuthStatus = ok_body(response).await?;
        Ok(status.is_authenticated)
    }

    /// List the books on the shelf, in the order the backend returns them.
    /// A missing list is an empty shelf.
    pub async fn list_books(&self) -> Result<Vec<BookRecord>, ClientError> {
        let response = self.empty_get("books").await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let body = response.text().await?;
        Ok(responses::parse_book_list(&body)?)
    }

    /// Upload a new book.
    ///
    /// The backend reports rejected uploads in the body as well as the
    /// status, so a decodable body is returned whatever the status.
    pub async fn upload_book(
        &self,
        details: requests::UploadBook,
    ) -> Result<responses::UploadResponse, ClientError> {
        let form = details.into_form()?;
        let response = self.multipart_post("upload", form).await?;
        reported_body(response).await
    }

    /// Drop the storage credentials held by the current session.
    pub async fn clear_credentials(&self) -> Result<(), ClientError> {
        let request = self
            .inner_client
            .get(format!("{}/clear", &self.address));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        ok_empty(request.send().await?).await
    }

    /// Where to send the browser to start authorization. Not called over
    /// http; the page navigates there.
    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.address)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the error message (or
    /// the raw response text when the body isn't an error object).
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

/// Deserialize a body that reports its own outcome, regardless of status.
/// An undecodable error body is returned as an APIError with its text.
pub async fn reported_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<T>(&text) {
        Ok(body) => Ok(body),
        Err(_) if !status.is_success() => {
            Err(ClientError::APIError(status, error_message(text)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Build an APIError from an unsuccessful response, reading the message out
/// of the JSON error body when there is one.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.text().await {
        Ok(text) => ClientError::APIError(status, error_message(text)),
        Err(e) => e.into(),
    }
}

fn error_message(text: String) -> String {
    match serde_json::from_str::<responses::ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    }
}
