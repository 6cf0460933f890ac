pub mod auth;
pub mod books;

use actix_session::Session;
use actix_web::{
    HttpResponse, Responder, ResponseError, dev::HttpServiceFactory, get,
    http::StatusCode, web,
};
use payloads::responses::ErrorBody;

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(auth::is_authenticated)
        .service(books::list_books)
        .service(books::upload)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("{0}")]
    AuthError(#[source] anyhow::Error),
    #[error("{0}")]
    BadRequest(#[source] anyhow::Error),
    #[error("{0}")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl APIError {
    fn not_authenticated() -> Self {
        Self::AuthError(anyhow::anyhow!("User not authenticated"))
    }

    fn bad_request(message: &'static str) -> Self {
        Self::BadRequest(anyhow::anyhow!(message))
    }
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::UnexpectedError(e) = self {
            tracing::error!("{e:#}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::FileNotFound => APIError::NotFound(e.into()),
        }
    }
}

/// Session key holding the credentials granted at /oauth2callback.
const CREDENTIALS_KEY: &str = "credentials";

/// Credentials granted to a session by the authorization flow.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    pub token: String,
}

/// Read the session's credentials, failing if it has none.
fn require_credentials(session: &Session) -> Result<Credentials, APIError> {
    session
        .get::<Credentials>(CREDENTIALS_KEY)
        .map_err(session_error)?
        .ok_or_else(APIError::not_authenticated)
}

fn session_error(e: impl std::fmt::Display) -> APIError {
    APIError::UnexpectedError(anyhow::anyhow!("Session error: {e}"))
}
