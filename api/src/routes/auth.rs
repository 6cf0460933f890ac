//! Session authorization.
//!
//! Mirrors the redirect flow of a hosted storage provider: `/authorize`
//! records a `state` and sends the browser to `/oauth2callback`, which checks
//! the state and stores credentials in the session. The consent step itself
//! is granted locally.

use actix_session::Session;
use actix_web::{HttpResponse, get, http::header, web};
use payloads::responses::AuthStatus;
use serde::Deserialize;
use uuid::Uuid;

use super::{APIError, CREDENTIALS_KEY, Credentials, session_error};

const STATE_KEY: &str = "state";

/// Where the browser is sent once authorized.
pub struct LoginRedirect(pub String);

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub state: String,
}

#[tracing::instrument(skip(session))]
#[get("/is_authenticated")]
pub async fn is_authenticated(
    session: Session,
) -> Result<HttpResponse, APIError> {
    let is_authenticated = session
        .get::<Credentials>(CREDENTIALS_KEY)
        .map_err(session_error)?
        .is_some();
    Ok(HttpResponse::Ok().json(AuthStatus { is_authenticated }))
}

#[tracing::instrument(skip(session))]
#[get("/authorize")]
pub async fn authorize(session: Session) -> Result<HttpResponse, APIError> {
    let state = Uuid::new_v4().to_string();
    session.insert(STATE_KEY, &state).map_err(session_error)?;
    Ok(HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!("/oauth2callback?state={state}"),
        ))
        .finish())
}

#[tracing::instrument(skip(session, redirect))]
#[get("/oauth2callback")]
pub async fn oauth2callback(
    session: Session,
    query: web::Query<CallbackQuery>,
    redirect: web::Data<LoginRedirect>,
) -> Result<HttpResponse, APIError> {
    let expected = session
        .remove_as::<String>(STATE_KEY)
        .and_then(Result::ok)
        .ok_or_else(|| APIError::bad_request("No authorization in progress"))?;
    if expected != query.state {
        return Err(APIError::bad_request("Authorization state mismatch"));
    }

    let credentials = Credentials {
        token: Uuid::new_v4().to_string(),
    };
    session
        .insert(CREDENTIALS_KEY, &credentials)
        .map_err(session_error)?;
    tracing::info!("Session authorized");

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, redirect.0.clone()))
        .finish())
}

#[tracing::instrument(skip(session))]
#[get("/clear")]
pub async fn clear_credentials(session: Session) -> HttpResponse {
    if session.remove(CREDENTIALS_KEY).is_some() {
        tracing::info!("Credentials cleared");
    }
    HttpResponse::Ok().body("Credentials cleared")
}
