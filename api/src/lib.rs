pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_session::{
    SessionMiddleware, config::BrowserSession, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, time::Duration};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use secrecy::{ExposeSecret, SecretBox};
use std::net::TcpListener;
use std::path::PathBuf;

use crate::routes::auth::LoginRedirect;
use crate::store::Library;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub async fn build(
    config: &mut Config,
    library: Library,
) -> std::io::Result<Server> {
    let secret_key = session_key(config)?;
    let library = web::Data::new(library);
    let login_redirect =
        web::Data::new(LoginRedirect(config.frontend_url.clone()));
    let multipart_config = web::Data::new(
        MultipartFormConfig::default()
            .total_limit(payloads::MAX_UPLOAD_SIZE)
            .memory_limit(payloads::MAX_UPLOAD_SIZE)
            .error_handler(routes::books::multipart_error),
    );

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();
    let static_dir = config.static_dir.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();

            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let app = App::new()
            .wrap(cors)
            // The session holds the storage credentials granted at
            // /oauth2callback, as a signed cookie
            .wrap(
                SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    secret_key.clone(),
                )
                .cookie_name("audioshelf".into())
                .session_lifecycle(
                    BrowserSession::default().state_ttl(Duration::days(30)),
                )
                .build(),
            )
            .service(routes::api_services())
            .service(routes::auth::authorize)
            .service(routes::auth::oauth2callback)
            .service(routes::auth::clear_credentials)
            .service(routes::books::media)
            .app_data(library.clone())
            .app_data(login_redirect.clone())
            .app_data(multipart_config.clone());

        // Registered last so the routes above take precedence
        match &static_dir {
            Some(dir) => {
                app.service(Files::new("/", dir).index_file("index.html"))
            }
            None => app,
        }
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Signing key for session cookies: derived from the configured secret, or
/// generated per process (sessions then end on restart).
fn session_key(config: &Config) -> std::io::Result<Key> {
    match &config.session_key {
        Some(secret) => {
            Key::try_from(secret.expose_secret().as_bytes()).map_err(|e| {
                std::io::Error::other(format!(
                    "SESSION_KEY must be at least 64 bytes: {e}"
                ))
            })
        }
        None => Ok(Key::generate()),
    }
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Where the browser lands after authorizing
    pub frontend_url: String,
    /// Directory with the built UI, served at "/" when set
    pub static_dir: Option<PathBuf>,
    /// Master key for signing session cookies
    pub session_key: Option<SecretBox<String>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS must be set")?,
            port: var("PORT")
                .context("PORT must be set")?
                .parse()
                .context("PORT must be a port number")?,
            allowed_origins,
            frontend_url: var("FRONTEND_URL").unwrap_or_else(|_| "/".into()),
            static_dir: var("STATIC_DIR").ok().map(PathBuf::from),
            session_key: var("SESSION_KEY")
                .ok()
                .map(|key| SecretBox::new(Box::new(key))),
        })
    }
}
