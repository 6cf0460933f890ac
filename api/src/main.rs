use api::{
    Config, build,
    store::Library,
    telemetry::{get_subscriber, init_subscriber},
};

/// Audioshelf development backend
///
/// Serves the shelf API from an in-memory library. Environment variables can
/// be set directly or loaded from a .env file in the project root.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, the default, or a comma-separated list)
/// - FRONTEND_URL: Where to send the browser after authorizing (defaults to /)
/// - STATIC_DIR: Built UI to serve at / (e.g. ui/dist after `trunk build`)
/// - SESSION_KEY: At least 64 bytes used to sign session cookies; a random
///   key is generated when unset
///
/// Example development command, serving the built UI from the same origin:
/// IP_ADDRESS=127.0.0.1 PORT=8000 STATIC_DIR=ui/dist cargo run -p api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;

    let server = build(&mut config, Library::new()).await?;
    tracing::info!(
        "Listening on http://{}:{}",
        config.ip,
        config.port
    );
    server.await?;
    Ok(())
}
