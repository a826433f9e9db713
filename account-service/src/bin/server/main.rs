use std::sync::Arc;
use std::time::Duration;

use account_service::config::Config;
use account_service::domain::captain::service::CaptainService;
use account_service::domain::session::ports::SessionServicePort;
use account_service::domain::session::service::SessionService;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresCaptainRepository;
use account_service::outbound::repositories::PostgresRevocationRepository;
use account_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        cookie_secure = config.cookie.secure,
        purge_interval_secs = config.revocation.purge_interval_secs,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = auth::PasswordHasher::with_cost(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?;

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let captain_repository = Arc::new(PostgresCaptainRepository::new(pg_pool.clone()));
    let revocation_repository = Arc::new(PostgresRevocationRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository, password_hasher.clone()));
    let captain_service = Arc::new(CaptainService::new(captain_repository, password_hasher));
    let session_service: Arc<dyn SessionServicePort> = Arc::new(SessionService::new(
        revocation_repository,
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));

    spawn_revocation_purge(
        Arc::clone(&session_service),
        Duration::from_secs(config.revocation.purge_interval_secs),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        captain_service,
        session_service,
        config.cookie.secure,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}

/// Periodically drops revocation entries whose tokens expired on their own.
fn spawn_revocation_purge(sessions: Arc<dyn SessionServicePort>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            if let Err(e) = sessions.purge_expired().await {
                tracing::warn!(error = %e, "Revocation purge failed");
            }
        }
    });
}
