use std::sync::Arc;

use icon_service::config::Config;
use icon_service::domain::user::service::AccountService;
use icon_service::inbound::http::cookie::CookiePolicy;
use icon_service::inbound::http::router::create_router;
use icon_service::outbound::repositories::PostgresUserRepository;
use icon_service::session::service::SessionService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icon_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "icon-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // A deployment without session.secret fails here, not per request
    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        cookie_secure = config.session.cookie_secure,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let accounts = Arc::new(AccountService::new(user_repository));
    let sessions = Arc::new(SessionService::new(config.session.secret.as_bytes()));
    let cookie_policy = CookiePolicy {
        secure: config.session.cookie_secure,
    };

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(accounts, sessions, cookie_policy);
    axum::serve(listener, application).await?;

    Ok(())
}
