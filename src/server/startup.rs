use axum::{
    http::{header, Method},
    Router,
};
use dioxus_logger::tracing;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::server::{
    config::Config, error::AppError, middleware::token::JwtKeys, router, state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Assembles the full application: API, docs and the web client bundle.
///
/// Unknown paths fall back to `index.html` so client-side views survive a reload.
pub fn build_app(config: &Config, db: sea_orm::DatabaseConnection) -> Router {
    let state = AppState::new(db, JwtKeys::from_secret(config.jwt_secret.as_bytes()));

    let index = config.public_dir.join("index.html");
    let client = ServeDir::new(&config.public_dir).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    router::api_router(state)
        .fallback_service(client)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connects to the database and serves the application until the process stops.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let db = connect_to_database(&config).await?;
    let app = build_app(&config, db);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| AppError::Startup(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Startup(format!("Server error: {}", e)))
}
