mod model;

#[cfg(feature = "web")]
mod client;

#[cfg(feature = "server")]
mod server;

#[cfg(feature = "server")]
fn main() -> Result<(), server::error::AppError> {
    use server::{config::Config, error::AppError, startup};

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::Startup(format!("Failed to initialize logger: {}", e)))?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Startup(format!("Failed to build runtime: {}", e)))?
        .block_on(startup::serve(config))
}

#[cfg(all(feature = "web", not(feature = "server")))]
fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).ok();

    dioxus::launch(client::App);
}
