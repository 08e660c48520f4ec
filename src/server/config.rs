use std::{net::SocketAddr, path::PathBuf};

use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_DIR: &str = "public";

pub struct Config {
    pub database_url: String,

    /// Shared HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,

    pub bind_address: SocketAddr,
    /// Directory holding the built web client.
    pub public_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: parse_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            public_dir: PathBuf::from(
                std::env::var("PUBLIC_DIR").unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string()),
            ),
            log_level: parse_or("LOG_LEVEL", "info")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
