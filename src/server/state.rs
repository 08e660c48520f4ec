//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::middleware::token::JwtKeys;

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Keys used to verify bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}
