pub mod auth;
pub mod dialog;
pub mod error;
