//! Business logic between controllers and repositories.
//!
//! Services own transaction boundaries: writes spanning several tables run inside one
//! `DatabaseTransaction` so they commit or roll back together.

pub mod lecture;
pub mod unit;
