//! Courseboard Test Utils
//!
//! Shared testing utilities for the courseboard server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert lectures and units with sensible
//! defaults, fixtures holding in-memory entity models and unit JSON payloads, and a helper
//! minting bearer tokens.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn creates_lecture() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_course_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let lecture = factory::create_lecture(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod token;
