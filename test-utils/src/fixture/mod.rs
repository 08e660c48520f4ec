//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and the JSON unit payloads clients submit. Unlike
//! factories, fixtures never touch the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let lecture = fixture::lecture::entity();
//! let payload = fixture::unit::free_text_model(lecture.course_id);
//! ```

pub mod lecture;
pub mod unit;

pub use lecture::{entity as lecture_entity, entity_builder as lecture_entity_builder};
pub use unit::{entity as unit_entity, entity_builder as unit_entity_builder};
