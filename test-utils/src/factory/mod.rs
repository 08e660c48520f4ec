//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for the defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let lecture = factory::create_lecture(&db).await?;
//! let unit = factory::unit::UnitFactory::new(&db, lecture.course_id)
//!     .name("Welcome")
//!     .build()
//!     .await?;
//!
//! let (lecture, unit) = factory::helpers::create_lecture_with_unit(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `lecture` - Create lecture entities
//! - `unit` - Create unit entities
//! - `helpers` - ID generation and lectures with attached units

pub mod helpers;
pub mod lecture;
pub mod unit;

pub use lecture::create_lecture;
pub use unit::{attach_unit, create_unit};
