//! SeaORM entities for the courseboard schema.
//!
//! Tables mirror the migrations in the `migration` crate. `lecture_unit` is the
//! ordered membership of units inside a lecture; each unit has at most one row.

pub mod prelude;

pub mod lecture;
pub mod lecture_unit;
pub mod unit;
