use crate::server::{data::lecture::LectureRepository, model::lecture::CreateLectureParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod pull_unit;
mod push_unit;
