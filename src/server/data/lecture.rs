use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::lecture::CreateLectureParams;

pub struct LectureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LectureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateLectureParams,
    ) -> Result<entity::lecture::Model, DbErr> {
        let now = Utc::now();

        entity::lecture::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::lecture::Model>, DbErr> {
        entity::prelude::Lecture::find_by_id(id).one(self.db).await
    }

    /// Appends a unit to the end of a lecture's collection.
    ///
    /// Fails with a unique constraint violation if the unit already belongs to a lecture.
    pub async fn push_unit(
        &self,
        lecture_id: i32,
        unit_id: i32,
    ) -> Result<entity::lecture_unit::Model, DbErr> {
        let last = entity::prelude::LectureUnit::find()
            .filter(entity::lecture_unit::Column::LectureId.eq(lecture_id))
            .order_by_desc(entity::lecture_unit::Column::Position)
            .one(self.db)
            .await?;

        let position = last.map(|m| m.position + 1).unwrap_or(0);

        entity::lecture_unit::ActiveModel {
            lecture_id: ActiveValue::Set(lecture_id),
            unit_id: ActiveValue::Set(unit_id),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a unit from the collection of every lecture.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships removed
    pub async fn pull_unit(&self, unit_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::LectureUnit::delete_many()
            .filter(entity::lecture_unit::Column::UnitId.eq(unit_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
