use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::unit::UnitParams;

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a unit from validated parameters.
    pub async fn create(&self, params: UnitParams) -> Result<entity::unit::Model, DbErr> {
        let now = Utc::now();

        entity::unit::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            kind: ActiveValue::Set(params.content.kind().as_str().to_string()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            progressable: ActiveValue::Set(params.progressable),
            weight: ActiveValue::Set(params.weight),
            content: ActiveValue::Set(params.content.to_value().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find_by_id(id).one(self.db).await
    }

    /// Overwrites every mutable column of an existing unit and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated unit
    /// - `Err(DbErr::RecordNotUpdated)` - No unit with this id
    pub async fn update(&self, id: i32, params: UnitParams) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::Unchanged(id),
            course_id: ActiveValue::Set(params.course_id),
            kind: ActiveValue::Set(params.content.kind().as_str().to_string()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            progressable: ActiveValue::Set(params.progressable),
            weight: ActiveValue::Set(params.weight),
            content: ActiveValue::Set(params.content.to_value().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a unit, returning the number of removed rows.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Unit::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Gets the units of a lecture in collection order.
    pub async fn find_by_lecture(
        &self,
        lecture_id: i32,
    ) -> Result<Vec<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find()
            .join(JoinType::InnerJoin, entity::unit::Relation::LectureUnit.def())
            .filter(entity::lecture_unit::Column::LectureId.eq(lecture_id))
            .order_by_asc(entity::lecture_unit::Column::Position)
            .all(self.db)
            .await
    }
}
