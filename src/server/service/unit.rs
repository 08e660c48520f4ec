use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::{lecture::LectureRepository, unit::UnitRepository},
    error::AppError,
    model::unit::{merge_document, Unit, UnitParams},
};

pub struct UnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Unit>, AppError> {
        let repo = UnitRepository::new(self.db);

        let unit = repo.find_by_id(id).await?;

        unit.map(Unit::from_entity).transpose().map_err(Into::into)
    }

    /// Validates a unit document, stores it and appends it to a lecture.
    ///
    /// Both writes share one transaction; a missing lecture rolls back the unit insert.
    ///
    /// # Returns
    /// - `Ok(Unit)` - Created unit
    /// - `Err(AppError::Validation)` - Document failed schema validation
    /// - `Err(AppError::BadRequest)` - Lecture does not exist
    pub async fn create(&self, lecture_id: i32, model: &Value) -> Result<Unit, AppError> {
        let params = UnitParams::validate(model)?;

        let txn = self.db.begin().await?;

        if LectureRepository::new(&txn)
            .find_by_id(lecture_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Lecture {} does not exist",
                lecture_id
            )));
        }

        let created = UnitRepository::new(&txn).create(params).await?;
        LectureRepository::new(&txn)
            .push_unit(lecture_id, created.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Created unit {} in lecture {}", created.id, lecture_id);

        Ok(Unit::from_entity(created)?)
    }

    /// Overwrites the submitted top-level fields of a unit and re-validates the result.
    ///
    /// # Returns
    /// - `Ok(Some(Unit))` - Updated unit
    /// - `Ok(None)` - No unit with this id
    /// - `Err(AppError::Validation)` - Merged document failed schema validation
    pub async fn update(&self, id: i32, changes: &Value) -> Result<Option<Unit>, AppError> {
        let repo = UnitRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let existing = Unit::from_entity(existing)?;

        let merged = merge_document(existing.to_document(), changes).ok_or_else(|| {
            AppError::BadRequest("Unit changes must be a JSON object".to_string())
        })?;
        let params = UnitParams::validate(&merged)?;

        let updated = repo.update(id, params).await?;

        tracing::debug!("Updated unit {}", id);

        Ok(Some(Unit::from_entity(updated)?))
    }

    /// Removes a unit from every lecture and deletes it.
    ///
    /// # Returns
    /// - `Ok(true)` - Unit deleted
    /// - `Ok(false)` - No unit with this id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if UnitRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let pulled = LectureRepository::new(&txn).pull_unit(id).await?;
        UnitRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted unit {} from {} lecture(s)", id, pulled);

        Ok(true)
    }
}
