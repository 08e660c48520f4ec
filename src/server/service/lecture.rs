use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lecture::LectureRepository, unit::UnitRepository},
    error::AppError,
    model::{
        lecture::{CreateLectureParams, Lecture},
        unit::Unit,
    },
};

pub struct LectureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LectureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLectureParams) -> Result<Lecture, AppError> {
        let repo = LectureRepository::new(self.db);

        let lecture = repo.create(params).await?;

        tracing::info!("Created lecture {} for course {}", lecture.id, lecture.course_id);

        Ok(Lecture::from_entity(lecture, Vec::new()))
    }

    /// Gets a lecture with its units populated in collection order.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Lecture>, AppError> {
        let lecture_repo = LectureRepository::new(self.db);
        let unit_repo = UnitRepository::new(self.db);

        let Some(lecture) = lecture_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let units = unit_repo
            .find_by_lecture(id)
            .await?
            .into_iter()
            .map(Unit::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Lecture::from_entity(lecture, units)))
    }
}
