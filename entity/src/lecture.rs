use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lecture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lecture_unit::Entity")]
    LectureUnit,
}

impl Related<super::lecture_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LectureUnit.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        super::lecture_unit::Relation::Unit.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lecture_unit::Relation::Lecture.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
