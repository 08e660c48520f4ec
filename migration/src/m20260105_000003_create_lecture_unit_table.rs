use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_lecture_table::Lecture, m20260105_000002_create_unit_table::Unit,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LectureUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(LectureUnit::Id))
                    .col(integer(LectureUnit::LectureId))
                    // A unit is owned by at most one lecture.
                    .col(integer_uniq(LectureUnit::UnitId))
                    .col(integer(LectureUnit::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_unit_lecture_id")
                            .from(LectureUnit::Table, LectureUnit::LectureId)
                            .to(Lecture::Table, Lecture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_unit_unit_id")
                            .from(LectureUnit::Table, LectureUnit::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecture_unit_lecture_position")
                    .table(LectureUnit::Table)
                    .col(LectureUnit::LectureId)
                    .col(LectureUnit::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LectureUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LectureUnit {
    Table,
    Id,
    LectureId,
    UnitId,
    Position,
}
