use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecture::Id))
                    .col(integer(Lecture::CourseId))
                    .col(string(Lecture::Name))
                    .col(text_null(Lecture::Description))
                    .col(
                        timestamp_with_time_zone(Lecture::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Lecture::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecture_course_id")
                    .table(Lecture::Table)
                    .col(Lecture::CourseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    Table,
    Id,
    CourseId,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
