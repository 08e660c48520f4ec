use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(integer(Unit::CourseId))
                    .col(string(Unit::Kind))
                    .col(string(Unit::Name))
                    .col(text_null(Unit::Description))
                    .col(boolean(Unit::Progressable).default(false))
                    .col(integer(Unit::Weight).default(0))
                    .col(text(Unit::Content))
                    .col(
                        timestamp_with_time_zone(Unit::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Unit::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    CourseId,
    Kind,
    Name,
    Description,
    Progressable,
    Weight,
    Content,
    CreatedAt,
    UpdatedAt,
}
