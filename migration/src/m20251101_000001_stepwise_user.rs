use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StepwiseUser::Table)
                    .if_not_exists()
                    .col(pk_auto(StepwiseUser::Id))
                    .col(string_uniq(StepwiseUser::SteamId))
                    .col(string_null(StepwiseUser::Name))
                    .col(string_null(StepwiseUser::Image))
                    .col(timestamp(StepwiseUser::CreatedAt))
                    .col(timestamp(StepwiseUser::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StepwiseUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StepwiseUser {
    Table,
    Id,
    SteamId,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}
