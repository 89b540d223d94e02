use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_stepwise_user::StepwiseUser;

static IDX_BUILD_ORDER_AUTHOR_ID: &str = "idx-build_order-author_id";
static IDX_BUILD_ORDER_IS_PUBLIC: &str = "idx-build_order-is_public";
static FK_BUILD_ORDER_AUTHOR_ID: &str = "fk-build_order-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(BuildOrder::Id))
                    .col(string(BuildOrder::Title))
                    .col(text(BuildOrder::Description))
                    .col(string(BuildOrder::Civilization))
                    .col(json(BuildOrder::MapTypes))
                    .col(boolean(BuildOrder::IsPublic).default(false))
                    .col(integer(BuildOrder::Views).default(0))
                    .col(integer(BuildOrder::Likes).default(0))
                    .col(integer(BuildOrder::AuthorId))
                    .col(timestamp(BuildOrder::CreatedAt))
                    .col(timestamp(BuildOrder::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_ORDER_AUTHOR_ID)
                    .table(BuildOrder::Table)
                    .col(BuildOrder::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_ORDER_IS_PUBLIC)
                    .table(BuildOrder::Table)
                    .col(BuildOrder::IsPublic)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_ORDER_AUTHOR_ID)
                    .from_tbl(BuildOrder::Table)
                    .from_col(BuildOrder::AuthorId)
                    .to_tbl(StepwiseUser::Table)
                    .to_col(StepwiseUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUILD_ORDER_AUTHOR_ID)
                    .table(BuildOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_ORDER_IS_PUBLIC)
                    .table(BuildOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_ORDER_AUTHOR_ID)
                    .table(BuildOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BuildOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BuildOrder {
    Table,
    Id,
    Title,
    Description,
    Civilization,
    MapTypes,
    IsPublic,
    Views,
    Likes,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
