use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_build_order::BuildOrder;

static IDX_BUILD_ORDER_STEP_BUILD_ORDER_ID: &str = "idx-build_order_step-build_order_id";
static FK_BUILD_ORDER_STEP_BUILD_ORDER_ID: &str = "fk-build_order_step-build_order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildOrderStep::Table)
                    .if_not_exists()
                    .col(pk_auto(BuildOrderStep::Id))
                    .col(integer(BuildOrderStep::BuildOrderId))
                    .col(integer(BuildOrderStep::Order))
                    .col(integer(BuildOrderStep::TimeMinutes))
                    .col(integer(BuildOrderStep::TimeSeconds))
                    .col(integer(BuildOrderStep::VillagerCount))
                    .col(string(BuildOrderStep::Action))
                    .col(text(BuildOrderStep::Description))
                    .col(integer(BuildOrderStep::Wood))
                    .col(integer(BuildOrderStep::Food))
                    .col(integer(BuildOrderStep::Gold))
                    .col(integer(BuildOrderStep::Stone))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_ORDER_STEP_BUILD_ORDER_ID)
                    .table(BuildOrderStep::Table)
                    .col(BuildOrderStep::BuildOrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_ORDER_STEP_BUILD_ORDER_ID)
                    .from_tbl(BuildOrderStep::Table)
                    .from_col(BuildOrderStep::BuildOrderId)
                    .to_tbl(BuildOrder::Table)
                    .to_col(BuildOrder::Id)
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
                    .name(FK_BUILD_ORDER_STEP_BUILD_ORDER_ID)
                    .table(BuildOrderStep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_ORDER_STEP_BUILD_ORDER_ID)
                    .table(BuildOrderStep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BuildOrderStep::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BuildOrderStep {
    Table,
    Id,
    BuildOrderId,
    Order,
    TimeMinutes,
    TimeSeconds,
    VillagerCount,
    Action,
    Description,
    Wood,
    Food,
    Gold,
    Stone,
}
