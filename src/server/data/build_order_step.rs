use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::build_order::NewStepDto;

pub struct BuildOrderStepRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildOrderStepRepository<'a, C> {
    /// Creates a new instance of [`BuildOrderStepRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts steps for a build order, a no-op for an empty slice.
    pub async fn create_many(
        &self,
        build_order_id: i32,
        steps: &[NewStepDto],
    ) -> Result<(), DbErr> {
        if steps.is_empty() {
            return Ok(());
        }

        let steps = steps
            .iter()
            .map(|step| entity::build_order_step::ActiveModel {
                build_order_id: ActiveValue::Set(build_order_id),
                order: ActiveValue::Set(step.order),
                time_minutes: ActiveValue::Set(step.time_minutes),
                time_seconds: ActiveValue::Set(step.time_seconds),
                villager_count: ActiveValue::Set(step.villager_count),
                action: ActiveValue::Set(step.action.clone()),
                description: ActiveValue::Set(step.description.clone()),
                wood: ActiveValue::Set(step.resources.wood),
                food: ActiveValue::Set(step.resources.food),
                gold: ActiveValue::Set(step.resources.gold),
                stone: ActiveValue::Set(step.resources.stone),
                ..Default::default()
            });

        entity::prelude::BuildOrderStep::insert_many(steps)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Steps of one build order sorted by `order`, ties broken by ID.
    pub async fn get_by_build_order_id(
        &self,
        build_order_id: i32,
    ) -> Result<Vec<entity::build_order_step::Model>, DbErr> {
        entity::prelude::BuildOrderStep::find()
            .filter(entity::build_order_step::Column::BuildOrderId.eq(build_order_id))
            .order_by_asc(entity::build_order_step::Column::Order)
            .order_by_asc(entity::build_order_step::Column::Id)
            .all(self.db)
            .await
    }

    /// Steps of several build orders, each build order's steps sorted as in
    /// [`Self::get_by_build_order_id`].
    pub async fn get_by_build_order_ids(
        &self,
        build_order_ids: &[i32],
    ) -> Result<Vec<entity::build_order_step::Model>, DbErr> {
        if build_order_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BuildOrderStep::find()
            .filter(
                entity::build_order_step::Column::BuildOrderId
                    .is_in(build_order_ids.iter().copied()),
            )
            .order_by_asc(entity::build_order_step::Column::BuildOrderId)
            .order_by_asc(entity::build_order_step::Column::Order)
            .order_by_asc(entity::build_order_step::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_build_order_id(
        &self,
        build_order_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::BuildOrderStep::delete_many()
            .filter(entity::build_order_step::Column::BuildOrderId.eq(build_order_id))
            .exec(self.db)
            .await
    }
}
