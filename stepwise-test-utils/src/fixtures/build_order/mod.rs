//! Build order and step records.

pub mod factory;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BuildOrderModel, BuildOrderStepModel},
    TestContext,
};

impl TestContext {
    pub fn build_order<'a>(&'a mut self) -> BuildOrderFixtures<'a> {
        BuildOrderFixtures { test: self }
    }
}

pub struct BuildOrderFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> BuildOrderFixtures<'a> {
    /// Inserts a build order without steps, created now.
    pub async fn insert_build_order(
        &self,
        author_id: i32,
        is_public: bool,
    ) -> Result<BuildOrderModel, TestError> {
        self.insert_build_order_at(author_id, is_public, Utc::now().naive_utc())
            .await
    }

    /// Inserts a build order without steps with a fixed creation time.
    pub async fn insert_build_order_at(
        &self,
        author_id: i32,
        is_public: bool,
        created_at: NaiveDateTime,
    ) -> Result<BuildOrderModel, TestError> {
        Ok(
            entity::prelude::BuildOrder::insert(entity::build_order::ActiveModel {
                title: ActiveValue::Set("Fast Castle Boom".to_string()),
                description: ActiveValue::Set("Two town centers at castle age".to_string()),
                civilization: ActiveValue::Set("Britons".to_string()),
                map_types: ActiveValue::Set(serde_json::json!(["Arabia"])),
                is_public: ActiveValue::Set(is_public),
                views: ActiveValue::Set(0),
                likes: ActiveValue::Set(0),
                author_id: ActiveValue::Set(author_id),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts a step at `order` for the given build order.
    pub async fn insert_step(
        &self,
        build_order_id: i32,
        order: i32,
    ) -> Result<BuildOrderStepModel, TestError> {
        Ok(entity::prelude::BuildOrderStep::insert(
            entity::build_order_step::ActiveModel {
                build_order_id: ActiveValue::Set(build_order_id),
                order: ActiveValue::Set(order),
                time_minutes: ActiveValue::Set(order),
                time_seconds: ActiveValue::Set(0),
                villager_count: ActiveValue::Set(3 + order),
                action: ActiveValue::Set(format!("Step action {}", order)),
                description: ActiveValue::Set(String::new()),
                wood: ActiveValue::Set(0),
                food: ActiveValue::Set(50),
                gold: ActiveValue::Set(0),
                stone: ActiveValue::Set(0),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts a build order with `step_count` steps ordered `0..step_count`.
    pub async fn insert_build_order_with_steps(
        &self,
        author_id: i32,
        is_public: bool,
        step_count: i32,
    ) -> Result<(BuildOrderModel, Vec<BuildOrderStepModel>), TestError> {
        let build_order = self.insert_build_order(author_id, is_public).await?;

        let mut steps = Vec::new();
        for order in 0..step_count {
            steps.push(self.insert_step(build_order.id, order).await?);
        }

        Ok((build_order, steps))
    }
}
