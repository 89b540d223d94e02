use chrono::Utc;
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::build_order::{CreateBuildOrderDto, UpdateBuildOrderDto};

/// Filters applied when listing build orders, both optional and combinable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOrderFilter {
    /// Only include build orders marked public
    pub public_only: bool,
    /// Only include build orders written by this user
    pub author_id: Option<i32>,
    /// Return at most this many build orders
    pub limit: Option<u64>,
}

pub struct BuildOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildOrderRepository<'a, C> {
    /// Creates a new instance of [`BuildOrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the build order itself, steps are stored separately.
    pub async fn create(
        &self,
        author_id: i32,
        build_order: &CreateBuildOrderDto,
    ) -> Result<entity::build_order::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let build_order = entity::build_order::ActiveModel {
            title: ActiveValue::Set(build_order.title.clone()),
            description: ActiveValue::Set(build_order.description.clone()),
            civilization: ActiveValue::Set(build_order.civilization.clone()),
            map_types: ActiveValue::Set(serde_json::json!(build_order.map_types)),
            is_public: ActiveValue::Set(build_order.is_public),
            views: ActiveValue::Set(0),
            likes: ActiveValue::Set(0),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        build_order.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        build_order_id: i32,
    ) -> Result<Option<entity::build_order::Model>, DbErr> {
        entity::prelude::BuildOrder::find_by_id(build_order_id)
            .one(self.db)
            .await
    }

    /// Finds a build order together with its author.
    pub async fn find_with_author(
        &self,
        build_order_id: i32,
    ) -> Result<
        Option<(
            entity::build_order::Model,
            Option<entity::stepwise_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BuildOrder::find_by_id(build_order_id)
            .find_also_related(entity::prelude::StepwiseUser)
            .one(self.db)
            .await
    }

    /// Lists build orders with their authors, newest first with ties broken by ID.
    pub async fn list(
        &self,
        filter: BuildOrderFilter,
    ) -> Result<
        Vec<(
            entity::build_order::Model,
            Option<entity::stepwise_user::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::BuildOrder::find();

        if filter.public_only {
            query = query.filter(entity::build_order::Column::IsPublic.eq(true));
        }
        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::build_order::Column::AuthorId.eq(author_id));
        }

        query
            .order_by_desc(entity::build_order::Column::CreatedAt)
            .order_by_desc(entity::build_order::Column::Id)
            .limit(filter.limit)
            .find_also_related(entity::prelude::StepwiseUser)
            .all(self.db)
            .await
    }

    /// Increments the view counter in a single statement.
    ///
    /// Returns `false` when no build order with the ID exists.
    pub async fn increment_views(&self, build_order_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BuildOrder::update_many()
            .col_expr(
                entity::build_order::Column::Views,
                Expr::col(entity::build_order::Column::Views).add(1),
            )
            .filter(entity::build_order::Column::Id.eq(build_order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies every present field of `changes`, steps are replaced separately.
    pub async fn update(
        &self,
        build_order: entity::build_order::Model,
        changes: &UpdateBuildOrderDto,
    ) -> Result<entity::build_order::Model, DbErr> {
        let mut build_order_am = build_order.into_active_model();

        if let Some(title) = &changes.title {
            build_order_am.title = ActiveValue::Set(title.clone());
        }
        if let Some(description) = &changes.description {
            build_order_am.description = ActiveValue::Set(description.clone());
        }
        if let Some(civilization) = &changes.civilization {
            build_order_am.civilization = ActiveValue::Set(civilization.clone());
        }
        if let Some(map_types) = &changes.map_types {
            build_order_am.map_types = ActiveValue::Set(serde_json::json!(map_types));
        }
        if let Some(is_public) = changes.is_public {
            build_order_am.is_public = ActiveValue::Set(is_public);
        }
        build_order_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        build_order_am.update(self.db).await
    }

    /// Deletes a build order
    ///
    /// Returns OK regardless of the build order existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, build_order_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BuildOrder::delete_by_id(build_order_id)
            .exec(self.db)
            .await
    }
}
