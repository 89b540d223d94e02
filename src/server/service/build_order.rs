use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        build_order::{
            BuildOrderDto, CreateBuildOrderDto, ResourcesDto, StepDto, UpdateBuildOrderDto,
        },
        user::AuthorDto,
    },
    server::{
        data::{
            build_order::{BuildOrderFilter, BuildOrderRepository},
            build_order_step::BuildOrderStepRepository,
        },
        error::{build_order::BuildOrderError, Error},
    },
};

/// Service for reading and writing build orders.
///
/// Writes validate their payload, check that the caller is the author, and run inside a
/// single transaction so a build order is never left with a partial set of steps.
pub struct BuildOrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuildOrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists build orders newest first, each with its author and ordered steps.
    pub async fn list(&self, filter: BuildOrderFilter) -> Result<Vec<BuildOrderDto>, Error> {
        let build_orders = BuildOrderRepository::new(self.db).list(filter).await?;

        let build_order_ids: Vec<i32> = build_orders.iter().map(|(b, _)| b.id).collect();
        let steps = BuildOrderStepRepository::new(self.db)
            .get_by_build_order_ids(&build_order_ids)
            .await?;

        let mut steps_by_build_order: HashMap<i32, Vec<entity::build_order_step::Model>> =
            HashMap::new();
        for step in steps {
            steps_by_build_order
                .entry(step.build_order_id)
                .or_default()
                .push(step);
        }

        build_orders
            .into_iter()
            .map(|(build_order, author)| {
                let steps = steps_by_build_order
                    .remove(&build_order.id)
                    .unwrap_or_default();

                build_order_dto(build_order, author, steps)
            })
            .collect()
    }

    /// Creates a build order with its steps.
    ///
    /// # Returns
    /// - `Ok(BuildOrderDto)` - The stored build order
    /// - `Err(Error::ValidationError)` - A field violates its constraint, nothing is stored
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is stored
    pub async fn create(
        &self,
        author_id: i32,
        build_order: CreateBuildOrderDto,
    ) -> Result<BuildOrderDto, Error> {
        build_order.validate()?;

        let txn = self.db.begin().await?;

        let model = BuildOrderRepository::new(&txn)
            .create(author_id, &build_order)
            .await?;
        BuildOrderStepRepository::new(&txn)
            .create_many(model.id, &build_order.steps)
            .await?;

        let dto = find_build_order(&txn, model.id).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Fetches a build order, counting the fetch as a view.
    ///
    /// Private build orders are returned as well. The returned view count includes this view.
    ///
    /// # Returns
    /// - `Ok(BuildOrderDto)` - The build order with author and steps
    /// - `Err(Error::BuildOrderError(NotFound))` - No build order with the ID
    pub async fn get(&self, build_order_id: i32) -> Result<BuildOrderDto, Error> {
        let found = BuildOrderRepository::new(self.db)
            .increment_views(build_order_id)
            .await?;

        if !found {
            return Err(BuildOrderError::NotFound(build_order_id).into());
        }

        find_build_order(self.db, build_order_id).await
    }

    /// Updates the present fields of a build order, replacing its steps when given.
    ///
    /// # Returns
    /// - `Ok(BuildOrderDto)` - The updated build order
    /// - `Err(Error::BuildOrderError(NotFound))` - No build order with the ID
    /// - `Err(Error::BuildOrderError(NotAuthor))` - The user is not the author
    /// - `Err(Error::ValidationError)` - A present field violates its constraint
    pub async fn update(
        &self,
        user_id: i32,
        build_order_id: i32,
        changes: UpdateBuildOrderDto,
    ) -> Result<BuildOrderDto, Error> {
        let txn = self.db.begin().await?;

        let build_order_repo = BuildOrderRepository::new(&txn);
        let Some(build_order) = build_order_repo.find_by_id(build_order_id).await? else {
            return Err(BuildOrderError::NotFound(build_order_id).into());
        };
        ensure_author(&build_order, user_id)?;

        changes.validate()?;

        build_order_repo.update(build_order, &changes).await?;

        if let Some(steps) = &changes.steps {
            let step_repo = BuildOrderStepRepository::new(&txn);
            step_repo.delete_by_build_order_id(build_order_id).await?;
            step_repo.create_many(build_order_id, steps).await?;
        }

        let dto = find_build_order(&txn, build_order_id).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Deletes a build order and its steps.
    ///
    /// # Returns
    /// - `Ok(())` - Build order deleted
    /// - `Err(Error::BuildOrderError(NotFound))` - No build order with the ID
    /// - `Err(Error::BuildOrderError(NotAuthor))` - The user is not the author
    pub async fn delete(&self, user_id: i32, build_order_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let build_order_repo = BuildOrderRepository::new(&txn);
        let Some(build_order) = build_order_repo.find_by_id(build_order_id).await? else {
            return Err(BuildOrderError::NotFound(build_order_id).into());
        };
        ensure_author(&build_order, user_id)?;

        BuildOrderStepRepository::new(&txn)
            .delete_by_build_order_id(build_order_id)
            .await?;
        build_order_repo.delete(build_order_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn ensure_author(build_order: &entity::build_order::Model, user_id: i32) -> Result<(), Error> {
    if build_order.author_id != user_id {
        return Err(BuildOrderError::NotAuthor {
            build_order_id: build_order.id,
            user_id,
        }
        .into());
    }

    Ok(())
}

/// Loads a build order with author and steps without counting a view.
async fn find_build_order<C: ConnectionTrait>(
    db: &C,
    build_order_id: i32,
) -> Result<BuildOrderDto, Error> {
    let Some((build_order, author)) = BuildOrderRepository::new(db)
        .find_with_author(build_order_id)
        .await?
    else {
        return Err(BuildOrderError::NotFound(build_order_id).into());
    };

    let steps = BuildOrderStepRepository::new(db)
        .get_by_build_order_id(build_order_id)
        .await?;

    build_order_dto(build_order, author, steps)
}

fn build_order_dto(
    build_order: entity::build_order::Model,
    author: Option<entity::stepwise_user::Model>,
    steps: Vec<entity::build_order_step::Model>,
) -> Result<BuildOrderDto, Error> {
    // Only possible if the author foreign key is not enforced
    let author = author.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find author ID {} of build order ID {}",
            build_order.author_id, build_order.id
        ))
    })?;

    let map_types: Vec<String> = serde_json::from_value(build_order.map_types).map_err(|e| {
        Error::ParseError(format!(
            "Map types of build order ID {} are not a list of strings: {}",
            build_order.id, e
        ))
    })?;

    Ok(BuildOrderDto {
        id: build_order.id,
        title: build_order.title,
        description: build_order.description,
        civilization: build_order.civilization,
        map_types,
        is_public: build_order.is_public,
        views: build_order.views,
        likes: build_order.likes,
        author: AuthorDto {
            id: author.id,
            name: author.name,
            image: author.image,
        },
        created_at: build_order.created_at,
        steps: steps.into_iter().map(step_dto).collect(),
    })
}

fn step_dto(step: entity::build_order_step::Model) -> StepDto {
    StepDto {
        id: step.id,
        order: step.order,
        time_minutes: step.time_minutes,
        time_seconds: step.time_seconds,
        villager_count: step.villager_count,
        action: step.action,
        description: step.description,
        resources: ResourcesDto {
            wood: step.wood,
            food: step.food,
            gold: step.gold,
            stone: step.stone,
        },
    }
}
