use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::stepwise_user::Model>, DbErr> {
        entity::prelude::StepwiseUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Inserts the user or, when the SteamID is already known, refreshes its profile.
    pub async fn upsert(
        &self,
        steam_id: &str,
        name: Option<String>,
        image: Option<String>,
    ) -> Result<entity::stepwise_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::stepwise_user::ActiveModel {
            steam_id: ActiveValue::Set(steam_id.to_string()),
            name: ActiveValue::Set(name),
            image: ActiveValue::Set(image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::StepwiseUser::insert(user)
            .on_conflict(
                OnConflict::column(entity::stepwise_user::Column::SteamId)
                    .update_columns([
                        entity::stepwise_user::Column::Name,
                        entity::stepwise_user::Column::Image,
                        entity::stepwise_user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
