use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PLAYER_NAME, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user with the given SteamID and the test persona name.
    pub async fn insert_user(&self, steam_id: &str) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::StepwiseUser::insert(entity::stepwise_user::ActiveModel {
                steam_id: ActiveValue::Set(steam_id.to_string()),
                name: ActiveValue::Set(Some(TEST_PLAYER_NAME.to_string())),
                image: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
