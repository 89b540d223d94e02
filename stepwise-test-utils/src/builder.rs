//! Declarative test setup.
//!
//! Configuration methods only queue work. Tables, records, and mock endpoints are created
//! in `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_build_order_tables: bool,

    users: Vec<String>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    verify_endpoints: Vec<(bool, usize)>,     // (is_valid, expected_requests)
    player_summary_endpoints: Vec<(String, usize)>, // (steam_id, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_build_order_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            verify_endpoints: Vec::new(),
            player_summary_endpoints: Vec::new(),
        }
    }

    /// Adds the user, build order, and step tables.
    pub fn with_build_order_tables(mut self) -> Self {
        self.include_build_order_tables = true;
        self
    }

    /// Adds the table of a single entity.
    ///
    /// ```no_run
    /// use stepwise_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), stepwise_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(StepwiseUser).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts a user with the given SteamID.
    ///
    /// Requires the user table, see [`Self::with_build_order_tables`].
    pub fn with_mock_user(mut self, steam_id: impl Into<String>) -> Self {
        self.users.push(steam_id.into());
        self
    }

    /// Mocks the OpenID `check_authentication` endpoint.
    ///
    /// # Arguments
    /// - `is_valid` - Whether the provider confirms the assertion
    /// - `expected_requests` - Number of times the endpoint should be called
    pub fn with_steam_verify_endpoint(mut self, is_valid: bool, expected_requests: usize) -> Self {
        self.verify_endpoints.push((is_valid, expected_requests));
        self
    }

    /// Mocks the Web API player summary endpoint for `steam_id`.
    pub fn with_player_summary_endpoint(
        mut self,
        steam_id: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.player_summary_endpoints
            .push((steam_id.into(), expected_requests));
        self
    }

    /// Adds a mock endpoint not covered by the helpers above.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates tables, then records, then mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or record insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_build_order_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::StepwiseUser),
                schema.create_table_from_entity(entity::prelude::BuildOrder),
                schema.create_table_from_entity(entity::prelude::BuildOrderStep),
            ]);
        }
        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        for steam_id in self.users {
            test.user().insert_user(&steam_id).await?;
        }

        // Custom mocks first so a test can register an error response ahead of a helper
        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for (is_valid, expected) in self.verify_endpoints {
            mocks.push(test.steam().create_verify_endpoint(is_valid, expected));
        }

        for (steam_id, expected) in self.player_summary_endpoints {
            mocks.push(
                test.steam()
                    .create_player_summary_endpoint(&steam_id, expected),
            );
        }

        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
