//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Environment a test runs against.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_build_order_tables().build().await?;
///
/// let user = test.user().insert_user("76561197960287930").await?;
/// let build_order = test.build_order().insert_build_order(user.id, true).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock server standing in for Steam's OpenID provider and Web API
    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server, e.g. `http://127.0.0.1:1234`
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Registers an extra mock after the context was built.
    pub fn mock_endpoint<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Asserts every mock was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
