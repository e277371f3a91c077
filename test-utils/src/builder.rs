use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::UserExperience;
///
/// let test = TestBuilder::new()
///     .with_table(UserExperience)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Pool size of a file-backed database; `None` keeps the in-memory one.
    file_pool: Option<u32>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_pool: None,
        }
    }

    /// Uses a file-backed database with a pool of `max_connections` instead of
    /// the single-connection in-memory one.
    ///
    /// Needed by tests that exercise concurrent transactions, which the
    /// in-memory database serializes on its only connection.
    pub fn with_file_database(mut self, max_connections: u32) -> Self {
        self.file_pool = Some(max_connections);
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the experience engine reads or writes.
    ///
    /// - UserExperience
    /// - GuildExperienceConfig
    pub fn with_experience_tables(self) -> Self {
        self.with_table(UserExperience)
            .with_table(GuildExperienceConfig)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the file-backed database directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file_pool {
            Some(max_connections) => TestContext::file_backed(max_connections).await?,
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
