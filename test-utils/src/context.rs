use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection for one test.
pub struct TestContext {
    /// Optional database connection to the test SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
    /// Directory holding a file-backed database; removed on drop, after the
    /// pool above is closed.
    _dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self { db: None, _dir: None }
    }

    /// Creates a test context backed by a SQLite file in a fresh temporary
    /// directory.
    ///
    /// Unlike the in-memory database, every pooled connection sees the same
    /// data, so transactions on different connections genuinely contend for
    /// the database lock as they do in production.
    ///
    /// # Arguments
    /// - `max_connections` - Size of the connection pool
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database connected
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    /// - `Err(TestError::Database)` - Failed to open the database file
    pub async fn file_backed(max_connections: u32) -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self {
            db: Some(db),
            _dir: Some(dir),
        })
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// The pool is capped at a single connection: every pooled connection to
    /// `sqlite::memory:` would otherwise open its own empty database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.max_connections(1).sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
