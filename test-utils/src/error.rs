use thiserror::Error;

/// Errors raised while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the directory of a file-backed database.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
