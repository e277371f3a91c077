use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Connects to the database and brings the experience schema up to date.
///
/// Runs every pending migration before returning, so the experience and guild
/// settings tables exist before the bot receives its first event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = connect(opt).await?;

    tracing::info!("Database ready, migrations applied");

    Ok(db)
}

async fn connect(opt: ConnectOptions) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
