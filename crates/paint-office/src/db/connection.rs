use crate::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

use super::migration::run_migrations;

/// Opens the connection pool described by `config`.
pub async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!(url = %config.url, "connecting to database");

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    if !config.is_in_memory() {
        opt.idle_timeout(Duration::from_secs(300));
    }

    Database::connect(opt).await
}

/// Opens the pool and brings the schema up to date.
pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let conn = connect_database(config).await?;
    run_migrations(&conn).await?;
    Ok(conn)
}
