//! Schema migrations for the back-office database.
mod m20250101_000001_create_tables;

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Migrator for the back-office schema.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn sea_orm_migration::MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_tables::Migration)]
    }
}

/// Runs all pending migrations.
pub async fn run_migrations(db_conn: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db_conn, None).await
}
