//! SeaORM persistence: entities, schema migrations, and the connection pool.

mod connection;
pub(crate) mod conversions;
pub mod entities;
pub mod migration;

pub use connection::{connect_and_migrate, connect_database};
pub use migration::run_migrations;
