use sea_orm::DbErr;
use tracing::error;

use super::notify::EntityKind;
use super::validation::ValidationError;

/// Error raised by the record services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a {entity} named '{name}' already exists")]
    DuplicateName { entity: EntityKind, name: String },
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i32 },
    #[error("no {entity} named '{name}'")]
    UnknownName { entity: EntityKind, name: String },
    #[error("storage failure: {0}")]
    Database(#[from] DbErr),
}

/// Logs a storage failure with its operation context before it is propagated.
pub(crate) fn storage_failure(context: &'static str) -> impl FnOnce(DbErr) -> ServiceError {
    move |err| {
        error!(error = %err, "{context}");
        ServiceError::Database(err)
    }
}

/// Maps the "no row matched the primary key" update error onto `NotFound`.
pub(crate) fn update_failure(
    entity: EntityKind,
    id: i32,
    context: &'static str,
) -> impl FnOnce(DbErr) -> ServiceError {
    move |err| match err {
        DbErr::RecordNotUpdated => ServiceError::NotFound { entity, id },
        other => storage_failure(context)(other),
    }
}
