use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use tracing::{info, warn};

use super::domain::Contractor;
use super::error::{storage_failure, update_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::contractor_active_model;
use crate::db::entities::{contractor, ContractorEntity};

#[derive(Debug, Clone)]
pub struct ContractorService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl ContractorService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn list_all(&self) -> Result<Vec<Contractor>, ServiceError> {
        let models = ContractorEntity::find()
            .order_by_asc(contractor::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load contractors"))?;
        Ok(models.into_iter().map(Contractor::from).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Contractor>, ServiceError> {
        let model = ContractorEntity::find()
            .filter(contractor::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up contractor"))?;
        Ok(model.map(Contractor::from))
    }

    /// Insert when `id == 0`, otherwise update; names must stay unique.
    pub async fn save(&self, contractor: Contractor) -> Result<Contractor, ServiceError> {
        contractor.validate()?;

        let duplicate = ContractorEntity::find()
            .filter(contractor::Column::Name.eq(contractor.name.as_str()))
            .filter(contractor::Column::Id.ne(contractor.id))
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to check contractor name"))?;
        if let Some(existing) = duplicate {
            warn!(
                name = %contractor.name,
                existing_id = existing.id,
                "attempted to save a contractor with a duplicate name"
            );
            return Err(ServiceError::DuplicateName {
                entity: EntityKind::Contractor,
                name: contractor.name,
            });
        }

        let active = contractor_active_model(&contractor);
        let saved = if contractor.id == 0 {
            active
                .insert(&self.db)
                .await
                .map_err(storage_failure("failed to insert contractor"))?
        } else {
            active.update(&self.db).await.map_err(update_failure(
                EntityKind::Contractor,
                contractor.id,
                "failed to update contractor",
            ))?
        };

        info!(id = saved.id, name = %saved.name, "contractor saved");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Contractor, saved.id));
        Ok(Contractor::from(saved))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(model) = ContractorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up contractor"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.db)
            .await
            .map_err(storage_failure("failed to delete contractor"))?;

        info!(id, "contractor deleted");
        self.notifier
            .notify(ChangeEvent::deleted(EntityKind::Contractor, id));
        Ok(true)
    }
}
