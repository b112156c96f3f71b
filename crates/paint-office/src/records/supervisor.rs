use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::{info, warn};

use super::domain::{Property, Supervisor};
use super::error::{storage_failure, update_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::supervisor_active_model;
use crate::db::entities::{property, supervisor, CompanyEntity, PropertyEntity, SupervisorEntity};

#[derive(Debug, Clone)]
pub struct SupervisorService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl SupervisorService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    /// Every supervisor with its company name and properties filled in.
    pub async fn list_all(&self) -> Result<Vec<Supervisor>, ServiceError> {
        let rows = SupervisorEntity::find()
            .order_by_asc(supervisor::Column::Name)
            .find_also_related(CompanyEntity)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load supervisors"))?;
        let properties = PropertyEntity::find()
            .order_by_asc(property::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load properties"))?;

        let mut by_supervisor: HashMap<i32, Vec<Property>> = HashMap::new();
        for model in properties {
            by_supervisor
                .entry(model.supervisor_id)
                .or_default()
                .push(Property::from(model));
        }

        Ok(rows
            .into_iter()
            .map(|(model, company)| {
                let mut supervisor = Supervisor::from(model);
                supervisor.company_name = company.map(|company| company.name);
                supervisor.properties = by_supervisor.remove(&supervisor.id).unwrap_or_default();
                supervisor
            })
            .collect())
    }

    /// Insert when `id == 0`, otherwise update. The owning company must exist.
    pub async fn save(&self, supervisor: Supervisor) -> Result<Supervisor, ServiceError> {
        supervisor.validate()?;

        let company = CompanyEntity::find_by_id(supervisor.company_id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up supervisor company"))?;
        let Some(company) = company else {
            warn!(
                company_id = supervisor.company_id,
                "supervisor references a missing company"
            );
            return Err(ServiceError::NotFound {
                entity: EntityKind::Company,
                id: supervisor.company_id,
            });
        };

        let active = supervisor_active_model(&supervisor);
        let saved = if supervisor.id == 0 {
            active
                .insert(&self.db)
                .await
                .map_err(storage_failure("failed to insert supervisor"))?
        } else {
            active.update(&self.db).await.map_err(update_failure(
                EntityKind::Supervisor,
                supervisor.id,
                "failed to update supervisor",
            ))?
        };

        info!(id = saved.id, company_id = saved.company_id, "supervisor saved");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Supervisor, saved.id));

        let mut saved = Supervisor::from(saved);
        saved.company_name = Some(company.name);
        Ok(saved)
    }

    /// Removes the supervisor and the properties assigned to it.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(model) = SupervisorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up supervisor"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.db)
            .await
            .map_err(storage_failure("failed to delete supervisor"))?;

        info!(id, "supervisor deleted");
        self.notifier
            .notify(ChangeEvent::deleted(EntityKind::Supervisor, id));
        Ok(true)
    }
}
