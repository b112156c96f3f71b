use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use tracing::{info, warn};

use super::domain::{Company, Property, Supervisor};
use super::error::{storage_failure, update_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::company_active_model;
use crate::db::entities::{company, property, supervisor, CompanyEntity};
use crate::db::entities::{PropertyEntity, SupervisorEntity};

/// Companies and the supervisor/property tree hanging off each one.
#[derive(Debug, Clone)]
pub struct CompanyService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl CompanyService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    /// Every company, ordered by name, with supervisors and their properties nested.
    pub async fn list_all(&self) -> Result<Vec<Company>, ServiceError> {
        let companies = CompanyEntity::find()
            .order_by_asc(company::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load companies"))?;
        let supervisors = SupervisorEntity::find()
            .order_by_asc(supervisor::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load supervisors"))?;
        let properties = PropertyEntity::find()
            .order_by_asc(property::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load properties"))?;

        let mut properties_by_supervisor: HashMap<i32, Vec<Property>> = HashMap::new();
        for model in properties {
            properties_by_supervisor
                .entry(model.supervisor_id)
                .or_default()
                .push(Property::from(model));
        }

        let mut supervisors_by_company: HashMap<i32, Vec<Supervisor>> = HashMap::new();
        for model in supervisors {
            let mut supervisor = Supervisor::from(model);
            supervisor.properties = properties_by_supervisor
                .remove(&supervisor.id)
                .unwrap_or_default();
            supervisors_by_company
                .entry(supervisor.company_id)
                .or_default()
                .push(supervisor);
        }

        Ok(companies
            .into_iter()
            .map(|model| {
                let mut company = Company::from(model);
                company.supervisors = supervisors_by_company
                    .remove(&company.id)
                    .unwrap_or_default();
                for supervisor in &mut company.supervisors {
                    supervisor.company_name = Some(company.name.clone());
                }
                company
            })
            .collect())
    }

    /// Insert when `id == 0`, otherwise update. Nested supervisors are not touched.
    pub async fn save(&self, company: Company) -> Result<Company, ServiceError> {
        company.validate()?;

        if let Some(existing) = self.find_other_with_name(&company.name, company.id).await? {
            warn!(
                name = %company.name,
                existing_id = existing.id,
                "attempted to save a company with a duplicate name"
            );
            return Err(ServiceError::DuplicateName {
                entity: EntityKind::Company,
                name: company.name,
            });
        }

        let active = company_active_model(&company);
        let saved = if company.id == 0 {
            active
                .insert(&self.db)
                .await
                .map_err(storage_failure("failed to insert company"))?
        } else {
            active.update(&self.db).await.map_err(update_failure(
                EntityKind::Company,
                company.id,
                "failed to update company",
            ))?
        };

        info!(id = saved.id, name = %saved.name, "company saved");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Company, saved.id));
        Ok(Company::from(saved))
    }

    /// Removes the company together with its supervisors and their properties.
    /// Returns `false` when no such company exists.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(model) = CompanyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up company"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.db)
            .await
            .map_err(storage_failure("failed to delete company"))?;

        info!(id, "company deleted");
        self.notifier
            .notify(ChangeEvent::deleted(EntityKind::Company, id));
        Ok(true)
    }

    async fn find_other_with_name(
        &self,
        name: &str,
        exclude_id: i32,
    ) -> Result<Option<company::Model>, ServiceError> {
        CompanyEntity::find()
            .filter(company::Column::Name.eq(name))
            .filter(company::Column::Id.ne(exclude_id))
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to check company name"))
    }
}
