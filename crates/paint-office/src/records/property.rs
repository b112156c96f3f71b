use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use sea_orm::JoinType;
use tracing::{info, warn};

use super::domain::Property;
use super::error::{storage_failure, update_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::property_active_model;
use crate::db::entities::{property, supervisor, PropertyEntity, SupervisorEntity};

#[derive(Debug, Clone)]
pub struct PropertyService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl PropertyService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn list_all(&self) -> Result<Vec<Property>, ServiceError> {
        let models = PropertyEntity::find()
            .order_by_asc(property::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load properties"))?;
        Ok(models.into_iter().map(Property::from).collect())
    }

    /// Properties whose supervisor works for `company_id`.
    pub async fn list_by_company(&self, company_id: i32) -> Result<Vec<Property>, ServiceError> {
        let models = PropertyEntity::find()
            .join(JoinType::InnerJoin, property::Relation::Supervisor.def())
            .filter(supervisor::Column::CompanyId.eq(company_id))
            .order_by_asc(property::Column::Name)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load properties by company"))?;
        Ok(models.into_iter().map(Property::from).collect())
    }

    /// Insert when `id == 0`, otherwise update. The assigned supervisor must exist.
    pub async fn save(&self, property: Property) -> Result<Property, ServiceError> {
        property.validate()?;

        let supervisor = SupervisorEntity::find_by_id(property.supervisor_id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up property supervisor"))?;
        if supervisor.is_none() {
            warn!(
                supervisor_id = property.supervisor_id,
                "property references a missing supervisor"
            );
            return Err(ServiceError::NotFound {
                entity: EntityKind::Supervisor,
                id: property.supervisor_id,
            });
        }

        let active = property_active_model(&property);
        let saved = if property.id == 0 {
            active
                .insert(&self.db)
                .await
                .map_err(storage_failure("failed to insert property"))?
        } else {
            active.update(&self.db).await.map_err(update_failure(
                EntityKind::Property,
                property.id,
                "failed to update property",
            ))?
        };

        info!(id = saved.id, supervisor_id = saved.supervisor_id, "property saved");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Property, saved.id));
        Ok(Property::from(saved))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(model) = PropertyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up property"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.db)
            .await
            .map_err(storage_failure("failed to delete property"))?;

        info!(id, "property deleted");
        self.notifier
            .notify(ChangeEvent::deleted(EntityKind::Property, id));
        Ok(true)
    }
}
