use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;

use super::domain::MyCompanyInfo;
use super::error::{storage_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::my_company_info_active_model;
use crate::db::entities::{my_company_info, MyCompanyInfoEntity};

/// Singleton letterhead record.
#[derive(Debug, Clone)]
pub struct MyCompanyInfoService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl MyCompanyInfoService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    /// The stored row, or an empty record when nothing has been saved yet.
    pub async fn get(&self) -> Result<MyCompanyInfo, ServiceError> {
        Ok(self.first().await?.map(MyCompanyInfo::from).unwrap_or_default())
    }

    /// Overwrites the stored row, inserting it on first use. The incoming id is ignored.
    pub async fn update(&self, info: MyCompanyInfo) -> Result<MyCompanyInfo, ServiceError> {
        info.validate()?;

        let saved = match self.first().await? {
            Some(existing) => my_company_info_active_model(Set(existing.id), &info)
                .update(&self.db)
                .await
                .map_err(storage_failure("failed to update company info"))?,
            None => my_company_info_active_model(NotSet, &info)
                .insert(&self.db)
                .await
                .map_err(storage_failure("failed to insert company info"))?,
        };

        info!(id = saved.id, name = %saved.name, "company info saved");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::MyCompanyInfo, saved.id));
        Ok(MyCompanyInfo::from(saved))
    }

    async fn first(&self) -> Result<Option<my_company_info::Model>, ServiceError> {
        MyCompanyInfoEntity::find()
            .order_by_asc(my_company_info::Column::Id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to load company info"))
    }
}
