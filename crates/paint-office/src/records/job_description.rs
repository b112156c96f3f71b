use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::info;

use super::domain::JobDescription;
use super::error::{storage_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::job_description_active_model;
use crate::db::entities::{job_description, JobDescriptionEntity};

/// The price list. It is edited as one grid and saved by replacing every row.
#[derive(Debug, Clone)]
pub struct JobDescriptionService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl JobDescriptionService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn list_all(&self) -> Result<Vec<JobDescription>, ServiceError> {
        let models = JobDescriptionEntity::find()
            .order_by_asc(job_description::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_failure("failed to load job descriptions"))?;
        Ok(models.into_iter().map(JobDescription::from).collect())
    }

    /// Deletes every existing row and inserts `jobs` in a single transaction.
    pub async fn replace_all(
        &self,
        jobs: Vec<JobDescription>,
    ) -> Result<Vec<JobDescription>, ServiceError> {
        for job in &jobs {
            job.validate()?;
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(storage_failure("failed to start job description replace"))?;

        let removed = JobDescriptionEntity::delete_many()
            .exec(&txn)
            .await
            .map_err(storage_failure("failed to clear job descriptions"))?;

        if !jobs.is_empty() {
            JobDescriptionEntity::insert_many(jobs.iter().map(job_description_active_model))
                .exec(&txn)
                .await
                .map_err(storage_failure("failed to insert job descriptions"))?;
        }

        txn.commit()
            .await
            .map_err(storage_failure("failed to commit job descriptions"))?;

        info!(
            removed = removed.rows_affected,
            inserted = jobs.len(),
            "job descriptions replaced"
        );
        self.notifier
            .notify(ChangeEvent::replaced(EntityKind::JobDescription));

        self.list_all().await
    }
}
