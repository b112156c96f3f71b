use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Deserialize;
use tracing::{info, warn};

use super::domain::{Invoice, InvoiceStatus};
use super::error::{storage_failure, update_failure, ServiceError};
use super::notify::{ChangeEvent, ChangeNotifier, EntityKind};
use super::validation::Validate;
use crate::db::conversions::invoice_active_model;
use crate::db::entities::{invoice, InvoiceEntity};

/// Optional filters for invoice listings; absent fields do not constrain the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceSearch {
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub contractor: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl InvoiceSearch {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(status) = self.status {
            condition = condition.add(invoice::Column::Status.eq(status.code()));
        }
        if let Some(contractor) = &self.contractor {
            condition = condition.add(invoice::Column::ContractorName.eq(contractor.as_str()));
        }
        if let Some(company) = &self.company {
            condition = condition.add(invoice::Column::CompanyName.eq(company.as_str()));
        }
        if let Some(from) = self.from {
            condition = condition.add(invoice::Column::WorkDate.gte(from));
        }
        if let Some(to) = self.to {
            condition = condition.add(invoice::Column::WorkDate.lte(to));
        }
        condition
    }
}

#[derive(Debug, Clone)]
pub struct InvoiceService {
    db: DatabaseConnection,
    notifier: ChangeNotifier,
}

impl InvoiceService {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn list_all(&self) -> Result<Vec<Invoice>, ServiceError> {
        self.search(&InvoiceSearch::default()).await
    }

    pub async fn search(&self, search: &InvoiceSearch) -> Result<Vec<Invoice>, ServiceError> {
        self.load(search.condition(), "failed to load invoices")
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, ServiceError> {
        InvoiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up invoice"))?
            .map(Invoice::from)
            .ok_or(ServiceError::NotFound {
                entity: EntityKind::Invoice,
                id,
            })
    }

    /// Invoices whose work date falls within `start..=end`.
    pub async fn list_by_work_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Invoice>, ServiceError> {
        self.load(
            Condition::all().add(invoice::Column::WorkDate.between(start, end)),
            "failed to load invoices by date range",
        )
        .await
    }

    /// Invoices whose recorded payments do not yet cover the cost.
    pub async fn list_receivable(&self) -> Result<Vec<Invoice>, ServiceError> {
        let outstanding = Expr::col(invoice::Column::AmountCost).gt(
            Expr::col(invoice::Column::FirstPayment).add(Expr::col(invoice::Column::SecondPayment)),
        );
        self.load(
            Condition::all().add(outstanding),
            "failed to load receivable invoices",
        )
        .await
    }

    pub async fn list_paid(&self) -> Result<Vec<Invoice>, ServiceError> {
        self.search(&InvoiceSearch {
            status: Some(InvoiceStatus::Paid),
            ..InvoiceSearch::default()
        })
        .await
    }

    pub async fn list_open(&self) -> Result<Vec<Invoice>, ServiceError> {
        self.search(&InvoiceSearch {
            status: Some(InvoiceStatus::Open),
            ..InvoiceSearch::default()
        })
        .await
    }

    pub async fn list_by_contractor(&self, name: &str) -> Result<Vec<Invoice>, ServiceError> {
        self.search(&InvoiceSearch {
            contractor: Some(name.to_string()),
            ..InvoiceSearch::default()
        })
        .await
    }

    /// Always inserts; any id on the incoming invoice is ignored.
    pub async fn add(&self, invoice: Invoice) -> Result<Invoice, ServiceError> {
        invoice.validate()?;

        let saved = invoice_active_model(NotSet, &invoice)
            .insert(&self.db)
            .await
            .map_err(storage_failure("failed to add invoice"))?;

        info!(
            id = saved.id,
            company = %saved.company_name,
            amount_cost = saved.amount_cost,
            "invoice added"
        );
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Invoice, saved.id));
        Ok(Invoice::from(saved))
    }

    pub async fn update(&self, invoice: Invoice) -> Result<Invoice, ServiceError> {
        invoice.validate()?;
        if invoice.id == 0 {
            return Err(ServiceError::NotFound {
                entity: EntityKind::Invoice,
                id: 0,
            });
        }

        let saved = invoice_active_model(Set(invoice.id), &invoice)
            .update(&self.db)
            .await
            .map_err(update_failure(
                EntityKind::Invoice,
                invoice.id,
                "failed to update invoice",
            ))?;

        info!(id = saved.id, status = saved.status, "invoice updated");
        self.notifier
            .notify(ChangeEvent::saved(EntityKind::Invoice, saved.id));
        Ok(Invoice::from(saved))
    }

    /// Updates every invoice in one transaction; nothing is written if any one fails.
    pub async fn update_many(&self, invoices: Vec<Invoice>) -> Result<usize, ServiceError> {
        for invoice in &invoices {
            invoice.validate()?;
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(storage_failure("failed to start invoice batch"))?;

        for invoice in &invoices {
            if invoice.id == 0 {
                warn!("batch update contained an unsaved invoice");
                return Err(ServiceError::NotFound {
                    entity: EntityKind::Invoice,
                    id: 0,
                });
            }
            invoice_active_model(Set(invoice.id), invoice)
                .update(&txn)
                .await
                .map_err(update_failure(
                    EntityKind::Invoice,
                    invoice.id,
                    "failed to update invoice in batch",
                ))?;
        }

        txn.commit()
            .await
            .map_err(storage_failure("failed to commit invoice batch"))?;

        info!(count = invoices.len(), "invoice batch updated");
        for invoice in &invoices {
            self.notifier
                .notify(ChangeEvent::saved(EntityKind::Invoice, invoice.id));
        }
        Ok(invoices.len())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(model) = InvoiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_failure("failed to look up invoice"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.db)
            .await
            .map_err(storage_failure("failed to delete invoice"))?;

        info!(id, "invoice deleted");
        self.notifier
            .notify(ChangeEvent::deleted(EntityKind::Invoice, id));
        Ok(true)
    }

    async fn load(
        &self,
        condition: Condition,
        context: &'static str,
    ) -> Result<Vec<Invoice>, ServiceError> {
        let models = InvoiceEntity::find()
            .filter(condition)
            .order_by_asc(invoice::Column::WorkDate)
            .order_by_asc(invoice::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_failure(context))?;
        Ok(models.into_iter().map(Invoice::from).collect())
    }
}
