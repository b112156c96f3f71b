use chrono::NaiveDate;
use tracing::{debug, warn};

use super::aging::{AgingFilter, AgingReport};
use super::payroll::PayrollReport;
use super::receivable::ReceivableReport;
use super::sales::SalesReport;
use crate::directory::Directory;
use crate::records::{
    CompanyService, ContractorService, EntityKind, InvoiceSearch, InvoiceService, InvoiceStatus,
    OfficeServices, ServiceError,
};

/// Loads invoices and reference data, then hands them to the report builders.
#[derive(Debug, Clone)]
pub struct ReportService {
    invoices: InvoiceService,
    companies: CompanyService,
    contractors: ContractorService,
}

impl ReportService {
    pub fn new(services: &OfficeServices) -> Self {
        Self {
            invoices: services.invoices.clone(),
            companies: services.companies.clone(),
            contractors: services.contractors.clone(),
        }
    }

    pub async fn receivable(
        &self,
        company: Option<&str>,
    ) -> Result<ReceivableReport, ServiceError> {
        let invoices = self.invoices.list_receivable().await?;
        let report = ReceivableReport::build(&invoices, company);
        debug!(rows = report.rows.len(), "receivable report built");
        Ok(report)
    }

    pub async fn aging(
        &self,
        filter: &AgingFilter,
        today: NaiveDate,
    ) -> Result<AgingReport, ServiceError> {
        let invoices = self.invoices.list_receivable().await?;
        let directory = Directory::new(self.companies.list_all().await?);
        let report = AgingReport::build(&invoices, &directory, filter, today);
        debug!(rows = report.rows.len(), %today, "aging report built");
        Ok(report)
    }

    pub async fn payroll(
        &self,
        contractor: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<PayrollReport, ServiceError> {
        let Some(found) = self.contractors.find_by_name(contractor).await? else {
            warn!(contractor, "payroll requested for an unknown contractor");
            return Err(ServiceError::UnknownName {
                entity: EntityKind::Contractor,
                name: contractor.to_string(),
            });
        };

        let invoices = self
            .invoices
            .search(&InvoiceSearch {
                contractor: Some(found.name.clone()),
                from: Some(from),
                to: Some(to),
                ..InvoiceSearch::default()
            })
            .await?;
        let report = PayrollReport::build(&found, &invoices, from, to);
        if report.percent.is_none() {
            warn!(
                contractor = %found.name,
                "contractor has no usable payroll percent; pay left blank"
            );
        }
        Ok(report)
    }

    pub async fn sales(&self, from: NaiveDate, to: NaiveDate) -> Result<SalesReport, ServiceError> {
        let invoices = self
            .invoices
            .search(&InvoiceSearch {
                status: Some(InvoiceStatus::Paid),
                from: Some(from),
                to: Some(to),
                ..InvoiceSearch::default()
            })
            .await?;
        Ok(SalesReport::build(&invoices, from, to))
    }
}
