//! Persistence services for the company tree, contractors, invoices, and price list.
//!
//! Each service owns a clone of the pooled connection plus the shared [`ChangeNotifier`],
//! and every successful write broadcasts a [`ChangeEvent`] so open views can refresh.

pub mod company;
pub mod contractor;
pub mod domain;
pub mod error;
pub mod invoice;
pub mod job_description;
pub mod my_company;
pub mod notify;
pub mod property;
pub mod router;
pub mod supervisor;
pub mod validation;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

pub use company::CompanyService;
pub use contractor::ContractorService;
pub use domain::{
    Company, Contractor, Invoice, InvoiceStatus, JobDescription, MyCompanyInfo, Property,
    Supervisor, INVOICE_NUMBER_OFFSET,
};
pub use error::ServiceError;
pub use invoice::{InvoiceSearch, InvoiceService};
pub use job_description::JobDescriptionService;
pub use my_company::MyCompanyInfoService;
pub use notify::{ChangeAction, ChangeEvent, ChangeNotifier, EntityKind};
pub use property::PropertyService;
pub use router::records_router;
pub use supervisor::SupervisorService;
pub use validation::{Validate, ValidationError};

/// Every record service wired to one connection and one notifier.
#[derive(Debug, Clone)]
pub struct OfficeServices {
    pub companies: CompanyService,
    pub supervisors: SupervisorService,
    pub properties: PropertyService,
    pub contractors: ContractorService,
    pub invoices: InvoiceService,
    pub job_descriptions: JobDescriptionService,
    pub my_company: MyCompanyInfoService,
    pub notifier: ChangeNotifier,
}

impl OfficeServices {
    pub fn new(db: DatabaseConnection, notifier: ChangeNotifier) -> Self {
        Self {
            companies: CompanyService::new(db.clone(), notifier.clone()),
            supervisors: SupervisorService::new(db.clone(), notifier.clone()),
            properties: PropertyService::new(db.clone(), notifier.clone()),
            contractors: ContractorService::new(db.clone(), notifier.clone()),
            invoices: InvoiceService::new(db.clone(), notifier.clone()),
            job_descriptions: JobDescriptionService::new(db.clone(), notifier.clone()),
            my_company: MyCompanyInfoService::new(db, notifier.clone()),
            notifier,
        }
    }
}
