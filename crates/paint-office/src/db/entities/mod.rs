//! Entity definitions for the back-office database.

pub mod company;
pub mod contractor;
pub mod invoice;
pub mod job_description;
pub mod my_company_info;
pub mod property;
pub mod supervisor;

pub use company::Entity as CompanyEntity;
pub use contractor::Entity as ContractorEntity;
pub use invoice::Entity as InvoiceEntity;
pub use job_description::Entity as JobDescriptionEntity;
pub use my_company_info::Entity as MyCompanyInfoEntity;
pub use property::Entity as PropertyEntity;
pub use supervisor::Entity as SupervisorEntity;
