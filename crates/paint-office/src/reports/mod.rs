//! Read-only summaries built from invoice lists.
//!
//! The builders here are pure functions over already-loaded records; [`ReportService`]
//! does the loading and hands the results to them.

pub mod aging;
pub mod export;
pub mod payroll;
pub mod receivable;
pub mod sales;
pub mod service;

pub use aging::{AgingBucket, AgingFilter, AgingReport, AgingRow, BucketTotal};
pub use export::{aging_csv_string, write_aging_csv, ExportError};
pub use payroll::{parse_payroll_percent, PayrollReport, PayrollRow};
pub use receivable::{ReceivableReport, ReceivableRow};
pub use sales::{CompanySales, SalesReport};
pub use service::ReportService;

/// Rounds a currency amount to whole cents.
pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
