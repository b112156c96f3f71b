//! CSV export of report rows for spreadsheet use.

use std::io::Write;

use serde::Serialize;

use super::aging::AgingReport;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct AgingCsvRow<'a> {
    #[serde(rename = "Invoice")]
    invoice_number: i32,
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Supervisor")]
    supervisor: &'a str,
    #[serde(rename = "Property Address")]
    property_address: &'a str,
    #[serde(rename = "Unit")]
    unit: &'a str,
    #[serde(rename = "Work Date")]
    work_date: String,
    #[serde(rename = "Days")]
    days: i64,
    #[serde(rename = "Bucket")]
    bucket: &'static str,
    #[serde(rename = "Balance")]
    balance: i64,
}

pub fn write_aging_csv<W: Write>(report: &AgingReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &report.rows {
        csv_writer.serialize(AgingCsvRow {
            invoice_number: row.invoice_number,
            company: &row.company_name,
            supervisor: row.supervisor_name.as_deref().unwrap_or_default(),
            property_address: &row.property_address,
            unit: &row.unit,
            work_date: row.work_date.format("%m/%d/%Y").to_string(),
            days: row.days_outstanding,
            bucket: row.bucket.label(),
            balance: row.balance,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn aging_csv_string(report: &AgingReport) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_aging_csv(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::reports::aging::{AgingBucket, AgingRow};

    #[test]
    fn writes_header_and_rows() {
        let report = AgingReport {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date"),
            rows: vec![AgingRow {
                invoice_id: 4,
                invoice_number: 10004,
                company_name: "Acme, Inc".to_string(),
                supervisor_name: None,
                property_address: "12 Oak Ave".to_string(),
                unit: "2B".to_string(),
                work_date: NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"),
                days_outstanding: 90,
                bucket: AgingBucket::Days61To90,
                balance: 750,
            }],
            buckets: Vec::new(),
            total_balance: 750,
        };

        let csv = aging_csv_string(&report).expect("csv");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Invoice,Company,Supervisor,Property Address,Unit,Work Date,Days,Bucket,Balance")
        );
        assert_eq!(
            lines.next(),
            Some("10004,\"Acme, Inc\",,12 Oak Ave,2B,04/01/2025,90,61-90 days,750")
        );
        assert_eq!(lines.next(), None);
    }
}
